//! Insert, remove and move operations with admission control.

use log::debug;

use super::Board;
use crate::{
    error::{ItineraryError, Result},
    models::{bucket::Refused, Activity, ActivityId, BucketId, Outcome, Placement},
    params::{InsertActivity, MoveActivity, RemoveActivity},
};

impl Board {
    /// Inserts an existing activity into a day.
    ///
    /// The activity is appended when `index` is `None`; otherwise the index
    /// is clamped to the day's length.
    ///
    /// # Errors
    ///
    /// - `BucketNotFound` if the day does not exist
    /// - `DuplicateActivity` if the activity ID is already on the board
    /// - `CapacityExceeded` if the day cannot admit the duration; the error
    ///   carries the day's remaining minutes
    pub fn insert(
        &mut self,
        bucket_id: &BucketId,
        activity: Activity,
        index: Option<usize>,
    ) -> Result<Outcome<Placement>> {
        let idx = self.bucket_index(bucket_id)?;
        self.ensure_absent(&activity.id)?;

        let before = self.buckets[idx].capacity_used();
        let activity_id = activity.id.clone();
        let position = match self.buckets[idx].admit(activity, index) {
            Ok(position) => position,
            Err(refused) => {
                debug!("insert of {activity_id} into {bucket_id} rejected");
                return Err(refused.error);
            }
        };

        debug!("inserted {activity_id} into {bucket_id} at {position}");
        let events = self.settle_completion(idx, before);
        Ok(Outcome::with_events(
            Placement {
                bucket_id: bucket_id.clone(),
                index: position,
            },
            events,
        ))
    }

    /// Creates an activity from its description and inserts it into a day.
    ///
    /// The duration is estimated from the category when not given, and an
    /// ID is generated when not given. Nothing changes if the activity is
    /// invalid or does not fit.
    pub fn add_activity(&mut self, params: &InsertActivity) -> Result<Outcome<Activity>> {
        let idx = self.bucket_index(&params.bucket_id)?;
        let (activity, next_id) = self.materialize(&params.activity)?;
        self.buckets[idx].check_admit(activity.duration_minutes())?;

        let created = activity.clone();
        let outcome = self.insert(&params.bucket_id, activity, params.index)?;
        self.next_id = next_id;

        Ok(outcome.map(|_| created))
    }

    /// Removes an activity from a day and hands it back to the caller.
    ///
    /// # Errors
    ///
    /// - `BucketNotFound` if the day does not exist
    /// - `ActivityNotFound` if the activity is not in that day
    pub fn remove(
        &mut self,
        bucket_id: &BucketId,
        activity_id: &ActivityId,
    ) -> Result<Outcome<Activity>> {
        let idx = self.bucket_index(bucket_id)?;
        let Some(position) = self.buckets[idx].position_of(activity_id) else {
            return Err(ItineraryError::ActivityNotFound {
                id: activity_id.clone(),
            });
        };

        let removed = self.buckets[idx].release(position)?;
        debug!("removed {activity_id} from {bucket_id}");
        Ok(Outcome::quiet(removed))
    }

    /// Removes an activity using request parameters.
    pub fn remove_activity(&mut self, params: &RemoveActivity) -> Result<Outcome<Activity>> {
        self.remove(&params.bucket_id, &params.activity_id)
    }

    /// Moves an activity from one day to another as a single admission
    /// decision.
    ///
    /// If the destination cannot admit the activity the whole move is
    /// rejected and the source day is left untouched. Moving within the same
    /// day is a pure reorder: capacity is unaffected and the destination
    /// index is clamped to the last slot.
    pub fn move_activity(&mut self, params: &MoveActivity) -> Result<Outcome<Placement>> {
        let src = self.bucket_index(&params.source)?;
        let dst = self.bucket_index(&params.destination)?;
        let from = self.buckets[src]
            .position_of(&params.activity_id)
            .ok_or_else(|| ItineraryError::ActivityNotFound {
                id: params.activity_id.clone(),
            })?;

        if src == dst {
            let last = self.buckets[src].len() - 1;
            let to = params.index.map_or(last, |i| i.min(last));
            self.buckets[src].shift(from, to)?;
            debug!(
                "moved {} within {} from {from} to {to}",
                params.activity_id, params.source
            );
            return Ok(Outcome::quiet(Placement {
                bucket_id: params.destination.clone(),
                index: to,
            }));
        }

        let minutes = self.buckets[src].items()[from].duration_minutes();
        if let Err(err) = self.buckets[dst].check_admit(minutes) {
            debug!(
                "move of {} from {} to {} rejected: {err}",
                params.activity_id, params.source, params.destination
            );
            return Err(err);
        }

        let activity = self.buckets[src].release(from)?;
        let before = self.buckets[dst].capacity_used();
        let position = match self.buckets[dst].admit(activity, params.index) {
            Ok(position) => position,
            Err(refused) => {
                let Refused { error, activity } = *refused;
                // The minutes were just released, so the previous slot fits.
                self.buckets[src]
                    .admit(activity, Some(from))
                    .map_err(|restore| restore.error)?;
                return Err(error);
            }
        };

        debug!(
            "moved {} from {} to {} at {position}",
            params.activity_id, params.source, params.destination
        );
        let events = self.settle_completion(dst, before);
        Ok(Outcome::with_events(
            Placement {
                bucket_id: params.destination.clone(),
                index: position,
            },
            events,
        ))
    }
}
