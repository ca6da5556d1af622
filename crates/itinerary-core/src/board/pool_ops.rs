//! The unassigned pool: activities that belong to no day yet.

use log::debug;

use super::Board;
use crate::{
    error::{ItineraryError, Result},
    models::{bucket::Refused, Activity, ActivityId, Outcome, Placement},
    params::{NewActivity, ScheduleActivity, UnscheduleActivity},
};

impl Board {
    /// Creates an activity and appends it to the pool.
    pub fn add_to_pool(&mut self, new: &NewActivity) -> Result<Activity> {
        let (activity, next_id) = self.materialize(new)?;
        self.next_id = next_id;
        self.pool.push(activity.clone());
        debug!("added {} to the pool", activity.id);
        Ok(activity)
    }

    /// Places a pooled activity into a day.
    ///
    /// Admission works like [`Board::move_activity`]: if the day cannot
    /// admit the activity it stays in the pool and nothing changes.
    pub fn schedule(&mut self, params: &ScheduleActivity) -> Result<Outcome<Placement>> {
        let idx = self.bucket_index(&params.bucket_id)?;
        let from = self.pool_position(&params.activity_id)?;

        let minutes = self.pool[from].duration_minutes();
        if let Err(err) = self.buckets[idx].check_admit(minutes) {
            debug!(
                "scheduling {} into {} rejected: {err}",
                params.activity_id, params.bucket_id
            );
            return Err(err);
        }

        let activity = self.pool.remove(from);
        let before = self.buckets[idx].capacity_used();
        let position = match self.buckets[idx].admit(activity, params.index) {
            Ok(position) => position,
            Err(refused) => {
                let Refused { error, activity } = *refused;
                self.pool.insert(from, activity);
                return Err(error);
            }
        };

        debug!(
            "scheduled {} into {} at {position}",
            params.activity_id, params.bucket_id
        );
        let events = self.settle_completion(idx, before);
        Ok(Outcome::with_events(
            Placement {
                bucket_id: params.bucket_id.clone(),
                index: position,
            },
            events,
        ))
    }

    /// Sends a scheduled activity back to the pool.
    ///
    /// Returns the activity's position in the pool. Never fails on capacity.
    pub fn unschedule(&mut self, params: &UnscheduleActivity) -> Result<Outcome<usize>> {
        let removed = self.remove(&params.bucket_id, &params.activity_id)?.value;
        let position = params
            .index
            .map_or(self.pool.len(), |i| i.min(self.pool.len()));
        self.pool.insert(position, removed);

        debug!(
            "unscheduled {} from {} to pool slot {position}",
            params.activity_id, params.bucket_id
        );
        Ok(Outcome::quiet(position))
    }

    /// Drops an activity from the pool and returns it.
    pub fn discard(&mut self, activity_id: &ActivityId) -> Result<Activity> {
        let position = self.pool_position(activity_id)?;
        debug!("discarded {activity_id} from the pool");
        Ok(self.pool.remove(position))
    }

    fn pool_position(&self, activity_id: &ActivityId) -> Result<usize> {
        self.pool
            .iter()
            .position(|item| &item.id == activity_id)
            .ok_or_else(|| ItineraryError::ActivityNotFound {
                id: activity_id.clone(),
            })
    }
}
