//! Bucket (trip day) model definition and related functionality.

use jiff::civil::Date;
use serde::Serialize;

use super::{Activity, ActivityId, BucketId};
use crate::{
    error::{ItineraryError, Result},
    ledger::Ledger,
};

/// An admission the bucket refused, carrying the activity back to the caller.
#[derive(Debug)]
pub(crate) struct Refused {
    pub(crate) error: ItineraryError,
    pub(crate) activity: Activity,
}

/// A capacity-bounded, ordered list of activities modelling one trip day.
///
/// The item list and the ledger are private so that usage always equals the
/// sum of member durations; the board mutates them through crate-internal
/// methods that update both together.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Bucket {
    /// Unique identifier for the day
    pub id: BucketId,

    /// Display label, e.g. "Monday"
    pub label: String,

    /// Calendar date of the day
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<Date>,

    #[serde(flatten)]
    ledger: Ledger,

    items: Vec<Activity>,

    /// Set once the day has fired a completion event
    #[serde(skip)]
    pub(crate) completion_fired: bool,
}

impl Bucket {
    /// Creates an empty bucket.
    ///
    /// # Errors
    ///
    /// Returns `ItineraryError::Configuration` when `capacity_max` is zero.
    pub fn new(
        id: impl Into<BucketId>,
        label: impl Into<String>,
        date: Option<Date>,
        capacity_max: u32,
    ) -> Result<Self> {
        let id = id.into();
        let ledger = Ledger::new(capacity_max).map_err(|e| {
            ItineraryError::configuration(format!("day {id} has invalid capacity: {e}"))
        })?;

        Ok(Self {
            id,
            label: label.into(),
            date,
            ledger,
            items: Vec::new(),
            completion_fired: false,
        })
    }

    /// Ordered activities of the day.
    pub fn items(&self) -> &[Activity] {
        &self.items
    }

    /// Number of activities.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the day has no activities.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Minutes in use.
    pub fn capacity_used(&self) -> u32 {
        self.ledger.used()
    }

    /// Minute ceiling.
    pub fn capacity_max(&self) -> u32 {
        self.ledger.max()
    }

    /// Minutes still available.
    pub fn remaining(&self) -> u32 {
        self.ledger.remaining()
    }

    /// Whether an activity of `minutes` would fit.
    pub fn can_admit(&self, minutes: u32) -> bool {
        self.ledger.can_admit(minutes)
    }

    /// Used fraction of the ceiling.
    pub fn fill_ratio(&self) -> f64 {
        self.ledger.fill_ratio()
    }

    /// Position of an activity within the day.
    pub fn position_of(&self, id: &ActivityId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    /// Whether the day holds the activity.
    pub fn contains(&self, id: &ActivityId) -> bool {
        self.position_of(id).is_some()
    }

    /// Whether the ledger agrees with the sum of item durations.
    pub fn is_consistent(&self) -> bool {
        let total: u64 = self
            .items
            .iter()
            .map(|item| u64::from(item.duration_minutes()))
            .sum();
        total == u64::from(self.ledger.used()) && self.ledger.used() <= self.ledger.max()
    }

    /// Capacity rejection for an activity of `minutes`, if it would not fit.
    pub(crate) fn check_admit(&self, minutes: u32) -> Result<()> {
        if self.can_admit(minutes) {
            Ok(())
        } else {
            Err(ItineraryError::CapacityExceeded {
                bucket_id: self.id.clone(),
                requested: minutes,
                remaining: self.remaining(),
            })
        }
    }

    /// Inserts an activity at a clamped position, charging the ledger first.
    ///
    /// Returns the position the activity landed at. When the ledger refuses
    /// the charge nothing changes and the activity is handed back with the
    /// error.
    pub(crate) fn admit(
        &mut self,
        activity: Activity,
        index: Option<usize>,
    ) -> std::result::Result<usize, Box<Refused>> {
        if let Err(error) = self.check_admit(activity.duration_minutes()) {
            return Err(Box::new(Refused { error, activity }));
        }
        if let Err(source) = self.ledger.apply(i64::from(activity.duration_minutes())) {
            let error = ItineraryError::Ledger {
                bucket_id: self.id.clone(),
                source,
            };
            return Err(Box::new(Refused { error, activity }));
        }

        let position = index.map_or(self.items.len(), |i| i.min(self.items.len()));
        self.items.insert(position, activity);
        Ok(position)
    }

    /// Removes the activity at `position`, releasing its minutes.
    pub(crate) fn release(&mut self, position: usize) -> Result<Activity> {
        let minutes = self
            .items
            .get(position)
            .map(Activity::duration_minutes)
            .ok_or(ItineraryError::InvalidIndex {
                index: position,
                len: self.items.len(),
            })?;

        self.ledger
            .apply(-i64::from(minutes))
            .map_err(|source| ItineraryError::Ledger {
                bucket_id: self.id.clone(),
                source,
            })?;

        Ok(self.items.remove(position))
    }

    /// Moves the item at `from` to `to`; both must be in bounds.
    pub(crate) fn shift(&mut self, from: usize, to: usize) -> Result<()> {
        let len = self.items.len();
        for index in [from, to] {
            if index >= len {
                return Err(ItineraryError::InvalidIndex { index, len });
            }
        }

        if from != to {
            let item = self.items.remove(from);
            self.items.insert(to, item);
        }
        Ok(())
    }
}
