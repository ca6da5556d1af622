//! The bounded-capacity assignment engine.
//!
//! This module provides the main [`Board`] interface: a fixed set of days
//! (buckets), each with a minute ceiling, plus an unassigned pool of
//! activities waiting to be scheduled. Every operation is atomic: it either
//! succeeds completely and returns an [`Outcome`] with any triggered events,
//! or fails with an [`ItineraryError`] and leaves the board untouched.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Operations    │    │     Bucket      │    │     Ledger      │
//! │ (assign_ops,    │───▶│ (ordered items, │───▶│ (used / max     │
//! │  reorder_ops,   │    │  admit/release) │    │  arithmetic)    │
//! │  pool_ops)      │    │                 │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!   Admission + events     Owned sequences       Capacity bookkeeping
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Board`] instances from configuration
//! - [`assign_ops`]: insert, create, remove and move between days
//! - [`reorder_ops`]: positional reordering within a day
//! - [`pool_ops`]: the unassigned staging pool
//!
//! # Usage Examples
//!
//! ```rust
//! use itinerary_core::{
//!     models::{Category, Event},
//!     params::{InsertActivity, NewActivity},
//!     BoardBuilder, BucketConfig,
//! };
//!
//! let mut board = BoardBuilder::new()
//!     .with_bucket(BucketConfig::new("day-1", "Day 1", 100))
//!     .build()?;
//!
//! let outcome = board.add_activity(&InsertActivity {
//!     bucket_id: "day-1".into(),
//!     activity: NewActivity::new("Boat tour", Category::Sightseeing).with_duration(95),
//!     index: None,
//! })?;
//!
//! assert_eq!(
//!     outcome.events,
//!     vec![Event::BucketCompleted { bucket_id: "day-1".into() }]
//! );
//! # Ok::<(), itinerary_core::ItineraryError>(())
//! ```

use log::info;

use crate::{
    error::{ItineraryError, Result},
    models::{Activity, ActivityId, Bucket, BucketId, BucketSummary, Event},
    params::NewActivity,
    policy::{CompletionPolicy, CompletionTrigger},
};

pub mod assign_ops;
pub mod builder;
pub mod pool_ops;
pub mod reorder_ops;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;

/// Where an activity currently lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// Scheduled in a day at the given position
    Bucket { bucket_id: BucketId, index: usize },
    /// Waiting in the unassigned pool at the given position
    Pool { index: usize },
}

/// Main engine interface for assigning activities to days.
#[derive(Debug, Clone)]
pub struct Board {
    pub(crate) buckets: Vec<Bucket>,
    pub(crate) pool: Vec<Activity>,
    pub(crate) policy: CompletionPolicy,
    pub(crate) next_id: u64,
}

impl Board {
    /// Creates an empty board with the given days.
    pub(crate) fn new(buckets: Vec<Bucket>, policy: CompletionPolicy) -> Self {
        Self {
            buckets,
            pool: Vec::new(),
            policy,
            next_id: 1,
        }
    }

    /// Starts a [`BoardBuilder`].
    pub fn builder() -> BoardBuilder {
        BoardBuilder::new()
    }

    /// All days in configuration order.
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    /// Looks up a day by ID.
    pub fn bucket(&self, id: &BucketId) -> Result<&Bucket> {
        self.bucket_index(id).map(|idx| &self.buckets[idx])
    }

    /// Activities waiting to be scheduled.
    pub fn pool(&self) -> &[Activity] {
        &self.pool
    }

    /// The completion policy in force.
    pub fn policy(&self) -> &CompletionPolicy {
        &self.policy
    }

    /// Whether the day currently meets the completion threshold.
    pub fn is_complete(&self, id: &BucketId) -> Result<bool> {
        let bucket = self.bucket(id)?;
        Ok(self
            .policy
            .is_complete(bucket.capacity_used(), bucket.capacity_max()))
    }

    /// Capacity summaries for every day.
    pub fn summaries(&self) -> Vec<BucketSummary> {
        self.buckets
            .iter()
            .map(|bucket| BucketSummary::from_bucket(bucket, &self.policy))
            .collect()
    }

    /// Finds the day or pool slot holding an activity.
    pub fn locate(&self, id: &ActivityId) -> Option<Location> {
        self.buckets
            .iter()
            .find_map(|bucket| {
                bucket.position_of(id).map(|index| Location::Bucket {
                    bucket_id: bucket.id.clone(),
                    index,
                })
            })
            .or_else(|| {
                self.pool
                    .iter()
                    .position(|item| &item.id == id)
                    .map(|index| Location::Pool { index })
            })
    }

    /// Total number of activities across days and pool.
    pub fn activity_count(&self) -> usize {
        self.pool.len() + self.buckets.iter().map(Bucket::len).sum::<usize>()
    }

    /// Verifies the board-wide invariants: every ledger matches its items
    /// and stays within its ceiling, and no activity ID appears twice.
    pub fn check_invariants(&self) -> Result<()> {
        if let Some(bucket) = self.buckets.iter().find(|b| !b.is_consistent()) {
            return Err(ItineraryError::configuration(format!(
                "day {} reports {} of {} minutes used, which does not match its activities",
                bucket.id,
                bucket.capacity_used(),
                bucket.capacity_max()
            )));
        }

        let mut seen = std::collections::HashSet::new();
        let all_ids = self
            .buckets
            .iter()
            .flat_map(|bucket| bucket.items())
            .chain(self.pool.iter())
            .map(|item| &item.id);
        for id in all_ids {
            if !seen.insert(id) {
                return Err(ItineraryError::DuplicateActivity { id: id.clone() });
            }
        }
        Ok(())
    }

    pub(crate) fn bucket_index(&self, id: &BucketId) -> Result<usize> {
        self.buckets
            .iter()
            .position(|bucket| &bucket.id == id)
            .ok_or_else(|| ItineraryError::BucketNotFound { id: id.clone() })
    }

    pub(crate) fn ensure_absent(&self, id: &ActivityId) -> Result<()> {
        match self.locate(id) {
            Some(_) => Err(ItineraryError::DuplicateActivity { id: id.clone() }),
            None => Ok(()),
        }
    }

    /// Builds an activity from its description without touching the board.
    ///
    /// Returns the activity together with the ID counter value to commit
    /// once the activity has actually been placed.
    pub(crate) fn materialize(&self, new: &NewActivity) -> Result<(Activity, u64)> {
        let duration = crate::estimator::resolve_duration(new.duration_minutes, new.category)?;

        let (id, next_id) = match &new.id {
            Some(id) => {
                self.ensure_absent(id)?;
                (id.clone(), self.next_id)
            }
            None => self.generate_id(),
        };

        let activity = Activity::new(id, new.label.clone(), new.category, duration)?
            .with_time(new.time)
            .with_location(new.location.clone())
            .with_notes(new.notes.clone());

        Ok((activity, next_id))
    }

    fn generate_id(&self) -> (ActivityId, u64) {
        let mut n = self.next_id;
        loop {
            let candidate = ActivityId::new(format!("act-{n}"));
            n += 1;
            if self.locate(&candidate).is_none() {
                return (candidate, n);
            }
        }
    }

    /// Compares usage before and after a capacity-increasing mutation of the
    /// day at `idx` and returns the completion event if one is due.
    pub(crate) fn settle_completion(&mut self, idx: usize, before: u32) -> Vec<Event> {
        let policy = self.policy;
        let bucket = &mut self.buckets[idx];
        let after = bucket.capacity_used();

        if !policy.crossed(before, after, bucket.capacity_max()) {
            return Vec::new();
        }

        let already_fired = bucket.completion_fired;
        bucket.completion_fired = true;
        if policy.trigger == CompletionTrigger::Once && already_fired {
            return Vec::new();
        }

        info!(
            "Day {} complete: {} of {} minutes planned",
            bucket.id,
            after,
            bucket.capacity_max()
        );
        vec![Event::BucketCompleted {
            bucket_id: bucket.id.clone(),
        }]
    }
}
