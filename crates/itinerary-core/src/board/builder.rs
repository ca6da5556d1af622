//! Builder for creating and configuring Board instances.

use std::collections::HashSet;

use log::debug;

use super::Board;
use crate::{
    config::{BoardConfig, BucketConfig},
    error::{ItineraryError, Result},
    models::Bucket,
    params::NewActivity,
    policy::CompletionPolicy,
};

/// Builder for creating and configuring Board instances.
#[derive(Debug, Clone, Default)]
pub struct BoardBuilder {
    policy: CompletionPolicy,
    buckets: Vec<BucketConfig>,
    pool: Vec<NewActivity>,
}

impl BoardBuilder {
    /// Creates a new builder with the default completion policy and no days.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from a loaded configuration.
    pub fn from_config(config: BoardConfig) -> Self {
        Self {
            policy: config.completion,
            buckets: config.buckets,
            pool: config.pool,
        }
    }

    /// Sets the completion policy.
    pub fn with_policy(mut self, policy: CompletionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Adds a day.
    pub fn with_bucket(mut self, bucket: BucketConfig) -> Self {
        self.buckets.push(bucket);
        self
    }

    /// Adds an activity to the unassigned pool.
    pub fn with_pool_activity(mut self, activity: NewActivity) -> Self {
        self.pool.push(activity);
        self
    }

    /// Builds the configured board.
    ///
    /// # Errors
    ///
    /// Returns `ItineraryError::Configuration` if the completion ratio is
    /// out of range, a day has zero capacity, two days share an ID, or a
    /// day's seed activities exceed its capacity. Invalid seed activities
    /// surface as `InvalidInput` or `DuplicateActivity`.
    pub fn build(self) -> Result<Board> {
        self.policy.validate()?;

        let mut seen = HashSet::new();
        let mut buckets = Vec::with_capacity(self.buckets.len());
        for config in &self.buckets {
            if !seen.insert(config.id.clone()) {
                return Err(ItineraryError::configuration(format!(
                    "day {} is defined more than once",
                    config.id
                )));
            }
            buckets.push(Bucket::new(
                config.id.clone(),
                config.label.clone(),
                config.date,
                config.capacity_max,
            )?);
        }

        let mut board = Board::new(buckets, self.policy);

        for (idx, config) in self.buckets.iter().enumerate() {
            for item in &config.items {
                let (activity, next_id) = board.materialize(item)?;
                board.buckets[idx]
                    .admit(activity, None)
                    .map_err(|refused| match refused.error {
                        ItineraryError::CapacityExceeded { .. } => {
                            ItineraryError::configuration(format!(
                                "seed activities for day {} exceed its capacity of {} minutes",
                                config.id, config.capacity_max
                            ))
                        }
                        other => other,
                    })?;
                board.next_id = next_id;
            }

            let bucket = &mut board.buckets[idx];
            bucket.completion_fired = board
                .policy
                .is_complete(bucket.capacity_used(), bucket.capacity_max());
        }

        for item in &self.pool {
            board.add_to_pool(item)?;
        }

        debug!(
            "built board with {} days and {} pooled activities",
            board.buckets.len(),
            board.pool.len()
        );
        Ok(board)
    }
}
