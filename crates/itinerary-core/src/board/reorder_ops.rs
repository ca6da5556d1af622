//! Positional reordering within a single day.

use log::debug;

use super::Board;
use crate::{error::Result, models::Outcome, params::ReorderActivities};

impl Board {
    /// Moves the activity at `from` to `to` within one day.
    ///
    /// Capacity is never affected. Unlike insertion positions, both indices
    /// name existing slots and must be in bounds.
    ///
    /// # Errors
    ///
    /// - `BucketNotFound` if the day does not exist
    /// - `InvalidIndex` if either index is out of bounds
    pub fn reorder(&mut self, params: &ReorderActivities) -> Result<Outcome<()>> {
        let idx = self.bucket_index(&params.bucket_id)?;
        self.buckets[idx].shift(params.from, params.to)?;

        debug!(
            "reordered {} from {} to {}",
            params.bucket_id, params.from, params.to
        );
        Ok(Outcome::quiet(()))
    }
}
