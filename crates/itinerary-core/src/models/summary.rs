//! Day summary types and functionality.

use jiff::civil::Date;
use serde::Serialize;

use super::{Bucket, BucketId};
use crate::policy::CompletionPolicy;

/// Summary information about a day with capacity statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BucketSummary {
    /// Day ID
    pub id: BucketId,
    /// Display label
    pub label: String,
    /// Calendar date
    pub date: Option<Date>,
    /// Minutes in use
    pub used: u32,
    /// Minute ceiling
    pub max: u32,
    /// Minutes still available
    pub remaining: u32,
    /// Whole percent filled, rounded down
    pub fill_percent: u32,
    /// Whether the day meets the completion threshold
    pub complete: bool,
    /// Number of activities
    pub activity_count: usize,
}

impl BucketSummary {
    /// Create a BucketSummary from a bucket, judging completion with `policy`.
    pub fn from_bucket(bucket: &Bucket, policy: &CompletionPolicy) -> Self {
        let used = bucket.capacity_used();
        let max = bucket.capacity_max();

        Self {
            id: bucket.id.clone(),
            label: bucket.label.clone(),
            date: bucket.date,
            used,
            max,
            remaining: bucket.remaining(),
            fill_percent: ((u64::from(used) * 100) / u64::from(max.max(1))) as u32,
            complete: policy.is_complete(used, max),
            activity_count: bucket.len(),
        }
    }
}
