//! Parameter structures for board operations
//!
//! These structures are shared by every interface that drives the engine (the
//! CLI, replay scripts, an embedding UI). They carry only serde derives so
//! interface layers can wrap them with their own framework-specific types and
//! convert with `From`:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Replay Script  │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Indices are 0-based. Insertion positions are clamped to the list length;
//! an omitted position means "append".

use jiff::civil::Time;
use serde::{Deserialize, Serialize};

use crate::models::{ActivityId, BucketId, Category};

/// Description of an activity that does not exist yet.
///
/// When `duration_minutes` is omitted the duration is estimated from the
/// category. When `id` is omitted the board generates one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewActivity {
    /// Fixed identifier (generated when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ActivityId>,
    /// Display name (required)
    pub label: String,
    /// Category tag
    #[serde(default)]
    pub category: Category,
    /// Explicit duration in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    /// Planned start time (`HH:MM`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<Time>,
    /// Where the activity takes place
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl NewActivity {
    /// Minimal description with a label and category.
    pub fn new(label: impl Into<String>, category: Category) -> Self {
        Self {
            label: label.into(),
            category,
            ..Default::default()
        }
    }

    /// Sets a fixed identifier.
    pub fn with_id(mut self, id: impl Into<ActivityId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets an explicit duration.
    pub fn with_duration(mut self, minutes: u32) -> Self {
        self.duration_minutes = Some(minutes);
        self
    }
}

/// Parameters for creating an activity directly inside a day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsertActivity {
    /// Day to add the activity to
    pub bucket_id: BucketId,
    /// Activity to create
    #[serde(flatten)]
    pub activity: NewActivity,
    /// Position within the day (appended when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}

/// Parameters for removing an activity from a day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemoveActivity {
    /// Day holding the activity
    pub bucket_id: BucketId,
    /// Activity to remove
    pub activity_id: ActivityId,
}

/// Parameters for moving an activity between days (or within one).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoveActivity {
    /// Day currently holding the activity
    pub source: BucketId,
    /// Day to move the activity to
    pub destination: BucketId,
    /// Activity to move
    pub activity_id: ActivityId,
    /// Position within the destination (appended when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}

/// Parameters for reordering activities inside one day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReorderActivities {
    /// Day to reorder
    pub bucket_id: BucketId,
    /// Current position of the activity
    pub from: usize,
    /// Position the activity should end up at
    pub to: usize,
}

/// Parameters for placing a pooled activity into a day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleActivity {
    /// Activity waiting in the pool
    pub activity_id: ActivityId,
    /// Day to place it in
    pub bucket_id: BucketId,
    /// Position within the day (appended when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}

/// Parameters for sending a scheduled activity back to the pool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnscheduleActivity {
    /// Day holding the activity
    pub bucket_id: BucketId,
    /// Activity to unschedule
    pub activity_id: ActivityId,
    /// Position within the pool (appended when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}
