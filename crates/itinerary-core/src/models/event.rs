//! Notifications returned alongside operation results.

use serde::{Deserialize, Serialize};

use super::BucketId;

/// Signal for the presentation layer to react to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// The day's fill ratio crossed the completion threshold upward
    BucketCompleted { bucket_id: BucketId },

    /// An admission was refused for lack of capacity
    CapacityExceededAttempt {
        bucket_id: BucketId,
        requested: u32,
        remaining: u32,
    },
}

/// Result of a successful operation together with the events it triggered.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<T> {
    /// Operation-specific return value
    pub value: T,

    /// Events in the order they were triggered
    pub events: Vec<Event>,
}

impl<T> Outcome<T> {
    /// An outcome with no events.
    pub fn quiet(value: T) -> Self {
        Self {
            value,
            events: Vec::new(),
        }
    }

    /// An outcome carrying the given events.
    pub fn with_events(value: T, events: Vec<Event>) -> Self {
        Self { value, events }
    }

    /// Whether a completion event was triggered for any day.
    pub fn completed_any(&self) -> bool {
        self.events
            .iter()
            .any(|event| matches!(event, Event::BucketCompleted { .. }))
    }

    /// Transforms the value, keeping the events.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        Outcome {
            value: f(self.value),
            events: self.events,
        }
    }
}

/// Where an activity ended up after being placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement {
    /// Day the activity now belongs to
    pub bucket_id: BucketId,

    /// Position within the day
    pub index: usize,
}
