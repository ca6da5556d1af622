//! Activity model definition and related functionality.

use jiff::civil::Time;
use serde::Serialize;

use super::{ActivityId, Category};
use crate::error::{ItineraryError, Result};

/// A schedulable unit with a fixed time cost.
///
/// The duration is fixed at construction; moving or reordering an activity
/// never changes it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Activity {
    /// Unique identifier for the activity
    pub id: ActivityId,

    /// Display name of the activity
    pub label: String,

    /// Category tag used for duration estimates and badges
    pub category: Category,

    /// Time cost in minutes (always positive)
    duration_minutes: u32,

    /// Planned start time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<Time>,

    /// Where the activity takes place
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Activity {
    /// Creates an activity with the given fixed duration.
    ///
    /// # Errors
    ///
    /// Returns `ItineraryError::InvalidInput` if the label is blank or the
    /// duration is zero.
    pub fn new(
        id: impl Into<ActivityId>,
        label: impl Into<String>,
        category: Category,
        duration_minutes: u32,
    ) -> Result<Self> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(ItineraryError::invalid_input("label").with_reason("must not be empty"));
        }
        if duration_minutes == 0 {
            return Err(ItineraryError::invalid_input("duration_minutes")
                .with_reason("must be a positive number of minutes"));
        }

        Ok(Self {
            id: id.into(),
            label,
            category,
            duration_minutes,
            time: None,
            location: None,
            notes: None,
        })
    }

    /// Sets the planned start time.
    pub fn with_time(mut self, time: Option<Time>) -> Self {
        self.time = time;
        self
    }

    /// Sets the location.
    pub fn with_location(mut self, location: Option<String>) -> Self {
        self.location = location;
        self
    }

    /// Sets the notes.
    pub fn with_notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes;
        self
    }

    /// Time cost in minutes.
    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }
}
