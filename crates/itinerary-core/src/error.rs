//! Error types for the itinerary engine.

use std::path::PathBuf;

use thiserror::Error;

use crate::{
    ledger::LedgerError,
    models::{ActivityId, BucketId, Event},
};

/// Comprehensive error type for all board operations.
///
/// Every variant is recoverable: a failed operation leaves the board exactly
/// as it was before the call.
#[derive(Error, Debug)]
pub enum ItineraryError {
    /// No bucket with the given ID exists on the board
    #[error("Day with ID {id} not found")]
    BucketNotFound { id: BucketId },
    /// The activity is not where the caller said it was
    #[error("Activity with ID {id} not found")]
    ActivityNotFound { id: ActivityId },
    /// The destination bucket cannot admit the activity's duration
    #[error(
        "Adding {requested} minutes would exceed day {bucket_id}: only {remaining} minutes remaining"
    )]
    CapacityExceeded {
        bucket_id: BucketId,
        requested: u32,
        remaining: u32,
    },
    /// A position that must name an existing slot is out of bounds
    #[error("Index {index} is out of bounds for a list of length {len}")]
    InvalidIndex { index: usize, len: usize },
    /// The activity ID is already present somewhere on the board
    #[error("Activity with ID {id} is already on the board")]
    DuplicateActivity { id: ActivityId },
    /// Capacity bookkeeping refused an adjustment
    #[error("Capacity ledger error for day {bucket_id}: {source}")]
    Ledger {
        bucket_id: BucketId,
        #[source]
        source: LedgerError,
    },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Board configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> ItineraryError {
        ItineraryError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl ItineraryError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a configuration error from a message.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Remaining minutes reported by a capacity rejection, if this is one.
    ///
    /// Presentation layers use this to phrase messages such as "this would
    /// exceed the day's remaining N minutes".
    pub fn remaining_minutes(&self) -> Option<u32> {
        match self {
            Self::CapacityExceeded { remaining, .. } => Some(*remaining),
            _ => None,
        }
    }

    /// Telemetry event describing a rejected admission.
    ///
    /// Only capacity rejections produce an event; every other error returns
    /// `None`.
    pub fn telemetry_event(&self) -> Option<Event> {
        match self {
            Self::CapacityExceeded {
                bucket_id,
                requested,
                remaining,
            } => Some(Event::CapacityExceededAttempt {
                bucket_id: bucket_id.clone(),
                requested: *requested,
                remaining: *remaining,
            }),
            _ => None,
        }
    }
}

/// Result type alias for board operations
pub type Result<T> = std::result::Result<T, ItineraryError>;
