//! Status and confirmation message types for operation feedback.

use std::fmt;

use crate::error::ItineraryError;

/// Wrapper type for displaying operation confirmation messages.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }

    /// Failure status for a rejected operation, including the capacity
    /// telemetry when the error carries one.
    pub fn rejected(err: &ItineraryError) -> Self {
        let message = match err.telemetry_event() {
            Some(event) => format!("{err}\n\n- {event}"),
            None => err.to_string(),
        };
        Self::failure(message)
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.success { "Success:" } else { "Error:" };
        writeln!(f, "{prefix} {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Operation completed".to_string());
        assert!(format!("{success}").contains("Success:"));

        let failure = OperationStatus::failure("Operation failed".to_string());
        assert!(format!("{failure}").contains("Error:"));
    }

    #[test]
    fn test_rejected_capacity_includes_event() {
        let err = ItineraryError::CapacityExceeded {
            bucket_id: "day-1".into(),
            requested: 250,
            remaining: 200,
        };
        let output = OperationStatus::rejected(&err).to_string();
        assert!(output.starts_with("Error: Adding 250 minutes would exceed day day-1"));
        assert!(output.contains("- Not enough time in day-1: 4h 10m needed, 3h 20m remaining"));

        let missing = ItineraryError::BucketNotFound { id: "day-9".into() };
        let rendered = OperationStatus::rejected(&missing).to_string();
        assert!(!rendered.contains("- "));
    }
}
