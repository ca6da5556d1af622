//! Result wrapper types for displaying operation outcomes.
//!
//! [`CommandResult`] formats a single applied command with the events it
//! triggered; [`ReplayReport`] formats a whole replayed script.

use std::fmt;

use crate::{
    models::Event,
    operations::{CommandOutcome, ReplayStep},
};

/// Newtype wrapper for displaying a list of events as bullet points.
pub struct Events<'a>(pub &'a [Event]);

impl<'a> fmt::Display for Events<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for event in self.0 {
            writeln!(f, "- {event}")?;
        }
        Ok(())
    }
}

/// Wrapper type for displaying the result of one applied command.
///
/// # Examples
///
/// ```rust
/// use itinerary_core::{display::CommandResult, models::Event, operations::CommandOutcome};
///
/// let result = CommandResult::new(CommandOutcome {
///     message: "Scheduled act-4 into day-1 at position 0".to_string(),
///     events: vec![Event::BucketCompleted { bucket_id: "day-1".into() }],
/// });
/// let output = result.to_string();
/// assert!(output.contains("Scheduled act-4"));
/// assert!(output.contains("day-1 is complete!"));
/// ```
pub struct CommandResult {
    pub outcome: CommandOutcome,
}

impl CommandResult {
    /// Create a new CommandResult wrapper.
    pub fn new(outcome: CommandOutcome) -> Self {
        Self { outcome }
    }
}

impl fmt::Display for CommandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.outcome.message)?;
        if !self.outcome.events.is_empty() {
            writeln!(f)?;
            write!(f, "{}", Events(&self.outcome.events))?;
        }
        Ok(())
    }
}

/// Wrapper type for displaying every step of a replayed script.
pub struct ReplayReport(pub Vec<ReplayStep>);

impl ReplayReport {
    /// Number of applied commands.
    pub fn applied(&self) -> usize {
        self.0.iter().filter(|step| step.is_applied()).count()
    }

    /// Number of rejected commands.
    pub fn rejected(&self) -> usize {
        self.0.len() - self.applied()
    }
}

impl fmt::Display for ReplayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No commands to replay.");
        }

        for (n, step) in self.0.iter().enumerate() {
            match step {
                ReplayStep::Applied { command, outcome } => {
                    writeln!(f, "{}. ✓ {command}: {}", n + 1, outcome.message)?;
                    for event in &outcome.events {
                        writeln!(f, "   - {event}")?;
                    }
                }
                ReplayStep::Rejected {
                    command,
                    reason,
                    event,
                } => {
                    writeln!(f, "{}. ✗ {command}: {reason}", n + 1)?;
                    if let Some(event) = event {
                        writeln!(f, "   - {event}")?;
                    }
                }
            }
        }

        writeln!(f)?;
        writeln!(
            f,
            "{} applied, {} rejected",
            self.applied(),
            self.rejected()
        )
    }
}
