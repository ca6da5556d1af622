//! Replayable user-intent commands.
//!
//! A [`Command`] is one user action (drag an activity, add one, reorder a
//! day) in serialisable form. Because the engine is a pure function of
//! `(board, command) → (board', result, events)`, a script of commands can be
//! replayed against any board to reproduce a session or to test what-if
//! scenarios.
//!
//! # Examples
//!
//! ```rust
//! use itinerary_core::{operations::{replay, Command, ReplayMode}, BoardConfig};
//!
//! let mut board = BoardConfig::sample().build()?;
//! let script: Vec<Command> = serde_json::from_str(
//!     r#"[
//!         { "op": "schedule", "activity_id": "act-4", "bucket_id": "day-1" },
//!         { "op": "schedule", "activity_id": "act-2", "bucket_id": "day-1" }
//!     ]"#,
//! )?;
//!
//! let steps = replay(&mut board, &script, ReplayMode::StopOnError);
//! assert!(steps.iter().all(|step| step.is_applied()));
//! assert_eq!(board.buckets()[0].capacity_used(), 420);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    board::Board,
    error::Result,
    models::{ActivityId, Event},
    params::{
        InsertActivity, MoveActivity, NewActivity, RemoveActivity, ReorderActivities,
        ScheduleActivity, UnscheduleActivity,
    },
};

/// One user action against the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    /// Create an activity inside a day
    Insert(InsertActivity),
    /// Remove an activity from a day
    Remove(RemoveActivity),
    /// Move an activity between days
    Move(MoveActivity),
    /// Reorder a day
    Reorder(ReorderActivities),
    /// Place a pooled activity into a day
    Schedule(ScheduleActivity),
    /// Send a scheduled activity back to the pool
    Unschedule(UnscheduleActivity),
    /// Create an activity in the pool
    AddToPool(NewActivity),
    /// Drop an activity from the pool
    Discard { activity_id: ActivityId },
}

impl Command {
    /// Short human-readable description of the command.
    pub fn describe(&self) -> String {
        match self {
            Command::Insert(p) => format!("add '{}' to {}", p.activity.label, p.bucket_id),
            Command::Remove(p) => format!("remove {} from {}", p.activity_id, p.bucket_id),
            Command::Move(p) => format!(
                "move {} from {} to {}",
                p.activity_id, p.source, p.destination
            ),
            Command::Reorder(p) => {
                format!("reorder {} from {} to {}", p.bucket_id, p.from, p.to)
            }
            Command::Schedule(p) => format!("schedule {} into {}", p.activity_id, p.bucket_id),
            Command::Unschedule(p) => {
                format!("unschedule {} from {}", p.activity_id, p.bucket_id)
            }
            Command::AddToPool(p) => format!("add '{}' to the pool", p.label),
            Command::Discard { activity_id } => format!("discard {activity_id} from the pool"),
        }
    }
}

/// What a successfully applied command produced.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutcome {
    /// Confirmation message for the user
    pub message: String,
    /// Events triggered by the command
    pub events: Vec<Event>,
}

/// Applies one command to the board.
///
/// The board is unchanged when an error is returned.
pub fn apply_command(board: &mut Board, command: &Command) -> Result<CommandOutcome> {
    debug!("apply_command: {:?}", command);

    let (message, events) = match command {
        Command::Insert(params) => {
            let outcome = board.add_activity(params)?;
            (
                format!(
                    "Added '{}' ({}) to {}",
                    outcome.value.label, outcome.value.id, params.bucket_id
                ),
                outcome.events,
            )
        }
        Command::Remove(params) => {
            let outcome = board.remove_activity(params)?;
            (
                format!(
                    "Removed '{}' from {}",
                    outcome.value.label, params.bucket_id
                ),
                outcome.events,
            )
        }
        Command::Move(params) => {
            let outcome = board.move_activity(params)?;
            (
                format!(
                    "Moved {} to {} at position {}",
                    params.activity_id, outcome.value.bucket_id, outcome.value.index
                ),
                outcome.events,
            )
        }
        Command::Reorder(params) => {
            let outcome = board.reorder(params)?;
            (
                format!(
                    "Reordered {}: position {} to {}",
                    params.bucket_id, params.from, params.to
                ),
                outcome.events,
            )
        }
        Command::Schedule(params) => {
            let outcome = board.schedule(params)?;
            (
                format!(
                    "Scheduled {} into {} at position {}",
                    params.activity_id, outcome.value.bucket_id, outcome.value.index
                ),
                outcome.events,
            )
        }
        Command::Unschedule(params) => {
            let outcome = board.unschedule(params)?;
            (
                format!(
                    "Moved {} from {} back to the pool",
                    params.activity_id, params.bucket_id
                ),
                outcome.events,
            )
        }
        Command::AddToPool(params) => {
            let activity = board.add_to_pool(params)?;
            (
                format!("Added '{}' ({}) to the pool", activity.label, activity.id),
                Vec::new(),
            )
        }
        Command::Discard { activity_id } => {
            let activity = board.discard(activity_id)?;
            (
                format!("Discarded '{}' from the pool", activity.label),
                Vec::new(),
            )
        }
    };

    Ok(CommandOutcome { message, events })
}

/// How [`replay`] treats a rejected command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplayMode {
    /// Record the rejection and keep going
    #[default]
    Continue,
    /// Stop at the first rejection
    StopOnError,
}

/// Result of one replayed command.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplayStep {
    /// The command was applied
    Applied {
        command: String,
        outcome: CommandOutcome,
    },
    /// The command was rejected and changed nothing
    Rejected {
        command: String,
        reason: String,
        /// Telemetry for capacity rejections
        event: Option<Event>,
    },
}

impl ReplayStep {
    /// Whether the command was applied.
    pub fn is_applied(&self) -> bool {
        matches!(self, ReplayStep::Applied { .. })
    }
}

/// Applies commands in order and reports one step per attempted command.
pub fn replay(board: &mut Board, commands: &[Command], mode: ReplayMode) -> Vec<ReplayStep> {
    let mut steps = Vec::with_capacity(commands.len());

    for command in commands {
        match apply_command(board, command) {
            Ok(outcome) => steps.push(ReplayStep::Applied {
                command: command.describe(),
                outcome,
            }),
            Err(err) => {
                steps.push(ReplayStep::Rejected {
                    command: command.describe(),
                    reason: err.to_string(),
                    event: err.telemetry_event(),
                });
                if mode == ReplayMode::StopOnError {
                    break;
                }
            }
        }
    }

    steps
}
