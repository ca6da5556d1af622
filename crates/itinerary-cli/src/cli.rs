//! Command-line argument wrappers and command handlers.
//!
//! Argument structs carry the clap derives and convert into the core's
//! parameter types with `From`, so the core stays free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params / Command → Board
//! ```
//!
//! [`Cli`] owns the board for the duration of one invocation and renders
//! every result as markdown through the [`TerminalRenderer`].

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use itinerary_core::{
    display::{CommandResult, Itinerary, Minutes, OperationStatus, ReplayReport},
    estimator::estimate_duration_for_tag,
    models::Category,
    operations::{Command, ReplayMode},
    params::{
        InsertActivity, MoveActivity, NewActivity, RemoveActivity, ReorderActivities,
        ScheduleActivity, UnscheduleActivity,
    },
    BoardConfig, SharedBoard,
};
use jiff::civil::Time;
use log::{debug, info};

use crate::renderer::TerminalRenderer;

// ============================================================================
// CLI Argument Wrappers
// ============================================================================

/// Print the default duration for a category
#[derive(Args)]
pub struct EstimateArgs {
    #[arg(help = "Category tag, e.g. sightseeing, food or transportation")]
    pub category: String,
}

/// Create an activity directly in a day
///
/// The duration defaults to the category's estimate and the ID is generated
/// when the activity is created.
#[derive(Args)]
pub struct AddArgs {
    #[arg(help = "ID of the day to add the activity to")]
    pub bucket: String,
    #[arg(help = "Name of the activity")]
    pub label: String,
    #[arg(short, long, default_value = "other", help = "Activity category")]
    pub category: Category,
    #[arg(short, long, help = "Duration in minutes (estimated when omitted)")]
    pub duration: Option<u32>,
    #[arg(short, long, help = "Planned start time, e.g. 09:30")]
    pub time: Option<Time>,
    #[arg(short, long, help = "Where the activity takes place")]
    pub location: Option<String>,
    #[arg(short, long, help = "Free-form notes")]
    pub notes: Option<String>,
    #[arg(short, long, help = "Position within the day (appends when omitted)")]
    pub index: Option<usize>,
}

impl From<AddArgs> for InsertActivity {
    fn from(val: AddArgs) -> Self {
        InsertActivity {
            bucket_id: val.bucket.into(),
            activity: NewActivity {
                duration_minutes: val.duration,
                time: val.time,
                location: val.location,
                notes: val.notes,
                ..NewActivity::new(val.label, val.category)
            },
            index: val.index,
        }
    }
}

/// Remove an activity from a day
#[derive(Args)]
pub struct RemoveArgs {
    #[arg(help = "ID of the day holding the activity")]
    pub bucket: String,
    #[arg(help = "ID of the activity to remove")]
    pub activity: String,
}

impl From<RemoveArgs> for RemoveActivity {
    fn from(val: RemoveArgs) -> Self {
        RemoveActivity {
            bucket_id: val.bucket.into(),
            activity_id: val.activity.into(),
        }
    }
}

/// Move an activity to another day
///
/// The move is rejected as a whole when the destination day lacks the time;
/// the activity then stays where it was.
#[derive(Args)]
pub struct MoveArgs {
    #[arg(help = "ID of the day the activity is in")]
    pub source: String,
    #[arg(help = "ID of the day to move it to")]
    pub destination: String,
    #[arg(help = "ID of the activity to move")]
    pub activity: String,
    #[arg(short, long, help = "Position within the destination day")]
    pub index: Option<usize>,
}

impl From<MoveArgs> for MoveActivity {
    fn from(val: MoveArgs) -> Self {
        MoveActivity {
            source: val.source.into(),
            destination: val.destination.into(),
            activity_id: val.activity.into(),
            index: val.index,
        }
    }
}

/// Reorder activities within a day
#[derive(Args)]
pub struct ReorderArgs {
    #[arg(help = "ID of the day to reorder")]
    pub bucket: String,
    #[arg(help = "Current position of the activity")]
    pub from: usize,
    #[arg(help = "New position of the activity")]
    pub to: usize,
}

impl From<ReorderArgs> for ReorderActivities {
    fn from(val: ReorderArgs) -> Self {
        ReorderActivities {
            bucket_id: val.bucket.into(),
            from: val.from,
            to: val.to,
        }
    }
}

/// Place a pooled activity into a day
#[derive(Args)]
pub struct ScheduleArgs {
    #[arg(help = "ID of the activity in the pool")]
    pub activity: String,
    #[arg(help = "ID of the day to schedule it into")]
    pub bucket: String,
    #[arg(short, long, help = "Position within the day")]
    pub index: Option<usize>,
}

impl From<ScheduleArgs> for ScheduleActivity {
    fn from(val: ScheduleArgs) -> Self {
        ScheduleActivity {
            activity_id: val.activity.into(),
            bucket_id: val.bucket.into(),
            index: val.index,
        }
    }
}

/// Send a scheduled activity back to the pool
#[derive(Args)]
pub struct UnscheduleArgs {
    #[arg(help = "ID of the day holding the activity")]
    pub bucket: String,
    #[arg(help = "ID of the activity")]
    pub activity: String,
}

impl From<UnscheduleArgs> for UnscheduleActivity {
    fn from(val: UnscheduleArgs) -> Self {
        UnscheduleActivity {
            bucket_id: val.bucket.into(),
            activity_id: val.activity.into(),
            index: None,
        }
    }
}

/// Apply a JSON script of commands
///
/// The script is an array of objects tagged with `op`, for example
/// `{ "op": "schedule", "activity_id": "act-1", "bucket_id": "day-1" }`.
#[derive(Args)]
pub struct ReplayArgs {
    #[arg(help = "Path to the JSON script")]
    pub script: PathBuf,
    #[arg(long, help = "Stop at the first rejected command")]
    pub stop_on_error: bool,
}

// ============================================================================
// Command Handlers
// ============================================================================

/// Loads the board configuration from `path`, the XDG config file or the
/// built-in sample.
pub fn load_board(path: Option<&Path>) -> Result<SharedBoard> {
    let config = BoardConfig::load(path).context("Failed to load board configuration")?;
    let board = config.build().context("Invalid board configuration")?;
    debug!(
        "loaded board with {} days and {} pooled activities",
        board.buckets().len(),
        board.pool().len()
    );
    Ok(SharedBoard::new(board))
}

/// Handles CLI commands against one board.
pub struct Cli {
    board: SharedBoard,
    renderer: TerminalRenderer,
}

impl Cli {
    /// Create a new handler.
    pub fn new(board: SharedBoard, renderer: TerminalRenderer) -> Self {
        Self { board, renderer }
    }

    /// Render every day and the pool.
    pub async fn show(&self) -> Result<()> {
        let board = self.board.snapshot().await;
        self.renderer.render(&Itinerary(&board).to_string())
    }

    /// Print the default duration for a category tag.
    pub fn estimate(&self, args: &EstimateArgs) -> Result<()> {
        let category = Category::from_tag(&args.category);
        let minutes = estimate_duration_for_tag(&args.category);
        self.renderer.render(&format!(
            "Estimated duration for {}: **{}** ({minutes} minutes)\n",
            category.with_icon(),
            Minutes(minutes)
        ))
    }

    /// Apply one command, then show the resulting board.
    ///
    /// A rejected command is reported and turned into an error so the
    /// process exits unsuccessfully.
    pub async fn execute(&self, command: Command) -> Result<()> {
        info!("Executing: {}", command.describe());
        match self.board.apply(&command).await {
            Ok(outcome) => {
                self.renderer
                    .render(&CommandResult::new(outcome).to_string())?;
                self.renderer.render("\n")?;
                self.show().await
            }
            Err(err) => {
                self.renderer
                    .render(&OperationStatus::rejected(&err).to_string())?;
                bail!("could not {}", command.describe())
            }
        }
    }

    /// Replay a script file, then show the resulting board.
    pub async fn replay(&self, args: ReplayArgs) -> Result<()> {
        let path = args.script.display();
        let script = std::fs::read_to_string(&args.script)
            .with_context(|| format!("Failed to read script {path}"))?;
        let commands: Vec<Command> =
            serde_json::from_str(&script).with_context(|| format!("Invalid script {path}"))?;

        let mode = if args.stop_on_error {
            ReplayMode::StopOnError
        } else {
            ReplayMode::Continue
        };
        info!("Replaying {} commands", commands.len());
        let report = ReplayReport(self.board.replay(&commands, mode).await);

        self.renderer.render(&report.to_string())?;
        self.renderer.render("\n")?;
        self.show().await?;

        if args.stop_on_error && report.rejected() > 0 {
            bail!(
                "replay stopped after {} of {} commands",
                report.0.len(),
                commands.len()
            );
        }
        Ok(())
    }

    /// Print the built-in sample configuration. Needs no board.
    pub fn print_sample_config(renderer: &TerminalRenderer) -> Result<()> {
        let json = BoardConfig::sample()
            .to_json_pretty()
            .context("Failed to serialize sample configuration")?;
        renderer.print_raw(&json);
        Ok(())
    }
}
