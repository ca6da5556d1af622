use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{
    AddArgs, EstimateArgs, MoveArgs, RemoveArgs, ReorderArgs, ReplayArgs, ScheduleArgs,
    UnscheduleArgs,
};

/// Plan trip days without overbooking them
///
/// Every day has a fixed budget of minutes. Activities are scheduled into
/// days, moved between them and reordered; any change that would push a day
/// over its budget is rejected and leaves the itinerary untouched. Changes
/// last for a single invocation; use `replay` to run a whole session.
#[derive(Parser)]
#[command(version, about, name = "itin")]
pub struct Args {
    /// Path to a board configuration file. Defaults to
    /// $XDG_CONFIG_HOME/itinerary/board.json, or a built-in sample trip
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the itinerary CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Show every day and the unassigned pool (default)
    #[command(alias = "ls")]
    Show,
    /// Print the default duration for an activity category
    Estimate(EstimateArgs),
    /// Create an activity directly in a day
    #[command(alias = "a")]
    Add(AddArgs),
    /// Remove an activity from a day
    #[command(alias = "rm")]
    Remove(RemoveArgs),
    /// Move an activity to another day
    #[command(alias = "mv")]
    Move(MoveArgs),
    /// Reorder activities within a day
    Reorder(ReorderArgs),
    /// Place an activity from the pool into a day
    #[command(alias = "s")]
    Schedule(ScheduleArgs),
    /// Send a scheduled activity back to the pool
    Unschedule(UnscheduleArgs),
    /// Apply a JSON script of commands in order
    Replay(ReplayArgs),
    /// Print the built-in sample configuration as JSON
    SampleConfig,
}
