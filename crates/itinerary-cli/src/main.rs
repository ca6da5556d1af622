//! Itinerary CLI Application
//!
//! Command-line interface for the bounded-capacity trip day planner.

mod args;
mod cli;
mod renderer;

use anyhow::Result;
use args::{Args, Commands};
use clap::Parser;
use cli::{load_board, Cli};
use itinerary_core::operations::Command;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        config,
        no_color,
        command,
    } = Args::parse();

    let renderer = TerminalRenderer::new(!no_color);

    // Works even when the user's config file is broken
    if let Some(SampleConfig) = command {
        return Cli::print_sample_config(&renderer);
    }

    let cli = Cli::new(load_board(config.as_deref())?, renderer);
    info!("Itinerary started");

    match command {
        None | Some(Show) => cli.show().await,
        Some(Estimate(args)) => cli.estimate(&args),
        Some(Add(args)) => cli.execute(Command::Insert(args.into())).await,
        Some(Remove(args)) => cli.execute(Command::Remove(args.into())).await,
        Some(Move(args)) => cli.execute(Command::Move(args.into())).await,
        Some(Reorder(args)) => cli.execute(Command::Reorder(args.into())).await,
        Some(Schedule(args)) => cli.execute(Command::Schedule(args.into())).await,
        Some(Unschedule(args)) => cli.execute(Command::Unschedule(args.into())).await,
        Some(Replay(args)) => cli.replay(args).await,
        Some(SampleConfig) => Cli::print_sample_config(&TerminalRenderer::new(!no_color)),
    }
}
