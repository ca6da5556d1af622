//! Core library for the Itinerary trip planner.
//!
//! This crate provides a bounded-capacity assignment engine: trip days are
//! buckets with a minute budget, activities are items with a fixed duration,
//! and every insert, move and reorder goes through admission control so no
//! day is ever overbooked.
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): Implement [`std::fmt::Display`] for direct
//!   formatting
//! - **Display Wrappers** ([`display`]): Provide contextual formatting for the
//!   whole board, replay reports and operation results
//! - **Terminal Rendering**: Rich markdown output via the CLI's terminal
//!   renderer
//!
//! # Quick Start
//!
//! ```rust
//! use itinerary_core::{
//!     models::{Category, Event},
//!     params::{MoveActivity, NewActivity, ScheduleActivity},
//!     BoardBuilder, BucketConfig, ItineraryError,
//! };
//!
//! let mut board = BoardBuilder::new()
//!     .with_bucket(BucketConfig::new("day-1", "Day 1", 720))
//!     .with_bucket(BucketConfig::new("day-2", "Day 2", 720))
//!     .with_pool_activity(NewActivity::new("Beach", Category::Other).with_duration(240))
//!     .build()?;
//!
//! // Schedule from the pool into a day
//! board.schedule(&ScheduleActivity {
//!     activity_id: "act-1".into(),
//!     bucket_id: "day-1".into(),
//!     index: None,
//! })?;
//! assert_eq!(board.bucket(&"day-1".into())?.remaining(), 480);
//!
//! // A move either succeeds completely or changes nothing
//! let outcome = board.move_activity(&MoveActivity {
//!     source: "day-1".into(),
//!     destination: "day-2".into(),
//!     activity_id: "act-1".into(),
//!     index: None,
//! })?;
//! assert!(outcome.events.is_empty());
//! assert_eq!(board.bucket(&"day-2".into())?.capacity_used(), 240);
//!
//! // Capacity rejections carry the remaining minutes for the UI
//! let err = board
//!     .add_activity(&itinerary_core::params::InsertActivity {
//!         bucket_id: "day-2".into(),
//!         activity: NewActivity::new("Road trip", Category::Transportation).with_duration(600),
//!         index: None,
//!     })
//!     .unwrap_err();
//! assert!(matches!(err, ItineraryError::CapacityExceeded { remaining: 480, .. }));
//! assert!(matches!(
//!     err.telemetry_event(),
//!     Some(Event::CapacityExceededAttempt { requested: 600, .. })
//! ));
//! # Ok::<(), ItineraryError>(())
//! ```

pub mod board;
pub mod config;
pub mod display;
pub mod error;
pub mod estimator;
pub mod ledger;
pub mod models;
pub mod operations;
pub mod params;
pub mod policy;
pub mod shared;

// Re-export commonly used types
pub use board::{Board, BoardBuilder, Location};
pub use config::{BoardConfig, BucketConfig};
pub use display::{CommandResult, Itinerary, Minutes, OperationStatus, Pool, ReplayReport};
pub use error::{ItineraryError, Result};
pub use estimator::estimate_duration;
pub use models::{
    Activity, ActivityId, Bucket, BucketId, BucketSummary, Category, Event, Outcome, Placement,
};
pub use operations::{apply_command, replay, Command, CommandOutcome, ReplayMode, ReplayStep};
pub use params::{
    InsertActivity, MoveActivity, NewActivity, RemoveActivity, ReorderActivities, ScheduleActivity,
    UnscheduleActivity,
};
pub use policy::{CompletionPolicy, CompletionTrigger};
pub use shared::SharedBoard;
