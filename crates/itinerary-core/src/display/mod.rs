//! Display formatting functions and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the wrappers here add context-specific formatting for collections, whole
//! boards and operation results. All output is markdown so the CLI's
//! terminal renderer can style it.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrapper Types   │    │   Formatted     │
//! │ (Bucket, Event) │───▶│ (Itinerary,     │───▶│    Output       │
//! │                 │    │  CommandResult) │    │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Pool, Summaries, and the full Itinerary view
//! - [`results`]: CommandResult, ReplayReport, Events
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`duration`]: Minute and calendar-date formatting
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use itinerary_core::{display::{Itinerary, Minutes}, BoardConfig};
//!
//! let board = BoardConfig::sample().build()?;
//! let output = Itinerary(&board).to_string();
//! assert!(output.contains("0 of 4 days complete"));
//! assert!(output.contains("**Museum Visit**"));
//!
//! assert_eq!(Minutes(90).to_string(), "1h 30m");
//! # Ok::<(), itinerary_core::ItineraryError>(())
//! ```

pub mod collections;
pub mod duration;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Itinerary, Pool, Summaries};
pub use duration::{DayDate, Minutes};
pub use results::{CommandResult, Events, ReplayReport};
pub use status::OperationStatus;
