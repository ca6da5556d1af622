//! Data models for days, activities and engine events.
//!
//! This module contains the core domain models of the itinerary engine.
//! Display implementations for these models are located in
//! [`crate::display::models`] to keep data structures apart from
//! presentation.
//!
//! # Model Overview
//!
//! - [`Activity`]: a schedulable unit with a fixed duration in minutes
//! - [`Bucket`]: one trip day; an ordered list of activities bounded by a
//!   minute ceiling
//! - [`Category`]: activity tag that drives default duration estimates
//! - [`Event`] / [`Outcome`]: what an operation returns to the caller
//! - [`BucketSummary`]: capacity statistics for list views
//!
//! # Examples
//!
//! ```rust
//! use itinerary_core::models::{Activity, Bucket, Category};
//!
//! let bucket = Bucket::new("day-1", "Monday", None, 720)?;
//! assert_eq!(bucket.remaining(), 720);
//!
//! let museum = Activity::new("act-1", "Museum Visit", Category::Sightseeing, 120)?;
//! assert!(bucket.can_admit(museum.duration_minutes()));
//! # Ok::<(), itinerary_core::ItineraryError>(())
//! ```

pub mod activity;
pub mod bucket;
pub mod category;
pub mod event;
pub mod ids;
pub mod summary;


pub use activity::Activity;
pub use bucket::Bucket;
pub use category::Category;
pub use event::{Event, Outcome, Placement};
pub use ids::{ActivityId, BucketId};
pub use summary::BucketSummary;
