//! Collection wrapper types for displaying groups of domain objects.
//!
//! These wrappers format collections with consistent structure and handle
//! the empty case with a friendly message instead of blank output.

use std::{fmt, ops::Index};

use crate::{
    board::Board,
    models::{Activity, BucketSummary},
};

/// Newtype wrapper for displaying the unassigned pool.
///
/// # Examples
///
/// ```rust
/// use itinerary_core::{display::Pool, models::{Activity, Category}};
///
/// let lunch = Activity::new("act-3", "Lunch", Category::Food, 90)?;
/// let output = Pool(vec![lunch]).to_string();
/// assert!(output.contains("**Lunch**"));
///
/// assert!(Pool(vec![]).to_string().contains("All activities have been scheduled!"));
/// # Ok::<(), itinerary_core::ItineraryError>(())
/// ```
pub struct Pool(pub Vec<Activity>);

impl Pool {
    /// Check if the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of pooled activities.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the activities.
    pub fn iter(&self) -> std::slice::Iter<'_, Activity> {
        self.0.iter()
    }
}

impl Index<usize> for Pool {
    type Output = Activity;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Pool {
    type Item = &'a Activity;
    type IntoIter = std::slice::Iter<'a, Activity>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "All activities have been scheduled!")
        } else {
            for activity in &self.0 {
                write!(f, "{activity}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying day summaries.
pub struct Summaries(pub Vec<BucketSummary>);

impl Summaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of summaries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Number of days meeting the completion threshold.
    pub fn complete_count(&self) -> usize {
        self.0.iter().filter(|summary| summary.complete).count()
    }
}

impl fmt::Display for Summaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No days configured.");
        }
        for summary in &self.0 {
            write!(f, "{summary}")?;
        }
        Ok(())
    }
}

/// The whole board: every day with its summary and activities, followed by
/// the unassigned pool.
pub struct Itinerary<'a>(pub &'a Board);

impl<'a> fmt::Display for Itinerary<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        let summaries = board.summaries();

        writeln!(f, "# Itinerary")?;
        writeln!(f)?;
        writeln!(
            f,
            "{} of {} days complete",
            summaries.iter().filter(|s| s.complete).count(),
            summaries.len()
        )?;
        writeln!(f)?;

        for (bucket, summary) in board.buckets().iter().zip(&summaries) {
            write!(f, "{summary}")?;
            if bucket.is_empty() {
                writeln!(f, "Drop activities here.")?;
            } else {
                for item in bucket.items() {
                    write!(f, "{item}")?;
                }
            }
            writeln!(f)?;
        }

        writeln!(f, "## Unassigned")?;
        writeln!(f)?;
        write!(f, "{}", Pool(board.pool().to_vec()))
    }
}
