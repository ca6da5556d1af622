//! Display implementations for domain models.
//!
//! Models render as markdown fragments so the CLI's terminal renderer can
//! style them. Activities are single bullet lines (with indented detail
//! lines) because they always appear inside a day or the pool.

use std::fmt;

use super::duration::{DayDate, Minutes};
use crate::models::{Activity, Bucket, BucketSummary, Category, Event};

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- ")?;
        if let Some(time) = &self.time {
            write!(f, "{} ", time.strftime("%H:%M"))?;
        }
        writeln!(
            f,
            "**{}** `{}` · {} · {}",
            self.label,
            self.id,
            Minutes(self.duration_minutes()),
            self.category.with_icon()
        )?;

        if let Some(location) = &self.location {
            writeln!(f, "  - Location: {location}")?;
        }
        if let Some(notes) = &self.notes {
            writeln!(f, "  - Notes: {notes}")?;
        }
        Ok(())
    }
}

/// Writes the `## Label` heading shared by buckets and their summaries.
fn write_heading(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    id: &str,
    date: Option<&jiff::civil::Date>,
) -> fmt::Result {
    let label = if label.is_empty() { id } else { label };
    write!(f, "## {label}")?;
    if let Some(date) = date {
        write!(f, " · {}", DayDate(date))?;
    }
    Ok(())
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_heading(f, &self.label, self.id.as_str(), self.date.as_ref())?;
        writeln!(f, " (`{}`)", self.id)?;
        writeln!(f)?;
        writeln!(
            f,
            "{} of {} planned, {} free",
            Minutes(self.capacity_used()),
            Minutes(self.capacity_max()),
            Minutes(self.remaining())
        )?;
        writeln!(f)?;

        if self.is_empty() {
            writeln!(f, "No activities scheduled.")?;
        } else {
            for item in self.items() {
                write!(f, "{item}")?;
            }
        }
        writeln!(f)
    }
}

impl fmt::Display for BucketSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_heading(f, &self.label, self.id.as_str(), self.date.as_ref())?;
        if self.complete {
            write!(f, " ✓")?;
        }
        writeln!(f)?;
        writeln!(f)?;

        writeln!(
            f,
            "- **Used**: {} of {} ({}% Filled)",
            Minutes(self.used),
            Minutes(self.max),
            self.fill_percent
        )?;
        writeln!(f, "- **Remaining**: {}", Minutes(self.remaining))?;
        writeln!(f, "- **Activities**: {}", self.activity_count)?;
        writeln!(f)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::BucketCompleted { bucket_id } => {
                write!(f, "🎉 {bucket_id} is complete!")
            }
            Event::CapacityExceededAttempt {
                bucket_id,
                requested,
                remaining,
            } => write!(
                f,
                "Not enough time in {bucket_id}: {} needed, {} remaining",
                Minutes(*requested),
                Minutes(*remaining)
            ),
        }
    }
}
