//! Board configuration: days, seed activities and completion policy.
//!
//! Configuration is plain JSON. [`BoardConfig::load`] resolves it in this
//! order:
//!
//! 1. an explicit path passed by the caller
//! 2. `$XDG_CONFIG_HOME/itinerary/board.json` when that file exists
//! 3. the built-in [`BoardConfig::sample`]
//!
//! ```json
//! {
//!   "completion": { "ratio": 0.9, "trigger": "edge" },
//!   "buckets": [
//!     { "id": "day-1", "label": "Day 1", "date": "2023-10-16", "capacity_max": 720 }
//!   ],
//!   "pool": [
//!     { "label": "Museum Visit", "category": "sightseeing", "duration_minutes": 120 }
//!   ]
//! }
//! ```

use std::path::{Path, PathBuf};

use jiff::civil::{date, Date};
use serde::{Deserialize, Serialize};

use crate::{
    board::{Board, BoardBuilder},
    error::{ItineraryError, Result},
    models::{BucketId, Category},
    params::NewActivity,
    policy::CompletionPolicy,
};

const CONFIG_PREFIX: &str = "itinerary";
const CONFIG_FILE: &str = "board.json";

/// Minutes in the sample configuration's days (12 hours).
pub const SAMPLE_DAY_MINUTES: u32 = 720;

/// Definition of one day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BucketConfig {
    /// Unique day ID
    pub id: BucketId,
    /// Display label
    #[serde(default)]
    pub label: String,
    /// Calendar date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<Date>,
    /// Minute ceiling (must be positive)
    pub capacity_max: u32,
    /// Activities scheduled in the day from the start
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<NewActivity>,
}

impl BucketConfig {
    /// Day definition without a date or seed activities.
    pub fn new(id: impl Into<BucketId>, label: impl Into<String>, capacity_max: u32) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            capacity_max,
            ..Default::default()
        }
    }

    /// Sets the calendar date.
    pub fn on(mut self, date: Date) -> Self {
        self.date = Some(date);
        self
    }

    /// Adds a seed activity.
    pub fn with_item(mut self, item: NewActivity) -> Self {
        self.items.push(item);
        self
    }
}

/// Complete board configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Completion threshold and trigger
    #[serde(default)]
    pub completion: CompletionPolicy,
    /// Days in display order
    pub buckets: Vec<BucketConfig>,
    /// Activities waiting to be scheduled
    #[serde(default)]
    pub pool: Vec<NewActivity>,
}

impl BoardConfig {
    /// Parses configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads configuration from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| ItineraryError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json_str(&json)
    }

    /// Resolves configuration from an explicit path, the XDG config file, or
    /// the built-in sample, in that order.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_path(path),
            None => match Self::default_config_path() {
                Some(path) => Self::from_path(&path),
                None => Ok(Self::sample()),
            },
        }
    }

    /// Location of an existing user configuration file, following the XDG
    /// Base Directory specification.
    pub fn default_config_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix(CONFIG_PREFIX).find_config_file(CONFIG_FILE)
    }

    /// Pretty-printed JSON form.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Builds a board from this configuration.
    pub fn build(self) -> Result<Board> {
        BoardBuilder::from_config(self).build()
    }

    /// Four empty 12-hour days and six activities waiting in the pool.
    pub fn sample() -> Self {
        let buckets = [
            date(2023, 10, 16),
            date(2023, 10, 17),
            date(2023, 10, 18),
            date(2023, 10, 19),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, day)| {
            BucketConfig::new(
                format!("day-{}", i + 1),
                format!("Day {}", i + 1),
                SAMPLE_DAY_MINUTES,
            )
            .on(day)
        })
        .collect();

        let pool = [
            (
                "act-1",
                "Museum Visit",
                Category::Sightseeing,
                120,
                "Visit the National Museum of Art",
            ),
            (
                "act-2",
                "City Tour",
                Category::Sightseeing,
                180,
                "Walking tour of historic downtown",
            ),
            (
                "act-3",
                "Lunch",
                Category::Food,
                90,
                "Lunch at local restaurant",
            ),
            (
                "act-4",
                "Beach",
                Category::Other,
                240,
                "Relaxing time at the beach",
            ),
            (
                "act-5",
                "Shopping",
                Category::Other,
                120,
                "Shopping at local markets",
            ),
            (
                "act-6",
                "Dinner",
                Category::Food,
                120,
                "Dinner at recommended restaurant",
            ),
        ]
        .into_iter()
        .map(|(id, label, category, minutes, notes)| NewActivity {
            notes: Some(notes.to_string()),
            ..NewActivity::new(label, category)
                .with_id(id)
                .with_duration(minutes)
        })
        .collect();

        Self {
            completion: CompletionPolicy::default(),
            buckets,
            pool,
        }
    }
}
