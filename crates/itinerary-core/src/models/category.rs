//! Activity categories.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of activity categories.
///
/// The category drives the default duration estimate for activities created
/// without an explicit duration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Museums, tours, landmarks
    Sightseeing,

    /// Meals and food stops
    Food,

    /// Trains, flights, transfers
    Transportation,

    /// Check-in, check-out
    Accommodation,

    /// Anything else
    #[default]
    Other,
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sightseeing" => Ok(Category::Sightseeing),
            "food" => Ok(Category::Food),
            "transportation" | "transport" => Ok(Category::Transportation),
            "accommodation" => Ok(Category::Accommodation),
            "other" => Ok(Category::Other),
            _ => Err(format!("Invalid category: {s}")),
        }
    }
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 5] = [
        Category::Sightseeing,
        Category::Food,
        Category::Transportation,
        Category::Accommodation,
        Category::Other,
    ];

    /// Parse a category tag, falling back to [`Category::Other`] for
    /// anything unrecognised.
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or_default()
    }

    /// Lowercase tag used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Sightseeing => "sightseeing",
            Category::Food => "food",
            Category::Transportation => "transportation",
            Category::Accommodation => "accommodation",
            Category::Other => "other",
        }
    }

    /// Category name prefixed with its badge icon.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use itinerary_core::models::Category;
    ///
    /// assert_eq!(Category::Food.with_icon(), "🍽 Food");
    /// assert_eq!(Category::Other.with_icon(), "• Other");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            Category::Sightseeing => "🏛 Sightseeing",
            Category::Food => "🍽 Food",
            Category::Transportation => "🚆 Transportation",
            Category::Accommodation => "🛏 Accommodation",
            Category::Other => "• Other",
        }
    }
}
