//! Default durations for activities created without one.

use crate::{
    error::{ItineraryError, Result},
    models::Category,
};

/// Default time cost of a category in minutes.
///
/// # Examples
///
/// ```rust
/// use itinerary_core::{estimator::estimate_duration, models::Category};
///
/// assert_eq!(estimate_duration(Category::Sightseeing), 120);
/// assert_eq!(estimate_duration(Category::Accommodation), 30);
/// ```
pub fn estimate_duration(category: Category) -> u32 {
    match category {
        Category::Sightseeing => 120,
        Category::Food => 90,
        Category::Transportation => 60,
        Category::Accommodation => 30,
        Category::Other => 60,
    }
}

/// Default time cost for a raw category tag; unknown tags cost as much as
/// [`Category::Other`].
pub fn estimate_duration_for_tag(tag: &str) -> u32 {
    estimate_duration(Category::from_tag(tag))
}

/// Uses the explicit duration when given, otherwise the category estimate.
///
/// # Errors
///
/// Returns `ItineraryError::InvalidInput` for an explicit duration of zero.
pub fn resolve_duration(explicit: Option<u32>, category: Category) -> Result<u32> {
    match explicit {
        Some(0) => Err(ItineraryError::invalid_input("duration_minutes")
            .with_reason("must be a positive number of minutes")),
        Some(minutes) => Ok(minutes),
        None => Ok(estimate_duration(category)),
    }
}
