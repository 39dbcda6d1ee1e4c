//! Itinerary store error types.

use super::models::{ActivityId, DayId, ItineraryId};
use thiserror::Error;

/// Itinerary store errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItineraryError {
    /// No itinerary with the given id
    #[error("itinerary not found: {0}")]
    NotFound(ItineraryId),

    /// No day with the given id in any itinerary
    #[error("day not found: {0}")]
    DayNotFound(DayId),

    /// No activity with the given id in the given day
    #[error("activity not found: {0}")]
    ActivityNotFound(ActivityId),

    /// Activities must carry a title
    #[error("activity title must not be empty")]
    EmptyTitle,

    /// Activities must carry a time of day
    #[error("activity time must not be empty")]
    EmptyTime,
}

/// Result type for itinerary store operations
pub type ItineraryResult<T> = Result<T, ItineraryError>;
