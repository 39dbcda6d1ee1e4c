//! Creator wizard error types.

use crate::itinerary::{ActivityId, DayId, ItineraryError};
use thiserror::Error;

/// Errors raised by wizard operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CreatorError {
    /// Day-planning operations are only valid on the planning step
    #[error("wizard is not on the planning step")]
    NotPlanning,

    /// No day with the given id in the draft
    #[error("day not found in draft: {0}")]
    DayNotFound(DayId),

    /// No activity with the given id in the given day
    #[error("activity not found in draft: {0}")]
    ActivityNotFound(ActivityId),

    /// The activity sub-form needs a title before it can submit
    #[error("activity title is required")]
    MissingTitle,

    /// The activity sub-form needs a time before it can submit
    #[error("activity time is required")]
    MissingTime,

    /// The store rejected the save
    #[error(transparent)]
    Store(#[from] ItineraryError),
}

/// Result type for wizard operations
pub type CreatorResult<T> = Result<T, CreatorError>;
