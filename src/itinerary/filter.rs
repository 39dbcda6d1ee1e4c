//! Explore-page query over the itinerary collection.

use super::models::{Itinerary, TravelType};

/// Search and filter criteria for browsing itineraries.
///
/// `search` matches case-insensitively against title or destination;
/// `travel_type` narrows to one trip kind, with `None` meaning the "all"
/// chip.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItineraryFilter {
    pub search: Option<String>,
    pub travel_type: Option<TravelType>,
}

impl ItineraryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn with_travel_type(mut self, travel_type: TravelType) -> Self {
        self.travel_type = Some(travel_type);
        self
    }

    /// Whether the itinerary satisfies both criteria.
    pub fn matches(&self, itinerary: &Itinerary) -> bool {
        let matches_search = match &self.search {
            Some(term) if !term.is_empty() => {
                let term = term.to_lowercase();
                itinerary.title.to_lowercase().contains(&term)
                    || itinerary.destination.to_lowercase().contains(&term)
            }
            _ => true,
        };
        let matches_type = self
            .travel_type
            .is_none_or(|travel_type| itinerary.travel_type == travel_type);
        matches_search && matches_type
    }
}
