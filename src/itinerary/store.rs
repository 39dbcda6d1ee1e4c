//! In-memory itinerary store.
//!
//! The store owns the itinerary collection exclusively; consumers read
//! snapshots and mutate only through the operations here. Handles are cheap
//! to clone and share one underlying collection.

use super::{
    errors::{ItineraryError, ItineraryResult},
    filter::ItineraryFilter,
    models::{
        Activity, ActivityDraft, ActivityId, ActivityUpdate, Day, DayId, Itinerary,
        ItineraryDraft, ItineraryId, ItineraryUpdate,
    },
    seed,
};
use chrono::Utc;
use parking_lot::RwLock;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Default)]
struct StoreState {
    itineraries: Vec<Itinerary>,
    current: Option<ItineraryId>,
}

/// Itinerary store handle
#[derive(Clone, Debug)]
pub struct ItineraryStore {
    state: Arc<RwLock<StoreState>>,
}

impl Default for ItineraryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItineraryStore {
    /// Create a store seeded with the sample itineraries.
    pub fn new() -> Self {
        Self::with_itineraries(seed::sample_itineraries())
    }

    /// Create a store with no records.
    pub fn empty() -> Self {
        Self::with_itineraries(Vec::new())
    }

    /// Create a store holding exactly the given records.
    pub fn with_itineraries(itineraries: Vec<Itinerary>) -> Self {
        Self {
            state: Arc::new(RwLock::new(StoreState {
                itineraries,
                current: None,
            })),
        }
    }

    /// Snapshot of the full collection, in insertion order.
    pub fn itineraries(&self) -> Vec<Itinerary> {
        self.state.read().itineraries.clone()
    }

    /// Look up a single itinerary by id.
    pub fn get(&self, id: ItineraryId) -> Option<Itinerary> {
        self.state
            .read()
            .itineraries
            .iter()
            .find(|itinerary| itinerary.id == id)
            .cloned()
    }

    /// The currently selected itinerary, if any.
    pub fn current(&self) -> Option<Itinerary> {
        let state = self.state.read();
        let id = state.current?;
        state
            .itineraries
            .iter()
            .find(|itinerary| itinerary.id == id)
            .cloned()
    }

    /// Select an itinerary (or clear the selection with `None`).
    pub fn set_current(&self, id: Option<ItineraryId>) -> ItineraryResult<()> {
        let mut state = self.state.write();
        if let Some(id) = id
            && !state.itineraries.iter().any(|itinerary| itinerary.id == id)
        {
            return Err(ItineraryError::NotFound(id));
        }
        state.current = id;
        Ok(())
    }

    /// Public itineraries matching the explore-page filter.
    pub fn search(&self, filter: &ItineraryFilter) -> Vec<Itinerary> {
        self.state
            .read()
            .itineraries
            .iter()
            .filter(|itinerary| itinerary.is_public && filter.matches(itinerary))
            .cloned()
            .collect()
    }

    /// Create an itinerary from a draft, minting its id and creation
    /// timestamp. Returns the stored record.
    pub fn create(&self, draft: ItineraryDraft) -> Itinerary {
        let itinerary = Itinerary {
            id: Uuid::new_v4(),
            title: draft.title,
            destination: draft.destination,
            duration: draft.duration,
            travelers: draft.travelers,
            travel_type: draft.travel_type,
            hotel_category: draft.hotel_category,
            days: draft.days,
            author: draft.author,
            created_at: Utc::now(),
            is_public: draft.is_public,
            cover_image: draft.cover_image,
        };
        log::info!(
            "creating itinerary {} '{}' ({} days)",
            itinerary.id,
            itinerary.title,
            itinerary.days.len()
        );
        self.state.write().itineraries.push(itinerary.clone());
        itinerary
    }

    /// Apply a partial update. A new `duration` does not resize the day
    /// list; only the wizard materializes days.
    pub fn update(&self, id: ItineraryId, updates: ItineraryUpdate) -> ItineraryResult<Itinerary> {
        log::info!("updating itinerary {id}");
        let mut state = self.state.write();
        let itinerary = state
            .itineraries
            .iter_mut()
            .find(|itinerary| itinerary.id == id)
            .ok_or(ItineraryError::NotFound(id))?;

        if let Some(title) = updates.title {
            itinerary.title = title;
        }
        if let Some(destination) = updates.destination {
            itinerary.destination = destination;
        }
        if let Some(duration) = updates.duration {
            itinerary.duration = duration.max(1);
        }
        if let Some(travelers) = updates.travelers {
            itinerary.travelers = travelers.max(1);
        }
        if let Some(travel_type) = updates.travel_type {
            itinerary.travel_type = travel_type;
        }
        if let Some(hotel_category) = updates.hotel_category {
            itinerary.hotel_category = hotel_category;
        }
        if let Some(days) = updates.days {
            itinerary.days = days;
        }
        if let Some(is_public) = updates.is_public {
            itinerary.is_public = is_public;
        }
        if let Some(cover_image) = updates.cover_image {
            itinerary.cover_image = cover_image;
        }
        Ok(itinerary.clone())
    }

    /// Delete an itinerary. Clears the selection if it pointed here.
    pub fn delete(&self, id: ItineraryId) -> ItineraryResult<()> {
        log::info!("deleting itinerary {id}");
        let mut state = self.state.write();
        let before = state.itineraries.len();
        state.itineraries.retain(|itinerary| itinerary.id != id);
        if state.itineraries.len() == before {
            return Err(ItineraryError::NotFound(id));
        }
        if state.current == Some(id) {
            state.current = None;
        }
        Ok(())
    }

    /// Append an activity to a day. Days are addressed by id alone; day ids
    /// are globally unique.
    pub fn add_activity(&self, day_id: DayId, draft: ActivityDraft) -> ItineraryResult<Activity> {
        if draft.title.trim().is_empty() {
            return Err(ItineraryError::EmptyTitle);
        }
        if draft.time.trim().is_empty() {
            return Err(ItineraryError::EmptyTime);
        }
        let activity = Activity {
            id: Uuid::new_v4(),
            activity_type: draft.activity_type,
            title: draft.title,
            time: draft.time,
            duration_hours: draft.duration_hours.max(0.5),
            cost: draft.cost.max(0.0),
            location: draft.location,
            description: draft.description,
        };
        log::info!("adding activity '{}' to day {day_id}", activity.title);
        let mut state = self.state.write();
        let day = find_day_mut(&mut state, day_id)?;
        day.activities.push(activity.clone());
        Ok(activity)
    }

    /// Apply a partial update to one activity.
    pub fn update_activity(
        &self,
        day_id: DayId,
        activity_id: ActivityId,
        updates: ActivityUpdate,
    ) -> ItineraryResult<Activity> {
        if updates.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(ItineraryError::EmptyTitle);
        }
        if updates.time.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(ItineraryError::EmptyTime);
        }
        log::info!("updating activity {activity_id} on day {day_id}");
        let mut state = self.state.write();
        let day = find_day_mut(&mut state, day_id)?;
        let activity = day
            .activities
            .iter_mut()
            .find(|activity| activity.id == activity_id)
            .ok_or(ItineraryError::ActivityNotFound(activity_id))?;

        if let Some(activity_type) = updates.activity_type {
            activity.activity_type = activity_type;
        }
        if let Some(title) = updates.title {
            activity.title = title;
        }
        if let Some(time) = updates.time {
            activity.time = time;
        }
        if let Some(duration_hours) = updates.duration_hours {
            activity.duration_hours = duration_hours.max(0.5);
        }
        if let Some(cost) = updates.cost {
            activity.cost = cost.max(0.0);
        }
        if let Some(location) = updates.location {
            activity.location = location;
        }
        if let Some(description) = updates.description {
            activity.description = description;
        }
        Ok(activity.clone())
    }

    /// Remove one activity from a day.
    pub fn delete_activity(&self, day_id: DayId, activity_id: ActivityId) -> ItineraryResult<()> {
        log::info!("deleting activity {activity_id} from day {day_id}");
        let mut state = self.state.write();
        let day = find_day_mut(&mut state, day_id)?;
        let before = day.activities.len();
        day.activities.retain(|activity| activity.id != activity_id);
        if day.activities.len() == before {
            return Err(ItineraryError::ActivityNotFound(activity_id));
        }
        Ok(())
    }
}

fn find_day_mut(state: &mut StoreState, day_id: DayId) -> ItineraryResult<&mut Day> {
    state
        .itineraries
        .iter_mut()
        .flat_map(|itinerary| itinerary.days.iter_mut())
        .find(|day| day.id == day_id)
        .ok_or(ItineraryError::DayNotFound(day_id))
}
