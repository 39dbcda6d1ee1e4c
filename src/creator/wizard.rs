//! The creator wizard state machine.

use super::errors::{CreatorError, CreatorResult};
use crate::itinerary::{
    Activity, ActivityId, ActivityType, Author, Day, DayId, HotelCategory, Itinerary,
    ItineraryDraft, ItineraryId, ItineraryStore, ItineraryUpdate, TravelType,
};
use chrono::Utc;
use uuid::Uuid;

/// Wizard step
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Step {
    /// Collecting the trip overview
    Overview,
    /// Day-by-day planning with the activity sub-form
    Planning,
}

/// Step-one form state.
#[derive(Clone, Debug, PartialEq)]
pub struct OverviewForm {
    pub title: String,
    pub destination: String,
    pub duration: u32,
    pub travelers: u32,
    pub travel_type: TravelType,
    pub hotel_category: HotelCategory,
    pub cover_image: Option<String>,
}

impl Default for OverviewForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            destination: String::new(),
            duration: 1,
            travelers: 1,
            travel_type: TravelType::Solo,
            hotel_category: HotelCategory::Budget,
            cover_image: None,
        }
    }
}

/// Activity sub-form state. Submit stays gated until both title and time
/// are non-empty.
#[derive(Clone, Debug, PartialEq)]
pub struct ActivityForm {
    pub activity_type: ActivityType,
    pub title: String,
    pub time: String,
    pub duration_hours: f64,
    pub cost: f64,
    pub location: String,
    pub description: String,
}

impl Default for ActivityForm {
    fn default() -> Self {
        Self {
            activity_type: ActivityType::Sightseeing,
            title: String::new(),
            time: String::new(),
            duration_hours: 1.0,
            cost: 0.0,
            location: String::new(),
            description: String::new(),
        }
    }
}

impl ActivityForm {
    fn build(&self) -> CreatorResult<Activity> {
        if self.title.trim().is_empty() {
            return Err(CreatorError::MissingTitle);
        }
        if self.time.trim().is_empty() {
            return Err(CreatorError::MissingTime);
        }
        Ok(Activity {
            id: Uuid::new_v4(),
            activity_type: self.activity_type,
            title: self.title.clone(),
            time: self.time.clone(),
            duration_hours: self.duration_hours.max(0.5),
            cost: self.cost.max(0.0),
            location: self.location.clone(),
            description: self.description.clone(),
        })
    }
}

fn default_author() -> Author {
    Author {
        id: "current-user".to_string(),
        name: "Current User".to_string(),
        avatar:
            "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=32&h=32&fit=crop&crop=face"
                .to_string(),
    }
}

/// Two-step creator wizard.
///
/// Forward transition is overview → planning; `back` returns without
/// discarding anything. Saving forwards to the store's create operation, or
/// update when the wizard was opened on an existing record.
#[derive(Clone, Debug)]
pub struct CreatorWizard {
    step: Step,
    overview: OverviewForm,
    days: Vec<Day>,
    activity_form: ActivityForm,
    author: Author,
    editing: Option<ItineraryId>,
}

impl Default for CreatorWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl CreatorWizard {
    /// A fresh wizard on the overview step with default fields.
    pub fn new() -> Self {
        Self {
            step: Step::Overview,
            overview: OverviewForm::default(),
            days: Vec::new(),
            activity_form: ActivityForm::default(),
            author: default_author(),
            editing: None,
        }
    }

    /// A wizard pre-filled from an existing record, skipping straight to
    /// the planning step.
    pub fn edit(itinerary: &Itinerary) -> Self {
        Self {
            step: Step::Planning,
            overview: OverviewForm {
                title: itinerary.title.clone(),
                destination: itinerary.destination.clone(),
                duration: itinerary.duration,
                travelers: itinerary.travelers,
                travel_type: itinerary.travel_type,
                hotel_category: itinerary.hotel_category,
                cover_image: itinerary.cover_image.clone(),
            },
            days: itinerary.days.clone(),
            activity_form: ActivityForm::default(),
            author: itinerary.author.clone(),
            editing: Some(itinerary.id),
        }
    }

    /// Save drafts under this author instead of the placeholder identity.
    pub fn with_author(mut self, author: Author) -> Self {
        self.author = author;
        self
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn overview(&self) -> &OverviewForm {
        &self.overview
    }

    pub fn days(&self) -> &[Day] {
        &self.days
    }

    pub fn activity_form(&self) -> &ActivityForm {
        &self.activity_form
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    // --- overview step ---

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.overview.title = title.into();
    }

    pub fn set_destination(&mut self, destination: impl Into<String>) {
        self.overview.destination = destination.into();
    }

    /// Duration as typed into the form; non-numeric or sub-1 input falls
    /// back to 1.
    pub fn set_duration_input(&mut self, raw: &str) {
        self.overview.duration = parse_count(raw);
    }

    /// Traveler count as typed into the form, same fallback as duration.
    pub fn set_travelers_input(&mut self, raw: &str) {
        self.overview.travelers = parse_count(raw);
    }

    pub fn set_travel_type(&mut self, travel_type: TravelType) {
        self.overview.travel_type = travel_type;
    }

    pub fn set_hotel_category(&mut self, hotel_category: HotelCategory) {
        self.overview.hotel_category = hotel_category;
    }

    pub fn set_cover_image(&mut self, cover_image: Option<String>) {
        self.overview.cover_image = cover_image;
    }

    /// Move to the planning step, materializing one blank day per unit of
    /// duration. Days that already exist (editing, or a prior visit to
    /// planning) are kept as they are.
    pub fn submit_overview(&mut self) {
        if self.days.is_empty() {
            self.days = (0..self.overview.duration).map(|_| Day::blank()).collect();
            log::debug!("materialized {} blank days", self.days.len());
        }
        self.step = Step::Planning;
    }

    /// Back to the overview step. The day list is retained.
    pub fn back(&mut self) {
        self.step = Step::Overview;
    }

    // --- planning step ---

    pub fn set_day_date(&mut self, day_id: DayId, date: impl Into<String>) -> CreatorResult<()> {
        self.day_mut(day_id)?.date = date.into();
        Ok(())
    }

    pub fn set_day_destination(
        &mut self,
        day_id: DayId,
        destination: impl Into<String>,
    ) -> CreatorResult<()> {
        self.day_mut(day_id)?.destination = destination.into();
        Ok(())
    }

    pub fn set_day_image(&mut self, day_id: DayId, image: Option<String>) -> CreatorResult<()> {
        self.day_mut(day_id)?.image = image;
        Ok(())
    }

    // --- activity sub-form ---

    pub fn set_activity_type(&mut self, activity_type: ActivityType) {
        self.activity_form.activity_type = activity_type;
    }

    pub fn set_activity_title(&mut self, title: impl Into<String>) {
        self.activity_form.title = title.into();
    }

    pub fn set_activity_time(&mut self, time: impl Into<String>) {
        self.activity_form.time = time.into();
    }

    pub fn set_activity_duration(&mut self, hours: f64) {
        self.activity_form.duration_hours = hours;
    }

    pub fn set_activity_cost(&mut self, cost: f64) {
        self.activity_form.cost = cost;
    }

    pub fn set_activity_location(&mut self, location: impl Into<String>) {
        self.activity_form.location = location.into();
    }

    pub fn set_activity_description(&mut self, description: impl Into<String>) {
        self.activity_form.description = description.into();
    }

    /// Whether the sub-form's submit action is enabled.
    pub fn can_add_activity(&self) -> bool {
        !self.activity_form.title.trim().is_empty() && !self.activity_form.time.trim().is_empty()
    }

    /// Submit the sub-form: appends the built activity to the given day and
    /// resets the sub-form to defaults.
    pub fn add_activity(&mut self, day_id: DayId) -> CreatorResult<ActivityId> {
        if self.step != Step::Planning {
            return Err(CreatorError::NotPlanning);
        }
        let activity = self.activity_form.build()?;
        let id = activity.id;
        self.day_mut(day_id)?.activities.push(activity);
        self.activity_form = ActivityForm::default();
        Ok(id)
    }

    /// Remove an activity from a day of the draft.
    pub fn remove_activity(&mut self, day_id: DayId, activity_id: ActivityId) -> CreatorResult<()> {
        let day = self.day_mut(day_id)?;
        let before = day.activities.len();
        day.activities.retain(|activity| activity.id != activity_id);
        if day.activities.len() == before {
            return Err(CreatorError::ActivityNotFound(activity_id));
        }
        Ok(())
    }

    // --- assembly ---

    /// The candidate itinerary as the preview modal sees it. Ephemeral id
    /// and timestamp; the store mints real ones on save.
    pub fn preview(&self) -> Itinerary {
        Itinerary {
            id: self.editing.unwrap_or_else(Uuid::new_v4),
            title: self.overview.title.clone(),
            destination: self.overview.destination.clone(),
            duration: self.overview.duration,
            travelers: self.overview.travelers,
            travel_type: self.overview.travel_type,
            hotel_category: self.overview.hotel_category,
            days: self.days.clone(),
            author: self.author.clone(),
            created_at: Utc::now(),
            is_public: true,
            cover_image: self.overview.cover_image.clone(),
        }
    }

    /// Forward the accumulated draft to the store: create for a new trip,
    /// update when editing an existing one.
    pub fn save(&self, store: &ItineraryStore) -> CreatorResult<Itinerary> {
        match self.editing {
            Some(id) => {
                let updates = ItineraryUpdate {
                    title: Some(self.overview.title.clone()),
                    destination: Some(self.overview.destination.clone()),
                    duration: Some(self.overview.duration),
                    travelers: Some(self.overview.travelers),
                    travel_type: Some(self.overview.travel_type),
                    hotel_category: Some(self.overview.hotel_category),
                    days: Some(self.days.clone()),
                    is_public: Some(true),
                    cover_image: Some(self.overview.cover_image.clone()),
                };
                Ok(store.update(id, updates)?)
            }
            None => Ok(store.create(ItineraryDraft {
                title: self.overview.title.clone(),
                destination: self.overview.destination.clone(),
                duration: self.overview.duration,
                travelers: self.overview.travelers,
                travel_type: self.overview.travel_type,
                hotel_category: self.overview.hotel_category,
                days: self.days.clone(),
                author: self.author.clone(),
                is_public: true,
                cover_image: self.overview.cover_image.clone(),
            })),
        }
    }

    fn day_mut(&mut self, day_id: DayId) -> CreatorResult<&mut Day> {
        self.days
            .iter_mut()
            .find(|day| day.id == day_id)
            .ok_or(CreatorError::DayNotFound(day_id))
    }
}

fn parse_count(raw: &str) -> u32 {
    match raw.trim().parse::<u32>() {
        Ok(n) if n >= 1 => n,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_wizard_defaults() {
        let wizard = CreatorWizard::new();
        assert_eq!(wizard.step(), Step::Overview);
        assert_eq!(wizard.overview().duration, 1);
        assert_eq!(wizard.overview().travelers, 1);
        assert_eq!(wizard.overview().travel_type, TravelType::Solo);
        assert_eq!(wizard.overview().hotel_category, HotelCategory::Budget);
        assert!(wizard.days().is_empty());
    }

    #[test]
    fn test_submit_overview_materializes_days() {
        let mut wizard = CreatorWizard::new();
        wizard.set_duration_input("3");
        wizard.submit_overview();

        assert_eq!(wizard.step(), Step::Planning);
        assert_eq!(wizard.days().len(), 3);
        assert!(wizard.days().iter().all(|day| day.activities.is_empty()));
    }

    #[test]
    fn test_non_numeric_duration_falls_back_to_one() {
        let mut wizard = CreatorWizard::new();
        wizard.set_duration_input("a week");
        assert_eq!(wizard.overview().duration, 1);
        wizard.set_duration_input("0");
        assert_eq!(wizard.overview().duration, 1);
        wizard.set_duration_input("5");
        assert_eq!(wizard.overview().duration, 5);
    }

    #[test]
    fn test_back_and_resubmit_keeps_days() {
        let mut wizard = CreatorWizard::new();
        wizard.set_duration_input("2");
        wizard.submit_overview();
        let ids: Vec<_> = wizard.days().iter().map(|d| d.id).collect();

        wizard.back();
        assert_eq!(wizard.step(), Step::Overview);
        wizard.set_duration_input("4");
        wizard.submit_overview();

        // Days created on the first pass survive, duration edits included
        let after: Vec<_> = wizard.days().iter().map(|d| d.id).collect();
        assert_eq!(ids, after);
    }

    #[test]
    fn test_activity_gate_requires_title_and_time() {
        let mut wizard = CreatorWizard::new();
        wizard.submit_overview();
        let day_id = wizard.days()[0].id;

        assert!(!wizard.can_add_activity());
        assert_eq!(wizard.add_activity(day_id), Err(CreatorError::MissingTitle));

        wizard.set_activity_title("Museum");
        assert!(!wizard.can_add_activity());
        assert_eq!(wizard.add_activity(day_id), Err(CreatorError::MissingTime));

        wizard.set_activity_time("10:00");
        assert!(wizard.can_add_activity());
        assert!(wizard.add_activity(day_id).is_ok());
    }

    #[test]
    fn test_add_activity_appends_and_resets_form() {
        let mut wizard = CreatorWizard::new();
        wizard.submit_overview();
        let day_id = wizard.days()[0].id;

        wizard.set_activity_type(ActivityType::Dining);
        wizard.set_activity_title("Museum");
        wizard.set_activity_time("10:00");
        wizard.set_activity_cost(25.0);
        wizard.add_activity(day_id).unwrap();

        assert_eq!(wizard.days()[0].activities.len(), 1);
        assert_eq!(wizard.days()[0].activities[0].title, "Museum");
        assert_eq!(*wizard.activity_form(), ActivityForm::default());
    }

    #[test]
    fn test_add_activity_clamps_duration_floor() {
        let mut wizard = CreatorWizard::new();
        wizard.submit_overview();
        let day_id = wizard.days()[0].id;

        wizard.set_activity_title("Quick stop");
        wizard.set_activity_time("8:00");
        wizard.set_activity_duration(0.25);
        wizard.add_activity(day_id).unwrap();
        assert_eq!(wizard.days()[0].activities[0].duration_hours, 0.5);
    }

    #[test]
    fn test_remove_activity() {
        let mut wizard = CreatorWizard::new();
        wizard.submit_overview();
        let day_id = wizard.days()[0].id;
        wizard.set_activity_title("Museum");
        wizard.set_activity_time("10:00");
        let activity_id = wizard.add_activity(day_id).unwrap();

        wizard.remove_activity(day_id, activity_id).unwrap();
        assert!(wizard.days()[0].activities.is_empty());
        assert_eq!(
            wizard.remove_activity(day_id, activity_id),
            Err(CreatorError::ActivityNotFound(activity_id))
        );
    }

    #[test]
    fn test_add_activity_requires_planning_step() {
        let mut wizard = CreatorWizard::new();
        wizard.set_activity_title("Museum");
        wizard.set_activity_time("10:00");
        let missing = Uuid::new_v4();
        assert_eq!(wizard.add_activity(missing), Err(CreatorError::NotPlanning));
    }

    #[test]
    fn test_save_creates_new_record() {
        let store = ItineraryStore::empty();
        let mut wizard = CreatorWizard::new();
        wizard.set_title("Lisbon Weekend");
        wizard.set_destination("Lisbon, Portugal");
        wizard.set_duration_input("2");
        wizard.submit_overview();

        let saved = wizard.save(&store).unwrap();
        assert_eq!(saved.title, "Lisbon Weekend");
        assert_eq!(saved.days.len(), 2);
        assert_eq!(saved.author.name, "Current User");
        assert_eq!(store.itineraries().len(), 1);
    }

    #[test]
    fn test_save_updates_when_editing() {
        let store = ItineraryStore::new();
        let existing = &store.itineraries()[0];

        let mut wizard = CreatorWizard::edit(existing);
        assert_eq!(wizard.step(), Step::Planning);
        assert!(wizard.is_editing());

        wizard.back();
        wizard.set_title("Long Weekend in Paris");
        wizard.submit_overview();

        let saved = wizard.save(&store).unwrap();
        assert_eq!(saved.id, existing.id);
        assert_eq!(saved.title, "Long Weekend in Paris");
        assert_eq!(store.itineraries().len(), 2);
    }

    #[test]
    fn test_edit_does_not_rematerialize_days() {
        let store = ItineraryStore::new();
        let existing = &store.itineraries()[0];

        let mut wizard = CreatorWizard::edit(existing);
        wizard.back();
        wizard.set_duration_input("9");
        wizard.submit_overview();
        assert_eq!(wizard.days().len(), existing.days.len());
    }
}
