/// Integration tests for the create-browse-preview flow.
///
/// These walk the wizard through both steps, save into the store, and
/// verify what the explore page and the preview modal would observe.
use trip_gullack::{
    creator::{CreatorWizard, Step},
    itinerary::{
        ActivityType, ActivityUpdate, ItineraryFilter, ItineraryStore, ItineraryUpdate, TravelType,
    },
    preview,
};

fn plan_barcelona(store: &ItineraryStore) -> trip_gullack::Itinerary {
    let mut wizard = CreatorWizard::new();
    wizard.set_title("Tapas Tour of Barcelona");
    wizard.set_destination("Barcelona, Spain");
    wizard.set_duration_input("2");
    wizard.set_travelers_input("4");
    wizard.set_travel_type(TravelType::Group);
    wizard.submit_overview();

    let day_id = wizard.days()[0].id;
    wizard.set_day_date(day_id, "2024-06-01").unwrap();
    wizard.set_day_destination(day_id, "Gothic Quarter").unwrap();

    wizard.set_activity_title("Museum");
    wizard.set_activity_time("10:00");
    wizard.set_activity_cost(25.0);
    wizard.add_activity(day_id).unwrap();

    wizard.set_activity_type(ActivityType::Dining);
    wizard.set_activity_title("Tapas crawl");
    wizard.set_activity_time("19:00");
    wizard.set_activity_cost(120.0);
    wizard.add_activity(day_id).unwrap();

    wizard.save(store).unwrap()
}

#[test]
fn test_wizard_save_lands_in_store() {
    let store = ItineraryStore::new();
    let saved = plan_barcelona(&store);

    assert_eq!(store.itineraries().len(), 3);
    let stored = store.get(saved.id).unwrap();
    assert_eq!(stored.title, "Tapas Tour of Barcelona");
    assert_eq!(stored.travelers, 4);
    assert_eq!(stored.days.len(), 2);
    assert_eq!(stored.days[0].activities.len(), 2);
}

#[test]
fn test_explore_page_finds_the_new_trip() {
    let store = ItineraryStore::new();
    plan_barcelona(&store);

    let by_search = store.search(&ItineraryFilter::new().with_search("barcelona"));
    assert_eq!(by_search.len(), 1);
    assert_eq!(by_search[0].title, "Tapas Tour of Barcelona");

    let by_chip = store.search(&ItineraryFilter::new().with_travel_type(TravelType::Group));
    assert_eq!(by_chip.len(), 1);

    // The seeded couple trip is still reachable through its own chip
    let couples = store.search(&ItineraryFilter::new().with_travel_type(TravelType::Couple));
    assert_eq!(couples.len(), 1);
    assert_eq!(couples[0].title, "Weekend Getaway to Paris");
}

#[test]
fn test_preview_totals_for_saved_trip() {
    let store = ItineraryStore::empty();
    let saved = plan_barcelona(&store);

    assert_eq!(preview::total_cost(&saved), 145.0);
    assert_eq!(preview::day_cost(&saved.days[0]), 145.0);
    assert_eq!(preview::total_activities(&saved), 2);

    let ordered = preview::activities_by_time(&saved.days[0]);
    assert_eq!(ordered[0].title, "Museum");
    assert_eq!(ordered[1].title, "Tapas crawl");

    assert_eq!(preview::format_date(&saved.days[0].date), "Jun 1, 2024");
}

#[test]
fn test_edit_roundtrip_through_wizard() {
    let store = ItineraryStore::empty();
    let saved = plan_barcelona(&store);

    let mut wizard = CreatorWizard::edit(&store.get(saved.id).unwrap());
    assert_eq!(wizard.step(), Step::Planning);

    let day_id = wizard.days()[1].id;
    wizard.set_activity_title("Beach morning");
    wizard.set_activity_time("09:00");
    wizard.add_activity(day_id).unwrap();
    let updated = wizard.save(&store).unwrap();

    assert_eq!(updated.id, saved.id);
    assert_eq!(store.itineraries().len(), 1);
    assert_eq!(preview::total_activities(&updated), 3);
}

#[test]
fn test_store_level_activity_edits() {
    let store = ItineraryStore::empty();
    let saved = plan_barcelona(&store);
    let day_id = saved.days[0].id;
    let museum = saved.days[0].activities[0].id;

    store
        .update_activity(
            day_id,
            museum,
            ActivityUpdate {
                cost: Some(30.0),
                ..Default::default()
            },
        )
        .unwrap();
    let after = store.get(saved.id).unwrap();
    assert_eq!(preview::total_cost(&after), 150.0);

    store.delete_activity(day_id, museum).unwrap();
    let after = store.get(saved.id).unwrap();
    assert_eq!(preview::total_cost(&after), 120.0);
}

#[test]
fn test_selection_follows_deletes() {
    let store = ItineraryStore::new();
    let saved = plan_barcelona(&store);

    store.set_current(Some(saved.id)).unwrap();
    assert_eq!(store.current().map(|i| i.id), Some(saved.id));

    store.delete(saved.id).unwrap();
    assert!(store.current().is_none());
    assert_eq!(store.itineraries().len(), 2);
}

#[test]
fn test_duration_edit_leaves_days_alone() {
    let store = ItineraryStore::empty();
    let saved = plan_barcelona(&store);

    let updated = store
        .update(
            saved.id,
            ItineraryUpdate {
                duration: Some(10),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(updated.duration, 10);
    assert_eq!(updated.days.len(), 2);
}
