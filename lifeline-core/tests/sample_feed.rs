//! End-to-end checks of the feed projection against the built-in sample
//! timeline.

use lifeline_core::{EventStore, FilterState, TimelineFile, project};

fn sample_store() -> EventStore {
    EventStore::from_timeline(TimelineFile::sample())
}

fn titles(store: &EventStore, filter: &FilterState) -> Vec<String> {
    project(store.events(), filter)
        .into_iter()
        .map(|e| e.title)
        .collect()
}

#[test]
fn unfiltered_feed_is_the_whole_sample_in_date_order() {
    let store = sample_store();
    assert_eq!(
        titles(&store, &FilterState::new()),
        vec![
            "First Day at New Job",
            "Family Vacation",
            "Completed Online Course",
            "Doctor Appointment",
            "Birthday Celebration",
            "Project Deadline",
        ]
    );
}

#[test]
fn query_job_matches_only_the_job_event() {
    let store = sample_store();
    let mut filter = FilterState::new();
    filter.set_query("job");

    assert_eq!(titles(&store, &filter), vec!["First Day at New Job"]);
}

#[test]
fn work_and_travel_categories_in_date_order() {
    let store = sample_store();
    let mut filter = FilterState::new();
    filter.toggle_category("work");
    filter.toggle_category("travel");

    assert_eq!(
        titles(&store, &filter),
        vec!["First Day at New Job", "Family Vacation", "Project Deadline"]
    );
}

#[test]
fn mutations_are_visible_on_the_next_projection() {
    let mut store = sample_store();
    let mut filter = FilterState::new();
    filter.toggle_category("health");

    assert_eq!(titles(&store, &filter), vec!["Doctor Appointment"]);

    let id = project(store.events(), &filter)[0].id.clone();
    store.remove_event(&id).unwrap();

    // Unconditional recompute after the mutation
    assert!(titles(&store, &filter).is_empty());
}
