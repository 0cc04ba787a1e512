//! Feed projection: which events are visible, and in what order.

use std::collections::HashSet;

use crate::event::Event;

/// The pair of UI-facing filters controlling which events are visible.
///
/// Both pieces change by direct assignment or toggle; no transition can
/// fail and there is no pending state. The surrounding presentation layer
/// owns a `FilterState` and re-projects after every change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    /// Free-text query. Empty or whitespace-only means "no text filter".
    pub query: String,
    /// Selected category ids. Empty means "no category filter".
    pub selected_categories: HashSet<String>,
}

impl FilterState {
    pub fn new() -> FilterState {
        FilterState::default()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Toggle a category id: selecting an id already present removes it,
    /// an absent one is added. Pure toggle, no exclusivity.
    pub fn toggle_category(&mut self, id: &str) {
        if !self.selected_categories.remove(id) {
            self.selected_categories.insert(id.to_string());
        }
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.selected_categories.clear();
    }

    /// True when neither filter is active, i.e. projection passes all events.
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty() && self.selected_categories.is_empty()
    }
}

/// Compute the visible, ordered event list from store contents and filter
/// state.
///
/// Pure function of its inputs: identical inputs always produce identical
/// output, and any input (including empty collections or an all-excluding
/// filter) produces a valid, possibly empty result. Two independent filter
/// stages followed by one stable sort:
///
/// 1. Text: case-insensitive substring match on `title` or `description`.
/// 2. Category: membership of `category_id` in the selected set.
/// 3. Ordering: ascending by `date`; events sharing a date keep their
///    relative input order.
///
/// A dangling `category_id` does not exclude an event from either stage.
pub fn project(events: &[Event], filter: &FilterState) -> Vec<Event> {
    let query = filter.query.trim().to_lowercase();

    let mut visible: Vec<Event> = events
        .iter()
        .filter(|e| {
            query.is_empty()
                || e.title.to_lowercase().contains(&query)
                || e.description.to_lowercase().contains(&query)
        })
        .filter(|e| {
            filter.selected_categories.is_empty()
                || filter.selected_categories.contains(&e.category_id)
        })
        .cloned()
        .collect();

    // sort_by_key is stable, which is what preserves insertion order
    // among events sharing a date.
    visible.sort_by_key(|e| e.date);
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Privacy;
    use chrono::NaiveDate;

    fn make_event(id: &str, title: &str, description: &str, date: &str, category: &str) -> Event {
        Event {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            category_id: category.to_string(),
            media: vec![],
            privacy: Privacy::Public,
        }
    }

    fn make_events() -> Vec<Event> {
        vec![
            make_event("1", "First Day at New Job", "Started as a developer", "2025-01-15", "work"),
            make_event("2", "Family Vacation", "Two weeks in Italy", "2025-03-10", "travel"),
            make_event("3", "Doctor Appointment", "Annual physical checkup", "2025-05-05", "health"),
            make_event("4", "Birthday Celebration", "30th birthday party", "2025-05-05", "personal"),
        ]
    }

    fn ids(events: &[Event]) -> Vec<&str> {
        events.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_identity_filter_returns_all_sorted_by_date() {
        // Input deliberately out of date order
        let events = vec![
            make_event("b", "Later", "", "2025-06-01", "work"),
            make_event("a", "Earlier", "", "2025-01-01", "work"),
        ];

        let feed = project(&events, &FilterState::new());
        assert_eq!(ids(&feed), vec!["a", "b"]);
    }

    #[test]
    fn test_equal_dates_keep_insertion_order() {
        let feed = project(&make_events(), &FilterState::new());
        // "3" and "4" share 2025-05-05 and must not swap
        assert_eq!(ids(&feed), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_text_filter_is_case_insensitive() {
        let mut filter = FilterState::new();
        filter.set_query("JOB");

        let feed = project(&make_events(), &filter);
        assert_eq!(ids(&feed), vec!["1"]);
    }

    #[test]
    fn test_text_filter_matches_description() {
        let mut filter = FilterState::new();
        filter.set_query("italy");

        let feed = project(&make_events(), &filter);
        assert_eq!(ids(&feed), vec!["2"]);
    }

    #[test]
    fn test_whitespace_query_is_no_filter() {
        let mut filter = FilterState::new();
        filter.set_query("   ");

        let feed = project(&make_events(), &filter);
        assert_eq!(feed.len(), 4);
    }

    #[test]
    fn test_category_filter() {
        let mut filter = FilterState::new();
        filter.toggle_category("work");
        filter.toggle_category("travel");

        let feed = project(&make_events(), &filter);
        assert_eq!(ids(&feed), vec!["1", "2"]);
    }

    #[test]
    fn test_text_and_category_filters_compose() {
        let mut filter = FilterState::new();
        filter.set_query("a");
        filter.toggle_category("health");

        let feed = project(&make_events(), &filter);
        assert_eq!(ids(&feed), vec!["3"]);
    }

    #[test]
    fn test_all_excluded_yields_empty_not_error() {
        let mut filter = FilterState::new();
        filter.set_query("no such text anywhere");

        assert!(project(&make_events(), &filter).is_empty());
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(project(&[], &FilterState::new()).is_empty());
    }

    #[test]
    fn test_output_is_subset_without_duplication() {
        let events = make_events();
        let feed = project(&events, &FilterState::new());

        assert_eq!(feed.len(), events.len());
        for event in &feed {
            assert_eq!(events.iter().filter(|e| e.id == event.id).count(), 1);
            assert_eq!(feed.iter().filter(|e| e.id == event.id).count(), 1);
        }
    }

    #[test]
    fn test_projection_is_idempotent() {
        let mut filter = FilterState::new();
        filter.set_query("a");
        filter.toggle_category("work");
        filter.toggle_category("personal");

        let once = project(&make_events(), &filter);
        let twice = project(&once, &filter);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_dangling_category_still_flows_through() {
        let events = vec![make_event("x", "Orphaned", "", "2025-02-02", "deleted-category")];

        // No category filter: the event passes
        assert_eq!(project(&events, &FilterState::new()).len(), 1);

        // Text filter still sees it
        let mut filter = FilterState::new();
        filter.set_query("orphan");
        assert_eq!(project(&events, &filter).len(), 1);
    }

    #[test]
    fn test_toggle_category_round_trip() {
        let mut filter = FilterState::new();

        filter.toggle_category("work");
        assert!(filter.selected_categories.contains("work"));

        filter.toggle_category("work");
        assert!(filter.selected_categories.is_empty());
        assert!(filter.is_empty());
    }

    #[test]
    fn test_clear_resets_both_filters() {
        let mut filter = FilterState::new();
        filter.set_query("job");
        filter.toggle_category("work");

        filter.clear();
        assert!(filter.is_empty());
    }
}
