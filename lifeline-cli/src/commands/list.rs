use anyhow::Result;
use lifeline_core::{EventStore, FilterState, project};

use crate::render;

pub fn run(
    store: &EventStore,
    query: Option<String>,
    categories: Vec<String>,
    json: bool,
) -> Result<()> {
    let mut filter = FilterState::new();
    if let Some(query) = query {
        filter.set_query(query);
    }
    for id in categories {
        filter.selected_categories.insert(id);
    }

    let feed = project(store.events(), &filter);

    if json {
        println!("{}", serde_json::to_string_pretty(&feed)?);
        return Ok(());
    }

    render::print_active_filters(&filter);
    render::print_feed(store, &feed);
    Ok(())
}
