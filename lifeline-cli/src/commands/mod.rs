pub mod browse;
pub mod categories;
pub mod list;
pub mod show;

use anyhow::Result;
use lifeline_core::{Event, EventStore};

/// Resolve an event by full id or unique id prefix.
pub(crate) fn find_event<'a>(store: &'a EventStore, id: &str) -> Result<&'a Event> {
    let matches: Vec<&Event> = store
        .events()
        .iter()
        .filter(|e| e.id.starts_with(id))
        .collect();

    match matches.as_slice() {
        [event] => Ok(event),
        [] => anyhow::bail!("No event with id '{}'", id),
        _ => anyhow::bail!("Id '{}' is ambiguous ({} matches)", id, matches.len()),
    }
}
