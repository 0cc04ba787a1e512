use anyhow::Result;
use lifeline_core::EventStore;
use owo_colors::OwoColorize;

use crate::commands::find_event;
use crate::render;

pub fn run(store: &EventStore, id: &str) -> Result<()> {
    let event = find_event(store, id)?;
    let category = store.category(&event.category_id);

    println!("{}", event.title.bold());
    println!(
        "  {}  {}  {}",
        render::format_date_label(event.date),
        render::colorize(&category.name, &category.color),
        render::privacy_label(event.privacy),
    );

    if !event.description.is_empty() {
        println!("\n  {}", event.description);
    }

    if !event.media.is_empty() {
        println!("\n  Media:");
        for reference in &event.media {
            println!("    {}", reference);
        }
    }

    println!("\n  id: {}", event.id.dimmed());
    Ok(())
}
