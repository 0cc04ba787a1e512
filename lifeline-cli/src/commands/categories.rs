use anyhow::Result;
use lifeline_core::EventStore;
use owo_colors::OwoColorize;

use crate::render;

pub fn run(store: &EventStore) -> Result<()> {
    for category in store.categories() {
        let count = store
            .events()
            .iter()
            .filter(|e| e.category_id == category.id)
            .count();

        println!(
            "  {:<12} {} {}",
            category.id,
            render::colorize(&category.name, &category.color),
            format!("({} events)", count).dimmed(),
        );
    }

    Ok(())
}
