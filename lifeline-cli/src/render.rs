//! Terminal rendering of the projected feed.
//!
//! Pure presentation: nothing in here carries invariants, it only shows
//! what the core projected.

use chrono::NaiveDate;
use lifeline_core::{Event, EventStore, FilterState, Privacy};
use owo_colors::OwoColorize;

/// Print the projected feed, grouped under date headers.
pub fn print_feed(store: &EventStore, feed: &[Event]) {
    if feed.is_empty() {
        println!("{}", "No events found".dimmed());
        return;
    }

    let mut current_date: Option<NaiveDate> = None;

    for event in feed {
        if current_date != Some(event.date) {
            if current_date.is_some() {
                println!();
            }
            println!("{}", format_date_label(event.date).bold());
            current_date = Some(event.date);
        }

        let category = store.category(&event.category_id);
        let tag = format!("[{}]", colorize(&category.name, &category.color));
        let short_id = short_id(&event.id);

        let media = if event.media.is_empty() {
            String::new()
        } else {
            format!(" ({} media)", event.media.len())
        };

        println!(
            "  {} {} {}{} {}",
            short_id.dimmed(),
            event.title,
            tag,
            media.dimmed(),
            privacy_label(event.privacy),
        );
    }
}

/// Print the filters currently applied, if any.
pub fn print_active_filters(filter: &FilterState) {
    if filter.is_empty() {
        return;
    }

    let mut parts = Vec::new();
    if !filter.query.trim().is_empty() {
        parts.push(format!("text: \"{}\"", filter.query.trim()));
    }
    if !filter.selected_categories.is_empty() {
        let mut ids: Vec<&str> = filter
            .selected_categories
            .iter()
            .map(|s| s.as_str())
            .collect();
        ids.sort_unstable();
        parts.push(format!("categories: {}", ids.join(", ")));
    }

    println!("{}", format!("Filters — {}", parts.join(" | ")).dimmed());
}

/// Format a date as a feed header (e.g. "Wed Jan 15, 2025").
pub fn format_date_label(date: NaiveDate) -> String {
    date.format("%a %b %-d, %Y").to_string()
}

/// The leading id characters shown in lists; commands accept any unique
/// prefix, so this is enough to address an event.
pub fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}

pub fn privacy_label(privacy: Privacy) -> String {
    match privacy {
        Privacy::Private => privacy.as_str().red().to_string(),
        Privacy::Friends => privacy.as_str().yellow().to_string(),
        Privacy::Public => privacy.as_str().green().to_string(),
    }
}

/// Map an opaque category color token to a terminal color.
/// Unknown tokens render plain, same as the unknown-category fallback.
pub fn colorize(text: &str, token: &str) -> String {
    match token {
        "blue" => text.blue().to_string(),
        "green" => text.green().to_string(),
        "yellow" => text.yellow().to_string(),
        "purple" => text.purple().to_string(),
        "red" => text.red().to_string(),
        _ => text.to_string(),
    }
}
