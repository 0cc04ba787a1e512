//! Interactive session over an in-memory store.
//!
//! Holds the `EventStore` and `FilterState` for the lifetime of the
//! process and re-projects the feed after every change. Nothing is saved:
//! the session's mutations vanish on quit.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use lifeline_core::{EventPatch, EventStore, FilterState, NewEvent, Privacy, parse_date, project};
use owo_colors::OwoColorize;

use crate::commands::find_event;
use crate::render;

pub fn run(mut store: EventStore, query: Option<String>, categories: Vec<String>) -> Result<()> {
    let mut filter = FilterState::new();
    if let Some(query) = query {
        filter.set_query(query);
    }
    for id in categories {
        filter.selected_categories.insert(id);
    }

    println!("{}", "Type 'help' for commands, 'quit' to leave.".dimmed());
    render_feed(&store, &filter);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF ends the session
        }

        match handle(&mut store, &mut filter, line.trim()) {
            Action::Quit => break,
            Action::Redraw => render_feed(&store, &filter),
            Action::Idle => {}
        }
    }

    Ok(())
}

enum Action {
    Quit,
    Redraw,
    Idle,
}

fn handle(store: &mut EventStore, filter: &mut FilterState, line: &str) -> Action {
    match line {
        "" => Action::Idle,
        "q" | "quit" | "exit" => Action::Quit,
        "help" => {
            print_help();
            Action::Idle
        }
        "clear" => {
            filter.clear();
            Action::Redraw
        }
        _ if line.starts_with('/') => {
            filter.set_query(line[1..].trim());
            Action::Redraw
        }
        _ if line.starts_with('+') => {
            filter.toggle_category(line[1..].trim());
            Action::Redraw
        }
        _ => match line.split_once(' ') {
            Some(("add", rest)) => add_event(store, rest),
            Some(("retitle", rest)) => retitle_event(store, rest),
            Some(("rm", id)) => remove_event(store, id.trim()),
            _ => {
                println!(
                    "{}",
                    format!("Unknown command '{}'. Type 'help'.", line).red()
                );
                Action::Idle
            }
        },
    }
}

/// `add DATE TITLE...` — new event in the personal category, private.
fn add_event(store: &mut EventStore, args: &str) -> Action {
    let Some((date, title)) = args.split_once(' ') else {
        println!("{}", "Usage: add YYYY-MM-DD TITLE".red());
        return Action::Idle;
    };

    let date = match parse_date(date) {
        Ok(date) => date,
        Err(e) => {
            println!("{}", e.to_string().red());
            return Action::Idle;
        }
    };

    let new = NewEvent {
        title: title.trim().to_string(),
        description: String::new(),
        date,
        category_id: "personal".to_string(),
        media: vec![],
        privacy: Privacy::Private,
    };

    match store.add_event(new) {
        Ok(event) => {
            println!(
                "{}",
                format!("Added {}", render::short_id(&event.id)).green()
            );
            Action::Redraw
        }
        Err(e) => {
            println!("{}", e.to_string().red());
            Action::Idle
        }
    }
}

/// `retitle ID TITLE...` — rename an existing event in place.
fn retitle_event(store: &mut EventStore, args: &str) -> Action {
    let Some((id, title)) = args.split_once(' ') else {
        println!("{}", "Usage: retitle ID TITLE".red());
        return Action::Idle;
    };

    let full_id = match find_event(store, id.trim()) {
        Ok(event) => event.id.clone(),
        Err(e) => {
            println!("{}", e.to_string().red());
            return Action::Idle;
        }
    };

    let patch = EventPatch {
        title: Some(title.trim().to_string()),
        ..EventPatch::default()
    };

    match store.update_event(&full_id, patch) {
        Ok(event) => {
            println!("{}", format!("Renamed to '{}'", event.title).green());
            Action::Redraw
        }
        Err(e) => {
            println!("{}", e.to_string().red());
            Action::Idle
        }
    }
}

fn remove_event(store: &mut EventStore, id: &str) -> Action {
    let full_id = match find_event(store, id) {
        Ok(event) => event.id.clone(),
        Err(e) => {
            println!("{}", e.to_string().red());
            return Action::Idle;
        }
    };

    match store.remove_event(&full_id) {
        Ok(event) => {
            println!("{}", format!("Removed '{}'", event.title).green());
            Action::Redraw
        }
        Err(e) => {
            println!("{}", e.to_string().red());
            Action::Idle
        }
    }
}

fn render_feed(store: &EventStore, filter: &FilterState) {
    // Full recompute on every change; datasets are small by design.
    let feed = project(store.events(), filter);
    println!();
    render::print_active_filters(filter);
    render::print_feed(store, &feed);
    println!();
}

fn print_help() {
    println!(
        "\
  /TEXT               set the text filter ('/' alone clears it)
  +ID                 toggle a category filter (e.g. +work)
  clear               drop all filters
  add DATE TITLE      add an event (YYYY-MM-DD; category 'personal')
  retitle ID TITLE    rename an event
  rm ID               remove an event (unique id prefix is enough)
  quit                end the session (changes are not saved)"
    );
}
