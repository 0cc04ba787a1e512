mod commands;
mod render;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lifeline_core::config::GlobalConfig;
use lifeline_core::{EventStore, TimelineFile};

#[derive(Parser)]
#[command(name = "lifeline")]
#[command(about = "Browse and filter your timeline of life events")]
struct Cli {
    /// Load events from this timeline file instead of the configured one
    #[arg(long, global = true)]
    timeline: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the visible feed
    List {
        /// Only show events whose title or description contains this text
        #[arg(short, long)]
        query: Option<String>,

        /// Only show events in this category (repeatable)
        #[arg(short, long = "category")]
        categories: Vec<String>,

        /// Emit the projected events as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the category taxonomy
    Categories,
    /// Print the full details of one event
    Show {
        /// Event id (a unique prefix is enough)
        id: String,
    },
    /// Filter and edit the feed interactively for this session
    Browse {
        /// Start with this text filter
        #[arg(short, long)]
        query: Option<String>,

        /// Start with this category selected (repeatable)
        #[arg(short, long = "category")]
        categories: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let store = load_store(cli.timeline.as_deref())?;

    match cli.command {
        Commands::List {
            query,
            categories,
            json,
        } => commands::list::run(&store, query, categories, json),
        Commands::Categories => commands::categories::run(&store),
        Commands::Show { id } => commands::show::run(&store, &id),
        Commands::Browse { query, categories } => commands::browse::run(store, query, categories),
    }
}

/// Build the session store from --timeline, the configured timeline, or
/// the built-in sample, in that order.
fn load_store(timeline_arg: Option<&Path>) -> Result<EventStore> {
    let timeline = match timeline_arg {
        Some(path) => load_timeline(path)?,
        None => match GlobalConfig::load()?.timeline {
            Some(path) => load_timeline(&path)?,
            None => TimelineFile::sample(),
        },
    };

    Ok(EventStore::from_timeline(timeline))
}

fn load_timeline(path: &Path) -> Result<TimelineFile> {
    TimelineFile::load(path).with_context(|| format!("Failed to load timeline {}", path.display()))
}
