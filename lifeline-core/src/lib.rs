//! Core types and logic for the lifeline event feed.
//!
//! This crate provides everything a presentation layer needs to show a
//! filterable timeline of life events:
//! - `Event`, `Category` and related types for the data model
//! - `EventStore` for the in-memory session collection
//! - `FilterState` and `project` for computing the visible, ordered feed
//! - `TimelineFile` for loading the initial events from a TOML document

pub mod category;
pub mod config;
pub mod error;
pub mod event;
pub mod feed;
pub mod store;
pub mod timeline;

pub use category::{Category, default_taxonomy};
pub use error::{LifelineError, LifelineResult};
pub use event::{Event, EventPatch, NewEvent, Privacy, parse_date};
pub use feed::{FilterState, project};
pub use store::EventStore;
pub use timeline::TimelineFile;
