//! In-memory event store for one session.

use uuid::Uuid;

use crate::category::Category;
use crate::error::{LifelineError, LifelineResult};
use crate::event::{Event, EventPatch, NewEvent};
use crate::timeline::TimelineFile;

/// Authoritative collection of events and categories for one session.
///
/// Events are kept in insertion order; consumers must not assume that
/// order is meaningful (the feed projection sorts for display). State is
/// lost when the session ends. Single-writer by construction: a future
/// concurrent variant would have to serialize mutations.
#[derive(Debug, Clone)]
pub struct EventStore {
    categories: Vec<Category>,
    events: Vec<Event>,
}

impl EventStore {
    pub fn new(categories: Vec<Category>, events: Vec<Event>) -> EventStore {
        EventStore { categories, events }
    }

    pub fn from_timeline(timeline: TimelineFile) -> EventStore {
        EventStore::new(timeline.categories, timeline.events)
    }

    /// All events, in insertion order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// The fixed category taxonomy.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a category by id, falling back to the unknown descriptor
    /// when the id is missing from the taxonomy.
    pub fn category(&self, id: &str) -> Category {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .unwrap_or_else(|| Category::unknown(id))
    }

    /// Create a new event with a freshly generated id and append it.
    ///
    /// Fails with `Validation` for an empty title; a rejected mutation
    /// leaves the store unchanged.
    pub fn add_event(&mut self, new: NewEvent) -> LifelineResult<Event> {
        validate_title(&new.title)?;

        let event = Event {
            id: Uuid::new_v4().to_string(),
            title: new.title,
            description: new.description,
            date: new.date,
            category_id: new.category_id,
            media: new.media,
            privacy: new.privacy,
        };
        self.events.push(event.clone());
        Ok(event)
    }

    /// Apply the present fields of `patch` to the event with this id.
    ///
    /// Fails with `EventNotFound` for an unknown id and `Validation` for
    /// an empty replacement title; either way the store is unchanged.
    pub fn update_event(&mut self, id: &str, patch: EventPatch) -> LifelineResult<Event> {
        if let Some(title) = &patch.title {
            validate_title(title)?;
        }

        let event = self
            .events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| LifelineError::EventNotFound(id.to_string()))?;

        if let Some(title) = patch.title {
            event.title = title;
        }
        if let Some(description) = patch.description {
            event.description = description;
        }
        if let Some(date) = patch.date {
            event.date = date;
        }
        if let Some(category_id) = patch.category_id {
            event.category_id = category_id;
        }
        if let Some(privacy) = patch.privacy {
            event.privacy = privacy;
        }

        Ok(event.clone())
    }

    /// Remove the event with this id permanently. No soft delete.
    ///
    /// Fails with `EventNotFound` for an unknown id, leaving the store
    /// unchanged.
    pub fn remove_event(&mut self, id: &str) -> LifelineResult<Event> {
        let index = self
            .events
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| LifelineError::EventNotFound(id.to_string()))?;

        Ok(self.events.remove(index))
    }
}

fn validate_title(title: &str) -> LifelineResult<()> {
    if title.trim().is_empty() {
        return Err(LifelineError::Validation(
            "Event title cannot be empty".to_string(),
        ));
    }
    Ok(())
}
