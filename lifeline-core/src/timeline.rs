//! Timeline documents: the initial categories and events for a session.
//!
//! A timeline is a TOML file with `[[categories]]` and `[[events]]` tables.
//! It is read once at startup to seed the `EventStore`; nothing is ever
//! written back (durability is an explicit non-goal).

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::category::{Category, default_taxonomy};
use crate::error::{LifelineError, LifelineResult};
use crate::event::{Event, Privacy};

/// The deserialized contents of a timeline file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineFile {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub events: Vec<Event>,
}

impl TimelineFile {
    /// Load and validate a timeline document from disk.
    ///
    /// Dates must be quoted YYYY-MM-DD strings. Dangling category ids are
    /// allowed (they render with the unknown fallback); empty titles are
    /// not.
    pub fn load(path: &Path) -> LifelineResult<TimelineFile> {
        let content = std::fs::read_to_string(path)?;
        TimelineFile::parse(&content)
    }

    /// Parse a timeline document from TOML text.
    pub fn parse(content: &str) -> LifelineResult<TimelineFile> {
        let timeline: TimelineFile =
            toml::from_str(content).map_err(|e| LifelineError::TimelineParse(e.to_string()))?;

        for event in &timeline.events {
            if event.title.trim().is_empty() {
                return Err(LifelineError::TimelineParse(format!(
                    "Event '{}' has an empty title",
                    event.id
                )));
            }
        }

        Ok(timeline)
    }

    /// The built-in sample timeline: five categories, six events.
    pub fn sample() -> TimelineFile {
        TimelineFile {
            categories: default_taxonomy(),
            events: sample_events(),
        }
    }
}

fn sample_event(
    id: &str,
    title: &str,
    description: &str,
    date: (i32, u32, u32),
    category: &str,
    media: &[&str],
    privacy: Privacy,
) -> Event {
    let (year, month, day) = date;
    Event {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        date: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
        category_id: category.to_string(),
        media: media.iter().map(|m| m.to_string()).collect(),
        privacy,
    }
}

fn sample_events() -> Vec<Event> {
    vec![
        sample_event(
            "1",
            "First Day at New Job",
            "Started my new position as a software developer",
            (2025, 1, 15),
            "work",
            &["/api/placeholder/200/150"],
            Privacy::Public,
        ),
        sample_event(
            "2",
            "Family Vacation",
            "Two weeks in Italy exploring Rome and Florence",
            (2025, 3, 10),
            "travel",
            &["/api/placeholder/200/150", "/api/placeholder/200/150"],
            Privacy::Friends,
        ),
        sample_event(
            "3",
            "Completed Online Course",
            "Finished the advanced React development certification",
            (2025, 4, 22),
            "education",
            &[],
            Privacy::Public,
        ),
        sample_event(
            "4",
            "Doctor Appointment",
            "Annual physical checkup",
            (2025, 5, 5),
            "health",
            &[],
            Privacy::Private,
        ),
        sample_event(
            "5",
            "Birthday Celebration",
            "My 30th birthday party with friends and family",
            (2025, 5, 17),
            "personal",
            &["/api/placeholder/200/150"],
            Privacy::Friends,
        ),
        sample_event(
            "6",
            "Project Deadline",
            "Completed the major client project ahead of schedule",
            (2025, 6, 30),
            "work",
            &[],
            Privacy::Public,
        ),
    ]
}
