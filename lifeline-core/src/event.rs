//! Timeline event types.
//!
//! These types represent life events in a presentation-agnostic way.
//! The store works exclusively with them, and a presentation layer
//! (terminal, web, whatever) renders the projected feed.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{LifelineError, LifelineResult};

/// A single dated entry in the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier, assigned at creation, immutable thereafter.
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Calendar date only; events carry no time-of-day semantics.
    pub date: NaiveDate,
    /// Reference into the category taxonomy. A dangling reference is
    /// tolerated and renders with the unknown-category fallback.
    #[serde(rename = "category")]
    pub category_id: String,
    /// Ordered opaque media references. Resolving them to displayable
    /// content is the presentation layer's job.
    #[serde(default)]
    pub media: Vec<String>,
    #[serde(default)]
    pub privacy: Privacy,
}

/// Input for creating a new event. The store assigns the id.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub category_id: String,
    pub media: Vec<String>,
    pub privacy: Privacy,
}

/// Partial update for an existing event. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub category_id: Option<String>,
    pub privacy: Option<Privacy>,
}

/// Who an event is visible to.
///
/// A display label only: nothing in this crate gates visibility by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Privacy {
    #[default]
    Private,
    Friends,
    Public,
}

impl Privacy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Privacy::Private => "private",
            Privacy::Friends => "friends",
            Privacy::Public => "public",
        }
    }
}

impl fmt::Display for Privacy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Privacy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "private" => Ok(Privacy::Private),
            "friends" => Ok(Privacy::Friends),
            "public" => Ok(Privacy::Public),
            other => Err(format!(
                "Invalid privacy '{}'. Expected private, friends or public",
                other
            )),
        }
    }
}

/// Parse a YYYY-MM-DD calendar date.
pub fn parse_date(s: &str) -> LifelineResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        LifelineError::Validation(format!("Invalid date '{}'. Expected YYYY-MM-DD", s))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-01-15").unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
        );
    }

    #[test]
    fn test_parse_date_garbage() {
        assert!(matches!(
            parse_date("next tuesday"),
            Err(LifelineError::Validation(_))
        ));
    }

    #[test]
    fn test_parse_date_impossible() {
        // Well-formed but not a real calendar date
        assert!(matches!(
            parse_date("2025-02-30"),
            Err(LifelineError::Validation(_))
        ));
    }

    #[test]
    fn test_privacy_round_trip() {
        for privacy in [Privacy::Private, Privacy::Friends, Privacy::Public] {
            assert_eq!(privacy.to_string().parse::<Privacy>().unwrap(), privacy);
        }
    }

    #[test]
    fn test_privacy_rejects_unknown() {
        assert!("secret".parse::<Privacy>().is_err());
    }
}
