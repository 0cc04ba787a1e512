//! Category taxonomy for timeline events.

use serde::{Deserialize, Serialize};

/// A named, colored grouping tag applied to events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Short stable identifier, unique within the taxonomy.
    pub id: String,
    /// Display label.
    pub name: String,
    /// Opaque styling token. Never interpreted by the core; a presentation
    /// layer may map it to an actual color.
    pub color: String,
}

impl Category {
    pub fn new(id: &str, name: &str, color: &str) -> Category {
        Category {
            id: id.to_string(),
            name: name.to_string(),
            color: color.to_string(),
        }
    }

    /// Fallback descriptor for an id missing from the taxonomy.
    ///
    /// Events with a dangling category reference keep flowing through the
    /// feed and render as "Unknown" rather than being rejected, so the
    /// timeline survives taxonomy edits.
    pub fn unknown(id: &str) -> Category {
        Category {
            id: id.to_string(),
            name: "Unknown".to_string(),
            color: "gray".to_string(),
        }
    }
}

/// The built-in taxonomy used when no timeline file provides one.
pub fn default_taxonomy() -> Vec<Category> {
    vec![
        Category::new("personal", "Personal", "blue"),
        Category::new("work", "Work", "green"),
        Category::new("education", "Education", "yellow"),
        Category::new("travel", "Travel", "purple"),
        Category::new("health", "Health", "red"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_taxonomy_ids_are_unique() {
        let taxonomy = default_taxonomy();
        let mut ids: Vec<&str> = taxonomy.iter().map(|c| c.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), taxonomy.len());
    }

    #[test]
    fn test_unknown_fallback_keeps_id() {
        let category = Category::unknown("deleted-category");
        assert_eq!(category.id, "deleted-category");
        assert_eq!(category.name, "Unknown");
    }
}
