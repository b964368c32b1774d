//! Category domain record.
//!
//! # Responsibility
//! - Define the category record and its mutation helpers.
//!
//! # Invariants
//! - Every mutator refreshes `updated_at` through `EntityMeta::touch`.
//! - Name uniqueness is NOT enforced here or anywhere else; tasks reference
//!   categories by name and may keep referencing a deleted one.

use crate::model::entity::{EntityId, EntityMeta};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display color assigned when the caller does not pick one.
pub const DEFAULT_CATEGORY_COLOR: &str = "#3B82F6";

/// A task category with a display color token.
///
/// Serializes to the flat persisted record
/// `{id, name, color, createdAt, updatedAt}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(flatten)]
    pub meta: EntityMeta,
    pub name: String,
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    DEFAULT_CATEGORY_COLOR.to_string()
}

impl Category {
    /// Creates a category with the default display color.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_color(name, DEFAULT_CATEGORY_COLOR)
    }

    /// Creates a category with an explicit display color.
    pub fn with_color(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            meta: EntityMeta::new(),
            name: name.into(),
            color: color.into(),
        }
    }

    /// Creates a category with a caller-provided stable ID.
    pub fn with_id(
        id: EntityId,
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            meta: EntityMeta::with_id(id),
            name: name.into(),
            color: color.into(),
        }
    }

    pub fn id(&self) -> EntityId {
        self.meta.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.meta.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.meta.updated_at
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.meta.touch();
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
        self.meta.touch();
    }
}

#[cfg(test)]
mod tests {
    use super::{Category, DEFAULT_CATEGORY_COLOR};

    #[test]
    fn new_category_uses_default_color() {
        let category = Category::new("Errands");
        assert_eq!(category.color, DEFAULT_CATEGORY_COLOR);
        assert_eq!(category.name, "Errands");
    }

    #[test]
    fn set_color_refreshes_updated_at() {
        let mut category = Category::new("Errands");
        let before = category.updated_at();
        std::thread::sleep(std::time::Duration::from_millis(2));
        category.set_color("#000000");
        assert!(category.updated_at() > before);
    }
}
