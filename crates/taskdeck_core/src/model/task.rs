//! Task domain record.
//!
//! # Responsibility
//! - Define the task record and its mutation helpers.
//! - Keep the serialized layout identical to the persisted collection
//!   format: flat camelCase fields.
//!
//! # Invariants
//! - Every mutator refreshes `updated_at` through `EntityMeta::touch`.
//! - `category` stores a category *name*, not an ID; referential integrity
//!   is enforced by the service at creation time only.

use crate::model::entity::{EntityId, EntityMeta};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Task urgency level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Parses a persisted or user-supplied priority token.
    ///
    /// Recognizes exactly `low|medium|high`; anything else is `None` so
    /// callers can decide whether to reject or ignore the value.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    /// Returns the canonical token, the inverse of [`Priority::parse`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// A single tracked task.
///
/// Serializes to the flat persisted record
/// `{id, title, description, category, priority, isCompleted, createdAt,
/// updatedAt}`. Missing optional fields default on load, so records written
/// by older exports stay readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(flatten)]
    pub meta: EntityMeta,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Name of the owning category. May outlive the category record itself.
    pub category: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub is_completed: bool,
}

impl Task {
    /// Creates a task with a generated ID and default state.
    ///
    /// Defaults: empty description, medium priority, not completed.
    pub fn new(title: impl Into<String>, category: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title, category)
    }

    /// Creates a task with a caller-provided stable ID.
    pub fn with_id(
        id: EntityId,
        title: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            meta: EntityMeta::with_id(id),
            title: title.into(),
            description: String::new(),
            category: category.into(),
            priority: Priority::default(),
            is_completed: false,
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

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.meta.touch();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
        self.meta.touch();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
        self.meta.touch();
    }

    pub fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
        self.meta.touch();
    }

    /// Flips completion state and refreshes `updated_at`.
    pub fn toggle_completion(&mut self) {
        self.is_completed = !self.is_completed;
        self.meta.touch();
    }
}
