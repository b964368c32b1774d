//! Shared identity and lifecycle-timestamp shape.
//!
//! # Responsibility
//! - Provide the `id`/`created_at`/`updated_at` fields common to every
//!   persisted record, as an embedded value rather than a base class.
//! - Normalize persisted timestamp forms back to `DateTime<Utc>` on load.
//!
//! # Invariants
//! - `id` is stable and never reused for another record.
//! - `created_at` is set once at construction and never mutated.
//! - `updated_at >= created_at`; `touch()` is the only refresh path.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Stable identifier for every persisted record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EntityId = Uuid;

/// Identity and lifecycle timestamps embedded into each persisted record.
///
/// Records flatten this shape into their serialized form, so the stored
/// layout stays flat: `{id, ..., createdAt, updatedAt}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityMeta {
    /// Stable global ID assigned at construction.
    pub id: EntityId,
    /// Set once at construction, never mutated afterwards.
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created_at: DateTime<Utc>,
    /// Refreshed by `touch()` on every observable mutation.
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl EntityMeta {
    /// Creates metadata with a freshly generated ID.
    ///
    /// Both timestamps are set to the current instant.
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4())
    }

    /// Creates metadata with a caller-provided stable ID.
    ///
    /// Used by import paths where identity already exists externally.
    pub fn with_id(id: EntityId) -> Self {
        let now = Utc::now();
        Self {
            id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Refreshes `updated_at` to the current instant.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for EntityMeta {
    fn default() -> Self {
        Self::new()
    }
}

/// Accepts a persisted timestamp as either RFC 3339 text (the serialized
/// form) or integer Unix epoch milliseconds, normalized to `DateTime<Utc>`.
pub(crate) fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TimestampRepr {
        Text(String),
        EpochMillis(i64),
    }

    match TimestampRepr::deserialize(deserializer)? {
        TimestampRepr::Text(value) => value
            .parse::<DateTime<Utc>>()
            .map_err(|err| serde::de::Error::custom(format!("invalid timestamp `{value}`: {err}"))),
        TimestampRepr::EpochMillis(millis) => Utc
            .timestamp_millis_opt(millis)
            .single()
            .ok_or_else(|| serde::de::Error::custom(format!("timestamp out of range: {millis}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::EntityMeta;

    #[test]
    fn new_meta_has_equal_timestamps() {
        let meta = EntityMeta::new();
        assert_eq!(meta.created_at, meta.updated_at);
    }

    #[test]
    fn touch_advances_updated_at_only() {
        let mut meta = EntityMeta::new();
        let created = meta.created_at;
        std::thread::sleep(std::time::Duration::from_millis(2));
        meta.touch();
        assert_eq!(meta.created_at, created);
        assert!(meta.updated_at > meta.created_at);
    }

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(EntityMeta::new().id, EntityMeta::new().id);
    }
}
