//! Repository layer: whole-collection persistence over the storage port.
//!
//! # Responsibility
//! - Define the per-record-type persistence contract.
//! - Map collections to and from their serialized JSON blobs.
//!
//! # Invariants
//! - Every write serializes and persists the *entire* collection; there are
//!   no partial updates, indices, or transactions. Acceptable for small
//!   single-user datasets.
//! - Read paths never fail on malformed content: a blob that does not parse
//!   is recovered as an empty collection, with a `warn` diagnostic naming
//!   the storage key. Substrate transport failures DO surface.

use crate::model::entity::EntityId;
use crate::storage::{StorageError, StoragePort};
use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod category_repo;
pub mod task_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository failure for collection persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Storage(StorageError),
    Serialize(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize collection: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<StorageError> for RepoError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Persistence contract, one instance per record type.
///
/// Returned records are snapshots of persisted state; mutations become
/// visible to other callers only after `save`/`save_all`.
pub trait Repository<T> {
    /// Upserts one record by ID, then persists the whole collection.
    fn save(&self, item: &T) -> RepoResult<()>;

    /// Overwrites the entire persisted collection.
    fn save_all(&self, items: &[T]) -> RepoResult<()>;

    /// Reads and deserializes the entire collection.
    ///
    /// Absent, empty, or unparseable storage yields an empty vector.
    fn get_all(&self) -> RepoResult<Vec<T>>;

    /// Linear scan of `get_all` for a matching ID.
    fn get_by_id(&self, id: EntityId) -> RepoResult<Option<T>>;

    /// Filters out the matching record and persists the remainder.
    ///
    /// Deleting an unknown ID rewrites the collection unchanged.
    fn delete(&self, id: EntityId) -> RepoResult<()>;

    /// Removes the persisted collection entirely.
    fn delete_all(&self) -> RepoResult<()>;
}

pub(crate) fn load_collection<T, S>(store: &S, key: &str) -> RepoResult<Vec<T>>
where
    T: DeserializeOwned,
    S: StoragePort,
{
    let Some(raw) = store.get(key)? else {
        return Ok(Vec::new());
    };
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    match serde_json::from_str(&raw) {
        Ok(items) => Ok(items),
        Err(err) => {
            warn!(
                "event=collection_parse_failed module=repo status=recovered key={key} error={err}"
            );
            Ok(Vec::new())
        }
    }
}

pub(crate) fn persist_collection<T, S>(store: &S, key: &str, items: &[T]) -> RepoResult<()>
where
    T: Serialize,
    S: StoragePort,
{
    let raw = serde_json::to_string(items)?;
    store.set(key, &raw)?;
    Ok(())
}
