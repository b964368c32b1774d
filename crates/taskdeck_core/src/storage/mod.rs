//! Storage port abstraction and substrate implementations.
//!
//! # Responsibility
//! - Define the synchronous string-keyed get/set/remove contract the
//!   repositories persist through.
//! - Provide an in-memory substrate for tests and a SQLite-backed substrate
//!   for durable local storage.
//!
//! # Invariants
//! - Values are opaque strings; substrates never inspect them.
//! - Operations are synchronous and complete before returning.
//! - There is no locking or versioning: two processes writing through
//!   independent substrates to the same backing file race, and the later
//!   whole-value write wins. Accepted for single-user datasets.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

pub type StorageResult<T> = Result<T, StorageError>;

/// Transport-level substrate failure.
///
/// Distinct from malformed *content*, which the repositories recover from;
/// a substrate that cannot be read or written at all surfaces here.
#[derive(Debug)]
pub enum StorageError {
    Sqlite(rusqlite::Error),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; run migrations first"
            ),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UninitializedConnection { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Synchronous string-keyed persistence contract.
///
/// Repositories depend on this port rather than a concrete substrate, so
/// tests can inject [`MemoryStore`] and hosts can pick their durability.
pub trait StoragePort {
    /// Returns the value stored under `key`, or `None` when absent.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Removes `key` and its value. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> StorageResult<()>;
}

impl<S: StoragePort + ?Sized> StoragePort for &S {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}
