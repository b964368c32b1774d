//! SQLite-backed storage substrate.
//!
//! # Responsibility
//! - Map the storage port onto a single `kv` table.
//! - Refuse connections whose schema migrations have not been applied.
//!
//! # Invariants
//! - One row per key; `set` replaces the whole value atomically.
//! - SQL details stay inside this module.

use super::{StoragePort, StorageError, StorageResult};
use crate::db::migrations::latest_version;
use rusqlite::{params, Connection, OptionalExtension};

/// Durable substrate over a migrated SQLite connection.
pub struct SqliteStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStore<'conn> {
    /// Wraps a connection after verifying its schema version.
    ///
    /// # Errors
    /// - `UninitializedConnection` when the connection's `user_version` does
    ///   not match the latest migration known to this binary. Connections
    ///   from [`crate::db::open_db`] always pass.
    pub fn try_new(conn: &'conn Connection) -> StorageResult<Self> {
        let actual_version: u32 =
            conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        let expected_version = latest_version();
        if actual_version != expected_version {
            return Err(StorageError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }
        Ok(Self { conn })
    }
}

impl StoragePort for SqliteStore<'_> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1;", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.conn.execute("DELETE FROM kv WHERE key = ?1;", [key])?;
        Ok(())
    }
}
