//! In-memory storage substrate.
//!
//! # Responsibility
//! - Back the storage port with a plain map for tests and volatile hosts.
//!
//! # Invariants
//! - Operations never fail.

use super::{StoragePort, StorageResult};
use std::cell::RefCell;
use std::collections::HashMap;

/// Volatile substrate holding values in a process-local map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoragePort for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
