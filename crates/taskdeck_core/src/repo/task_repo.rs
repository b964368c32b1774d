//! Task collection repository.
//!
//! # Responsibility
//! - Persist the task collection under its fixed storage key.

use super::{load_collection, persist_collection, RepoResult, Repository};
use crate::model::entity::EntityId;
use crate::model::task::Task;
use crate::storage::StoragePort;

/// Storage key holding the serialized task collection.
pub const TASKS_STORAGE_KEY: &str = "tasks";

/// Whole-collection task repository over an injected substrate.
pub struct TaskRepository<S: StoragePort> {
    store: S,
}

impl<S: StoragePort> TaskRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: StoragePort> Repository<Task> for TaskRepository<S> {
    fn save(&self, item: &Task) -> RepoResult<()> {
        let mut tasks = self.get_all()?;
        match tasks.iter().position(|task| task.id() == item.id()) {
            Some(index) => tasks[index] = item.clone(),
            None => tasks.push(item.clone()),
        }
        self.save_all(&tasks)
    }

    fn save_all(&self, items: &[Task]) -> RepoResult<()> {
        persist_collection(&self.store, TASKS_STORAGE_KEY, items)
    }

    fn get_all(&self) -> RepoResult<Vec<Task>> {
        load_collection(&self.store, TASKS_STORAGE_KEY)
    }

    fn get_by_id(&self, id: EntityId) -> RepoResult<Option<Task>> {
        Ok(self.get_all()?.into_iter().find(|task| task.id() == id))
    }

    fn delete(&self, id: EntityId) -> RepoResult<()> {
        let tasks: Vec<Task> = self
            .get_all()?
            .into_iter()
            .filter(|task| task.id() != id)
            .collect();
        self.save_all(&tasks)
    }

    fn delete_all(&self) -> RepoResult<()> {
        self.store.remove(TASKS_STORAGE_KEY)?;
        Ok(())
    }
}
