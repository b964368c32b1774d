//! Core domain logic for TaskDeck.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod storage;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::category::{Category, DEFAULT_CATEGORY_COLOR};
pub use model::entity::{EntityId, EntityMeta};
pub use model::task::{Priority, Task};
pub use repo::category_repo::{CategoryRepository, CATEGORIES_STORAGE_KEY};
pub use repo::task_repo::{TaskRepository, TASKS_STORAGE_KEY};
pub use repo::{RepoError, RepoResult, Repository};
pub use service::task_service::{
    ServiceResult, TaskService, TaskServiceError, TaskStatistics, TaskUpdate, ValidationError,
};
pub use storage::{MemoryStore, SqliteStore, StorageError, StoragePort, StorageResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
