//! Category collection repository.
//!
//! # Responsibility
//! - Persist the category collection under its fixed storage key.
//! - Seed the default palette the first time the collection is observed
//!   empty.
//!
//! # Invariants
//! - Seeding is a construction-time bootstrap, not a recurring check; plain
//!   reads never write.

use super::{load_collection, persist_collection, RepoResult, Repository};
use crate::model::category::Category;
use crate::model::entity::EntityId;
use crate::storage::StoragePort;
use log::info;

/// Storage key holding the serialized category collection.
pub const CATEGORIES_STORAGE_KEY: &str = "categories";

/// Whole-collection category repository over an injected substrate.
pub struct CategoryRepository<S: StoragePort> {
    store: S,
}

impl<S: StoragePort> CategoryRepository<S> {
    /// Creates the repository, seeding defaults when the collection is empty.
    ///
    /// # Errors
    /// - Substrate transport failures during the initial read or the seed
    ///   write.
    pub fn try_new(store: S) -> RepoResult<Self> {
        let repo = Self { store };
        if repo.get_all()?.is_empty() {
            let defaults = default_categories();
            repo.save_all(&defaults)?;
            info!(
                "event=category_defaults_seeded module=repo status=ok count={}",
                defaults.len()
            );
        }
        Ok(repo)
    }
}

fn default_categories() -> Vec<Category> {
    vec![
        Category::with_color("Work", "#3B82F6"),
        Category::with_color("Personal", "#10B981"),
        Category::with_color("Shopping", "#F59E0B"),
        Category::with_color("Health", "#EF4444"),
    ]
}

impl<S: StoragePort> Repository<Category> for CategoryRepository<S> {
    fn save(&self, item: &Category) -> RepoResult<()> {
        let mut categories = self.get_all()?;
        match categories
            .iter()
            .position(|category| category.id() == item.id())
        {
            Some(index) => categories[index] = item.clone(),
            None => categories.push(item.clone()),
        }
        self.save_all(&categories)
    }

    fn save_all(&self, items: &[Category]) -> RepoResult<()> {
        persist_collection(&self.store, CATEGORIES_STORAGE_KEY, items)
    }

    fn get_all(&self) -> RepoResult<Vec<Category>> {
        load_collection(&self.store, CATEGORIES_STORAGE_KEY)
    }

    fn get_by_id(&self, id: EntityId) -> RepoResult<Option<Category>> {
        Ok(self
            .get_all()?
            .into_iter()
            .find(|category| category.id() == id))
    }

    fn delete(&self, id: EntityId) -> RepoResult<()> {
        let categories: Vec<Category> = self
            .get_all()?
            .into_iter()
            .filter(|category| category.id() != id)
            .collect();
        self.save_all(&categories)
    }

    fn delete_all(&self) -> RepoResult<()> {
        self.store.remove(CATEGORIES_STORAGE_KEY)?;
        Ok(())
    }
}
