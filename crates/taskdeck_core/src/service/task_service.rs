//! Task and category use-case service.
//!
//! # Responsibility
//! - Validate business rules (non-empty titles/names, category existence).
//! - Compose repository operations into use-case level actions.
//! - Derive aggregate statistics over the task collection.
//!
//! # Invariants
//! - Validation failures surface before anything is persisted.
//! - Unknown IDs are not errors: mutations return `Ok(None)`/`Ok(false)`.
//! - Returned records are snapshots; callers re-query to observe later
//!   persisted state.

use crate::model::category::Category;
use crate::model::entity::EntityId;
use crate::model::task::{Priority, Task};
use crate::repo::{RepoError, Repository};
use log::debug;
use serde::Serialize;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, TaskServiceError>;

/// Business-rule violation, surfaced to the caller immediately.
///
/// Never retried and never recovered internally; prior persisted state is
/// left unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Task title is empty or whitespace-only.
    EmptyTitle,
    /// Category name is empty or whitespace-only.
    EmptyCategoryName,
    /// Task creation referenced a category name with no existing record.
    UnknownCategory(String),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title cannot be empty"),
            Self::EmptyCategoryName => write!(f, "category name cannot be empty"),
            Self::UnknownCategory(name) => write!(f, "category `{name}` does not exist"),
        }
    }
}

impl Error for ValidationError {}

/// Service error wrapping validation and persistence failures.
#[derive(Debug)]
pub enum TaskServiceError {
    Validation(ValidationError),
    Repo(RepoError),
}

impl Display for TaskServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TaskServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<ValidationError> for TaskServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for TaskServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Partial update for an existing task.
///
/// Only present fields are applied. `priority` carries the raw token from
/// the caller: an unrecognized value is ignored rather than rejected.
#[derive(Debug, Clone, Default)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub priority: Option<String>,
}

/// Aggregate counts over the task collection.
///
/// Categories with zero tasks are absent from `by_category`, not present
/// with zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStatistics {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub by_category: BTreeMap<String, usize>,
}

/// Use-case facade over the task and category repositories.
pub struct TaskService<TR, CR>
where
    TR: Repository<Task>,
    CR: Repository<Category>,
{
    tasks: TR,
    categories: CR,
}

impl<TR, CR> TaskService<TR, CR>
where
    TR: Repository<Task>,
    CR: Repository<Category>,
{
    /// Creates a service over the provided repository implementations.
    pub fn new(tasks: TR, categories: CR) -> Self {
        Self { tasks, categories }
    }

    /// Creates and persists a new task.
    ///
    /// # Contract
    /// - Whitespace-only `title` fails with `ValidationError::EmptyTitle`.
    /// - `category` must match an existing category name, case-sensitive,
    ///   else `ValidationError::UnknownCategory`.
    /// - Defaults: empty description, medium priority, not completed.
    pub fn create_task(
        &self,
        title: &str,
        category: &str,
        description: Option<&str>,
        priority: Option<Priority>,
    ) -> ServiceResult<Task> {
        if title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle.into());
        }

        let category_exists = self
            .categories
            .get_all()?
            .iter()
            .any(|existing| existing.name == category);
        if !category_exists {
            return Err(ValidationError::UnknownCategory(category.to_string()).into());
        }

        let mut task = Task::new(title, category);
        if let Some(description) = description {
            task.description = description.to_string();
        }
        if let Some(priority) = priority {
            task.priority = priority;
        }
        self.tasks.save(&task)?;
        Ok(task)
    }

    pub fn get_all_tasks(&self) -> ServiceResult<Vec<Task>> {
        Ok(self.tasks.get_all()?)
    }

    pub fn get_task_by_id(&self, id: EntityId) -> ServiceResult<Option<Task>> {
        Ok(self.tasks.get_by_id(id)?)
    }

    pub fn get_tasks_by_category(&self, category: &str) -> ServiceResult<Vec<Task>> {
        let tasks = self
            .tasks
            .get_all()?
            .into_iter()
            .filter(|task| task.category == category)
            .collect();
        Ok(tasks)
    }

    pub fn get_completed_tasks(&self) -> ServiceResult<Vec<Task>> {
        let tasks = self
            .tasks
            .get_all()?
            .into_iter()
            .filter(|task| task.is_completed)
            .collect();
        Ok(tasks)
    }

    pub fn get_pending_tasks(&self) -> ServiceResult<Vec<Task>> {
        let tasks = self
            .tasks
            .get_all()?
            .into_iter()
            .filter(|task| !task.is_completed)
            .collect();
        Ok(tasks)
    }

    pub fn get_tasks_by_priority(&self, priority: Priority) -> ServiceResult<Vec<Task>> {
        let tasks = self
            .tasks
            .get_all()?
            .into_iter()
            .filter(|task| task.priority == priority)
            .collect();
        Ok(tasks)
    }

    /// Applies a partial update to an existing task.
    ///
    /// # Contract
    /// - Unknown `id` returns `Ok(None)`.
    /// - Only present fields are applied; an unrecognized priority token is
    ///   ignored.
    /// - A changed `category` is NOT re-validated against existing category
    ///   names. Existence is checked at creation only; the resulting
    ///   looseness is a recorded product decision, not an oversight.
    pub fn update_task(&self, id: EntityId, updates: TaskUpdate) -> ServiceResult<Option<Task>> {
        let Some(mut task) = self.tasks.get_by_id(id)? else {
            return Ok(None);
        };

        if let Some(title) = updates.title {
            task.set_title(title);
        }
        if let Some(description) = updates.description {
            task.set_description(description);
        }
        if let Some(category) = updates.category {
            task.set_category(category);
        }
        if let Some(token) = updates.priority {
            match Priority::parse(&token) {
                Some(priority) => task.set_priority(priority),
                None => debug!(
                    "event=priority_token_ignored module=service status=skipped id={id} value={token}"
                ),
            }
        }

        self.tasks.save(&task)?;
        Ok(Some(task))
    }

    /// Flips a task's completion state.
    ///
    /// Unknown `id` returns `Ok(None)`; each toggle refreshes `updated_at`.
    pub fn toggle_task_completion(&self, id: EntityId) -> ServiceResult<Option<Task>> {
        let Some(mut task) = self.tasks.get_by_id(id)? else {
            return Ok(None);
        };
        task.toggle_completion();
        self.tasks.save(&task)?;
        Ok(Some(task))
    }

    /// Deletes a task by ID.
    ///
    /// Returns `Ok(false)` when no task has that ID.
    pub fn delete_task(&self, id: EntityId) -> ServiceResult<bool> {
        if self.tasks.get_by_id(id)?.is_none() {
            return Ok(false);
        }
        self.tasks.delete(id)?;
        Ok(true)
    }

    pub fn get_all_categories(&self) -> ServiceResult<Vec<Category>> {
        Ok(self.categories.get_all()?)
    }

    /// Creates and persists a new category.
    ///
    /// # Contract
    /// - Whitespace-only `name` fails with
    ///   `ValidationError::EmptyCategoryName`.
    /// - No uniqueness check against existing names; duplicates are allowed
    ///   to exist.
    pub fn create_category(&self, name: &str, color: Option<&str>) -> ServiceResult<Category> {
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyCategoryName.into());
        }

        let category = match color {
            Some(color) => Category::with_color(name, color),
            None => Category::new(name),
        };
        self.categories.save(&category)?;
        Ok(category)
    }

    /// Applies a partial update to an existing category.
    ///
    /// Unknown `id` returns `Ok(None)`. Renaming does not touch tasks that
    /// reference the old name.
    pub fn update_category(
        &self,
        id: EntityId,
        name: Option<&str>,
        color: Option<&str>,
    ) -> ServiceResult<Option<Category>> {
        let Some(mut category) = self.categories.get_by_id(id)? else {
            return Ok(None);
        };

        if let Some(name) = name {
            category.set_name(name);
        }
        if let Some(color) = color {
            category.set_color(color);
        }

        self.categories.save(&category)?;
        Ok(Some(category))
    }

    /// Deletes a category by ID.
    ///
    /// Returns `Ok(false)` when no category has that ID. Does NOT cascade:
    /// tasks referencing the deleted name keep their orphaned reference.
    pub fn delete_category(&self, id: EntityId) -> ServiceResult<bool> {
        if self.categories.get_by_id(id)?.is_none() {
            return Ok(false);
        }
        self.categories.delete(id)?;
        Ok(true)
    }

    /// Computes aggregate counts in a single pass over all tasks.
    pub fn get_statistics(&self) -> ServiceResult<TaskStatistics> {
        let tasks = self.tasks.get_all()?;
        let mut stats = TaskStatistics {
            total: tasks.len(),
            ..TaskStatistics::default()
        };

        for task in &tasks {
            if task.is_completed {
                stats.completed += 1;
            } else {
                stats.pending += 1;
            }
            *stats.by_category.entry(task.category.clone()).or_insert(0) += 1;
        }

        Ok(stats)
    }
}
