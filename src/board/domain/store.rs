//! Authoritative in-memory task collection.

use super::{Task, TaskId, TaskStatus};
use std::collections::HashSet;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Contract-violation errors raised by the task store.
///
/// Neither error occurs through normal board-controller usage; they signal
/// a programming error in the caller and should be surfaced loudly rather
/// than swallowed.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TaskStoreError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateId(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),
}

/// Ordered, canonical collection of the session's tasks.
///
/// The sequence order is authoritative: within each workflow column, the
/// relative order of tasks in this store is exactly the order the board
/// renders. All operations are synchronous and total; no partial state is
/// observable from outside a single call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Replaces the store contents with a freshly fetched task list.
    ///
    /// Tasks carrying a persisted ordering index are stably sorted by it so
    /// column order survives reloads; tasks without an index keep their
    /// arrival order after the indexed ones. The store is left untouched
    /// when validation fails.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::DuplicateId`] when two incoming tasks share
    /// an identifier.
    pub fn load(&mut self, tasks: Vec<Task>) -> TaskStoreResult<()> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(tasks.len());
        for task in &tasks {
            if !seen.insert(task.id().as_str()) {
                return Err(TaskStoreError::DuplicateId(task.id().clone()));
            }
        }
        drop(seen);

        let mut ordered = tasks;
        ordered.sort_by_key(|task| task.order().unwrap_or(i64::MAX));
        self.tasks = ordered;
        Ok(())
    }

    /// Appends a newly persisted task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::DuplicateId`] when a task with the same
    /// identifier is already present.
    pub fn insert(&mut self, task: Task) -> TaskStoreResult<()> {
        if self.position_of(task.id()).is_some() {
            return Err(TaskStoreError::DuplicateId(task.id().clone()));
        }
        self.tasks.push(task);
        Ok(())
    }

    /// Replaces the stored task with the same identifier.
    ///
    /// The replacement's revision is advanced past the stored task's, so
    /// later staleness checks see this write.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when no task with the given
    /// identifier exists.
    pub fn replace(&mut self, task: Task) -> TaskStoreResult<()> {
        let position = self
            .position_of(task.id())
            .ok_or_else(|| TaskStoreError::NotFound(task.id().clone()))?;
        let Some(slot) = self.tasks.get_mut(position) else {
            return Err(TaskStoreError::NotFound(task.id().clone()));
        };
        let mut replacement = task;
        replacement.set_revision(slot.revision().next());
        *slot = replacement;
        Ok(())
    }

    /// Removes and returns the task with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when no task with the given
    /// identifier exists.
    pub fn remove(&mut self, id: &TaskId) -> TaskStoreResult<Task> {
        let position = self
            .position_of(id)
            .ok_or_else(|| TaskStoreError::NotFound(id.clone()))?;
        Ok(self.tasks.remove(position))
    }

    /// Returns the task with the given identifier, if present.
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns the canonical task sequence.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of stored tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the store holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the absolute sequence position of a task.
    pub(crate) fn position_of(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == id)
    }

    /// Inserts a task at an absolute sequence position, clamped to the end.
    pub(crate) fn insert_at(&mut self, position: usize, task: Task) {
        let clamped = position.min(self.tasks.len());
        self.tasks.insert(clamped, task);
    }

    /// Renumbers the ordering indices of one column to match sequence order.
    pub(crate) fn renumber_column(&mut self, status: TaskStatus) {
        let mut next: i64 = 0;
        for task in &mut self.tasks {
            if task.status() == status {
                task.set_order(Some(next));
                next = next.saturating_add(1);
            }
        }
    }
}
