//! Derived, filtered board projection.

use super::{EffortCategory, Task, TaskStatus, TaskStore};

/// Effort-category selector for the board filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EffortFilter {
    /// Every effort category is visible.
    #[default]
    All,
    /// Only tasks of one effort category are visible.
    Only(EffortCategory),
}

/// Session-local filter inputs: title search term and effort selector.
///
/// Ephemeral by design; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    search_term: String,
    effort: EffortFilter,
}

impl FilterState {
    /// Creates an empty filter that shows every task.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title search term.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Sets the effort selector.
    pub const fn set_effort(&mut self, effort: EffortFilter) {
        self.effort = effort;
    }

    /// Returns the title search term.
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Returns the effort selector.
    #[must_use]
    pub const fn effort(&self) -> EffortFilter {
        self.effort
    }

    /// Returns `true` when the task passes the filter.
    ///
    /// A task is visible iff its title contains the search term
    /// case-insensitively and its effort category matches the selector.
    /// An empty search term matches every title.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        let title_matches = task
            .title()
            .to_lowercase()
            .contains(&self.search_term.to_lowercase());
        let effort_matches = match self.effort {
            EffortFilter::All => true,
            EffortFilter::Only(category) => task.effort() == category,
        };
        title_matches && effort_matches
    }
}

/// Ordered visible tasks of a single workflow column.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardColumn<'a> {
    status: TaskStatus,
    tasks: Vec<&'a Task>,
}

impl<'a> BoardColumn<'a> {
    /// Returns the workflow column this slice of the view covers.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the visible tasks in board order.
    #[must_use]
    pub fn tasks(&self) -> &[&'a Task] {
        &self.tasks
    }

    /// Returns the number of visible tasks in the column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the column shows no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Derived board view: the filtered task subset partitioned into columns.
///
/// A view is never stored or mutated; it is recomputed from the task store
/// and filter whenever either changes. Projection is pure, so calling it
/// repeatedly with unchanged inputs yields identical output.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardView<'a> {
    columns: Vec<BoardColumn<'a>>,
}

impl<'a> BoardView<'a> {
    /// Projects the filtered, column-partitioned view of a task store.
    ///
    /// Within each column, visible tasks keep the relative order they hold
    /// in the store; no other sort key is applied.
    #[must_use]
    pub fn project(store: &'a TaskStore, filter: &FilterState) -> Self {
        let columns = TaskStatus::COLUMNS
            .iter()
            .map(|&status| BoardColumn {
                status,
                tasks: store
                    .tasks()
                    .iter()
                    .filter(|task| task.status() == status && filter.matches(task))
                    .collect(),
            })
            .collect();
        Self { columns }
    }

    /// Returns the columns in board order.
    #[must_use]
    pub fn columns(&self) -> &[BoardColumn<'a>] {
        &self.columns
    }

    /// Returns the visible tasks of one column in board order.
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> &[&'a Task] {
        self.columns
            .iter()
            .find(|column| column.status == status)
            .map_or(&[], |column| column.tasks.as_slice())
    }

    /// Returns the total number of visible tasks across all columns.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.columns.iter().map(BoardColumn::len).sum()
    }

    /// Returns `true` when no task passes the filter.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible_count() == 0
    }
}
