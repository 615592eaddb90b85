//! Drag-and-drop reindexing engine.
//!
//! Translates a completed drag gesture, expressed in filtered-view
//! coordinates, into a deterministic reordering of the task store. The
//! presentation layer reports where a card was picked up and dropped; this
//! module decides what that means for the canonical sequence.

use super::{FilterState, Task, TaskId, TaskStatus, TaskStore};
use mockable::Clock;

/// Result of applying a drop to the task store.
#[derive(Debug, Clone, PartialEq)]
pub enum MoveOutcome {
    /// The gesture did not change the store.
    Unchanged,
    /// The task was relocated.
    Moved {
        /// Snapshot of the task after the move.
        task: Task,
        /// Whether the move crossed workflow columns (a status transition).
        crossed_columns: bool,
    },
}

/// Position of a card within the filtered view of one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropLocation {
    column: TaskStatus,
    index: usize,
}

impl DropLocation {
    /// Creates a location from a column and a filtered-view index.
    #[must_use]
    pub const fn new(column: TaskStatus, index: usize) -> Self {
        Self { column, index }
    }

    /// Returns the workflow column.
    #[must_use]
    pub const fn column(self) -> TaskStatus {
        self.column
    }

    /// Returns the index within the column's filtered view.
    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }
}

/// A completed drag gesture as reported by the presentation layer.
///
/// A gesture released outside any column carries no destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragEvent {
    task_id: TaskId,
    source: DropLocation,
    destination: Option<DropLocation>,
}

impl DragEvent {
    /// Creates a drag event.
    #[must_use]
    pub const fn new(
        task_id: TaskId,
        source: DropLocation,
        destination: Option<DropLocation>,
    ) -> Self {
        Self {
            task_id,
            source,
            destination,
        }
    }

    /// Returns the dragged task's identifier.
    #[must_use]
    pub const fn task_id(&self) -> &TaskId {
        &self.task_id
    }

    /// Returns where the card was picked up.
    #[must_use]
    pub const fn source(&self) -> DropLocation {
        self.source
    }

    /// Returns where the card was dropped, if anywhere.
    #[must_use]
    pub const fn destination(&self) -> Option<DropLocation> {
        self.destination
    }
}

/// Applies a drop to the task store.
///
/// No-op cases leave the store untouched: a gesture without a destination,
/// a drop back onto the source position, and a task id absent from the
/// store. Otherwise the task is removed from its current sequence
/// position, re-homed in the destination column (stamping or clearing the
/// completion timestamp on `done` boundaries), and reinserted at the
/// absolute position corresponding to the drop index within the filtered
/// destination column. Ordering indices of the affected column(s) are then
/// renumbered to match the new sequence.
///
/// Same-column reordering is a purely local operation; only a move that
/// crosses columns is flagged for persistence in the returned outcome.
pub fn apply_drop(
    store: &mut TaskStore,
    filter: &FilterState,
    event: &DragEvent,
    clock: &impl Clock,
) -> MoveOutcome {
    let Some(destination) = event.destination() else {
        return MoveOutcome::Unchanged;
    };
    if destination == event.source() {
        return MoveOutcome::Unchanged;
    }
    let Ok(mut task) = store.remove(event.task_id()) else {
        return MoveOutcome::Unchanged;
    };

    let prior_revision = task.revision();
    task.place_in_column(destination.column(), clock);
    task.set_revision(prior_revision.next());

    let position = absolute_position(store, filter, destination);
    store.insert_at(position, task);
    store.renumber_column(destination.column());
    let crossed_columns = event.source().column() != destination.column();
    if crossed_columns {
        store.renumber_column(event.source().column());
    }

    store
        .get(event.task_id())
        .cloned()
        .map_or(MoveOutcome::Unchanged, |task| MoveOutcome::Moved {
            task,
            crossed_columns,
        })
}

/// Translates a filtered-column drop index into an absolute store position.
///
/// Computed against the store with the dragged task already removed, so a
/// downward move within one column needs no index correction. A drop past
/// the last visible card lands directly after it; a drop on an empty
/// column appends to the sequence, which is position zero of that column.
fn absolute_position(store: &TaskStore, filter: &FilterState, destination: DropLocation) -> usize {
    let visible: Vec<usize> = store
        .tasks()
        .iter()
        .enumerate()
        .filter(|(_, task)| task.status() == destination.column() && filter.matches(task))
        .map(|(position, _)| position)
        .collect();

    visible.get(destination.index()).copied().map_or_else(
        || visible.last().map_or(store.len(), |&last| last.saturating_add(1)),
        |position| position,
    )
}
