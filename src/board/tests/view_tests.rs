//! Unit tests for the derived board view.

use super::fixtures::{task, task_with_effort};
use crate::board::domain::{
    BoardView, EffortCategory, EffortFilter, FilterState, TaskStatus, TaskStore,
};
use rstest::{fixture, rstest};

#[fixture]
fn store() -> TaskStore {
    let mut store = TaskStore::new();
    store
        .load(vec![
            task_with_effort("t1", "Wire the API", TaskStatus::Todo, EffortCategory::Backend),
            task_with_effort(
                "t2",
                "Style the board",
                TaskStatus::Todo,
                EffortCategory::Frontend,
            ),
            task_with_effort(
                "t3",
                "Wire the UI",
                TaskStatus::InProgress,
                EffortCategory::Frontend,
            ),
            task_with_effort("t4", "Ship release", TaskStatus::Done, EffortCategory::BackendFrontend),
        ])
        .expect("load fixture tasks");
    store
}

#[rstest]
fn projection_is_idempotent(store: TaskStore) {
    let mut filter = FilterState::new();
    filter.set_search_term("wire");
    let first = BoardView::project(&store, &filter);
    let second = BoardView::project(&store, &filter);
    assert_eq!(first, second);
}

#[rstest]
fn every_visible_task_appears_in_exactly_its_status_column(store: TaskStore) {
    let filter = FilterState::new();
    let view = BoardView::project(&store, &filter);

    let mut seen = 0;
    for column in view.columns() {
        for visible in column.tasks() {
            assert_eq!(visible.status(), column.status());
            seen += 1;
        }
    }
    assert_eq!(seen, store.len());
}

#[rstest]
fn search_matches_title_case_insensitively(store: TaskStore) {
    let mut filter = FilterState::new();
    filter.set_search_term("WIRE");
    let view = BoardView::project(&store, &filter);

    assert_eq!(view.visible_count(), 2);
    assert_eq!(view.column(TaskStatus::Todo).len(), 1);
    assert_eq!(view.column(TaskStatus::InProgress).len(), 1);
    assert!(view.column(TaskStatus::Done).is_empty());
}

#[rstest]
fn empty_search_term_matches_every_title(store: TaskStore) {
    let filter = FilterState::new();
    let view = BoardView::project(&store, &filter);
    assert_eq!(view.visible_count(), store.len());
}

#[rstest]
fn effort_filter_restricts_to_one_category(store: TaskStore) {
    let mut filter = FilterState::new();
    filter.set_effort(EffortFilter::Only(EffortCategory::Frontend));
    let view = BoardView::project(&store, &filter);

    let visible: Vec<&str> = view
        .columns()
        .iter()
        .flat_map(|column| column.tasks().iter().map(|t| t.id().as_str()))
        .collect();
    assert_eq!(visible, ["t2", "t3"]);
}

#[rstest]
fn search_and_effort_filters_compose(store: TaskStore) {
    let mut filter = FilterState::new();
    filter.set_search_term("wire");
    filter.set_effort(EffortFilter::Only(EffortCategory::Frontend));
    let view = BoardView::project(&store, &filter);

    assert_eq!(view.visible_count(), 1);
    let in_progress = view.column(TaskStatus::InProgress);
    assert_eq!(in_progress.first().map(|t| t.id().as_str()), Some("t3"));
}

#[rstest]
fn relative_order_survives_filter_changes(store: TaskStore) {
    let unfiltered = FilterState::new();
    let before = BoardView::project(&store, &unfiltered);
    let todo_before: Vec<&str> = before
        .column(TaskStatus::Todo)
        .iter()
        .map(|t| t.id().as_str())
        .collect();

    let mut narrowed = FilterState::new();
    narrowed.set_search_term("the");
    let during = BoardView::project(&store, &narrowed);
    let todo_during: Vec<&str> = during
        .column(TaskStatus::Todo)
        .iter()
        .map(|t| t.id().as_str())
        .collect();

    // Both t1 and t2 remain visible under the narrower filter; their
    // relative order must be unchanged.
    assert_eq!(todo_before, ["t1", "t2"]);
    assert_eq!(todo_during, ["t1", "t2"]);
}

#[rstest]
fn projection_never_mutates_the_store(store: TaskStore) {
    let snapshot = store.clone();
    let mut filter = FilterState::new();
    filter.set_search_term("release");
    let _ = BoardView::project(&store, &filter);
    let _ = BoardView::project(&store, &filter);
    assert_eq!(store, snapshot);
}
