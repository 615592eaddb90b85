//! Unit tests for the task store contract.

use super::fixtures::task;
use crate::board::domain::{TaskId, TaskStatus, TaskStore, TaskStoreError};
use rstest::{fixture, rstest};

#[fixture]
fn store() -> TaskStore {
    TaskStore::new()
}

#[rstest]
fn insert_rejects_duplicate_id(mut store: TaskStore) {
    store
        .insert(task("t1", "First", TaskStatus::Todo))
        .expect("first insert");
    let result = store.insert(task("t1", "Second", TaskStatus::Backlog));
    assert!(matches!(result, Err(TaskStoreError::DuplicateId(id)) if id.as_str() == "t1"));
    assert_eq!(store.len(), 1);
}

#[rstest]
fn replace_unknown_id_reports_not_found(mut store: TaskStore) {
    let result = store.replace(task("ghost", "Phantom", TaskStatus::Todo));
    assert!(matches!(result, Err(TaskStoreError::NotFound(id)) if id.as_str() == "ghost"));
}

#[rstest]
fn remove_unknown_id_reports_not_found(mut store: TaskStore) {
    let ghost = TaskId::new("ghost").expect("valid id");
    let result = store.remove(&ghost);
    assert!(matches!(result, Err(TaskStoreError::NotFound(id)) if id.as_str() == "ghost"));
}

#[rstest]
fn remove_returns_the_stored_task(mut store: TaskStore) {
    let stored = task("t1", "Removable", TaskStatus::Todo);
    store.insert(stored.clone()).expect("insert");
    let removed = store.remove(stored.id()).expect("remove");
    assert_eq!(removed, stored);
    assert!(store.is_empty());
}

#[rstest]
fn replace_advances_the_revision(mut store: TaskStore) {
    let original = task("t1", "Versioned", TaskStatus::Todo);
    store.insert(original.clone()).expect("insert");
    let first_revision = store.get(original.id()).expect("stored").revision();

    store.replace(original.clone()).expect("first replace");
    let second_revision = store.get(original.id()).expect("stored").revision();
    assert!(second_revision > first_revision);

    store.replace(original.clone()).expect("second replace");
    let third_revision = store.get(original.id()).expect("stored").revision();
    assert!(third_revision > second_revision);
}

#[rstest]
fn load_replaces_contents(mut store: TaskStore) {
    store
        .insert(task("old", "Old contents", TaskStatus::Todo))
        .expect("insert");
    store
        .load(vec![
            task("t1", "Fresh", TaskStatus::Backlog),
            task("t2", "Fresher", TaskStatus::Done),
        ])
        .expect("load");
    assert_eq!(store.len(), 2);
    assert!(store.get(&TaskId::new("old").expect("valid id")).is_none());
}

#[rstest]
fn load_rejects_duplicate_ids_and_keeps_previous_contents(mut store: TaskStore) {
    store
        .insert(task("keep", "Keep me", TaskStatus::Todo))
        .expect("insert");
    let result = store.load(vec![
        task("dup", "One", TaskStatus::Todo),
        task("dup", "Two", TaskStatus::Done),
    ]);
    assert!(matches!(result, Err(TaskStoreError::DuplicateId(id)) if id.as_str() == "dup"));
    assert_eq!(store.len(), 1);
    assert!(store.get(&TaskId::new("keep").expect("valid id")).is_some());
}

#[rstest]
fn load_orders_by_persisted_index(mut store: TaskStore) {
    let mut first = task("t1", "Third by index", TaskStatus::Todo);
    first.set_order(Some(2));
    let mut second = task("t2", "First by index", TaskStatus::Todo);
    second.set_order(Some(0));
    let mut third = task("t3", "Second by index", TaskStatus::Todo);
    third.set_order(Some(1));

    store.load(vec![first, second, third]).expect("load");
    let ids: Vec<&str> = store.tasks().iter().map(|t| t.id().as_str()).collect();
    assert_eq!(ids, ["t2", "t3", "t1"]);
}

#[rstest]
fn load_keeps_unindexed_tasks_in_arrival_order_after_indexed(mut store: TaskStore) {
    let mut indexed = task("t2", "Indexed", TaskStatus::Todo);
    indexed.set_order(Some(0));
    let unindexed_a = task("t1", "Arrived first", TaskStatus::Todo);
    let unindexed_b = task("t3", "Arrived second", TaskStatus::Todo);

    store
        .load(vec![unindexed_a, indexed, unindexed_b])
        .expect("load");
    let ids: Vec<&str> = store.tasks().iter().map(|t| t.id().as_str()).collect();
    assert_eq!(ids, ["t2", "t1", "t3"]);
}
