//! When steps for board move BDD scenarios.

use super::world::{BoardMoveWorld, run_async};
use kahn::board::domain::{DragEvent, DropLocation, TaskStatus};
use rstest_bdd_macros::when;

#[when(
    r#"task "{title}" is moved from "{source_column}" position {source_index:usize} to "{dest_column}" position {dest_index:usize}"#
)]
fn task_is_moved(
    world: &mut BoardMoveWorld,
    title: String,
    source_column: String,
    source_index: usize,
    dest_column: String,
    dest_index: usize,
) -> Result<(), eyre::Report> {
    let source_status = TaskStatus::try_from(source_column.as_str())
        .map_err(|err| eyre::eyre!("invalid scenario column: {err}"))?;
    let dest_status = TaskStatus::try_from(dest_column.as_str())
        .map_err(|err| eyre::eyre!("invalid scenario column: {err}"))?;
    let task_id = world.task_id_by_title(&title)?;
    world.snapshot_store();

    let event = DragEvent::new(
        task_id,
        DropLocation::new(source_status, source_index),
        Some(DropLocation::new(dest_status, dest_index)),
    );
    let outcome = run_async(world.service.move_task(&event));
    world.last_outcome = Some(outcome);
    Ok(())
}

#[when(r#"task "{title}" is dropped outside any column"#)]
fn task_is_dropped_outside(
    world: &mut BoardMoveWorld,
    title: String,
) -> Result<(), eyre::Report> {
    let task_id = world.task_id_by_title(&title)?;
    world.snapshot_store();

    let event = DragEvent::new(
        task_id,
        DropLocation::new(TaskStatus::Todo, 0),
        None,
    );
    let outcome = run_async(world.service.move_task(&event));
    world.last_outcome = Some(outcome);
    Ok(())
}
