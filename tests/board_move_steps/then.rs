//! Then steps for board move BDD scenarios.

use super::world::BoardMoveWorld;
use kahn::board::domain::{MoveOutcome, TaskStatus};
use rstest_bdd_macros::then;

fn scenario_column(column: &str) -> Result<TaskStatus, eyre::Report> {
    TaskStatus::try_from(column).map_err(|err| eyre::eyre!("invalid scenario column: {err}"))
}

#[then(r#"the "{column}" column contains "{title}""#)]
fn column_contains(
    world: &BoardMoveWorld,
    column: String,
    title: String,
) -> Result<(), eyre::Report> {
    let status = scenario_column(&column)?;
    let view = world.service.view();
    let found = view
        .column(status)
        .iter()
        .any(|task| task.title() == title);
    if !found {
        return Err(eyre::eyre!("expected '{title}' in the {column} column"));
    }
    Ok(())
}

#[then(r#"the "{column}" column does not contain "{title}""#)]
fn column_does_not_contain(
    world: &BoardMoveWorld,
    column: String,
    title: String,
) -> Result<(), eyre::Report> {
    let status = scenario_column(&column)?;
    let view = world.service.view();
    let found = view
        .column(status)
        .iter()
        .any(|task| task.title() == title);
    if found {
        return Err(eyre::eyre!("did not expect '{title}' in the {column} column"));
    }
    Ok(())
}

#[then("the board is unchanged")]
fn board_is_unchanged(world: &BoardMoveWorld) -> Result<(), eyre::Report> {
    if world.service.store().tasks() != world.snapshot.as_slice() {
        return Err(eyre::eyre!("the store changed during a no-op gesture"));
    }
    if !matches!(world.last_outcome, Some(MoveOutcome::Unchanged)) {
        return Err(eyre::eyre!(
            "expected an unchanged outcome, got {:?}",
            world.last_outcome
        ));
    }
    Ok(())
}

#[then(r#"the task "{title}" is persisted remotely with status "{status}""#)]
fn task_persisted_with_status(
    world: &BoardMoveWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let expected = scenario_column(&status)?;
    let remote = world
        .gateway
        .persisted_tasks()
        .map_err(|err| eyre::eyre!("remote snapshot: {err}"))?;
    let task = remote
        .iter()
        .find(|task| task.title() == title)
        .ok_or_else(|| eyre::eyre!("no remote task titled '{title}'"))?;
    if task.status() != expected {
        return Err(eyre::eyre!(
            "expected remote status {expected}, found {}",
            task.status()
        ));
    }
    Ok(())
}

#[then(r#"the task "{title}" carries a completion timestamp"#)]
fn task_carries_completion_timestamp(
    world: &BoardMoveWorld,
    title: String,
) -> Result<(), eyre::Report> {
    let task_id = world.task_id_by_title(&title)?;
    let task = world
        .service
        .store()
        .get(&task_id)
        .ok_or_else(|| eyre::eyre!("no stored task titled '{title}'"))?;
    if task.completed_at().is_none() {
        return Err(eyre::eyre!("expected a completion timestamp on '{title}'"));
    }
    Ok(())
}
