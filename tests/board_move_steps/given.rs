//! Given steps for board move BDD scenarios.

use super::world::{BoardMoveWorld, run_async};
use kahn::board::domain::TaskStatus;
use rstest_bdd_macros::given;

#[given(r#"a board with task "{title}" in "{column}""#)]
fn board_has_task(
    world: &mut BoardMoveWorld,
    title: String,
    column: String,
) -> Result<(), eyre::Report> {
    let status = TaskStatus::try_from(column.as_str())
        .map_err(|err| eyre::eyre!("invalid scenario column: {err}"))?;
    let seeded = world.seeded_task(&title, status)?;
    world.seeded.push(seeded);
    world
        .gateway
        .seed_tasks(world.seeded.clone())
        .map_err(|err| eyre::eyre!("seed remote tasks: {err}"))?;
    Ok(())
}

#[given("the board is loaded")]
fn board_is_loaded(world: &mut BoardMoveWorld) -> Result<(), eyre::Report> {
    world
        .gateway
        .register_profile(BoardMoveWorld::actor_profile()?)
        .map_err(|err| eyre::eyre!("register profile: {err}"))?;
    run_async(world.service.resolve_actor("alice@example.com"))
        .map_err(|err| eyre::eyre!("resolve actor: {err}"))?;
    run_async(world.service.load_board())
        .map_err(|err| eyre::eyre!("load board: {err}"))?;
    Ok(())
}
