//! Behaviour tests for board drag-and-drop moves.

#[path = "board_move_steps/mod.rs"]
mod board_move_steps_defs;

use board_move_steps_defs::world::{BoardMoveWorld, world};
use rstest_bdd_macros::scenario;

#[scenario(
    path = "tests/features/board_moves.feature",
    name = "Move a task to another column"
)]
#[tokio::test(flavor = "multi_thread")]
async fn move_task_to_another_column(world: BoardMoveWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/board_moves.feature",
    name = "A drop without a destination changes nothing"
)]
#[tokio::test(flavor = "multi_thread")]
async fn drop_without_destination_changes_nothing(world: BoardMoveWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/board_moves.feature",
    name = "Reordering within a column stays local"
)]
#[tokio::test(flavor = "multi_thread")]
async fn reorder_within_column_stays_local(world: BoardMoveWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/board_moves.feature",
    name = "Completing a task stamps the completion time"
)]
#[tokio::test(flavor = "multi_thread")]
async fn completing_task_stamps_completion_time(world: BoardMoveWorld) {
    let _ = world;
}
