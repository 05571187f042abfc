//! Given steps for board command BDD scenarios.

use super::world::{BoardWorld, parse_ids, parse_status};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::board::domain::{Board, Priority, TaskRecord};

#[given(r#"a board whose "{status}" column holds "{ids}""#)]
fn board_with_column(
    world: &mut BoardWorld,
    status: String,
    ids: String,
) -> Result<(), eyre::Report> {
    let column = parse_status(&status)?;
    let records = parse_ids(&ids)?.into_iter().map(|id| {
        TaskRecord::new(
            id,
            format!("Task {id}"),
            String::new(),
            column,
            Priority::Medium,
        )
    });
    let board = Board::from_records(records).wrap_err("build scenario board")?;
    *world = BoardWorld::over(board);
    world.snapshot = Some(world.session.board().clone());
    Ok(())
}

#[given("an empty board")]
fn empty_board(world: &mut BoardWorld) {
    *world = BoardWorld::new();
    world.snapshot = Some(world.session.board().clone());
}
