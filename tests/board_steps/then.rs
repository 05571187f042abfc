//! Then steps for board command BDD scenarios.

use super::world::{BoardWorld, parse_ids, parse_status};
use eyre::{WrapErr, ensure, eyre};
use mockable::{Clock, DefaultClock};
use rstest_bdd_macros::then;
use taskboard::board::domain::{Priority, TaskId, TaskStatus};

fn column_ids(world: &BoardWorld, status: TaskStatus) -> Vec<TaskId> {
    world
        .session
        .board()
        .list_of(status)
        .iter()
        .map(|task| task.id())
        .collect()
}

#[then(r#"the "{status}" column lists "{ids}""#)]
fn column_lists(world: &BoardWorld, status: String, ids: String) -> Result<(), eyre::Report> {
    let expected = parse_ids(&ids)?;
    let actual = column_ids(world, parse_status(&status)?);
    ensure!(actual == expected, "expected {expected:?}, found {actual:?}");
    Ok(())
}

#[then(r#"the "{status}" column is empty"#)]
fn column_is_empty(world: &BoardWorld, status: String) -> Result<(), eyre::Report> {
    let actual = column_ids(world, parse_status(&status)?);
    ensure!(actual.is_empty(), "expected empty column, found {actual:?}");
    Ok(())
}

#[then("the board holds {count:u64} tasks")]
fn board_holds(world: &BoardWorld, count: u64) -> Result<(), eyre::Report> {
    let actual = u64::try_from(world.session.board().len()).wrap_err("board length")?;
    ensure!(actual == count, "expected {count} tasks, found {actual}");
    Ok(())
}

#[then(r#"task "{id}" has status "{status}""#)]
fn task_has_status(world: &BoardWorld, id: String, status: String) -> Result<(), eyre::Report> {
    let task_id = TaskId::parse(&id).wrap_err("parse task id")?;
    let expected = parse_status(&status)?;
    let task = world
        .session
        .find_task(task_id)
        .ok_or_else(|| eyre!("task {task_id} not on board"))?;
    ensure!(
        task.status() == expected,
        "expected {expected}, found {}",
        task.status()
    );
    Ok(())
}

#[then("the board is unchanged")]
fn board_unchanged(world: &BoardWorld) -> Result<(), eyre::Report> {
    let snapshot = world
        .snapshot
        .as_ref()
        .ok_or_else(|| eyre!("missing board snapshot in scenario world"))?;
    ensure!(
        world.session.board() == snapshot,
        "board changed after a no-op command"
    );
    Ok(())
}

#[then(r#"the "{status}" column holds the new task dated today"#)]
fn column_holds_new_task(world: &BoardWorld, status: String) -> Result<(), eyre::Report> {
    let column = parse_status(&status)?;
    let created = world
        .last_created
        .as_ref()
        .ok_or_else(|| eyre!("missing created task in scenario world"))?;
    ensure!(
        column_ids(world, column) == vec![created.id()],
        "created task is not alone in its column"
    );
    ensure!(created.status() == column, "created task has wrong status");
    ensure!(created.priority() == Priority::High, "created task lost its priority");
    ensure!(
        created.id().to_string().starts_with("FYR-"),
        "unexpected identifier {}",
        created.id()
    );
    let today = DefaultClock.local().date_naive();
    ensure!(
        created.date() == Some(today),
        "expected date {today}, found {:?}",
        created.date()
    );
    Ok(())
}
