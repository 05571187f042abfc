//! When steps for board command BDD scenarios.

use super::world::{BoardWorld, parse_status, slot_index};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use taskboard::board::domain::{BoardSlot, MoveCommand, Priority, TaskDraft, TaskId};

#[when(
    r#"the task at "{from_status}" #{from_index:u64} is dropped at "{to_status}" #{to_index:u64}"#
)]
fn drop_task(
    world: &mut BoardWorld,
    from_status: String,
    from_index: u64,
    to_status: String,
    to_index: u64,
) -> Result<(), eyre::Report> {
    let source = BoardSlot::new(parse_status(&from_status)?, slot_index(from_index)?);
    let destination = BoardSlot::new(parse_status(&to_status)?, slot_index(to_index)?);
    world
        .session
        .apply_move(MoveCommand::relocate(source, destination))
        .wrap_err("apply drop")?;
    Ok(())
}

#[when("the drag is cancelled")]
fn cancel_drag(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    world
        .session
        .apply_move(MoveCommand::Cancelled)
        .wrap_err("apply cancelled drag")?;
    Ok(())
}

#[when(r#"a "{priority}" priority task titled "{title}" is created in "{status}""#)]
fn create_task(
    world: &mut BoardWorld,
    priority: String,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let level = Priority::try_from(priority.as_str()).wrap_err("parse priority")?;
    let draft = TaskDraft::new(title, "").with_priority(level);
    let created = world
        .session
        .create_task(draft, parse_status(&status)?)
        .wrap_err("create task")?;
    world.last_created = Some(created);
    Ok(())
}

#[when(r#"task "{id}" is deleted"#)]
fn delete_task(world: &mut BoardWorld, id: String) -> Result<(), eyre::Report> {
    let task_id = TaskId::parse(&id).wrap_err("parse task id")?;
    world.session.delete_task(task_id).wrap_err("delete task")?;
    Ok(())
}
