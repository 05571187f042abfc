//! Board session: the single owner and mutator of board state.

use super::{BoardSessionResult, MoveEngine, TaskFactory};
use crate::board::{
    config::BoardConfig,
    domain::{
        Board, BoardError, BoardSlot, BoardView, MoveCommand, MoveOutcome, TaskDetailsUpdate,
        TaskDraft, TaskId, TaskRecord, TaskStatus,
    },
    ports::TaskIdGenerator,
};
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, info};

/// State container exposing the board's command entry points.
///
/// Every command runs to completion before returning and either replaces
/// the board in one step or leaves it untouched.
pub struct BoardSession<G, C>
where
    G: TaskIdGenerator,
    C: Clock + Send + Sync,
{
    board: Board,
    factory: TaskFactory<G, C>,
}

impl<C> BoardSession<Box<dyn TaskIdGenerator>, C>
where
    C: Clock + Send + Sync,
{
    /// Creates a session from configuration.
    #[must_use]
    pub fn from_config(config: &BoardConfig, clock: Arc<C>) -> Self {
        Self::new(config.initial_board(), config.id_generator(), clock)
    }
}

impl<G, C> BoardSession<G, C>
where
    G: TaskIdGenerator,
    C: Clock + Send + Sync,
{
    /// Creates a session over an existing board.
    #[must_use]
    pub const fn new(board: Board, id_generator: G, clock: Arc<C>) -> Self {
        Self {
            board,
            factory: TaskFactory::new(id_generator, clock),
        }
    }

    /// Returns the current board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Consumes the session and returns its board.
    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Projects the current board for rendering.
    #[must_use]
    pub fn board_view(&self) -> BoardView {
        BoardView::project(&self.board)
    }

    /// Applies a drag-end command.
    ///
    /// Cancelled drags and drops onto the origin slot leave the board
    /// untouched and are reported as [`MoveOutcome::Unchanged`].
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::IndexOutOfBounds`] when the command addresses a
    /// slot that does not exist. The board is untouched on error.
    pub fn apply_move(&mut self, command: MoveCommand) -> BoardSessionResult<MoveOutcome> {
        let resolution = MoveEngine::resolve(&self.board, command)?;
        if let Some(next) = resolution.board {
            self.board = next;
        }
        match resolution.outcome {
            MoveOutcome::Moved { task_id, from, to } => {
                debug!(%task_id, %from, %to, "task moved");
            }
            MoveOutcome::Unchanged { reason } => {
                debug!(?reason, "move left board unchanged");
            }
        }
        Ok(resolution.outcome)
    }

    /// Creates a task from `draft` at the end of the `status` column.
    ///
    /// # Errors
    ///
    /// Returns an error when the identifier strategy fails or hands out an
    /// identifier already on the board. The board is untouched on error.
    pub fn create_task(
        &mut self,
        draft: TaskDraft,
        status: TaskStatus,
    ) -> BoardSessionResult<TaskRecord> {
        let task = self.factory.create_on(&mut self.board, draft, status)?;
        info!(task_id = %task.id(), %status, "task created");
        Ok(task)
    }

    /// Looks up a task for the detail view.
    #[must_use]
    pub fn find_task(&self, id: TaskId) -> Option<&TaskRecord> {
        self.board.get(id)
    }

    /// Edits the title and description of a task in place.
    ///
    /// Status, position and the other fields are kept.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TaskNotFound`] for an unknown identifier.
    pub fn update_details(
        &mut self,
        id: TaskId,
        update: TaskDetailsUpdate,
    ) -> BoardSessionResult<TaskRecord> {
        let task = self
            .board
            .get_mut(id)
            .ok_or(BoardError::TaskNotFound(id))?;
        let TaskDetailsUpdate { title, description } = update;
        if let Some(new_title) = title {
            task.set_title(new_title);
        }
        if let Some(new_description) = description {
            task.set_description(new_description);
        }
        debug!(task_id = %id, "task details updated");
        Ok(task.clone())
    }

    /// Moves a task to the end of the `status` column.
    ///
    /// A task already at the end of that column stays where it is.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TaskNotFound`] for an unknown identifier.
    pub fn move_to_column(
        &mut self,
        id: TaskId,
        status: TaskStatus,
    ) -> BoardSessionResult<MoveOutcome> {
        let source = self.board.locate(id).ok_or(BoardError::TaskNotFound(id))?;
        let len = self.board.list_of(status).len();
        let end = if source.status == status {
            len.saturating_sub(1)
        } else {
            len
        };
        self.apply_move(MoveCommand::relocate(source, BoardSlot::new(status, end)))
    }

    /// Removes a task from the board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TaskNotFound`] for an unknown identifier.
    pub fn delete_task(&mut self, id: TaskId) -> BoardSessionResult<TaskRecord> {
        let slot = self.board.locate(id).ok_or(BoardError::TaskNotFound(id))?;
        let task = self.board.remove_at(slot.status, slot.index)?;
        info!(task_id = %id, status = %slot.status, "task deleted");
        Ok(task)
    }
}
