//! Synthesis of new task records.

use super::BoardSessionResult;
use crate::board::{
    domain::{Board, TaskDraft, TaskRecord, TaskStatus},
    ports::TaskIdGenerator,
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;

/// Builds task records from creation drafts and appends them to a board.
pub struct TaskFactory<G, C>
where
    G: TaskIdGenerator,
    C: Clock + Send + Sync,
{
    id_generator: G,
    clock: Arc<C>,
}

impl<G, C> TaskFactory<G, C>
where
    G: TaskIdGenerator,
    C: Clock + Send + Sync,
{
    /// Creates a factory from an identifier strategy and a clock.
    #[must_use]
    pub const fn new(id_generator: G, clock: Arc<C>) -> Self {
        Self {
            id_generator,
            clock,
        }
    }

    /// Returns today's calendar date in local time.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock.local().date_naive()
    }

    /// Synthesizes a record dated today for the `status` partition.
    ///
    /// # Errors
    ///
    /// Returns [`super::BoardSessionError::IdGeneration`] when the identifier
    /// strategy cannot produce an identifier.
    pub fn synthesize(
        &mut self,
        board: &Board,
        draft: TaskDraft,
        status: TaskStatus,
    ) -> BoardSessionResult<TaskRecord> {
        let id = self.id_generator.next_id(board)?;
        Ok(TaskRecord::from_draft(id, draft, status, self.today()))
    }

    /// Synthesizes a record and appends it to the end of `status`.
    ///
    /// # Errors
    ///
    /// Returns an error when no identifier is available or the identifier is
    /// already on the board. The board is untouched on error.
    pub fn create_on(
        &mut self,
        board: &mut Board,
        draft: TaskDraft,
        status: TaskStatus,
    ) -> BoardSessionResult<TaskRecord> {
        let task = self.synthesize(board, draft, status)?;
        let end = board.list_of(status).len();
        board.insert_at(status, end, task.clone())?;
        Ok(task)
    }
}
