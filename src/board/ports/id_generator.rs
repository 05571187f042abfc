//! Identifier strategy port used when synthesizing new tasks.

use crate::board::domain::{Board, BoardDomainError, TaskId};
use thiserror::Error;

/// Result type for identifier generation.
pub type IdGenerationResult<T> = Result<T, IdGenerationError>;

/// Source of identifiers for newly created tasks.
///
/// Implementations receive the current board so they can avoid identifiers
/// already in use; whether they do is part of each strategy's contract.
pub trait TaskIdGenerator: Send {
    /// Produces the identifier for the next task.
    ///
    /// # Errors
    ///
    /// Returns [`IdGenerationError::Exhausted`] when the strategy cannot find
    /// a usable identifier.
    fn next_id(&mut self, board: &Board) -> IdGenerationResult<TaskId>;
}

impl<G> TaskIdGenerator for Box<G>
where
    G: TaskIdGenerator + ?Sized,
{
    fn next_id(&mut self, board: &Board) -> IdGenerationResult<TaskId> {
        (**self).next_id(board)
    }
}

/// Errors returned by identifier strategies.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdGenerationError {
    /// No free identifier was found.
    #[error("no free task identifier after {attempts} attempts")]
    Exhausted {
        /// Number of candidates tried.
        attempts: u32,
    },

    /// A drawn suffix could not form a valid identifier.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
}
