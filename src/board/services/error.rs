//! Service-level errors for board sessions.

use crate::board::{domain::BoardError, ports::IdGenerationError};
use thiserror::Error;

/// Errors returned by board session operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardSessionError {
    /// A store primitive rejected the command.
    #[error(transparent)]
    Board(#[from] BoardError),
    /// No identifier could be produced for a new task.
    #[error(transparent)]
    IdGeneration(#[from] IdGenerationError),
}

/// Result type for board session operations.
pub type BoardSessionResult<T> = Result<T, BoardSessionError>;
