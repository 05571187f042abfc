//! Error types for board domain validation and parsing.

use super::{TaskId, TaskStatus};
use thiserror::Error;

/// Errors returned while constructing domain board values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The task identifier does not follow `FYR-dddd` format.
    #[error("invalid task identifier '{0}', expected FYR- followed by four digits")]
    InvalidTaskId(String),

    /// The numeric identifier suffix does not fit in four digits.
    #[error("task identifier suffix {0} does not fit in four digits")]
    SuffixOutOfRange(u16),
}

/// Errors returned by board store primitives.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    /// The index lies outside the partition.
    #[error("index {index} is out of bounds for {status} (length {len})")]
    IndexOutOfBounds {
        /// Partition that was addressed.
        status: TaskStatus,
        /// Offending index.
        index: usize,
        /// Partition length at the time of the call.
        len: usize,
    },

    /// A task with the same identifier is already on the board.
    #[error("duplicate task identifier: {0}")]
    DuplicateTaskId(TaskId),

    /// No task with the identifier is on the board.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
}

/// Error returned while parsing task statuses from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task priorities from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParsePriorityError(pub String);
