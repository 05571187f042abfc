//! Domain model for the task board.
//!
//! The board domain models task records, their partitioning by status, the
//! drag-end command vocabulary and the read-only projection used for
//! rendering. Nothing in here performs I/O or reads the clock.

mod board;
mod command;
mod draft;
mod error;
mod ids;
mod seed;
mod task;
mod view;

pub use board::Board;
pub use command::{BoardSlot, MoveCommand, MoveOutcome, NoopReason, Relocation};
pub use draft::{TaskDetailsUpdate, TaskDraft};
pub use error::{BoardDomainError, BoardError, ParsePriorityError, ParseTaskStatusError};
pub use ids::{MAX_SUFFIX, MIN_GENERATED_SUFFIX, TASK_ID_PREFIX, TaskId};
pub use task::{Priority, TaskRecord, TaskStatus};
pub use view::{BoardView, ColumnView, TaskCard};
