//! Drag-end commands and their outcomes.

use super::{TaskId, TaskStatus};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A position within one partition of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardSlot {
    /// Partition the slot belongs to.
    pub status: TaskStatus,
    /// Zero-based position inside the partition.
    pub index: usize,
}

impl BoardSlot {
    /// Creates a slot.
    #[must_use]
    pub const fn new(status: TaskStatus, index: usize) -> Self {
        Self { status, index }
    }
}

impl fmt::Display for BoardSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.status, self.index)
    }
}

/// Source and destination of a completed drag.
///
/// The destination index counts positions in the destination partition
/// after the dragged task has been taken out of its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relocation {
    /// Where the task is picked up.
    pub source: BoardSlot,
    /// Where the task is dropped.
    pub destination: BoardSlot,
}

impl Relocation {
    /// Returns `true` when the task is dropped back onto its origin.
    #[must_use]
    pub fn is_origin_drop(&self) -> bool {
        self.source == self.destination
    }
}

/// Command produced when a drag gesture ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MoveCommand {
    /// The drag ended outside any column.
    Cancelled,
    /// The drag ended over a column.
    Relocate(Relocation),
}

impl MoveCommand {
    /// Builds a relocation command.
    #[must_use]
    pub const fn relocate(source: BoardSlot, destination: BoardSlot) -> Self {
        Self::Relocate(Relocation {
            source,
            destination,
        })
    }

    /// Maps a raw drag-end result onto a command.
    ///
    /// A missing destination becomes [`MoveCommand::Cancelled`].
    #[must_use]
    pub const fn from_drag(source: BoardSlot, destination: Option<BoardSlot>) -> Self {
        match destination {
            Some(destination) => Self::relocate(source, destination),
            None => Self::Cancelled,
        }
    }
}

/// Why a move left the board untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoopReason {
    /// No destination was produced.
    Cancelled,
    /// The task was dropped onto its own position.
    DroppedOnOrigin,
}

/// Result of applying a [`MoveCommand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MoveOutcome {
    /// The board was not modified.
    Unchanged {
        /// Why nothing happened.
        reason: NoopReason,
    },
    /// A task changed position.
    Moved {
        /// The task that moved.
        task_id: TaskId,
        /// Slot the task left.
        from: BoardSlot,
        /// Slot the task now occupies.
        to: BoardSlot,
    },
}

impl MoveOutcome {
    /// Returns `true` when the board changed.
    #[must_use]
    pub const fn is_moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}
