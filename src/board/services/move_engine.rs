//! Drag-end command application.

use crate::board::domain::{Board, BoardError, MoveCommand, MoveOutcome, NoopReason, Relocation};

/// New board state computed for a command, paired with what happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResolution {
    /// Replacement board, or `None` when the command was a no-op.
    pub board: Option<Board>,
    /// Description of the effect.
    pub outcome: MoveOutcome,
}

impl MoveResolution {
    const fn unchanged(reason: NoopReason) -> Self {
        Self {
            board: None,
            outcome: MoveOutcome::Unchanged { reason },
        }
    }
}

/// Translates one drag-end command into a single board replacement.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveEngine;

impl MoveEngine {
    /// Computes the board that results from `command` without touching
    /// `snapshot`.
    ///
    /// The dragged task is taken out of its source partition before it is
    /// inserted, so the destination index counts positions with the task
    /// already gone. Its status is rewritten to the destination status; no
    /// other field changes.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::IndexOutOfBounds`] when either slot does not
    /// exist in `snapshot`.
    pub fn resolve(snapshot: &Board, command: MoveCommand) -> Result<MoveResolution, BoardError> {
        let relocation = match command {
            MoveCommand::Cancelled => return Ok(MoveResolution::unchanged(NoopReason::Cancelled)),
            MoveCommand::Relocate(relocation) => relocation,
        };
        if relocation.is_origin_drop() {
            return Ok(MoveResolution::unchanged(NoopReason::DroppedOnOrigin));
        }
        Self::splice(snapshot, relocation)
    }

    fn splice(snapshot: &Board, relocation: Relocation) -> Result<MoveResolution, BoardError> {
        let Relocation {
            source,
            destination,
        } = relocation;
        let mut next = snapshot.clone();
        let task = next.remove_at(source.status, source.index)?;
        let task_id = task.id();
        next.insert_at(destination.status, destination.index, task)?;
        Ok(MoveResolution {
            board: Some(next),
            outcome: MoveOutcome::Moved {
                task_id,
                from: source,
                to: destination,
            },
        })
    }
}
