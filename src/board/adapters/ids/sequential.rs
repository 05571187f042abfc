//! Monotonic identifier allocation.

use crate::board::{
    domain::{Board, MAX_SUFFIX, MIN_GENERATED_SUFFIX, TaskId},
    ports::{IdGenerationError, IdGenerationResult, TaskIdGenerator},
};

/// Hands out increasing suffixes, skipping identifiers already on the board.
///
/// Suffixes are never reused, even after the task holding one is deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequentialIdGenerator {
    next: u16,
}

impl SequentialIdGenerator {
    /// Starts allocating at `FYR-1000`.
    #[must_use]
    pub const fn new() -> Self {
        Self::starting_at(MIN_GENERATED_SUFFIX)
    }

    /// Starts allocating at the given suffix.
    #[must_use]
    pub const fn starting_at(suffix: u16) -> Self {
        Self { next: suffix }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskIdGenerator for SequentialIdGenerator {
    fn next_id(&mut self, board: &Board) -> IdGenerationResult<TaskId> {
        let mut attempts = 0_u32;
        while self.next <= MAX_SUFFIX {
            let candidate = TaskId::from_suffix(self.next)?;
            self.next = self.next.saturating_add(1);
            attempts = attempts.saturating_add(1);
            if !board.contains_id(candidate) {
                return Ok(candidate);
            }
        }
        Err(IdGenerationError::Exhausted { attempts })
    }
}
