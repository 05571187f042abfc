//! Random identifier draws retried against the current board.

use super::RandomIdGenerator;
use crate::board::{
    domain::{Board, TaskId},
    ports::{IdGenerationError, IdGenerationResult, TaskIdGenerator},
};
use rand::{Rng, rngs::StdRng};

/// Default number of draws before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 64;

/// Random strategy that rejects identifiers already on the board.
#[derive(Debug, Clone)]
pub struct CollisionCheckedIdGenerator<R = StdRng> {
    inner: RandomIdGenerator<R>,
    max_attempts: u32,
}

impl CollisionCheckedIdGenerator<StdRng> {
    /// Creates an OS-seeded generator with the default retry budget.
    #[must_use]
    pub fn new() -> Self {
        Self::from_random(RandomIdGenerator::new(), DEFAULT_MAX_ATTEMPTS)
    }
}

impl Default for CollisionCheckedIdGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> CollisionCheckedIdGenerator<R> {
    /// Wraps a random generator with a retry budget of at least one draw.
    #[must_use]
    pub fn from_random(inner: RandomIdGenerator<R>, max_attempts: u32) -> Self {
        Self {
            inner,
            max_attempts: max_attempts.max(1),
        }
    }
}

impl<R: Rng + Send> TaskIdGenerator for CollisionCheckedIdGenerator<R> {
    fn next_id(&mut self, board: &Board) -> IdGenerationResult<TaskId> {
        for attempt in 1..=self.max_attempts {
            let candidate = self.inner.draw()?;
            if !board.contains_id(candidate) {
                return Ok(candidate);
            }
            tracing::trace!(%candidate, attempt, "task identifier already in use");
        }
        Err(IdGenerationError::Exhausted {
            attempts: self.max_attempts,
        })
    }
}
