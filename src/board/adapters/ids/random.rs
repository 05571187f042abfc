//! Uniform random identifier draws without uniqueness checks.

use crate::board::{
    domain::{Board, MAX_SUFFIX, MIN_GENERATED_SUFFIX, TaskId},
    ports::{IdGenerationResult, TaskIdGenerator},
};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Draws suffixes uniformly from `1000..=9999`.
///
/// The board is never consulted, so two tasks can end up sharing an
/// identifier. Use [`CollisionCheckedIdGenerator`] when that matters.
///
/// [`CollisionCheckedIdGenerator`]: super::CollisionCheckedIdGenerator
#[derive(Debug, Clone)]
pub struct RandomIdGenerator<R = StdRng> {
    rng: R,
}

impl RandomIdGenerator<StdRng> {
    /// Creates a generator seeded from the operating system.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates a reproducible generator from a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomIdGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomIdGenerator<R> {
    /// Wraps an existing random number generator.
    #[must_use]
    pub const fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Draws one identifier.
    pub(crate) fn draw(&mut self) -> IdGenerationResult<TaskId> {
        let suffix = self.rng.random_range(MIN_GENERATED_SUFFIX..=MAX_SUFFIX);
        Ok(TaskId::from_suffix(suffix)?)
    }
}

impl<R: Rng + Send> TaskIdGenerator for RandomIdGenerator<R> {
    fn next_id(&mut self, _board: &Board) -> IdGenerationResult<TaskId> {
        self.draw()
    }
}
