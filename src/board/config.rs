//! Board session configuration.

use crate::board::{
    adapters::ids::{
        CollisionCheckedIdGenerator, DEFAULT_MAX_ATTEMPTS, RandomIdGenerator,
        SequentialIdGenerator,
    },
    domain::{Board, MIN_GENERATED_SUFFIX},
    ports::TaskIdGenerator,
};
use serde::{Deserialize, Serialize};

/// How new task identifiers are produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// Uniform draw from `1000..=9999` with no uniqueness check.
    #[default]
    Random,
    /// Uniform draw retried until the identifier is free.
    CollisionChecked,
    /// Increasing suffixes that skip identifiers already in use.
    Sequential,
}

/// Initial board contents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardSeed {
    /// Start with no tasks.
    #[default]
    Empty,
    /// Start with the seven sample tasks.
    Demo,
}

/// Configuration for a board session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Identifier strategy for new tasks.
    pub id_strategy: IdStrategy,
    /// Draws attempted by [`IdStrategy::CollisionChecked`].
    pub max_id_attempts: u32,
    /// First suffix handed out by [`IdStrategy::Sequential`].
    pub sequential_start: u16,
    /// Fixed seed for the random strategies.
    pub rng_seed: Option<u64>,
    /// Initial board contents.
    pub seed: BoardSeed,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            id_strategy: IdStrategy::Random,
            max_id_attempts: DEFAULT_MAX_ATTEMPTS,
            sequential_start: MIN_GENERATED_SUFFIX,
            rng_seed: None,
            seed: BoardSeed::Empty,
        }
    }
}

impl BoardConfig {
    /// Creates a configuration that always yields the same identifiers.
    ///
    /// Useful for tests and replays.
    #[must_use]
    pub fn deterministic() -> Self {
        Self {
            id_strategy: IdStrategy::Sequential,
            ..Self::default()
        }
    }

    /// Parses a configuration from JSON; missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`serde_json::Error`] when the payload is not
    /// a valid configuration object.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Builds the identifier strategy described by this configuration.
    #[must_use]
    pub fn id_generator(&self) -> Box<dyn TaskIdGenerator> {
        match self.id_strategy {
            IdStrategy::Random => Box::new(self.random()),
            IdStrategy::CollisionChecked => Box::new(CollisionCheckedIdGenerator::from_random(
                self.random(),
                self.max_id_attempts,
            )),
            IdStrategy::Sequential => {
                Box::new(SequentialIdGenerator::starting_at(self.sequential_start))
            }
        }
    }

    /// Builds the initial board.
    #[must_use]
    pub fn initial_board(&self) -> Board {
        match self.seed {
            BoardSeed::Empty => Board::new(),
            BoardSeed::Demo => Board::demo(),
        }
    }

    fn random(&self) -> RandomIdGenerator {
        self.rng_seed
            .map_or_else(RandomIdGenerator::new, RandomIdGenerator::seeded)
    }
}
