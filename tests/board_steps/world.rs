//! Shared world state for board command BDD scenarios.

use std::sync::Arc;

use eyre::{WrapErr, eyre};
use mockable::DefaultClock;
use rstest::fixture;
use taskboard::board::{
    adapters::ids::SequentialIdGenerator,
    domain::{Board, TaskId, TaskRecord, TaskStatus},
    services::BoardSession,
};

/// Session type used by the BDD world.
pub type TestBoardSession = BoardSession<SequentialIdGenerator, DefaultClock>;

/// Scenario world for board command behaviour tests.
pub struct BoardWorld {
    pub session: TestBoardSession,
    pub snapshot: Option<Board>,
    pub last_created: Option<TaskRecord>,
}

impl BoardWorld {
    /// Creates a world over an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::over(Board::new())
    }

    /// Creates a world over the given board.
    #[must_use]
    pub fn over(board: Board) -> Self {
        Self {
            session: BoardSession::new(
                board,
                SequentialIdGenerator::starting_at(5000),
                Arc::new(DefaultClock),
            ),
            snapshot: None,
            last_created: None,
        }
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Parses a status name used in feature text.
pub fn parse_status(raw: &str) -> Result<TaskStatus, eyre::Report> {
    TaskStatus::try_from(raw).wrap_err_with(|| format!("parse status '{raw}'"))
}

/// Parses a comma-separated list of task identifiers.
pub fn parse_ids(raw: &str) -> Result<Vec<TaskId>, eyre::Report> {
    raw.split(',')
        .map(|part| TaskId::parse(part.trim()).wrap_err_with(|| format!("parse id '{part}'")))
        .collect()
}

/// Converts a step index into a slot index.
pub fn slot_index(raw: u64) -> Result<usize, eyre::Report> {
    usize::try_from(raw).map_err(|_| eyre!("index {raw} does not fit in usize"))
}
