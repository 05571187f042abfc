//! Identifier type for board task records.

use super::BoardDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Prefix shared by every task identifier on the board.
pub const TASK_ID_PREFIX: &str = "FYR-";

/// Smallest suffix drawn by the identifier generators.
pub const MIN_GENERATED_SUFFIX: u16 = 1000;

/// Largest suffix representable in four decimal digits.
pub const MAX_SUFFIX: u16 = 9999;

const SUFFIX_DIGITS: usize = 4;

/// Board-unique task identifier in `FYR-dddd` format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskId(u16);

impl TaskId {
    /// Creates an identifier from its numeric suffix.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::SuffixOutOfRange`] when the suffix needs
    /// more than four digits.
    pub const fn from_suffix(suffix: u16) -> Result<Self, BoardDomainError> {
        if suffix > MAX_SUFFIX {
            return Err(BoardDomainError::SuffixOutOfRange(suffix));
        }
        Ok(Self(suffix))
    }

    /// Creates an identifier for built-in sample data.
    pub(crate) const fn sample(suffix: u16) -> Self {
        debug_assert!(suffix <= MAX_SUFFIX, "sample identifiers use four digits");
        Self(suffix)
    }

    /// Parses an identifier from its textual `FYR-dddd` form.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidTaskId`] when the prefix is missing
    /// or the remainder is not exactly four ASCII digits.
    pub fn parse(value: &str) -> Result<Self, BoardDomainError> {
        let invalid = || BoardDomainError::InvalidTaskId(value.to_owned());
        let digits = value.strip_prefix(TASK_ID_PREFIX).ok_or_else(invalid)?;
        if digits.len() != SUFFIX_DIGITS || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(invalid());
        }
        let suffix = digits.parse::<u16>().map_err(|_| invalid())?;
        Ok(Self(suffix))
    }

    /// Returns the numeric suffix.
    #[must_use]
    pub const fn suffix(self) -> u16 {
        self.0
    }
}

impl FromStr for TaskId {
    type Err = BoardDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl TryFrom<String> for TaskId {
    type Error = BoardDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TaskId> for String {
    fn from(id: TaskId) -> Self {
        id.to_string()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{TASK_ID_PREFIX}{:04}", self.0)
    }
}
