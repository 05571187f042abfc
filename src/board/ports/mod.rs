//! Port contracts for the task board.
//!
//! Ports define the seams where board services accept pluggable behaviour.

pub mod id_generator;

pub use id_generator::{IdGenerationError, IdGenerationResult, TaskIdGenerator};
