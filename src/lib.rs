//! Taskboard: single-user task board ordering and mutation engine.
//!
//! This crate keeps a board of tasks partitioned into three ordered status
//! columns, applies drag-end commands that reorder or move tasks, and
//! synthesizes new tasks from creation drafts. All state lives in memory for
//! the lifetime of one session; rendering is left to the embedding
//! application, which reads [`board::domain::BoardView`] projections.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board model with no infrastructure dependencies
//! - **Ports**: Trait seams for pluggable behaviour such as identifiers
//! - **Adapters**: Concrete identifier strategies
//! - **Services**: The move engine, task factory and session container
//!
//! # Modules
//!
//! - [`board`]: Board model, commands and session
//! - [`telemetry`]: Logging setup for host binaries

pub mod board;
pub mod telemetry;
