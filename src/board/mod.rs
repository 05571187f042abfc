//! Task board ordering and mutation engine.
//!
//! Tasks are partitioned into three ordered status columns. Drag-end
//! commands reorder tasks within a column or move them across columns, and
//! creation drafts append new tasks. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Command services in [`services`]
//! - Session configuration in [`config`]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
