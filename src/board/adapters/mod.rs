//! Adapter implementations for board ports.

pub mod ids;
