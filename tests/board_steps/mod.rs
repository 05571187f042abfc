//! Step definitions for board command scenarios.

pub mod world;

mod given;
mod then;
mod when;
