//! Unit tests for the board module.
//!
//! Tests are organised by component, covering the store primitives, move
//! engine, task factory, identifier strategies and session commands.

mod domain_tests;
