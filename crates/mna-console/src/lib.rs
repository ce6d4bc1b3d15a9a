//! mna-console library root.
//!
//! Re-exports internal modules so that integration tests can drive the
//! command layer without a terminal.

pub mod commands;
pub mod config;
pub mod state;
