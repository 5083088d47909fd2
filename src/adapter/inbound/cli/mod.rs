//! Command-line interface.
//!
//! - [`command`] - `clap` definitions
//! - [`classify`] - `intent-router classify`
//! - [`agents`] - `intent-router agents`
//! - [`check`] - `intent-router check config`
//! - [`output`] - Shared terminal/JSON output helpers

pub mod agents;
pub mod check;
pub mod classify;
pub mod command;
pub mod output;
