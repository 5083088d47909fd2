//! Infrastructure configuration modules.

pub mod agents;
pub mod classifier;
pub mod logging;
pub mod prompt;
pub mod settings;
