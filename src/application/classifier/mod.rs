//! LLM-backed intent classification.
//!
//! - [`prompt`] - System prompt template and history formatting
//! - [`tool`] - The `analyzePrompt` tool schema and its input validation
//! - [`service`] - [`service::IntentClassifier`], the classifier itself

pub mod prompt;
pub mod service;
pub mod tool;
