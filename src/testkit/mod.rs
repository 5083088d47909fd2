//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`llm`] - `ScriptedLlm`, a [`ToolLlm`](crate::port::outbound::llm::ToolLlm)
//!   that replays queued responses and records requests.
//! - [`callbacks`] - `RecordingCallbacks`, which keeps every lifecycle event.
//! - [`domain`] - Builders for agents and conversation history.

pub mod callbacks;
pub mod domain;
pub mod llm;
