//! Model API adapters.
//!
//! Provides implementations of the
//! [`ToolLlm`](crate::port::outbound::llm::ToolLlm) trait.

pub mod anthropic;
