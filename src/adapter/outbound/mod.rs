//! Outbound adapters (driven side).

pub mod callbacks;
pub mod llm;
