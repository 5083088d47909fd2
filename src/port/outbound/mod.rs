//! Outbound ports: what the classifier needs from the outside world.

pub mod callbacks;
pub mod llm;
