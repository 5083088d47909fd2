//! Implementations of ports (hexagonal adapters).
//!
//! - [`inbound`] - The command-line interface driving the classifier
//! - [`outbound`] - The Anthropic client and logging callbacks

pub mod inbound;
pub mod outbound;
