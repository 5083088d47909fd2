//! Inbound ports: capabilities the crate offers to callers.

pub mod classifier;
