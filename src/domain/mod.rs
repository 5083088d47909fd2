//! Provider-agnostic types exchanged by the classifier.
//!
//! Nothing in here performs I/O; the model API and the lifecycle hooks live
//! behind the traits in [`crate::port`].

pub mod agent;
pub mod classification;
pub mod inference;
pub mod message;
pub mod usage;
