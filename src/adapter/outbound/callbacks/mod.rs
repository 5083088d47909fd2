//! Classifier callback adapters.

pub mod log;
