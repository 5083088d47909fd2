//! Factory modules for building infrastructure components.
//!
//! Provides factory functions that construct fully-configured components
//! from application configuration.
//!
//! # Submodules
//!
//! - [`classifier`] - Intent classifier construction
//! - [`llm`] - Model API client construction

pub mod classifier;
pub mod llm;

#[cfg(test)]
mod tests;
