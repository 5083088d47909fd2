//! Application services (use cases).
//!
//! These services orchestrate domain logic and talk to the outside world
//! only through the traits in [`crate::port`].

pub mod classifier;
