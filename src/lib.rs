//! Intent router - LLM-backed intent classification.
//!
//! Sends user input to a hosted model, forces the answer through a single
//! `analyzePrompt` tool call, and maps the returned agent identifier onto a
//! registered [`Agent`](domain::agent::Agent).
//!
//! # Architecture
//!
//! - **`domain`** - Agents, conversation messages, classifier results
//! - **`port`** - `Classifier`, `ToolLlm` and `ClassifierCallbacks` traits
//! - **`application`** - `IntentClassifier`, prompt rendering, tool schema
//! - **`adapter`** - Anthropic Messages API client, log callbacks, CLI
//! - **`infrastructure`** - TOML configuration and component factories
//!
//! # Example
//!
//! ```no_run
//! use intent_router::domain::agent::Agent;
//! use intent_router::infrastructure::factory::classifier::{
//!     anthropic_classifier, AnthropicClassifierOptions,
//! };
//! use intent_router::port::inbound::classifier::Classifier;
//!
//! # async fn run() -> intent_router::error::Result<()> {
//! let mut classifier = anthropic_classifier(AnthropicClassifierOptions::new("sk-..."))?;
//! classifier.set_agents([
//!     Agent::new("Tech Agent", "Software and hardware problems"),
//!     Agent::new("Billing", "Invoices and refunds"),
//! ]);
//!
//! let result = classifier.classify("I was charged twice", &[]).await?;
//! println!("{:?} ({})", result.agent_id(), result.confidence);
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
