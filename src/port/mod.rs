//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!              ┌──────────────────────────┐
//!   input ───▶ │  Classifier (inbound)    │
//!              │                          │
//!              │  IntentClassifier        │
//!              └──────┬─────────────┬─────┘
//!                     │             │
//!                     ▼             ▼
//!              ┌────────────┐ ┌──────────────────────┐
//!              │  ToolLlm   │ │ ClassifierCallbacks  │
//!              │ (model API)│ │ (lifecycle hooks)    │
//!              └────────────┘ └──────────────────────┘
//! ```
//!
//! # Available Ports
//!
//! - `inbound::classifier::Classifier` - Pick an agent for a piece of user input
//! - `outbound::llm::ToolLlm` - Tool-use completion against a model API
//! - `outbound::callbacks::ClassifierCallbacks` - Start/stop notifications

pub mod inbound;
pub mod outbound;
