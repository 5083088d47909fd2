//! Classifier output.

use serde::Serialize;

use super::agent::Agent;

/// The agent a classifier picked for an input, with the model's confidence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifierResult {
    /// `None` when the model named an agent that is not registered.
    pub selected_agent: Option<Agent>,
    /// Model-reported confidence, nominally between 0 and 1.
    pub confidence: f64,
}

impl ClassifierResult {
    /// Identifier of the selected agent, if any.
    #[must_use]
    pub fn agent_id(&self) -> Option<&str> {
        self.selected_agent.as_ref().map(|a| a.id.as_str())
    }
}
