//! Agent roster configuration.

use serde::Deserialize;

use crate::domain::agent::{Agent, AgentId};

/// One `[[agents]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentConfig {
    /// Explicit identifier. Derived from `name` when omitted.
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub description: String,
}

impl AgentConfig {
    /// Identifier this entry resolves to.
    #[must_use]
    pub fn agent_id(&self) -> AgentId {
        match &self.id {
            Some(id) => AgentId::new(id.as_str()),
            None => AgentId::from_name(&self.name),
        }
    }

    #[must_use]
    pub fn to_agent(&self) -> Agent {
        Agent {
            id: self.agent_id(),
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }
}
