//! Agent descriptors and the directory the classifier chooses from.

use std::fmt;

use serde::Serialize;

/// Agent identifier - newtype for type safety.
///
/// Identifiers are stored lowercase so lookups are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AgentId(String);

impl AgentId {
    /// Create a new `AgentId`, normalizing it to lowercase.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into().trim().to_lowercase())
    }

    /// Derive an identifier from a human-readable agent name.
    ///
    /// Characters other than ASCII alphanumerics, whitespace and `-` are
    /// dropped and whitespace runs collapse into a single `-`, so
    /// `"Tech Agent"` becomes `"tech-agent"`.
    pub fn from_name(name: &str) -> Self {
        let mut key = String::with_capacity(name.len());
        let mut in_space = false;

        for c in name.chars() {
            if c.is_whitespace() {
                in_space = true;
                continue;
            }
            if !(c.is_ascii_alphanumeric() || c == '-') {
                continue;
            }
            if in_space {
                key.push('-');
                in_space = false;
            }
            key.push(c.to_ascii_lowercase());
        }
        if in_space {
            key.push('-');
        }

        Self(key)
    }

    /// Get the agent ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AgentId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// An agent the classifier can route input to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Agent {
    pub id: AgentId,
    pub name: String,
    /// What the agent handles. This text is shown to the model verbatim.
    pub description: String,
}

impl Agent {
    /// Create an agent whose id is derived from its name.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: AgentId::from_name(&name),
            name,
            description: description.into(),
        }
    }

    /// Override the derived identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<AgentId>) -> Self {
        self.id = id.into();
        self
    }
}

/// Ordered set of agents, keyed by [`AgentId`].
///
/// Insertion order is preserved so the prompt lists agents in the order
/// they were registered.
#[derive(Debug, Clone, Default)]
pub struct AgentDirectory {
    agents: Vec<Agent>,
}

impl AgentDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an agent, replacing any existing entry with the same id.
    pub fn insert(&mut self, agent: Agent) {
        match self.agents.iter_mut().find(|a| a.id == agent.id) {
            Some(existing) => *existing = agent,
            None => self.agents.push(agent),
        }
    }

    /// Look up an agent from the raw identifier a model returned.
    ///
    /// Only the first whitespace-separated token is considered, compared
    /// case-insensitively. Empty input yields `None`.
    #[must_use]
    pub fn get_by_id(&self, raw: &str) -> Option<&Agent> {
        let token = raw.split_whitespace().next()?.to_lowercase();
        self.agents.iter().find(|a| a.id.as_str() == token)
    }

    /// Agent descriptions formatted as `id:description`, separated by a
    /// blank line.
    #[must_use]
    pub fn descriptions(&self) -> String {
        self.agents
            .iter()
            .map(|a| format!("{}:{}", a.id, a.description))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    pub fn iter(&self) -> impl Iterator<Item = &Agent> {
        self.agents.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

impl FromIterator<Agent> for AgentDirectory {
    fn from_iter<I: IntoIterator<Item = Agent>>(iter: I) -> Self {
        let mut directory = Self::new();
        for agent in iter {
            directory.insert(agent);
        }
        directory
    }
}
