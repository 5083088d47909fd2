//! System prompt rendering.
//!
//! Templates use `{{NAME}}` placeholders. `AGENT_DESCRIPTIONS` and
//! `HISTORY` are always filled in by the classifier; any other name is
//! looked up in the template's custom variables and left untouched when
//! missing.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::{Captures, Regex};
use serde::Deserialize;

use crate::domain::message::ConversationMessage;

const AGENT_DESCRIPTIONS: &str = "AGENT_DESCRIPTIONS";
const HISTORY: &str = "HISTORY";

/// Prompt used when no custom template is configured.
pub const DEFAULT_PROMPT_TEMPLATE: &str = r#"You are an intent router. Your job is to read the user's latest message and pick the single agent best suited to handle it.

Available agents, one per paragraph, formatted as "agent_id:description":

{{AGENT_DESCRIPTIONS}}

Conversation so far:

{{HISTORY}}

Guidelines:
- Choose the agent whose description covers the user's request most directly.
- A short follow-up such as "yes", "ok" or "tell me more" continues the previous topic; keep the agent that handled that topic.
- If no agent fits, still answer with the closest one and give it a low confidence.
- Report confidence as a number between 0 and 1.
- Always respond by calling the analyzePrompt tool. Put the agent_id, exactly as listed above, in selected_agent."#;

/// Value substituted for a custom placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TemplateValue {
    Text(String),
    /// Rendered one item per line.
    List(Vec<String>),
}

impl TemplateValue {
    fn render(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::List(items) => items.join("\n"),
        }
    }
}

impl From<&str> for TemplateValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for TemplateValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<String>> for TemplateValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

/// A system prompt template plus its custom variables.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptTemplate {
    template: String,
    variables: HashMap<String, TemplateValue>,
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_PROMPT_TEMPLATE)
    }
}

impl PromptTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            variables: HashMap::new(),
        }
    }

    /// Add a custom variable. Built-in names cannot be overridden.
    #[must_use]
    pub fn with_variable(
        mut self,
        name: impl Into<String>,
        value: impl Into<TemplateValue>,
    ) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    /// Add several custom variables at once.
    #[must_use]
    pub fn with_variables<I, K, V>(mut self, variables: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<TemplateValue>,
    {
        self.variables
            .extend(variables.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Fill every placeholder in the template.
    #[must_use]
    pub fn render(&self, agent_descriptions: &str, history: &str) -> String {
        placeholder_pattern()
            .replace_all(&self.template, |caps: &Captures<'_>| {
                self.lookup(&caps[1], agent_descriptions, history)
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }

    fn lookup(&self, name: &str, agent_descriptions: &str, history: &str) -> Option<String> {
        match name {
            AGENT_DESCRIPTIONS => Some(agent_descriptions.to_string()),
            HISTORY => Some(history.to_string()),
            _ => self.variables.get(name).map(TemplateValue::render),
        }
    }
}

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").expect("placeholder pattern is valid")
    })
}

/// One line per message: `"<role>: <text>"`.
#[must_use]
pub fn format_history(messages: &[ConversationMessage]) -> String {
    messages
        .iter()
        .map(|m| format!("{}: {}", m.role, m.text()))
        .collect::<Vec<_>>()
        .join("\n")
}
