//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file; the API key comes only from the
//! `ANTHROPIC_API_KEY` environment variable.
//!
//! # Example
//!
//! ```no_run
//! use intent_router::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::Deserialize;

use super::agents::AgentConfig;
use super::classifier::ClassifierConfig;
use super::logging::LoggingConfig;
use super::prompt::PromptConfig;
use crate::adapter::outbound::llm::anthropic::API_KEY_ENV;
use crate::domain::agent::Agent;
use crate::error::{ConfigError, Result};

/// API key wrapper that keeps the secret out of `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`]. Every table is optional.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Model and sampling settings.
    #[serde(default)]
    pub classifier: ClassifierConfig,

    /// System prompt override and custom variables.
    #[serde(default)]
    pub prompt: PromptConfig,

    /// Agents the classifier chooses between, in prompt order.
    #[serde(default)]
    pub agents: Vec<AgentConfig>,

    /// API key, populated from the environment (never from the file).
    #[serde(skip)]
    pub api_key: Option<ApiKey>,
}

impl Config {
    /// Parse configuration from TOML, taking the API key from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or fails validation.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .map(ApiKey::new);
        Self::parse_toml_with_api_key(content, api_key)
    }

    /// Parse configuration from TOML with an explicit API key.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or fails validation.
    pub fn parse_toml_with_api_key(content: &str, api_key: Option<ApiKey>) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.api_key = api_key;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    fn validate(&self) -> Result<()> {
        let classifier = &self.classifier;

        if classifier.model.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "model" }.into());
        }
        if !(classifier.base_url.starts_with("http://")
            || classifier.base_url.starts_with("https://"))
        {
            return Err(ConfigError::InvalidValue {
                field: "base_url",
                reason: format!("expected an http(s) URL, got '{}'", classifier.base_url),
            }
            .into());
        }
        if classifier.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_secs",
                reason: "must be greater than 0".into(),
            }
            .into());
        }

        let inference = &classifier.inference;
        if inference.max_tokens == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_tokens",
                reason: "must be greater than 0".into(),
            }
            .into());
        }
        if !(0.0..=1.0).contains(&inference.temperature) {
            return Err(ConfigError::InvalidValue {
                field: "temperature",
                reason: format!("must be between 0 and 1, got {}", inference.temperature),
            }
            .into());
        }
        if !(0.0..=1.0).contains(&inference.top_p) {
            return Err(ConfigError::InvalidValue {
                field: "top_p",
                reason: format!("must be between 0 and 1, got {}", inference.top_p),
            }
            .into());
        }

        if let Some(template) = &self.prompt.template {
            if template.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "template",
                    reason: "must not be empty when set".into(),
                }
                .into());
            }
        }

        let mut seen = HashSet::new();
        for agent in &self.agents {
            if agent.name.trim().is_empty() {
                return Err(ConfigError::MissingField { field: "agents.name" }.into());
            }
            if agent.description.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "agents.description",
                    reason: format!("agent '{}' has no description", agent.name),
                }
                .into());
            }
            if let Some(explicit) = &agent.id {
                if explicit.trim().contains(char::is_whitespace) {
                    return Err(ConfigError::InvalidValue {
                        field: "agents.id",
                        reason: format!(
                            "agent '{}' id '{explicit}' must be a single word",
                            agent.name
                        ),
                    }
                    .into());
                }
            }
            let id = agent.agent_id();
            if id.as_str().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "agents.id",
                    reason: format!("agent '{}' resolves to an empty id", agent.name),
                }
                .into());
            }
            if !seen.insert(id.clone()) {
                return Err(ConfigError::InvalidValue {
                    field: "agents.id",
                    reason: format!("duplicate agent id '{id}'"),
                }
                .into());
            }
        }

        Ok(())
    }

    /// Configured agents as domain values.
    #[must_use]
    pub fn agents(&self) -> Vec<Agent> {
        self.agents.iter().map(AgentConfig::to_agent).collect()
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
