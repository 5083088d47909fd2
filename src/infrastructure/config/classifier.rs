//! Classifier and model API configuration.

use serde::Deserialize;

use crate::adapter::outbound::llm::anthropic::DEFAULT_BASE_URL;
use crate::application::classifier::service::DEFAULT_MODEL_ID;
use crate::domain::inference::InferenceConfig;

/// Settings for the classification model call.
///
/// The API key is not part of this table; it is read from
/// `ANTHROPIC_API_KEY` at load time.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierConfig {
    /// Model identifier.
    ///
    /// Defaults to "claude-3-5-sonnet-20240620".
    #[serde(default = "default_model")]
    pub model: String,

    /// API host. Override to point at a proxy or a local mock.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds. Defaults to 30.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Sampling parameters.
    #[serde(default)]
    pub inference: InferenceConfig,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            inference: InferenceConfig::default(),
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL_ID.into()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.into()
}

const fn default_timeout_secs() -> u64 {
    30
}
