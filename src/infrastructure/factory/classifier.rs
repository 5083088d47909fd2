//! Intent classifier factory.

use std::sync::Arc;

use tracing::info;

use super::llm::build_llm_client;
use crate::adapter::outbound::llm::anthropic::Anthropic;
use crate::application::classifier::service::{
    ClassifierOptions, IntentClassifier, DEFAULT_MODEL_ID,
};
use crate::domain::inference::InferenceConfig;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::callbacks::{ClassifierCallbacks, NoopCallbacks};

/// Options for building a classifier backed by the Anthropic API directly,
/// without a configuration file.
#[derive(Clone, Default)]
pub struct AnthropicClassifierOptions {
    /// Required.
    pub api_key: String,
    /// Defaults to [`DEFAULT_MODEL_ID`].
    pub model_id: Option<String>,
    pub inference: InferenceConfig,
    /// Defaults to [`NoopCallbacks`].
    pub callbacks: Option<Arc<dyn ClassifierCallbacks>>,
}

impl AnthropicClassifierOptions {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }
}

/// Build a classifier that talks to the public Anthropic API.
///
/// The returned classifier has no agents; register them with
/// [`IntentClassifier::set_agents`].
///
/// # Errors
///
/// Returns [`ConfigError::MissingField`] if the API key is empty.
pub fn anthropic_classifier(options: AnthropicClassifierOptions) -> Result<IntentClassifier> {
    if options.api_key.trim().is_empty() {
        return Err(ConfigError::MissingField { field: "api_key" }.into());
    }

    let callbacks: Arc<dyn ClassifierCallbacks> = match options.callbacks {
        Some(callbacks) => callbacks,
        None => Arc::new(NoopCallbacks),
    };

    Ok(IntentClassifier::new(
        Arc::new(Anthropic::new(options.api_key)),
        ClassifierOptions {
            model_id: options
                .model_id
                .unwrap_or_else(|| DEFAULT_MODEL_ID.to_string()),
            inference: options.inference,
            callbacks,
        },
    ))
}

/// Build a fully-configured classifier: client, agents and prompt.
///
/// # Errors
///
/// Returns an error if the model client cannot be built.
pub fn build_classifier(
    config: &Config,
    callbacks: Arc<dyn ClassifierCallbacks>,
) -> Result<IntentClassifier> {
    let llm = build_llm_client(config)?;

    let mut classifier = IntentClassifier::new(
        llm,
        ClassifierOptions {
            model_id: config.classifier.model.clone(),
            inference: config.classifier.inference.clone(),
            callbacks,
        },
    );
    classifier.set_agents(config.agents());
    classifier.set_prompt_template(config.prompt.to_template());

    info!(
        model = %config.classifier.model,
        agents = classifier.agents().len(),
        "Classifier initialized"
    );
    Ok(classifier)
}
