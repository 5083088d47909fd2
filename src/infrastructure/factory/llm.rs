//! Model API client factory.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::adapter::outbound::llm::anthropic::{Anthropic, API_KEY_ENV};
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::llm::ToolLlm;

/// Build the model client from configuration.
///
/// # Errors
///
/// Returns [`ConfigError::MissingField`] when no API key is available, or an
/// HTTP error if the client cannot be built.
pub fn build_llm_client(config: &Config) -> Result<Arc<dyn ToolLlm>> {
    let api_key = config
        .api_key
        .as_ref()
        .ok_or(ConfigError::MissingField { field: API_KEY_ENV })?;

    let client: Arc<dyn ToolLlm> = Arc::new(Anthropic::with_options(
        api_key.expose(),
        &config.classifier.base_url,
        Duration::from_secs(config.classifier.timeout_secs),
    )?);

    info!(
        provider = client.name(),
        base_url = %config.classifier.base_url,
        "LLM client initialized"
    );
    Ok(client)
}
