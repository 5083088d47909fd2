//! `intent-router check`.

use std::path::Path;

use super::output;
use crate::adapter::outbound::llm::anthropic::API_KEY_ENV;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Validate configuration file without calling the model.
pub fn execute_config<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let path = config_path.as_ref();
    let config = Config::load(path)?;

    output::section("Configuration Check");
    output::field("Config", path.display());
    output::success("Configuration file is valid");

    output::section("Summary");
    output::field("Model", &config.classifier.model);
    output::field("Endpoint", &config.classifier.base_url);
    output::field("Max tokens", config.classifier.inference.max_tokens);
    output::field("Temperature", config.classifier.inference.temperature);
    output::field("Top p", config.classifier.inference.top_p);
    output::field("Agents", config.agents.len());
    output::field(
        "Prompt",
        if config.prompt.template.is_some() {
            "custom"
        } else {
            "default"
        },
    );

    if config.agents.is_empty() {
        output::warning("No agents configured");
    }

    if config.api_key.is_some() {
        output::success("API key detected");
    } else {
        output::warning(&format!("API key not configured (set {API_KEY_ENV} to classify)"));
    }

    output::success("Configuration check complete");

    Ok(())
}
