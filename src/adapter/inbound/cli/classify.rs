//! `intent-router classify`.

use std::path::Path;
use std::sync::Arc;

use serde_json::json;

use super::command::ClassifyArgs;
use super::output;
use crate::adapter::outbound::callbacks::log::LogCallbacks;
use crate::domain::classification::ClassifierResult;
use crate::domain::message::ConversationMessage;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::factory::classifier::build_classifier;
use crate::port::inbound::classifier::Classifier;

/// Classify one input and print the selected agent.
pub async fn execute(args: ClassifyArgs) -> Result<()> {
    let mut config = Config::load(&args.config)?;
    if let Some(model) = args.model {
        config.classifier.model = model;
    }
    config.init_logging();

    let history = match &args.history {
        Some(path) => read_history(path)?,
        None => Vec::new(),
    };

    let classifier = build_classifier(&config, Arc::new(LogCallbacks))?;
    if classifier.agents().is_empty() {
        output::warning("No agents configured; the result cannot select an agent");
    }

    let result = classifier.classify(&args.input, &history).await?;
    print_result(&result);
    Ok(())
}

/// Load a JSON array of conversation messages.
pub fn read_history(path: &Path) -> Result<Vec<ConversationMessage>> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn print_result(result: &ClassifierResult) {
    if output::is_json() {
        output::json_payload(
            "classification",
            json!({
                "selected_agent": result.selected_agent,
                "confidence": result.confidence,
            }),
        );
        return;
    }

    output::section("Classification");
    match &result.selected_agent {
        Some(agent) => {
            output::field("Agent", &agent.name);
            output::field("Id", &agent.id);
        }
        None => output::warning("Model did not select a registered agent"),
    }
    output::field("Confidence", format!("{:.2}", result.confidence));
}
