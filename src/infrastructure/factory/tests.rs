//! Tests for factory functions.
//!
//! Verifies that factory functions correctly build components based on
//! configuration settings.

use std::sync::Arc;

use crate::domain::inference::InferenceConfig;
use crate::error::{ConfigError, Error};
use crate::infrastructure::config::settings::{ApiKey, Config};
use crate::infrastructure::factory::{classifier, llm};
use crate::port::outbound::callbacks::NoopCallbacks;

fn config_with_key(toml: &str, key: Option<&str>) -> Config {
    Config::parse_toml_with_api_key(toml, key.map(ApiKey::new)).expect("config should parse")
}

// ---------------------------------------------------------------------------
// LLM Factory Tests
// ---------------------------------------------------------------------------

mod llm_factory {
    use super::*;

    #[test]
    fn errors_when_api_key_missing() {
        let config = config_with_key("", None);

        match llm::build_llm_client(&config) {
            Err(Error::Config(ConfigError::MissingField { field })) => {
                assert_eq!(field, "ANTHROPIC_API_KEY");
            }
            Err(other) => panic!("Expected missing key error, got {other}"),
            Ok(_) => panic!("Expected missing key error"),
        }
    }

    #[test]
    fn returns_anthropic_client_when_key_set() {
        let config = config_with_key("", Some("sk-test"));

        let client = llm::build_llm_client(&config).expect("client");
        assert_eq!(client.name(), "anthropic");
    }
}

// ---------------------------------------------------------------------------
// Classifier Factory Tests
// ---------------------------------------------------------------------------

mod classifier_factory {
    use super::*;

    #[test]
    fn registers_configured_agents_and_model() {
        let config = config_with_key(
            r#"
            [classifier]
            model = "claude-3-haiku-20240307"

            [classifier.inference]
            max_tokens = 200

            [[agents]]
            name = "Tech Agent"
            description = "Hardware"

            [[agents]]
            name = "Billing"
            description = "Invoices"
            "#,
            Some("sk-test"),
        );

        let classifier =
            classifier::build_classifier(&config, Arc::new(NoopCallbacks)).expect("classifier");

        assert_eq!(classifier.model_id(), "claude-3-haiku-20240307");
        assert_eq!(classifier.inference().max_tokens, 200);
        assert_eq!(classifier.agents().len(), 2);
        assert!(classifier
            .system_prompt(&[])
            .contains("tech-agent:Hardware\n\nbilling:Invoices"));
    }

    #[test]
    fn uses_configured_prompt_template() {
        let config = config_with_key(
            r#"
            [prompt]
            template = "Route to one of: {{AGENT_DESCRIPTIONS}}"

            [[agents]]
            name = "Billing"
            description = "Invoices"
            "#,
            Some("sk-test"),
        );

        let classifier =
            classifier::build_classifier(&config, Arc::new(NoopCallbacks)).expect("classifier");
        assert_eq!(classifier.system_prompt(&[]), "Route to one of: billing:Invoices");
    }

    #[test]
    fn anthropic_classifier_requires_key() {
        let result =
            classifier::anthropic_classifier(classifier::AnthropicClassifierOptions::new(""));
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingField { field: "api_key" }))
        ));
    }

    #[test]
    fn anthropic_classifier_applies_defaults() {
        let classifier =
            classifier::anthropic_classifier(classifier::AnthropicClassifierOptions::new("sk-test"))
                .expect("classifier");

        assert_eq!(classifier.model_id(), "claude-3-5-sonnet-20240620");
        assert_eq!(classifier.inference(), &InferenceConfig::default());
        assert!(classifier.agents().is_empty());
    }

    #[test]
    fn anthropic_classifier_honors_overrides() {
        let options = classifier::AnthropicClassifierOptions {
            model_id: Some("claude-3-opus-20240229".into()),
            inference: InferenceConfig {
                temperature: 0.3,
                ..InferenceConfig::default()
            },
            ..classifier::AnthropicClassifierOptions::new("sk-test")
        };

        let classifier = classifier::anthropic_classifier(options).expect("classifier");
        assert_eq!(classifier.model_id(), "claude-3-opus-20240229");
        assert_eq!(classifier.inference().temperature, 0.3);
        assert_eq!(classifier.inference().top_p, 0.9);
    }
}
