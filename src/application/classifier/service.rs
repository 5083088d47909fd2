//! Tool-use intent classifier.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, error};
use uuid::Uuid;

use super::prompt::{format_history, PromptTemplate};
use super::tool::{analyze_prompt_choice, analyze_prompt_tool, AnalyzePromptInput};
use crate::domain::agent::{Agent, AgentDirectory};
use crate::domain::classification::ClassifierResult;
use crate::domain::inference::InferenceConfig;
use crate::domain::message::ConversationMessage;
use crate::error::{ClassifierError, Result};
use crate::port::inbound::classifier::Classifier;
use crate::port::outbound::callbacks::{
    ClassifierCallbacks, ClassifierStartEvent, ClassifierStopEvent, NoopCallbacks,
};
use crate::port::outbound::llm::{ToolLlm, ToolRequest, ToolResponse};

/// Model used when none is configured.
pub const DEFAULT_MODEL_ID: &str = "claude-3-5-sonnet-20240620";

/// Construction options for [`IntentClassifier`].
#[derive(Clone)]
pub struct ClassifierOptions {
    pub model_id: String,
    pub inference: InferenceConfig,
    pub callbacks: Arc<dyn ClassifierCallbacks>,
}

impl Default for ClassifierOptions {
    fn default() -> Self {
        Self {
            model_id: DEFAULT_MODEL_ID.to_string(),
            inference: InferenceConfig::default(),
            callbacks: Arc::new(NoopCallbacks),
        }
    }
}

/// Picks an agent for user input by asking a model to call the
/// `analyzePrompt` tool.
///
/// The system prompt is rendered per call from the template, the registered
/// agents and the conversation history, so a single classifier can be
/// shared across concurrent requests.
pub struct IntentClassifier {
    llm: Arc<dyn ToolLlm>,
    model_id: String,
    inference: InferenceConfig,
    callbacks: Arc<dyn ClassifierCallbacks>,
    agents: AgentDirectory,
    prompt: PromptTemplate,
}

impl IntentClassifier {
    pub fn new(llm: Arc<dyn ToolLlm>, options: ClassifierOptions) -> Self {
        Self {
            llm,
            model_id: options.model_id,
            inference: options.inference,
            callbacks: options.callbacks,
            agents: AgentDirectory::new(),
            prompt: PromptTemplate::default(),
        }
    }

    /// Replace the registered agents.
    pub fn set_agents(&mut self, agents: impl IntoIterator<Item = Agent>) {
        self.agents = agents.into_iter().collect();
    }

    /// Replace the system prompt template.
    pub fn set_prompt_template(&mut self, prompt: PromptTemplate) {
        self.prompt = prompt;
    }

    #[must_use]
    pub fn agents(&self) -> &AgentDirectory {
        &self.agents
    }

    #[must_use]
    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    #[must_use]
    pub fn inference(&self) -> &InferenceConfig {
        &self.inference
    }

    /// Render the system prompt for the given history.
    #[must_use]
    pub fn system_prompt(&self, history: &[ConversationMessage]) -> String {
        self.prompt
            .render(&self.agents.descriptions(), &format_history(history))
    }

    fn build_request(&self, input: &str, system: String) -> ToolRequest {
        ToolRequest {
            model: self.model_id.clone(),
            system,
            messages: vec![ConversationMessage::user(input)],
            inference: self.inference.clone(),
            tools: vec![analyze_prompt_tool()],
            tool_choice: Some(analyze_prompt_choice()),
        }
    }

    fn interpret(&self, response: &ToolResponse) -> Result<ClassifierResult> {
        let (_, input) = response
            .first_tool_use()
            .ok_or(ClassifierError::NoToolUse)?;
        let input = AnalyzePromptInput::from_value(input)?;

        let selected_agent = self.agents.get_by_id(&input.selected_agent).cloned();
        if selected_agent.is_none() {
            debug!(
                selected_agent = %input.selected_agent,
                "Model selected an unregistered agent"
            );
        }

        Ok(ClassifierResult {
            selected_agent,
            confidence: input.confidence,
        })
    }

    async fn process_request(
        &self,
        request: &ToolRequest,
    ) -> Result<(ClassifierResult, ToolResponse)> {
        let response = self.llm.invoke(request).await?;
        let result = self.interpret(&response)?;
        Ok((result, response))
    }
}

#[async_trait]
impl Classifier for IntentClassifier {
    fn name(&self) -> &'static str {
        "intent"
    }

    async fn classify(
        &self,
        input: &str,
        history: &[ConversationMessage],
    ) -> Result<ClassifierResult> {
        let request_id = Uuid::new_v4();
        let system = self.system_prompt(history);

        self.callbacks
            .on_classifier_start(&ClassifierStartEvent {
                request_id,
                input: input.to_string(),
                model_id: self.model_id.clone(),
                system: system.clone(),
                inference: self.inference.clone(),
                started_at: Utc::now(),
            })
            .await;

        let started = Instant::now();
        let request = self.build_request(input, system);

        let (result, response) = match self.process_request(&request).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(
                    %request_id,
                    provider = self.llm.name(),
                    error = %e,
                    "Error processing request"
                );
                return Err(e);
            }
        };

        debug!(
            %request_id,
            provider = self.llm.name(),
            agent = result.agent_id().unwrap_or("none"),
            confidence = result.confidence,
            "Classification complete"
        );

        self.callbacks
            .on_classifier_stop(&ClassifierStopEvent {
                request_id,
                result: result.clone(),
                usage: response.usage,
                elapsed: started.elapsed(),
            })
            .await;

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::port::outbound::llm::{ResponseBlock, ToolChoice};
    use crate::testkit::callbacks::RecordingCallbacks;
    use crate::testkit::llm::{tool_use_response, ScriptedLlm};
    use serde_json::json;

    fn agents() -> Vec<Agent> {
        vec![
            Agent::new("Tech Agent", "Software, hardware and connectivity problems"),
            Agent::new("Billing", "Invoices, refunds and payment methods"),
        ]
    }

    fn classifier(llm: Arc<ScriptedLlm>, callbacks: Arc<RecordingCallbacks>) -> IntentClassifier {
        let mut classifier = IntentClassifier::new(
            llm,
            ClassifierOptions {
                callbacks,
                ..ClassifierOptions::default()
            },
        );
        classifier.set_agents(agents());
        classifier
    }

    #[tokio::test]
    async fn classifies_into_registered_agent() {
        let llm = Arc::new(ScriptedLlm::new());
        llm.push_response(tool_use_response(json!({
            "userinput": "I was charged twice",
            "selected_agent": "billing",
            "confidence": 0.93
        })));
        let callbacks = Arc::new(RecordingCallbacks::new());
        let classifier = classifier(llm.clone(), callbacks.clone());

        let result = classifier.classify("I was charged twice", &[]).await.unwrap();

        assert_eq!(result.agent_id(), Some("billing"));
        assert_eq!(result.confidence, 0.93);
        assert_eq!(callbacks.starts().len(), 1);
        assert_eq!(callbacks.stops().len(), 1);
    }

    #[tokio::test]
    async fn request_carries_forced_tool_and_inference_defaults() {
        let llm = Arc::new(ScriptedLlm::new());
        llm.push_response(tool_use_response(json!({
            "selected_agent": "tech-agent",
            "confidence": 0.8
        })));
        let classifier = classifier(llm.clone(), Arc::new(RecordingCallbacks::new()));

        classifier.classify("wifi keeps dropping", &[]).await.unwrap();

        let requests = llm.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.model, DEFAULT_MODEL_ID);
        assert_eq!(request.messages, vec![ConversationMessage::user("wifi keeps dropping")]);
        assert_eq!(request.inference.max_tokens, 1000);
        assert_eq!(request.inference.temperature, 0.0);
        assert_eq!(request.inference.top_p, 0.9);
        assert_eq!(request.tools.len(), 1);
        assert_eq!(request.tools[0].name, "analyzePrompt");
        assert_eq!(
            request.tool_choice,
            Some(ToolChoice::Tool {
                name: "analyzePrompt".into()
            })
        );
        assert!(request.system.contains("tech-agent:Software, hardware and connectivity problems"));
    }

    #[tokio::test]
    async fn history_is_rendered_into_system_prompt_not_messages() {
        let llm = Arc::new(ScriptedLlm::new());
        llm.push_response(tool_use_response(json!({
            "selected_agent": "billing",
            "confidence": 0.7
        })));
        let classifier = classifier(llm.clone(), Arc::new(RecordingCallbacks::new()));
        let history = vec![
            ConversationMessage::user("Can I get a refund?"),
            ConversationMessage::assistant("Which order?"),
        ];

        classifier.classify("the last one", &history).await.unwrap();

        let request = &llm.requests()[0];
        assert_eq!(request.messages.len(), 1);
        assert!(request
            .system
            .contains("user: Can I get a refund?\nassistant: Which order?"));
    }

    #[tokio::test]
    async fn unknown_agent_yields_no_selection() {
        let llm = Arc::new(ScriptedLlm::new());
        llm.push_response(tool_use_response(json!({
            "selected_agent": "weather",
            "confidence": 0.4
        })));
        let callbacks = Arc::new(RecordingCallbacks::new());
        let classifier = classifier(llm, callbacks.clone());

        let result = classifier.classify("will it rain?", &[]).await.unwrap();

        assert!(result.selected_agent.is_none());
        assert_eq!(result.confidence, 0.4);
        assert_eq!(callbacks.stops().len(), 1);
    }

    #[tokio::test]
    async fn missing_tool_use_is_an_error_and_skips_stop() {
        let llm = Arc::new(ScriptedLlm::new());
        let mut response = tool_use_response(json!({}));
        response.content = vec![ResponseBlock::Text {
            text: "billing".into(),
        }];
        llm.push_response(response);
        let callbacks = Arc::new(RecordingCallbacks::new());
        let classifier = classifier(llm, callbacks.clone());

        let err = classifier.classify("refund", &[]).await.unwrap_err();

        assert!(matches!(err, Error::Classifier(ClassifierError::NoToolUse)));
        assert_eq!(callbacks.starts().len(), 1);
        assert!(callbacks.stops().is_empty());
    }

    #[tokio::test]
    async fn malformed_tool_input_is_an_error() {
        let llm = Arc::new(ScriptedLlm::new());
        llm.push_response(tool_use_response(json!({"selected_agent": "billing"})));
        let classifier = classifier(llm, Arc::new(RecordingCallbacks::new()));

        let err = classifier.classify("refund", &[]).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Classifier(ClassifierError::InvalidToolInput(_))
        ));
    }

    #[tokio::test]
    async fn llm_failure_propagates() {
        let llm = Arc::new(ScriptedLlm::new());
        llm.push_error(Error::Api {
            status: 529,
            message: "Overloaded".into(),
        });
        let callbacks = Arc::new(RecordingCallbacks::new());
        let classifier = classifier(llm, callbacks.clone());

        let err = classifier.classify("refund", &[]).await.unwrap_err();

        assert!(matches!(err, Error::Api { status: 529, .. }));
        assert!(callbacks.stops().is_empty());
    }

    #[tokio::test]
    async fn custom_template_and_model_are_used() {
        let llm = Arc::new(ScriptedLlm::new());
        llm.push_response(tool_use_response(json!({
            "selected_agent": "billing",
            "confidence": 0.6
        })));
        let mut classifier = IntentClassifier::new(
            llm.clone(),
            ClassifierOptions {
                model_id: "claude-3-haiku-20240307".into(),
                ..ClassifierOptions::default()
            },
        );
        classifier.set_agents(agents());
        classifier.set_prompt_template(
            PromptTemplate::new("Pick from {{AGENT_DESCRIPTIONS}} in a {{TONE}} way")
                .with_variable("TONE", "strict"),
        );

        classifier.classify("refund", &[]).await.unwrap();

        let request = &llm.requests()[0];
        assert_eq!(request.model, "claude-3-haiku-20240307");
        assert!(request.system.starts_with("Pick from tech-agent:"));
        assert!(request.system.ends_with("in a strict way"));
    }
}
