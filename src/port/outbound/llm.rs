//! Tool-use completion port for classification adapters.
//!
//! Unlike free-text completion, a tool-use request carries JSON-schema tool
//! definitions and the model answers with structured `tool_use` blocks.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::inference::InferenceConfig;
use crate::domain::message::ConversationMessage;
use crate::domain::usage::TokenUsage;
use crate::error::Result;

/// A tool the model may call.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    /// JSON schema of the tool input.
    pub input_schema: Value,
}

/// How the model is allowed to pick tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolChoice {
    /// The model decides whether to call a tool.
    Auto,
    /// The model must call some tool.
    Any,
    /// The model must call the named tool.
    Tool { name: String },
}

/// A single tool-use completion request.
#[derive(Debug, Clone)]
pub struct ToolRequest {
    pub model: String,
    pub system: String,
    pub messages: Vec<ConversationMessage>,
    pub inference: InferenceConfig,
    pub tools: Vec<ToolDefinition>,
    pub tool_choice: Option<ToolChoice>,
}

/// One block of model output.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBlock {
    Text { text: String },
    ToolUse { id: String, name: String, input: Value },
    /// Block types this crate does not interpret.
    Other,
}

/// Model response to a [`ToolRequest`].
#[derive(Debug, Clone, PartialEq)]
pub struct ToolResponse {
    pub id: String,
    pub model: String,
    pub stop_reason: Option<String>,
    pub content: Vec<ResponseBlock>,
    pub usage: TokenUsage,
}

impl ToolResponse {
    /// Input of the first `tool_use` block, with the tool name.
    #[must_use]
    pub fn first_tool_use(&self) -> Option<(&str, &Value)> {
        self.content.iter().find_map(|block| match block {
            ResponseBlock::ToolUse { name, input, .. } => Some((name.as_str(), input)),
            _ => None,
        })
    }
}

/// Client for tool-use completions against a hosted model.
///
/// # Thread Safety
///
/// Implementations must be thread-safe (`Send + Sync`) so one client can
/// serve concurrent classifications.
///
/// # Errors
///
/// [`invoke`](Self::invoke) returns an error for transport failures,
/// non-success API statuses, or undecodable responses.
#[async_trait]
pub trait ToolLlm: Send + Sync {
    /// Return the provider name for logging.
    fn name(&self) -> &'static str;

    /// Send the request and return the decoded response.
    async fn invoke(&self, request: &ToolRequest) -> Result<ToolResponse>;
}
