//! Anthropic Claude tool-use client.
//!
//! Provides an implementation of the [`ToolLlm`] trait for the Anthropic
//! Messages API, translating [`ToolRequest`]s into the wire format and
//! decoding `text` and `tool_use` content blocks.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::message::{ConversationMessage, Role};
use crate::domain::usage::TokenUsage;
use crate::error::{ConfigError, Error, Result};
use crate::port::outbound::llm::{
    ResponseBlock, ToolChoice, ToolDefinition, ToolLlm, ToolRequest, ToolResponse,
};

/// Default API host.
pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";

/// Messages API path, appended to the base URL.
const MESSAGES_PATH: &str = "/v1/messages";

/// API version header value.
const API_VERSION: &str = "2023-06-01";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

/// Anthropic Claude API client.
#[derive(Debug)]
pub struct Anthropic {
    /// HTTP client for API requests.
    client: Client,
    /// API key for authentication.
    api_key: String,
    /// Scheme and host, without a trailing slash.
    base_url: String,
}

impl Anthropic {
    /// Create a client for the public API with reqwest defaults.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create a client against `base_url` with a request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_options(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from the `ANTHROPIC_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment variable is not set or empty.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingField { field: API_KEY_ENV })?;
        Ok(Self::new(api_key))
    }

    fn endpoint(&self) -> String {
        format!("{}{MESSAGES_PATH}", self.base_url)
    }
}

#[derive(Serialize)]
struct Request<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f64,
    top_p: f64,
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    stop_sequences: &'a [String],
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Tool<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_choice: Option<WireToolChoice<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: Vec<TextContent<'a>>,
}

#[derive(Serialize)]
struct TextContent<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    text: &'a str,
}

#[derive(Serialize)]
struct Tool<'a> {
    name: &'a str,
    description: &'a str,
    input_schema: &'a Value,
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum WireToolChoice<'a> {
    Auto,
    Any,
    Tool { name: &'a str },
}

impl<'a> Request<'a> {
    fn from_port(request: &'a ToolRequest) -> Self {
        Self {
            model: &request.model,
            max_tokens: request.inference.max_tokens,
            system: &request.system,
            messages: request.messages.iter().map(Message::from_port).collect(),
            temperature: request.inference.temperature,
            top_p: request.inference.top_p,
            stop_sequences: &request.inference.stop_sequences,
            tools: request.tools.iter().map(Tool::from_port).collect(),
            tool_choice: request.tool_choice.as_ref().map(WireToolChoice::from_port),
        }
    }
}

impl<'a> Message<'a> {
    fn from_port(message: &'a ConversationMessage) -> Self {
        Self {
            role: match message.role {
                Role::User => "user",
                Role::Assistant => "assistant",
            },
            content: message
                .content
                .iter()
                .map(|c| TextContent {
                    kind: "text",
                    text: &c.text,
                })
                .collect(),
        }
    }
}

impl<'a> Tool<'a> {
    fn from_port(tool: &'a ToolDefinition) -> Self {
        Self {
            name: &tool.name,
            description: &tool.description,
            input_schema: &tool.input_schema,
        }
    }
}

impl<'a> WireToolChoice<'a> {
    fn from_port(choice: &'a ToolChoice) -> Self {
        match choice {
            ToolChoice::Auto => Self::Auto,
            ToolChoice::Any => Self::Any,
            ToolChoice::Tool { name } => Self::Tool { name },
        }
    }
}

#[derive(Deserialize)]
struct Response {
    #[serde(default)]
    id: String,
    #[serde(default)]
    model: String,
    #[serde(default)]
    stop_reason: Option<String>,
    content: Vec<ContentBlock>,
    #[serde(default)]
    usage: Usage,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentBlock {
    Text {
        text: String,
    },
    ToolUse {
        id: String,
        name: String,
        input: Value,
    },
    #[serde(other)]
    Unknown,
}

#[derive(Deserialize, Default)]
struct Usage {
    #[serde(default)]
    input_tokens: u64,
    #[serde(default)]
    output_tokens: u64,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl From<Response> for ToolResponse {
    fn from(response: Response) -> Self {
        Self {
            id: response.id,
            model: response.model,
            stop_reason: response.stop_reason,
            content: response
                .content
                .into_iter()
                .map(|block| match block {
                    ContentBlock::Text { text } => ResponseBlock::Text { text },
                    ContentBlock::ToolUse { id, name, input } => {
                        ResponseBlock::ToolUse { id, name, input }
                    }
                    ContentBlock::Unknown => ResponseBlock::Other,
                })
                .collect(),
            usage: TokenUsage {
                input_tokens: response.usage.input_tokens,
                output_tokens: response.usage.output_tokens,
            },
        }
    }
}

/// Pull a human-readable message out of an error body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

/// Map a non-success response to [`Error::Api`]. An unreadable body falls
/// back to the status reason phrase.
fn api_error(status: StatusCode, body: Option<&str>) -> Error {
    let message = match body {
        Some(body) => error_message(body),
        None => status.canonical_reason().unwrap_or_default().to_string(),
    };
    Error::Api {
        status: status.as_u16(),
        message,
    }
}

#[async_trait]
impl ToolLlm for Anthropic {
    fn name(&self) -> &'static str {
        "anthropic"
    }

    async fn invoke(&self, request: &ToolRequest) -> Result<ToolResponse> {
        let response = self
            .client
            .post(self.endpoint())
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .header("content-type", "application/json")
            .json(&Request::from_port(request))
            .send()
            .await
            .map_err(|e| Error::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.ok();
            return Err(api_error(status, body.as_deref()));
        }

        let response = response.json::<Response>().await?;
        Ok(response.into())
    }
}


/// Integration tests that require real API access.
/// Run with: `cargo test --features integration-tests -- --ignored`
#[cfg(all(test, feature = "integration-tests"))]
mod integration_tests {
    use super::*;
    use crate::domain::inference::InferenceConfig;
    use serde_json::json;

    #[tokio::test]
    #[ignore = "requires ANTHROPIC_API_KEY and network access"]
    async fn test_forced_tool_call() {
        let client = match Anthropic::from_env() {
            Ok(client) => client,
            Err(e) => {
                eprintln!("Skipping Anthropic integration test: {}", e);
                return;
            }
        };

        let request = ToolRequest {
            model: "claude-3-haiku-20240307".into(),
            system: "Report the color the user mentions.".into(),
            messages: vec![ConversationMessage::user("My car is red.")],
            inference: InferenceConfig::default(),
            tools: vec![ToolDefinition {
                name: "reportColor".into(),
                description: "Report a color".into(),
                input_schema: json!({
                    "type": "object",
                    "properties": {"color": {"type": "string"}},
                    "required": ["color"]
                }),
            }],
            tool_choice: Some(ToolChoice::Tool {
                name: "reportColor".into(),
            }),
        };

        let response = tokio::time::timeout(Duration::from_secs(30), client.invoke(&request))
            .await
            .expect("Request timed out")
            .expect("API call failed");

        let (name, input) = response.first_tool_use().expect("tool_use block");
        assert_eq!(name, "reportColor");
        assert!(input["color"].as_str().unwrap().to_lowercase().contains("red"));
    }
}
