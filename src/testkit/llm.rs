//! Scripted model client.

use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;

use crate::domain::usage::TokenUsage;
use crate::error::{Error, Result};
use crate::port::outbound::llm::{ResponseBlock, ToolLlm, ToolRequest, ToolResponse};

/// [`ToolLlm`] that returns queued outcomes in order and records every
/// request it receives.
///
/// Invoking it with an empty queue yields [`Error::Connection`].
#[derive(Default)]
pub struct ScriptedLlm {
    outcomes: Mutex<VecDeque<Result<ToolResponse>>>,
    requests: Mutex<Vec<ToolRequest>>,
}

impl ScriptedLlm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response.
    pub fn push_response(&self, response: ToolResponse) {
        self.outcomes.lock().push_back(Ok(response));
    }

    /// Queue a failure.
    pub fn push_error(&self, error: Error) {
        self.outcomes.lock().push_back(Err(error));
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<ToolRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl ToolLlm for ScriptedLlm {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn invoke(&self, request: &ToolRequest) -> Result<ToolResponse> {
        self.requests.lock().push(request.clone());
        self.outcomes
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(Error::Connection("no scripted response left".into())))
    }
}

/// A response holding a single `analyzePrompt` tool call with `input`.
pub fn tool_use_response(input: Value) -> ToolResponse {
    ToolResponse {
        id: "msg_test".into(),
        model: "claude-test".into(),
        stop_reason: Some("tool_use".into()),
        content: vec![ResponseBlock::ToolUse {
            id: "toolu_test".into(),
            name: "analyzePrompt".into(),
            input,
        }],
        usage: TokenUsage {
            input_tokens: 42,
            output_tokens: 8,
        },
    }
}
