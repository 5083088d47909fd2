//! The `analyzePrompt` tool the model must call to report its choice.

use serde_json::{json, Map, Value};

use crate::error::ClassifierError;
use crate::port::outbound::llm::{ToolChoice, ToolDefinition};

/// Name of the classification tool.
pub const ANALYZE_PROMPT_TOOL: &str = "analyzePrompt";

/// Tool definition sent with every classification request.
#[must_use]
pub fn analyze_prompt_tool() -> ToolDefinition {
    ToolDefinition {
        name: ANALYZE_PROMPT_TOOL.to_string(),
        description: "Analyze the user input and provide structured output".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "userinput": {
                    "type": "string",
                    "description": "The original user input",
                },
                "selected_agent": {
                    "type": "string",
                    "description": "The name of the selected agent",
                },
                "confidence": {
                    "type": "number",
                    "description": "Confidence level between 0 and 1",
                },
            },
            "required": ["userinput", "selected_agent", "confidence"],
        }),
    }
}

/// Forces the model to answer through [`ANALYZE_PROMPT_TOOL`].
#[must_use]
pub fn analyze_prompt_choice() -> ToolChoice {
    ToolChoice::Tool {
        name: ANALYZE_PROMPT_TOOL.to_string(),
    }
}

/// Validated input of an `analyzePrompt` call.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzePromptInput {
    pub userinput: Option<String>,
    pub selected_agent: String,
    pub confidence: f64,
}

impl AnalyzePromptInput {
    /// Validate raw tool input.
    ///
    /// The input must be an object with `selected_agent` (a string) and
    /// `confidence` (a number, or a string holding one). Models sometimes
    /// quote numbers, so `"0.8"` is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifierError::InvalidToolInput`] describing the first
    /// problem found.
    pub fn from_value(value: &Value) -> Result<Self, ClassifierError> {
        let object = value
            .as_object()
            .ok_or_else(|| invalid("input is not an object"))?;

        let selected_agent = match field(object, "selected_agent")? {
            Value::String(s) => s.clone(),
            other => {
                return Err(invalid(format!(
                    "selected_agent must be a string, got {other}"
                )))
            }
        };

        let confidence = parse_confidence(field(object, "confidence")?)?;

        let userinput = object
            .get("userinput")
            .and_then(Value::as_str)
            .map(str::to_string);

        Ok(Self {
            userinput,
            selected_agent,
            confidence,
        })
    }
}

fn field<'a>(
    object: &'a Map<String, Value>,
    name: &'static str,
) -> Result<&'a Value, ClassifierError> {
    object
        .get(name)
        .ok_or_else(|| invalid(format!("missing {name}")))
}

fn parse_confidence(value: &Value) -> Result<f64, ClassifierError> {
    let confidence = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .ok_or_else(|| invalid(format!("confidence must be numeric, got {value}")))?;

    if !confidence.is_finite() {
        return Err(invalid(format!("confidence must be finite, got {confidence}")));
    }
    Ok(confidence)
}

fn invalid(reason: impl Into<String>) -> ClassifierError {
    ClassifierError::InvalidToolInput(reason.into())
}
