//! Sampling parameters sent with every classification request.

use serde::{Deserialize, Serialize};

/// Inference parameters for the classification call.
///
/// Every field can be omitted when deserializing; missing fields take the
/// classifier defaults (deterministic sampling, short output).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Maximum tokens to generate. Defaults to 1000.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Sampling temperature. Defaults to 0.0.
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Nucleus sampling cutoff. Defaults to 0.9.
    #[serde(default = "default_top_p")]
    pub top_p: f64,

    /// Sequences that stop generation. Empty by default.
    #[serde(default)]
    pub stop_sequences: Vec<String>,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            top_p: default_top_p(),
            stop_sequences: Vec::new(),
        }
    }
}

const fn default_max_tokens() -> u32 {
    1000
}

const fn default_temperature() -> f64 {
    0.0
}

const fn default_top_p() -> f64 {
    0.9
}
