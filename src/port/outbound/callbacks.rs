//! Classifier lifecycle hooks.
//!
//! Callbacks observe a classification; they cannot fail it. Both hooks
//! default to doing nothing, so implementors override only what they need.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::classification::ClassifierResult;
use crate::domain::inference::InferenceConfig;
use crate::domain::usage::TokenUsage;

/// Emitted right before the model is called.
#[derive(Debug, Clone)]
pub struct ClassifierStartEvent {
    /// Correlates the start and stop events of one classification.
    pub request_id: Uuid,
    pub input: String,
    pub model_id: String,
    /// Fully rendered system prompt.
    pub system: String,
    pub inference: InferenceConfig,
    pub started_at: DateTime<Utc>,
}

/// Emitted after a classification succeeded.
#[derive(Debug, Clone)]
pub struct ClassifierStopEvent {
    pub request_id: Uuid,
    pub result: ClassifierResult,
    pub usage: TokenUsage,
    pub elapsed: Duration,
}

/// Observer of classifier start/stop.
#[async_trait]
pub trait ClassifierCallbacks: Send + Sync {
    async fn on_classifier_start(&self, _event: &ClassifierStartEvent) {}

    async fn on_classifier_stop(&self, _event: &ClassifierStopEvent) {}
}

/// Callbacks that ignore every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCallbacks;

impl ClassifierCallbacks for NoopCallbacks {}
