//! Callbacks that write classifier lifecycle events to the tracing log.

use async_trait::async_trait;
use tracing::info;

use crate::port::outbound::callbacks::{
    ClassifierCallbacks, ClassifierStartEvent, ClassifierStopEvent,
};

/// Logs every classification start and stop at `info` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogCallbacks;

#[async_trait]
impl ClassifierCallbacks for LogCallbacks {
    async fn on_classifier_start(&self, event: &ClassifierStartEvent) {
        info!(
            request_id = %event.request_id,
            model = %event.model_id,
            input_chars = event.input.chars().count(),
            max_tokens = event.inference.max_tokens,
            "Classifier started"
        );
    }

    async fn on_classifier_stop(&self, event: &ClassifierStopEvent) {
        info!(
            request_id = %event.request_id,
            agent = event.result.agent_id().unwrap_or("none"),
            confidence = event.result.confidence,
            input_tokens = event.usage.input_tokens,
            output_tokens = event.usage.output_tokens,
            total_tokens = event.usage.total(),
            elapsed_ms = u64::try_from(event.elapsed.as_millis()).unwrap_or(u64::MAX),
            "Classifier finished"
        );
    }
}
