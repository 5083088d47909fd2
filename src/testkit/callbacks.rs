//! Recording lifecycle callbacks.

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::port::outbound::callbacks::{
    ClassifierCallbacks, ClassifierStartEvent, ClassifierStopEvent,
};

/// Thread-safe collector of classifier lifecycle events.
#[derive(Default)]
pub struct RecordingCallbacks {
    starts: Mutex<Vec<ClassifierStartEvent>>,
    stops: Mutex<Vec<ClassifierStopEvent>>,
}

impl RecordingCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starts(&self) -> Vec<ClassifierStartEvent> {
        self.starts.lock().clone()
    }

    pub fn stops(&self) -> Vec<ClassifierStopEvent> {
        self.stops.lock().clone()
    }
}

#[async_trait]
impl ClassifierCallbacks for RecordingCallbacks {
    async fn on_classifier_start(&self, event: &ClassifierStartEvent) {
        self.starts.lock().push(event.clone());
    }

    async fn on_classifier_stop(&self, event: &ClassifierStopEvent) {
        self.stops.lock().push(event.clone());
    }
}
