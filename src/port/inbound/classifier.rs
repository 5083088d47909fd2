//! Intent classification port.

use async_trait::async_trait;

use crate::domain::classification::ClassifierResult;
use crate::domain::message::ConversationMessage;
use crate::error::Result;

/// Routes a piece of user input to one of a set of agents.
///
/// # Errors
///
/// [`classify`](Self::classify) fails when the backing model cannot be
/// reached or returns something that is not a usable classification.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Return the classifier name for logging.
    fn name(&self) -> &'static str;

    /// Classify `input` given the prior conversation.
    async fn classify(
        &self,
        input: &str,
        history: &[ConversationMessage],
    ) -> Result<ClassifierResult>;
}
