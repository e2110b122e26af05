use std::sync::Arc;

use tracing::warn;

use crate::kernel::BaseAI;

/// Returned in place of a completion when the remote call fails.
pub const COMPLETION_FAILURE_ANSWER: &str = "Error processing with AI";

/// Prompt sent for questions no rule or upload could answer.
pub fn course_prompt(question: &str) -> String {
    format!(
        "Answer this question from IIT Madras Data Science course: {}",
        question
    )
}

/// Last-resort answer source. Never fails: errors become a fixed placeholder.
#[derive(Clone)]
pub struct RemoteCompletion {
    ai: Arc<dyn BaseAI>,
}

impl RemoteCompletion {
    pub fn new(ai: Arc<dyn BaseAI>) -> Self {
        Self { ai }
    }

    pub async fn complete(&self, prompt: &str) -> String {
        match self.ai.complete(prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "Error calling AI proxy");
                COMPLETION_FAILURE_ANSWER.to_string()
            }
        }
    }
}
