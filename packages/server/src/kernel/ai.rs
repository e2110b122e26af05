// AI implementation using an OpenAI-compatible proxy
//
// This is the infrastructure implementation of BaseAI.
// The prompt template and failure placeholder live in the answering domain.

use anyhow::{Context, Result};
use async_trait::async_trait;
use openai_client::{ChatRequest, ChatResponse, Message, OpenAIClient};

use super::BaseAI;

/// Chat-completion client pointed at the AI proxy.
#[derive(Clone)]
pub struct AiProxyClient {
    client: OpenAIClient,
    model: String,
}

impl AiProxyClient {
    pub fn new(token: impl Into<String>, base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: OpenAIClient::new(token).with_base_url(base_url),
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl BaseAI for AiProxyClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        tracing::info!(model = %self.model, prompt_length = prompt.len(), "Calling AI proxy");

        let request = ChatRequest::new(&self.model).message(Message::user(prompt));

        let response = self
            .client
            .chat_completion(request)
            .await
            .context("AI proxy chat completion failed")?;

        tracing::debug!(
            response_length = response.content.len(),
            model = %self.model,
            "AI proxy response received"
        );

        Ok(answer_text(response))
    }
}

/// Completion content with surrounding whitespace removed.
fn answer_text(response: ChatResponse) -> String {
    response.content.trim().to_string()
}
