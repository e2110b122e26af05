//! Minimal OpenAI-compatible chat completions client
//!
//! Works against the OpenAI API or any proxy that speaks the same
//! `/chat/completions` protocol (set the base URL with [`OpenAIClient::with_base_url`]).
//!
//! # Example
//!
//! ```rust,ignore
//! use openai_client::{OpenAIClient, ChatRequest, Message};
//!
//! let client = OpenAIClient::new(token)
//!     .with_base_url("https://aiproxy.sanand.workers.dev/openai/v1");
//!
//! let response = client
//!     .chat_completion(ChatRequest::new("gpt-4o-mini").message(Message::user("Hello!")))
//!     .await?;
//! ```

pub mod error;
pub mod types;

pub use error::{OpenAIError, Result};
pub use types::*;

use reqwest::Client;
use tracing::{debug, warn};

/// Chat completions client.
#[derive(Clone)]
pub struct OpenAIClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAIClient {
    /// Create a new client with the given bearer token.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: "https://api.openai.com/v1".to_string(),
        }
    }

    /// Set a custom base URL (for proxies, Azure, etc.).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Get the API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Chat completion.
    ///
    /// Issues exactly one request; no retry, no streaming. Returns the content
    /// of the first choice.
    pub async fn chat_completion(&self, request: ChatRequest) -> Result<ChatResponse> {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Chat completion request failed");
                OpenAIError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Chat completion API error");
            return Err(OpenAIError::Api(format!(
                "chat completion returned {}: {}",
                status, error_text
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| OpenAIError::Network(e.to_string()))?;
        let chat_response = ChatResponse::from_body(&body)?;

        debug!(
            model = %request.model,
            duration_ms = start.elapsed().as_millis(),
            "Chat completion"
        );

        Ok(chat_response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builder() {
        let client = OpenAIClient::new("sk-test").with_base_url("https://custom.api.com");

        assert_eq!(client.api_key(), "sk-test");
        assert_eq!(client.base_url(), "https://custom.api.com");
    }

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let client = OpenAIClient::new("sk-test")
            .with_base_url("https://aiproxy.sanand.workers.dev/openai/v1/");

        assert_eq!(
            client.base_url(),
            "https://aiproxy.sanand.workers.dev/openai/v1"
        );
    }

    #[test]
    fn unreachable_host_is_a_network_error() {
        let client = OpenAIClient::new("sk-test").with_base_url("http://127.0.0.1:1");

        let result = tokio_test::block_on(
            client.chat_completion(ChatRequest::new("gpt-4o-mini").message(Message::user("hi"))),
        );

        assert!(matches!(result, Err(OpenAIError::Network(_))));
    }
}
