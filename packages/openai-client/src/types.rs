//! Chat completions request and response types.

use serde::{Deserialize, Serialize};

use crate::error::{OpenAIError, Result};

/// Chat completion request.
///
/// Serializes to exactly `{"model": ..., "messages": [...]}`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model to use (e.g., "gpt-4o-mini")
    pub model: String,

    /// Conversation messages
    pub messages: Vec<Message>,
}

impl ChatRequest {
    /// Create a new chat request with the given model.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: Vec::new(),
        }
    }

    /// Add a message to the conversation.
    pub fn message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }
}

/// Chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Role: "system", "user", "assistant"
    pub role: String,

    /// Message content
    pub content: String,
}

impl Message {
    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Chat completion response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatResponse {
    /// Content of the first choice, untouched
    pub content: String,
}

impl ChatResponse {
    /// Parse a successful response body, keeping the first choice's content.
    pub fn from_body(body: &str) -> Result<Self> {
        let raw: ChatResponseRaw =
            serde_json::from_str(body).map_err(|e| OpenAIError::Parse(e.to_string()))?;

        raw.choices
            .into_iter()
            .next()
            .map(|choice| Self {
                content: choice.message.content,
            })
            .ok_or_else(|| OpenAIError::Api("No choices in completion response".into()))
    }
}

/// Raw chat response from API (for internal parsing).
#[derive(Debug, Deserialize)]
struct ChatResponseRaw {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: String,
}
