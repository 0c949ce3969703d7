//! Wire types for OpenAI-compatible chat-completions endpoints.

use a11y_core::errors::EnrichmentError;
use a11y_core::models::CompletionRequest;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Response body. Providers put either `choices` or `error` on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
}

impl From<&CompletionRequest> for ChatRequest {
    fn from(request: &CompletionRequest) -> Self {
        Self {
            model: request.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: request.system.clone(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: request.user.clone(),
                },
            ],
            max_tokens: request.max_tokens,
        }
    }
}

impl ChatResponse {
    /// Text of the first choice.
    pub fn into_text(self) -> Result<String, EnrichmentError> {
        if let Some(error) = self.error {
            return Err(EnrichmentError::Api {
                message: error.message,
            });
        }
        self.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(EnrichmentError::EmptyChoices)
    }
}
