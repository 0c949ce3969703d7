use serde::{Deserialize, Serialize};

/// One chat-style request to the external text-generation capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    /// Role instruction (language, markup rules).
    pub system: String,
    /// The task itself.
    pub user: String,
    pub max_tokens: u32,
}
