//! Transport layer: blocking chat-completions client with retry/backoff.

pub mod http_client;
pub mod protocol;

pub use http_client::{HttpGeneratorConfig, HttpTextGenerator};
pub use protocol::{ApiError, ChatChoice, ChatMessage, ChatRequest, ChatResponse};
