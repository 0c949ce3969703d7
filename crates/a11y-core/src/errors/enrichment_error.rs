//! Text enrichment errors.

use super::error_code::{self, A11yErrorCode};

/// Failures of the external text-generation capability.
///
/// These never fail a job: the pipeline absorbs them per batch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnrichmentError {
    #[error("transport error: {reason}")]
    Transport { reason: String },

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("text generation API error: {message}")]
    Api { message: String },

    #[error("malformed response: {reason}")]
    MalformedResponse { reason: String },

    #[error("response contained no choices")]
    EmptyChoices,

    #[error("enrichment task failed: {reason}")]
    TaskFailed { reason: String },
}

impl A11yErrorCode for EnrichmentError {
    fn error_code(&self) -> &'static str {
        error_code::ENRICHMENT_ERROR
    }
}
