//! Top-level error aggregating every subsystem error.

use super::error_code::{self, A11yErrorCode};
use super::{ConfigError, EnrichmentError, JobError, StoreError};

/// Result alias used across the workspace.
pub type A11yResult<T> = Result<T, A11yError>;

#[derive(Debug, thiserror::Error)]
pub enum A11yError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("enrichment error: {0}")]
    Enrichment(#[from] EnrichmentError),

    #[error("job error: {0}")]
    Job(#[from] JobError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl A11yError {
    /// Shorthand for a request validation failure.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        JobError::Validation {
            field: field.into(),
            message: message.into(),
        }
        .into()
    }

    /// True if the error means "no such job or report".
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Store(e) if e.is_not_found())
    }
}

impl A11yErrorCode for A11yError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Store(e) => e.error_code(),
            Self::Enrichment(e) => e.error_code(),
            Self::Job(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Serialization(_) => error_code::INTERNAL_ERROR,
        }
    }
}
