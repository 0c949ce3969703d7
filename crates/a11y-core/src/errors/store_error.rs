//! Job store errors.

use super::error_code::{self, A11yErrorCode};

/// Errors raised by an [`IJobStore`](crate::traits::IJobStore) implementation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("job not found: {id}")]
    JobNotFound { id: String },

    #[error("report not found: {id}")]
    ReportNotFound { id: String },

    #[error("store write failed for {id}: {reason}")]
    WriteFailed { id: String, reason: String },
}

impl StoreError {
    /// True for the two "absent record" variants.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::JobNotFound { .. } | Self::ReportNotFound { .. })
    }
}

impl A11yErrorCode for StoreError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::JobNotFound { .. } | Self::ReportNotFound { .. } => error_code::NOT_FOUND,
            Self::WriteFailed { .. } => error_code::PERSISTENCE_ERROR,
        }
    }
}
