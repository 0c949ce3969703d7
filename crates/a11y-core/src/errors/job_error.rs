//! Job lifecycle and request errors.

use super::error_code::{self, A11yErrorCode};
use crate::models::JobStatus;

/// Errors about a job's lifecycle or the request that created it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JobError {
    #[error("invalid request field {field}: {message}")]
    Validation { field: String, message: String },

    #[error("report for job {id} is not ready (status {status})")]
    NotReady { id: String, status: JobStatus },

    #[error("invalid job transition: {from} -> {to}")]
    InvalidTransition { from: JobStatus, to: JobStatus },
}

impl A11yErrorCode for JobError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => error_code::VALIDATION_ERROR,
            Self::NotReady { .. } => error_code::NOT_READY,
            Self::InvalidTransition { .. } => error_code::INVALID_TRANSITION,
        }
    }
}
