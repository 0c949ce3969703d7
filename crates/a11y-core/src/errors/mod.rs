//! Error handling for the accessibility report pipeline.
//! One error enum per subsystem, `thiserror` only.

pub mod a11y_error;
pub mod config_error;
pub mod enrichment_error;
pub mod error_code;
pub mod job_error;
pub mod store_error;

pub use a11y_error::{A11yError, A11yResult};
pub use config_error::ConfigError;
pub use enrichment_error::EnrichmentError;
pub use error_code::A11yErrorCode;
pub use job_error::JobError;
pub use store_error::StoreError;
