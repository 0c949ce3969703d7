//! Stable error codes for the transport boundary.

/// Maps an error to a stable code string the HTTP layer can put on the wire.
pub trait A11yErrorCode {
    /// Returns the error code string (e.g., "NOT_FOUND").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const NOT_FOUND: &str = "NOT_FOUND";
pub const NOT_READY: &str = "NOT_READY";
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const ENRICHMENT_ERROR: &str = "ENRICHMENT_ERROR";
pub const PERSISTENCE_ERROR: &str = "PERSISTENCE_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const INVALID_TRANSITION: &str = "INVALID_TRANSITION";
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
