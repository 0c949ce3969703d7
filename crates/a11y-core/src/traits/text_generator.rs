use crate::errors::EnrichmentError;
use crate::models::CompletionRequest;

/// External text-generation capability.
///
/// A blocking call: callers on an async runtime run it on the blocking pool.
pub trait ITextGenerator: Send + Sync {
    /// Generate text for one request.
    fn complete(&self, request: &CompletionRequest) -> Result<String, EnrichmentError>;

    /// Human-readable generator name.
    fn name(&self) -> &str;
}
