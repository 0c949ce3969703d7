use serde::{Deserialize, Serialize};

use super::defaults;

/// Text enrichment configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrichmentConfig {
    /// Credential for the text-generation API. Absent or blank means offline mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Chat-completions endpoint.
    pub api_url: String,
    pub model: String,
    pub translate_max_tokens: u32,
    pub batch_max_tokens: u32,
    pub summary_max_tokens: u32,
    /// Per-request timeout. `None` waits indefinitely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
    /// Retries for transport errors and 5xx responses.
    pub max_retries: u32,
    /// First retry delay; doubles on each attempt.
    pub initial_backoff_ms: u64,
    pub max_backoff_ms: u64,
}

impl EnrichmentConfig {
    /// The credential, if one is set and non-blank.
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: defaults::DEFAULT_API_URL.to_string(),
            model: defaults::DEFAULT_MODEL.to_string(),
            translate_max_tokens: defaults::DEFAULT_TRANSLATE_MAX_TOKENS,
            batch_max_tokens: defaults::DEFAULT_BATCH_MAX_TOKENS,
            summary_max_tokens: defaults::DEFAULT_SUMMARY_MAX_TOKENS,
            request_timeout_secs: None,
            max_retries: defaults::DEFAULT_MAX_RETRIES,
            initial_backoff_ms: defaults::DEFAULT_INITIAL_BACKOFF_MS,
            max_backoff_ms: defaults::DEFAULT_MAX_BACKOFF_MS,
        }
    }
}
