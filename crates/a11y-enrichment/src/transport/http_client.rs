//! Blocking HTTP generator with retry, exponential backoff, optional timeout,
//! and gzip compression.

use std::time::Duration;

use a11y_core::config::EnrichmentConfig;
use a11y_core::errors::EnrichmentError;
use a11y_core::models::CompletionRequest;
use a11y_core::traits::ITextGenerator;

use super::protocol::{ChatRequest, ChatResponse};

/// Configuration for the HTTP transport.
#[derive(Clone)]
pub struct HttpGeneratorConfig {
    /// Full chat-completions endpoint URL.
    pub api_url: String,
    pub api_key: String,
    /// `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// Retries for transport errors and 5xx responses. 4xx is never retried.
    pub max_retries: u32,
    /// Initial backoff duration (doubles each retry).
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
}

impl std::fmt::Debug for HttpGeneratorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGeneratorConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("max_retries", &self.max_retries)
            .field("initial_backoff", &self.initial_backoff)
            .field("max_backoff", &self.max_backoff)
            .finish()
    }
}

impl HttpGeneratorConfig {
    /// Transport settings from config. `None` if no credential is set.
    pub fn from_config(config: &EnrichmentConfig) -> Option<Self> {
        let api_key = config.credential()?.to_string();
        Some(Self {
            api_url: config.api_url.clone(),
            api_key,
            timeout: config.request_timeout_secs.map(Duration::from_secs),
            max_retries: config.max_retries,
            initial_backoff: Duration::from_millis(config.initial_backoff_ms),
            max_backoff: Duration::from_millis(config.max_backoff_ms),
        })
    }
}

/// [`ITextGenerator`] over an OpenAI-compatible chat-completions endpoint.
///
/// The blocking reqwest client is built per call so it is created and
/// dropped on the calling (blocking-pool) thread.
#[derive(Debug)]
pub struct HttpTextGenerator {
    config: HttpGeneratorConfig,
}

impl HttpTextGenerator {
    pub fn new(config: HttpGeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HttpGeneratorConfig {
        &self.config
    }

    fn do_request(&self, body: &ChatRequest) -> Result<ChatResponse, EnrichmentError> {
        let mut builder = reqwest::blocking::Client::builder().gzip(true);
        if let Some(timeout) = self.config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| EnrichmentError::Transport {
            reason: e.to_string(),
        })?;

        let mut backoff = self.config.initial_backoff;
        let mut last_err = EnrichmentError::Transport {
            reason: "no attempt made".to_string(),
        };

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                tracing::debug!(
                    "enrichment: retry attempt {}/{} after {:?}",
                    attempt,
                    self.config.max_retries,
                    backoff
                );
                std::thread::sleep(backoff);
                backoff = (backoff * 2).min(self.config.max_backoff);
            }

            let request = client
                .post(&self.config.api_url)
                .bearer_auth(&self.config.api_key)
                .json(body);

            match request.send() {
                Ok(resp) => {
                    let status = resp.status();
                    if status.is_success() {
                        return resp.json::<ChatResponse>().map_err(|e| {
                            EnrichmentError::MalformedResponse {
                                reason: e.to_string(),
                            }
                        });
                    }
                    let body_text = resp.text().unwrap_or_default();
                    let err = EnrichmentError::HttpStatus {
                        status: status.as_u16(),
                        body: body_text,
                    };
                    if status.is_client_error() {
                        return Err(err);
                    }
                    last_err = err;
                }
                Err(e) => {
                    last_err = EnrichmentError::Transport {
                        reason: e.to_string(),
                    };
                }
            }
        }

        if self.config.max_retries > 0 {
            tracing::warn!(
                "enrichment: all {} retries exhausted: {last_err}",
                self.config.max_retries
            );
        }
        Err(last_err)
    }
}

impl ITextGenerator for HttpTextGenerator {
    fn complete(&self, request: &CompletionRequest) -> Result<String, EnrichmentError> {
        let body = ChatRequest::from(request);
        self.do_request(&body)?.into_text()
    }

    fn name(&self) -> &str {
        "http"
    }
}
