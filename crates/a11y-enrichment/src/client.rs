//! TextEnrichmentClient: prompt assembly, one request per batch, reply parsing.

use std::sync::Arc;

use a11y_core::config::EnrichmentConfig;
use a11y_core::errors::EnrichmentError;
use a11y_core::models::{CompletionRequest, Finding};
use a11y_core::traits::ITextGenerator;
use tracing::{debug, info};

use crate::parse::{parse_numbered_reply, strip_think_blocks};
use crate::prompts;
use crate::transport::{HttpGeneratorConfig, HttpTextGenerator};

/// Returned per item when no credential is configured.
pub const OFFLINE_PLACEHOLDER: &str = "Это демо-режим. Для полноценной работы с AI укажите \
     ключ API. Проблема требует внимания и исправления согласно стандартам WCAG 2.1.";

/// Returned by [`TextEnrichmentClient::generate_summary`] when offline.
pub const OFFLINE_SUMMARY: &str =
    "Это демо-режим. Для получения комплексных рекомендаций укажите ключ API.";

/// Model and token budgets for each request kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichmentSettings {
    pub model: String,
    pub translate_max_tokens: u32,
    pub batch_max_tokens: u32,
    pub summary_max_tokens: u32,
}

impl Default for EnrichmentSettings {
    fn default() -> Self {
        Self::from(&EnrichmentConfig::default())
    }
}

impl From<&EnrichmentConfig> for EnrichmentSettings {
    fn from(config: &EnrichmentConfig) -> Self {
        Self {
            model: config.model.clone(),
            translate_max_tokens: config.translate_max_tokens,
            batch_max_tokens: config.batch_max_tokens,
            summary_max_tokens: config.summary_max_tokens,
        }
    }
}

/// Natural-language enrichment of findings.
///
/// Without a generator every call succeeds with canned placeholder text.
/// All methods block on the generator; async callers use `spawn_blocking`.
pub struct TextEnrichmentClient {
    generator: Option<Arc<dyn ITextGenerator>>,
    settings: EnrichmentSettings,
}

impl std::fmt::Debug for TextEnrichmentClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextEnrichmentClient")
            .field("generator", &self.generator.as_ref().map(|g| g.name()))
            .field("settings", &self.settings)
            .finish()
    }
}

impl TextEnrichmentClient {
    /// A client that never calls out.
    pub fn offline() -> Self {
        Self {
            generator: None,
            settings: EnrichmentSettings::default(),
        }
    }

    pub fn with_generator(generator: Arc<dyn ITextGenerator>, settings: EnrichmentSettings) -> Self {
        Self {
            generator: Some(generator),
            settings,
        }
    }

    /// HTTP-backed client if a credential is configured, offline otherwise.
    pub fn from_config(config: &EnrichmentConfig) -> Self {
        let settings = EnrichmentSettings::from(config);
        match HttpGeneratorConfig::from_config(config) {
            Some(http) => {
                info!(model = %settings.model, url = %http.api_url, "enrichment online");
                Self::with_generator(Arc::new(HttpTextGenerator::new(http)), settings)
            }
            None => {
                info!("no API credential configured, enrichment runs offline");
                Self {
                    generator: None,
                    settings,
                }
            }
        }
    }

    pub fn is_offline(&self) -> bool {
        self.generator.is_none()
    }

    pub fn settings(&self) -> &EnrichmentSettings {
        &self.settings
    }

    /// Explain one prompt.
    pub fn translate(&self, prompt: &str) -> Result<String, EnrichmentError> {
        let Some(generator) = &self.generator else {
            return Ok(OFFLINE_PLACEHOLDER.to_string());
        };
        let request = self.request(
            prompts::explainer_system_prompt(),
            prompts::translate_user_prompt(prompt),
            self.settings.translate_max_tokens,
        );
        let reply = generator.complete(&request)?;
        Ok(strip_think_blocks(&reply))
    }

    /// Explain a batch of prompts with one request. The result has exactly
    /// one non-empty text per prompt, in input order.
    pub fn translate_batch(&self, items: &[String]) -> Result<Vec<String>, EnrichmentError> {
        if items.is_empty() {
            return Ok(Vec::new());
        }
        let Some(generator) = &self.generator else {
            return Ok(vec![OFFLINE_PLACEHOLDER.to_string(); items.len()]);
        };

        let request = self.request(
            prompts::explainer_system_prompt(),
            prompts::batch_user_prompt(items),
            self.settings.batch_max_tokens,
        );
        debug!(items = items.len(), generator = generator.name(), "sending batch");
        let reply = generator.complete(&request)?;
        let content = strip_think_blocks(&reply);
        debug!(chars = content.len(), "batch reply received");
        Ok(parse_numbered_reply(&content, items.len()))
    }

    /// Batch explanation keyed off each finding's rule id and help text.
    pub fn enrich_findings(&self, findings: &[Finding]) -> Result<Vec<String>, EnrichmentError> {
        let items: Vec<String> = findings.iter().map(prompts::finding_prompt).collect();
        self.translate_batch(&items)
    }

    /// Overall assessment of a serialised report digest.
    pub fn generate_summary(&self, report_json: &str) -> Result<String, EnrichmentError> {
        let Some(generator) = &self.generator else {
            return Ok(OFFLINE_SUMMARY.to_string());
        };
        let request = self.request(
            prompts::assessor_system_prompt(),
            prompts::summary_user_prompt(report_json),
            self.settings.summary_max_tokens,
        );
        let reply = generator.complete(&request)?;
        Ok(strip_think_blocks(&reply))
    }

    fn request(&self, system: String, user: String, max_tokens: u32) -> CompletionRequest {
        CompletionRequest {
            model: self.settings.model.clone(),
            system,
            user,
            max_tokens,
        }
    }
}
