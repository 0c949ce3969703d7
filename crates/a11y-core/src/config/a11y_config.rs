//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{EnrichmentConfig, ObservabilityConfig, PipelineConfig};
use crate::constants::MAX_BATCH_SIZE;
use crate::errors::ConfigError;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`A11Y_*`, `OPENAI_API_KEY`)
/// 2. Config file (TOML), if one is given
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct A11yConfig {
    pub enrichment: EnrichmentConfig,
    pub pipeline: PipelineConfig,
    pub observability: ObservabilityConfig,
}

impl A11yConfig {
    /// Load configuration from an optional TOML file plus the process
    /// environment, then validate it.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, |key| std::env::var(key).ok())
    }

    /// Same as [`load`](Self::load) with an injectable environment lookup.
    pub fn load_with_env<F>(path: Option<&Path>, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides(env);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string. Missing keys take defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply environment overrides.
    /// Pattern: `A11Y_API_KEY`, `A11Y_BATCH_SIZE`, etc. Unparseable numbers are ignored.
    pub fn apply_env_overrides<F>(&mut self, env: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = env("A11Y_API_KEY").or_else(|| env("OPENAI_API_KEY")) {
            self.enrichment.api_key = Some(key);
        }
        if let Some(url) = env("A11Y_API_URL") {
            self.enrichment.api_url = url;
        }
        if let Some(model) = env("A11Y_MODEL") {
            self.enrichment.model = model;
        }
        if let Some(v) = env("A11Y_REQUEST_TIMEOUT_SECS").and_then(|v| v.parse().ok()) {
            self.enrichment.request_timeout_secs = Some(v);
        }
        if let Some(v) = env("A11Y_MAX_RETRIES").and_then(|v| v.parse().ok()) {
            self.enrichment.max_retries = v;
        }
        if let Some(v) = env("A11Y_BATCH_SIZE").and_then(|v| v.parse().ok()) {
            self.pipeline.batch_size = v;
        }
        if let Some(level) = env("A11Y_LOG_LEVEL") {
            self.observability.log_level = level;
        }
        if let Some(v) = env("A11Y_JSON_LOGS").and_then(|v| v.parse().ok()) {
            self.observability.json_logs = v;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_BATCH_SIZE).contains(&self.pipeline.batch_size) {
            return Err(invalid(
                "pipeline.batch_size",
                format!("must be between 1 and {MAX_BATCH_SIZE}"),
            ));
        }
        if self.enrichment.api_url.trim().is_empty() {
            return Err(invalid("enrichment.api_url", "must not be empty"));
        }
        if self.enrichment.model.trim().is_empty() {
            return Err(invalid("enrichment.model", "must not be empty"));
        }
        for (field, value) in [
            ("enrichment.translate_max_tokens", self.enrichment.translate_max_tokens),
            ("enrichment.batch_max_tokens", self.enrichment.batch_max_tokens),
            ("enrichment.summary_max_tokens", self.enrichment.summary_max_tokens),
        ] {
            if value == 0 {
                return Err(invalid(field, "must be greater than 0"));
            }
        }
        if self.enrichment.request_timeout_secs == Some(0) {
            return Err(invalid(
                "enrichment.request_timeout_secs",
                "must be greater than 0 when set",
            ));
        }
        if !LOG_LEVELS.contains(&self.observability.log_level.as_str()) {
            return Err(invalid(
                "observability.log_level",
                format!("must be one of {}", LOG_LEVELS.join(", ")),
            ));
        }
        Ok(())
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn invalid(field: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.into(),
    }
}
