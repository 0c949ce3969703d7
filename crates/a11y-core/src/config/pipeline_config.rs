use serde::{Deserialize, Serialize};

use super::defaults;

/// Job pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Findings sent to the text generator per request.
    pub batch_size: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            batch_size: defaults::DEFAULT_BATCH_SIZE,
        }
    }
}
