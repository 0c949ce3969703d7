//! Test fixture loader for axe-style findings shared across the workspace.
//!
//! Fixtures live in this crate's `findings/` directory.

use std::path::PathBuf;

use a11y_core::models::{AnalysisRequest, Finding};
use serde::de::DeserializeOwned;

/// Page the sample findings were collected from.
pub const SAMPLE_URL: &str = "https://shop.example.com/catalog";

/// Root directory of the fixture files.
pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("findings")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// The twelve findings of a realistic axe run:
/// 3 critical, 4 serious, 3 moderate, 2 minor.
pub fn sample_findings() -> Vec<Finding> {
    load_fixture("axe_violations.json")
}

/// A submission for [`SAMPLE_URL`] carrying [`sample_findings`].
pub fn sample_request() -> AnalysisRequest {
    AnalysisRequest::new(SAMPLE_URL, sample_findings())
}
