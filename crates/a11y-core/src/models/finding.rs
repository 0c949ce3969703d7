use serde::{Deserialize, Serialize};

use super::Impact;

/// One accessibility violation reported by axe-core for a page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    /// Rule identifier, e.g. `color-contrast`.
    pub id: String,
    #[serde(default)]
    pub impact: Impact,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub help: String,
    #[serde(default)]
    pub help_url: String,
    #[serde(default)]
    pub nodes: Vec<AffectedNode>,
}

/// One element on the page that violates the rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffectedNode {
    /// Raw outer markup of the element.
    #[serde(default)]
    pub html: String,
    #[serde(default)]
    pub target: Vec<String>,
    #[serde(default)]
    pub failure_summary: String,
    #[serde(default)]
    pub any: Vec<CheckResult>,
    #[serde(default)]
    pub all: Vec<CheckResult>,
    #[serde(default)]
    pub none: Vec<CheckResult>,
}

/// Result of one axe check against a node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub impact: Impact,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

/// Body of a submission: the page URL and its findings.
///
/// `findings` is optional at the type level so a missing list is reported as a
/// validation error rather than a decode failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub url: String,
    #[serde(default, alias = "violations")]
    pub findings: Option<Vec<Finding>>,
}

impl AnalysisRequest {
    pub fn new(url: impl Into<String>, findings: Vec<Finding>) -> Self {
        Self {
            url: url.into(),
            findings: Some(findings),
        }
    }
}
