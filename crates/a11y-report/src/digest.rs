//! JSON projection of a report for the overall-assessment prompt.

use a11y_core::models::{Report, SummaryDigest};

/// Serialise the [`SummaryDigest`] of `report`.
pub fn digest_json(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string(&SummaryDigest::from(report))
}
