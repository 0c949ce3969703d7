//! Incremental report assembly.

use a11y_core::models::{Finding, IssueBuckets, Report, ReportSummary};
use chrono::Utc;
use tracing::debug;

use crate::issue::issue_from_finding;
use crate::recommendations::recommendations;

/// Accumulates issues batch by batch and produces the finished [`Report`].
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    id: String,
    url: String,
    summary: ReportSummary,
    buckets: IssueBuckets,
}

impl ReportBuilder {
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            summary: ReportSummary::default(),
            buckets: IssueBuckets::new(),
        }
    }

    /// Add one finding with its enrichment text (`""` for none).
    pub fn push(&mut self, finding: &Finding, enrichment: &str) {
        let issue = issue_from_finding(finding, enrichment);
        self.summary.record(&issue.impact);
        self.buckets.push(issue);
    }

    /// Add a batch. Missing enrichment texts count as `""`.
    pub fn add_batch(&mut self, findings: &[Finding], enrichments: &[String]) {
        for (i, finding) in findings.iter().enumerate() {
            let text = enrichments.get(i).map(String::as_str).unwrap_or_default();
            self.push(finding, text);
        }
        debug!(
            job_id = %self.id,
            batch = findings.len(),
            total = self.summary.total_issues,
            "report batch added"
        );
    }

    pub fn issue_count(&self) -> usize {
        self.summary.total_issues
    }

    pub fn finish(self) -> Report {
        let recommendations = recommendations(&self.summary, &self.buckets);
        Report {
            id: self.id,
            url: self.url,
            created_at: Utc::now(),
            summary: self.summary,
            issues_by_impact: self.buckets,
            recommendations,
        }
    }
}

/// One-shot build from findings and their aligned enrichment texts.
pub fn build_report(
    id: impl Into<String>,
    url: impl Into<String>,
    findings: &[Finding],
    enrichments: &[String],
) -> Report {
    let mut builder = ReportBuilder::new(id, url);
    builder.add_batch(findings, enrichments);
    builder.finish()
}
