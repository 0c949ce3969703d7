use serde::{Deserialize, Serialize};

use super::{Impact, Report};

/// Size-reduced projection of a report, sent to the text generator when an
/// overall assessment is requested. Markup examples and tags are left out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryDigest {
    pub url: String,
    pub total_issues: usize,
    pub critical: usize,
    pub serious: usize,
    pub moderate: usize,
    pub minor: usize,
    pub issues: Vec<DigestIssue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DigestIssue {
    pub impact: Impact,
    pub title: String,
    pub description: String,
    /// Affected element count.
    pub count: usize,
}

impl From<&Report> for SummaryDigest {
    fn from(report: &Report) -> Self {
        Self {
            url: report.url.clone(),
            total_issues: report.summary.total_issues,
            critical: report.summary.critical,
            serious: report.summary.serious,
            moderate: report.summary.moderate,
            minor: report.summary.minor,
            issues: report
                .issues()
                .map(|issue| DigestIssue {
                    impact: issue.impact.clone(),
                    title: issue.title.clone(),
                    description: issue.description.clone(),
                    count: issue.affected_elements,
                })
                .collect(),
        }
    }
}

/// Free-text overall assessment of a finished report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentSummary {
    pub job_id: String,
    pub url: String,
    pub summary: String,
}
