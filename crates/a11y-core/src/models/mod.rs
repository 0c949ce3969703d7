//! Data model shared by the store, the enrichment client, the report builder,
//! and the pipeline.

pub mod completion;
pub mod digest;
pub mod finding;
pub mod impact;
pub mod job;
pub mod report;

pub use completion::CompletionRequest;
pub use digest::{AssessmentSummary, DigestIssue, SummaryDigest};
pub use finding::{AffectedNode, AnalysisRequest, CheckResult, Finding};
pub use impact::Impact;
pub use job::{Job, JobStatus};
pub use report::{Issue, IssueBuckets, Report, ReportSummary};
