//! # a11y-core
//!
//! Foundation crate for the accessibility report pipeline.
//! Defines the shared models, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::A11yConfig;
pub use errors::{A11yError, A11yResult};
pub use models::{
    AnalysisRequest, Finding, Impact, Issue, IssueBuckets, Job, JobStatus, Report, ReportSummary,
};
pub use traits::{IJobStore, ITextGenerator};
