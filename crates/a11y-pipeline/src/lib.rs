//! # a11y-pipeline
//!
//! Runs one analysis job from `pending` to `completed` or `failed` on its own
//! tokio task, and exposes the submit / poll / fetch / delete operations
//! through [`AnalysisService`].

pub mod pipeline;
pub mod service;
pub mod validation;

pub use pipeline::{JobPipeline, RunOutcome};
pub use service::{AnalysisService, HealthSnapshot};
pub use validation::validate_request;
