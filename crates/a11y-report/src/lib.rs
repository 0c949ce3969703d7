//! # a11y-report
//!
//! Builds the final [`Report`](a11y_core::Report) from findings and their
//! enrichment texts: localised titles and fixes, markup sanitising, example
//! truncation, per-severity counters and recommendations.

pub mod builder;
pub mod digest;
pub mod issue;
pub mod recommendations;
pub mod sanitize;
pub mod translations;

pub use builder::{build_report, ReportBuilder};
pub use digest::digest_json;
pub use issue::{issue_from_finding, truncate_example};
pub use recommendations::recommendations;
pub use sanitize::sanitize;
