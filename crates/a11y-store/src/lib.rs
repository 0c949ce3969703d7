//! # a11y-store
//!
//! In-process storage for analysis jobs and their reports.
//! Concurrent access via `DashMap`; nothing survives the process.

pub mod job_store;

pub use job_store::JobStore;
