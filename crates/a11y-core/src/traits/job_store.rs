use std::sync::Arc;

use crate::errors::StoreError;
use crate::models::{Job, Report};

/// Concurrent storage for jobs and their finished reports.
///
/// Every operation reads or writes one whole record atomically. Implementations
/// must not serialise unrelated job ids behind a single lock.
pub trait IJobStore: Send + Sync {
    /// Insert or replace a job.
    fn put_job(&self, job: Job) -> Result<(), StoreError>;

    /// Replace an existing job. Fails with `JobNotFound` if the job was deleted,
    /// so a late write from a running pipeline cannot resurrect it.
    fn update_job(&self, job: Job) -> Result<(), StoreError>;

    /// Snapshot of a job.
    fn get_job(&self, id: &str) -> Result<Job, StoreError>;

    /// Remove a job and its report.
    fn delete_job(&self, id: &str) -> Result<(), StoreError>;

    /// Attach a finished report to its job (`report.id`). Fails with
    /// `JobNotFound` if the owning job does not exist.
    fn put_report(&self, report: Report) -> Result<(), StoreError>;

    fn get_report(&self, id: &str) -> Result<Arc<Report>, StoreError>;

    /// Detach the report from its job, keeping the job. Fails with
    /// `JobNotFound` if the job does not exist.
    fn remove_report(&self, id: &str) -> Result<(), StoreError>;

    /// Number of stored jobs.
    fn job_count(&self) -> usize;
}
