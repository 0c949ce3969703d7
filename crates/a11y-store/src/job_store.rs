//! JobStore: concurrent per-job access via DashMap.

use std::sync::Arc;

use a11y_core::errors::StoreError;
use a11y_core::models::{Job, Report};
use a11y_core::traits::IJobStore;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

/// A job and, once it completed, its report. Stored together so that deleting
/// a job removes both in one step.
#[derive(Debug, Clone)]
struct JobRecord {
    job: Job,
    report: Option<Arc<Report>>,
}

/// Thread-safe job store.
///
/// Records are sharded by job id, so pipelines working on different jobs never
/// wait on each other. Reads hand out clones (jobs) or shared pointers
/// (reports), never references into the map.
#[derive(Debug, Default)]
pub struct JobStore {
    records: DashMap<String, JobRecord>,
}

impl JobStore {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    /// All stored job ids.
    pub fn job_ids(&self) -> Vec<String> {
        self.records.iter().map(|r| r.key().clone()).collect()
    }
}

impl IJobStore for JobStore {
    fn put_job(&self, job: Job) -> Result<(), StoreError> {
        match self.records.entry(job.id.clone()) {
            Entry::Occupied(mut entry) => entry.get_mut().job = job,
            Entry::Vacant(entry) => {
                entry.insert(JobRecord { job, report: None });
            }
        }
        Ok(())
    }

    fn update_job(&self, job: Job) -> Result<(), StoreError> {
        match self.records.get_mut(&job.id) {
            Some(mut record) => {
                record.job = job;
                Ok(())
            }
            None => Err(StoreError::JobNotFound { id: job.id }),
        }
    }

    fn get_job(&self, id: &str) -> Result<Job, StoreError> {
        self.records
            .get(id)
            .map(|record| record.job.clone())
            .ok_or_else(|| StoreError::JobNotFound { id: id.to_string() })
    }

    fn delete_job(&self, id: &str) -> Result<(), StoreError> {
        match self.records.remove(id) {
            Some(_) => {
                tracing::debug!(job_id = %id, "store: job deleted");
                Ok(())
            }
            None => Err(StoreError::JobNotFound { id: id.to_string() }),
        }
    }

    fn put_report(&self, report: Report) -> Result<(), StoreError> {
        match self.records.get_mut(&report.id) {
            Some(mut record) => {
                record.report = Some(Arc::new(report));
                Ok(())
            }
            None => Err(StoreError::JobNotFound { id: report.id }),
        }
    }

    fn get_report(&self, id: &str) -> Result<Arc<Report>, StoreError> {
        self.records
            .get(id)
            .and_then(|record| record.report.clone())
            .ok_or_else(|| StoreError::ReportNotFound { id: id.to_string() })
    }

    fn remove_report(&self, id: &str) -> Result<(), StoreError> {
        match self.records.get_mut(id) {
            Some(mut record) => {
                record.report = None;
                Ok(())
            }
            None => Err(StoreError::JobNotFound { id: id.to_string() }),
        }
    }

    fn job_count(&self) -> usize {
        self.records.len()
    }
}
