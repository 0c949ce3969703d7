//! JobPipeline: one job from `pending` to a terminal state.
//!
//! Progress checkpoints: 10 once processing, 50 once the findings are in
//! hand, 90 once the report is assembled, 100 with `completed`. Enrichment
//! failures are absorbed per batch. Store failures fail the job, except
//! `JobNotFound`, which means the job was deleted mid-run and its results are
//! dropped.

use std::sync::Arc;

use a11y_core::constants::{
    PROGRESS_DONE, PROGRESS_FINDINGS_READY, PROGRESS_REPORT_ASSEMBLED, PROGRESS_STARTED,
};
use a11y_core::errors::{A11yError, EnrichmentError, StoreError};
use a11y_core::models::{Finding, Job, JobStatus};
use a11y_core::traits::IJobStore;
use a11y_enrichment::TextEnrichmentClient;
use a11y_observability::events;
use a11y_report::ReportBuilder;
use tokio::task::JoinHandle;

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Completed { total_issues: usize },
    Failed { error: String },
    /// The job was deleted while running; nothing more was written.
    Orphaned,
}

pub struct JobPipeline {
    store: Arc<dyn IJobStore>,
    enrichment: Arc<TextEnrichmentClient>,
    batch_size: usize,
}

impl JobPipeline {
    pub fn new(
        store: Arc<dyn IJobStore>,
        enrichment: Arc<TextEnrichmentClient>,
        batch_size: usize,
    ) -> Self {
        Self {
            store,
            enrichment,
            batch_size: batch_size.max(1),
        }
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Run on a new tokio task. Must be called from within a runtime.
    pub fn spawn(self: &Arc<Self>, job: Job, findings: Vec<Finding>) -> JoinHandle<RunOutcome> {
        let pipeline = Arc::clone(self);
        tokio::spawn(async move { pipeline.run(job, findings).await })
    }

    /// Drive `job` (already stored as `pending`) to a terminal state.
    /// Never returns an error: failures end up on the stored job.
    pub async fn run(&self, job: Job, findings: Vec<Finding>) -> RunOutcome {
        let mut job = job;
        match self.execute(&mut job, &findings).await {
            Ok(total_issues) => RunOutcome::Completed { total_issues },
            Err(A11yError::Store(StoreError::JobNotFound { .. })) => {
                events::job_orphaned(&job.id, job.status.as_str());
                RunOutcome::Orphaned
            }
            Err(e) => self.fail(job, e.to_string()),
        }
    }

    async fn execute(&self, job: &mut Job, findings: &[Finding]) -> Result<usize, A11yError> {
        self.transition(job, JobStatus::Processing)?;
        job.advance_progress(PROGRESS_STARTED);
        self.store.update_job(job.clone())?;

        job.advance_progress(PROGRESS_FINDINGS_READY);
        self.store.update_job(job.clone())?;

        let mut builder = ReportBuilder::new(job.id.clone(), job.url.clone());
        for (index, batch) in findings.chunks(self.batch_size).enumerate() {
            let texts = match self.enrich(batch).await {
                Ok(texts) => texts,
                Err(e) => {
                    events::batch_enrichment_failed(&job.id, index, batch.len(), &e.to_string());
                    vec![String::new(); batch.len()]
                }
            };
            builder.add_batch(batch, &texts);
        }
        let report = builder.finish();
        let total_issues = report.summary.total_issues;

        job.advance_progress(PROGRESS_REPORT_ASSEMBLED);
        self.store.update_job(job.clone())?;

        self.store.put_report(report)?;
        events::report_persisted(&job.id, total_issues);

        // A report may only sit next to a `completed` job.
        if let Err(e) = self.complete(job) {
            self.retract_report(&job.id);
            return Err(e);
        }
        Ok(total_issues)
    }

    /// Committed only once the store accepted it, so a failed write leaves
    /// `job` in `processing` for the failure path.
    fn complete(&self, job: &mut Job) -> Result<(), A11yError> {
        let mut done = job.clone();
        self.transition(&mut done, JobStatus::Completed)?;
        done.advance_progress(PROGRESS_DONE);
        self.store.update_job(done.clone())?;
        *job = done;
        Ok(())
    }

    fn retract_report(&self, id: &str) {
        match self.store.remove_report(id) {
            Ok(()) => tracing::warn!(job_id = %id, "report retracted after failed completion"),
            Err(StoreError::JobNotFound { .. }) => {}
            Err(e) => tracing::error!(job_id = %id, "report could not be retracted: {e}"),
        }
    }

    async fn enrich(&self, batch: &[Finding]) -> Result<Vec<String>, EnrichmentError> {
        let client = Arc::clone(&self.enrichment);
        let batch = batch.to_vec();
        tokio::task::spawn_blocking(move || client.enrich_findings(&batch))
            .await
            .map_err(|e| EnrichmentError::TaskFailed {
                reason: e.to_string(),
            })?
    }

    fn transition(&self, job: &mut Job, next: JobStatus) -> Result<(), A11yError> {
        let from = job.status;
        job.transition(next)?;
        events::job_state_changed(&job.id, from, next, job.progress);
        Ok(())
    }

    fn fail(&self, mut job: Job, error: String) -> RunOutcome {
        let from = job.status;
        if let Err(e) = job.fail(error.clone()) {
            tracing::error!(job_id = %job.id, "cannot mark job failed: {e}");
            return RunOutcome::Failed { error };
        }
        events::job_state_changed(&job.id, from, JobStatus::Failed, job.progress);
        events::job_failed(&job.id, &error);
        match self.store.update_job(job) {
            Ok(()) => {}
            Err(StoreError::JobNotFound { id }) => events::job_orphaned(&id, "failure"),
            Err(e) => tracing::error!("failed job could not be persisted: {e}"),
        }
        RunOutcome::Failed { error }
    }
}
