//! AnalysisService: the operations an outer surface (HTTP, CLI) exposes.

use std::sync::{Arc, Mutex, MutexGuard};

use a11y_core::constants::VERSION;
use a11y_core::errors::{EnrichmentError, JobError};
use a11y_core::models::{AnalysisRequest, AssessmentSummary, Job, Report};
use a11y_core::traits::IJobStore;
use a11y_core::{A11yConfig, A11yResult};
use a11y_enrichment::TextEnrichmentClient;
use a11y_observability::events;
use a11y_report::digest_json;
use a11y_store::JobStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;

use crate::pipeline::{JobPipeline, RunOutcome};
use crate::validation::validate_request;

/// Liveness payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthSnapshot {
    pub status: String,
    pub version: String,
    pub time: DateTime<Utc>,
    pub jobs: usize,
    /// Pipelines spawned and not yet finished.
    pub in_flight: usize,
    pub enrichment_online: bool,
}

pub struct AnalysisService {
    store: Arc<dyn IJobStore>,
    enrichment: Arc<TextEnrichmentClient>,
    pipeline: Arc<JobPipeline>,
    /// Handles of spawned pipelines. Dropping a handle detaches its task, so
    /// neither dropping the service nor cancelling `drain` stops a pipeline.
    tasks: Mutex<Vec<JoinHandle<RunOutcome>>>,
}

impl AnalysisService {
    pub fn new(
        store: Arc<dyn IJobStore>,
        enrichment: Arc<TextEnrichmentClient>,
        batch_size: usize,
    ) -> Self {
        let pipeline = Arc::new(JobPipeline::new(
            Arc::clone(&store),
            Arc::clone(&enrichment),
            batch_size,
        ));
        Self {
            store,
            enrichment,
            pipeline,
            tasks: Mutex::new(Vec::new()),
        }
    }

    /// In-memory store plus the configured enrichment client.
    pub fn from_config(config: &A11yConfig) -> Self {
        Self::new(
            Arc::new(JobStore::new()),
            Arc::new(TextEnrichmentClient::from_config(&config.enrichment)),
            config.pipeline.batch_size,
        )
    }

    pub fn store(&self) -> &Arc<dyn IJobStore> {
        &self.store
    }

    /// Validate, store a `pending` job and start its pipeline. Returns as soon
    /// as the job is stored. Must be called from within a tokio runtime.
    pub fn submit(&self, request: AnalysisRequest) -> A11yResult<Job> {
        let (url, findings) = validate_request(request)?;
        let job = Job::new(url);
        self.store.put_job(job.clone())?;
        events::job_submitted(&job.id, &job.url, findings.len());

        let handle = self.pipeline.spawn(job.clone(), findings);
        let mut tasks = self.tasks();
        tasks.retain(|task| !task.is_finished());
        tasks.push(handle);
        Ok(job)
    }

    /// Current snapshot of a job.
    pub fn job(&self, id: &str) -> A11yResult<Job> {
        Ok(self.store.get_job(id)?)
    }

    /// The finished report; `NotReady` while the job is not `completed`.
    pub fn report(&self, id: &str) -> A11yResult<Arc<Report>> {
        let job = self.store.get_job(id)?;
        if !job.is_completed() {
            return Err(JobError::NotReady {
                id: job.id,
                status: job.status,
            }
            .into());
        }
        Ok(self.store.get_report(id)?)
    }

    /// Overall assessment of a completed job's report.
    pub async fn summary(&self, id: &str) -> A11yResult<AssessmentSummary> {
        let report = self.report(id)?;
        let digest = digest_json(&report)?;

        let client = Arc::clone(&self.enrichment);
        let summary = tokio::task::spawn_blocking(move || client.generate_summary(&digest))
            .await
            .map_err(|e| EnrichmentError::TaskFailed {
                reason: e.to_string(),
            })??;

        Ok(AssessmentSummary {
            job_id: report.id.clone(),
            url: report.url.clone(),
            summary,
        })
    }

    /// Remove a job and its report. A pipeline still running for it keeps
    /// going but its remaining writes are discarded.
    pub fn delete(&self, id: &str) -> A11yResult<()> {
        self.store.delete_job(id)?;
        tracing::info!(job_id = %id, "job deleted");
        Ok(())
    }

    /// Await every tracked pipeline, including ones submitted while draining.
    /// Returns how many were awaited. Cancelling the returned future leaves
    /// the pipelines running.
    pub async fn drain(&self) -> usize {
        let mut drained = 0;
        loop {
            let Some(handle) = self.tasks().pop() else {
                return drained;
            };
            drained += 1;
            if let Err(e) = handle.await {
                tracing::error!("pipeline task panicked: {e}");
            }
        }
    }

    pub fn health(&self) -> HealthSnapshot {
        HealthSnapshot {
            status: "ok".to_string(),
            version: VERSION.to_string(),
            time: Utc::now(),
            jobs: self.store.job_count(),
            in_flight: self.in_flight(),
            enrichment_online: !self.enrichment.is_offline(),
        }
    }

    fn in_flight(&self) -> usize {
        let mut tasks = self.tasks();
        tasks.retain(|task| !task.is_finished());
        tasks.len()
    }

    fn tasks(&self) -> MutexGuard<'_, Vec<JoinHandle<RunOutcome>>> {
        self.tasks.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
