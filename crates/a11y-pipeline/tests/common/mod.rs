//! Shared doubles for pipeline and service tests.

#![allow(dead_code)]

use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use a11y_core::errors::{EnrichmentError, StoreError};
use a11y_core::models::{CompletionRequest, Job, JobStatus, Report};
use a11y_core::traits::{IJobStore, ITextGenerator};
use a11y_pipeline::AnalysisService;
use a11y_store::JobStore;

/// Replies with fixed text (or error) and records requests.
pub struct ScriptedGenerator {
    pub reply: Result<String, EnrichmentError>,
    pub seen: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedGenerator {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.to_string()),
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: Err(EnrichmentError::HttpStatus {
                status: 503,
                body: "overloaded".into(),
            }),
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.seen.lock().unwrap().clone()
    }
}

impl ITextGenerator for ScriptedGenerator {
    fn complete(&self, request: &CompletionRequest) -> Result<String, EnrichmentError> {
        self.seen.lock().unwrap().push(request.clone());
        self.reply.clone()
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// Blocks every call until the test opens the gate.
pub struct GatedGenerator {
    gate: Mutex<Receiver<()>>,
}

impl GatedGenerator {
    pub fn new() -> (Arc<Self>, Sender<()>) {
        let (tx, rx) = channel();
        (
            Arc::new(Self {
                gate: Mutex::new(rx),
            }),
            tx,
        )
    }
}

impl ITextGenerator for GatedGenerator {
    fn complete(&self, _request: &CompletionRequest) -> Result<String, EnrichmentError> {
        let _ = self.gate.lock().unwrap().recv();
        Ok("1. Открыто".to_string())
    }

    fn name(&self) -> &str {
        "gated"
    }
}

/// Wraps a [`JobStore`], recording every job write. Can refuse reports or the
/// final `completed` write.
#[derive(Default)]
pub struct RecordingStore {
    pub inner: JobStore,
    pub writes: Mutex<Vec<(JobStatus, u8)>>,
    pub reject_reports: bool,
    pub reject_completion: bool,
}

impl RecordingStore {
    pub fn rejecting_reports() -> Self {
        Self {
            reject_reports: true,
            ..Default::default()
        }
    }

    pub fn rejecting_completion() -> Self {
        Self {
            reject_completion: true,
            ..Default::default()
        }
    }

    pub fn history(&self) -> Vec<(JobStatus, u8)> {
        self.writes.lock().unwrap().clone()
    }
}

impl IJobStore for RecordingStore {
    fn put_job(&self, job: Job) -> Result<(), StoreError> {
        self.writes.lock().unwrap().push((job.status, job.progress));
        self.inner.put_job(job)
    }

    fn update_job(&self, job: Job) -> Result<(), StoreError> {
        self.writes.lock().unwrap().push((job.status, job.progress));
        if self.reject_completion && job.status == JobStatus::Completed {
            return Err(StoreError::WriteFailed {
                id: job.id,
                reason: "io".into(),
            });
        }
        self.inner.update_job(job)
    }

    fn get_job(&self, id: &str) -> Result<Job, StoreError> {
        self.inner.get_job(id)
    }

    fn delete_job(&self, id: &str) -> Result<(), StoreError> {
        self.inner.delete_job(id)
    }

    fn put_report(&self, report: Report) -> Result<(), StoreError> {
        if self.reject_reports {
            return Err(StoreError::WriteFailed {
                id: report.id,
                reason: "disk full".into(),
            });
        }
        self.inner.put_report(report)
    }

    fn get_report(&self, id: &str) -> Result<Arc<Report>, StoreError> {
        self.inner.get_report(id)
    }

    fn remove_report(&self, id: &str) -> Result<(), StoreError> {
        self.inner.remove_report(id)
    }

    fn job_count(&self) -> usize {
        self.inner.job_count()
    }
}

/// Poll until the job is terminal. Panics after ~5 seconds.
pub async fn wait_for_terminal(service: &AnalysisService, id: &str) -> Job {
    for _ in 0..500 {
        let job = service.job(id).unwrap();
        if job.status.is_terminal() {
            return job;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("job {id} did not finish in time");
}

/// Poll until the job reaches `status`. Panics after ~5 seconds.
pub async fn wait_for_status(service: &AnalysisService, id: &str, status: JobStatus) -> Job {
    for _ in 0..500 {
        let job = service.job(id).unwrap();
        if job.status == status {
            return job;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("job {id} never reached {status}");
}
