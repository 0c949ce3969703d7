//! Structured log events for a job's life.
//!
//! Each function emits a `tracing` event with an `event` field naming it.

use a11y_core::models::JobStatus;

pub fn job_submitted(job_id: &str, url: &str, findings: usize) {
    tracing::info!(
        event = "job_submitted",
        job_id = %job_id,
        url = %url,
        findings = findings,
        "job submitted"
    );
}

pub fn job_state_changed(job_id: &str, from: JobStatus, to: JobStatus, progress: u8) {
    tracing::info!(
        event = "job_state_changed",
        job_id = %job_id,
        from = %from,
        to = %to,
        progress = progress,
        "job state changed"
    );
}

/// An enrichment request failed; the batch continues with built-in texts.
pub fn batch_enrichment_failed(job_id: &str, batch_index: usize, batch_len: usize, error: &str) {
    tracing::warn!(
        event = "batch_enrichment_failed",
        job_id = %job_id,
        batch_index = batch_index,
        batch_len = batch_len,
        error = %error,
        "batch enrichment failed, using built-in texts"
    );
}

pub fn report_persisted(job_id: &str, total_issues: usize) {
    tracing::info!(
        event = "report_persisted",
        job_id = %job_id,
        total_issues = total_issues,
        "report persisted"
    );
}

pub fn job_failed(job_id: &str, error: &str) {
    tracing::error!(
        event = "job_failed",
        job_id = %job_id,
        error = %error,
        "job failed"
    );
}

/// The job was deleted while its pipeline was still running.
pub fn job_orphaned(job_id: &str, stage: &str) {
    tracing::warn!(
        event = "job_orphaned",
        job_id = %job_id,
        stage = %stage,
        "job deleted while running, discarding results"
    );
}
