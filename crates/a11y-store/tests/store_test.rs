use std::sync::Arc;
use std::thread;

use a11y_core::errors::StoreError;
use a11y_core::models::{IssueBuckets, Job, JobStatus, Report, ReportSummary};
use a11y_core::traits::IJobStore;
use a11y_store::JobStore;

fn report_for(job: &Job) -> Report {
    Report {
        id: job.id.clone(),
        url: job.url.clone(),
        created_at: chrono::Utc::now(),
        summary: ReportSummary::default(),
        issues_by_impact: IssueBuckets::new(),
        recommendations: vec!["ok".into()],
    }
}

#[test]
fn put_then_get_returns_snapshot() {
    let store = JobStore::new();
    let job = Job::new("https://example.com");
    store.put_job(job.clone()).unwrap();

    let fetched = store.get_job(&job.id).unwrap();
    assert_eq!(fetched, job);
    assert_eq!(store.job_count(), 1);
}

#[test]
fn unknown_id_is_typed_not_found() {
    let store = JobStore::new();
    assert_eq!(
        store.get_job("missing").unwrap_err(),
        StoreError::JobNotFound {
            id: "missing".into()
        }
    );
    assert_eq!(
        store.get_report("missing").unwrap_err(),
        StoreError::ReportNotFound {
            id: "missing".into()
        }
    );
}

#[test]
fn snapshot_is_not_affected_by_later_writes() {
    let store = JobStore::new();
    let mut job = Job::new("https://example.com");
    store.put_job(job.clone()).unwrap();
    let snapshot = store.get_job(&job.id).unwrap();

    job.transition(JobStatus::Processing).unwrap();
    store.update_job(job.clone()).unwrap();

    assert_eq!(snapshot.status, JobStatus::Pending);
    assert_eq!(store.get_job(&job.id).unwrap().status, JobStatus::Processing);
}

#[test]
fn put_job_keeps_existing_report() {
    let store = JobStore::new();
    let job = Job::new("https://example.com");
    store.put_job(job.clone()).unwrap();
    store.put_report(report_for(&job)).unwrap();
    store.put_job(job.clone()).unwrap();
    assert!(store.get_report(&job.id).is_ok());
}

#[test]
fn delete_removes_job_and_report() {
    let store = JobStore::new();
    let job = Job::new("https://example.com");
    store.put_job(job.clone()).unwrap();
    store.put_report(report_for(&job)).unwrap();

    store.delete_job(&job.id).unwrap();

    assert!(store.get_job(&job.id).unwrap_err().is_not_found());
    assert!(store.get_report(&job.id).unwrap_err().is_not_found());
    assert_eq!(store.job_count(), 0);
}

#[test]
fn remove_report_keeps_the_job() {
    let store = JobStore::new();
    let job = Job::new("https://example.com");
    store.put_job(job.clone()).unwrap();
    store.put_report(report_for(&job)).unwrap();

    store.remove_report(&job.id).unwrap();

    assert!(matches!(
        store.get_report(&job.id),
        Err(StoreError::ReportNotFound { .. })
    ));
    assert_eq!(store.get_job(&job.id).unwrap().id, job.id);
    assert!(matches!(
        store.remove_report("missing"),
        Err(StoreError::JobNotFound { .. })
    ));
}

#[test]
fn deleting_unknown_id_is_not_found() {
    let store = JobStore::new();
    assert!(matches!(
        store.delete_job("nope"),
        Err(StoreError::JobNotFound { .. })
    ));
}

#[test]
fn writes_after_delete_are_orphaned() {
    let store = JobStore::new();
    let mut job = Job::new("https://example.com");
    store.put_job(job.clone()).unwrap();
    store.delete_job(&job.id).unwrap();

    job.transition(JobStatus::Processing).unwrap();
    assert!(store.update_job(job.clone()).is_err());
    assert!(store.put_report(report_for(&job)).is_err());

    assert!(store.get_job(&job.id).is_err());
    assert!(store.get_report(&job.id).is_err());
}

#[test]
fn report_requires_owning_job() {
    let store = JobStore::new();
    let job = Job::new("https://example.com");
    let err = store.put_report(report_for(&job)).unwrap_err();
    assert!(matches!(err, StoreError::JobNotFound { .. }));
}

#[test]
fn concurrent_jobs_no_corruption() {
    let store = Arc::new(JobStore::new());
    let mut handles = vec![];

    for i in 0..8 {
        let store = Arc::clone(&store);
        handles.push(thread::spawn(move || {
            let mut job = Job::new(format!("https://example.com/{i}"));
            store.put_job(job.clone()).unwrap();
            job.transition(JobStatus::Processing).unwrap();
            for p in 1..=100u8 {
                job.advance_progress(p);
                store.update_job(job.clone()).unwrap();
                // Readers always see a whole record.
                let seen = store.get_job(&job.id).unwrap();
                assert_eq!(seen.url, format!("https://example.com/{i}"));
            }
            store.put_report(report_for(&job)).unwrap();
            job.transition(JobStatus::Completed).unwrap();
            store.update_job(job.clone()).unwrap();
            job.id
        }));
    }

    let ids: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(store.job_count(), 8);
    for id in ids {
        let job = store.get_job(&id).unwrap();
        assert_eq!(job.status, JobStatus::Completed);
        assert_eq!(job.progress, 100);
        assert_eq!(store.get_report(&id).unwrap().id, id);
    }
}

#[test]
fn concurrent_readers_observe_monotonic_progress() {
    let store = Arc::new(JobStore::new());
    let job = Job::new("https://example.com");
    let id = job.id.clone();
    store.put_job(job.clone()).unwrap();

    let writer = {
        let store = Arc::clone(&store);
        thread::spawn(move || {
            let mut job = job;
            for p in 0..=100u8 {
                job.advance_progress(p);
                store.update_job(job.clone()).unwrap();
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            let id = id.clone();
            thread::spawn(move || {
                let mut last = 0u8;
                for _ in 0..500 {
                    let progress = store.get_job(&id).unwrap().progress;
                    assert!(progress >= last, "progress went back: {last} -> {progress}");
                    last = progress;
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }
}
