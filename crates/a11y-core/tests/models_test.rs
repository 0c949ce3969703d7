use a11y_core::models::*;
use proptest::prelude::*;

fn issue(id: &str, impact: Impact) -> Issue {
    Issue {
        id: id.to_string(),
        impact,
        title: "title".into(),
        description: "description".into(),
        how_to_fix: "fix".into(),
        affected_elements: 1,
        tags: vec!["wcag2a".into()],
        help_url: "https://dequeuniversity.com/rules/axe/4.8/x".into(),
        examples: vec![],
    }
}

// --- Job state machine ---

#[test]
fn new_job_is_pending_with_zero_progress() {
    let job = Job::new("https://example.com");
    assert_eq!(job.status, JobStatus::Pending);
    assert_eq!(job.progress, 0);
    assert!(job.error.is_none());
    assert_eq!(job.created_at, job.updated_at);
    assert!(uuid::Uuid::parse_str(&job.id).is_ok());
}

#[test]
fn job_ids_are_unique() {
    let a = Job::new("https://example.com");
    let b = Job::new("https://example.com");
    assert_ne!(a.id, b.id);
}

#[test]
fn happy_path_transitions_are_allowed() {
    let mut job = Job::new("https://example.com");
    job.transition(JobStatus::Processing).unwrap();
    job.transition(JobStatus::Completed).unwrap();
    assert!(job.is_completed());
}

#[test]
fn terminal_states_reject_every_transition() {
    for terminal in [JobStatus::Completed, JobStatus::Failed] {
        for next in [
            JobStatus::Pending,
            JobStatus::Processing,
            JobStatus::Completed,
            JobStatus::Failed,
        ] {
            assert!(
                !terminal.can_transition_to(next),
                "{terminal} -> {next} must be rejected"
            );
        }
    }
}

#[test]
fn pending_cannot_skip_to_completed() {
    let mut job = Job::new("https://example.com");
    let err = job.transition(JobStatus::Completed).unwrap_err();
    assert!(err.to_string().contains("pending -> completed"));
    assert_eq!(job.status, JobStatus::Pending);
}

#[test]
fn fail_records_message_from_pending_and_processing() {
    let mut pending = Job::new("https://example.com");
    pending.fail("boom").unwrap();
    assert_eq!(pending.status, JobStatus::Failed);
    assert_eq!(pending.error.as_deref(), Some("boom"));

    let mut processing = Job::new("https://example.com");
    processing.transition(JobStatus::Processing).unwrap();
    processing.fail("disk full").unwrap();
    assert_eq!(processing.error.as_deref(), Some("disk full"));
}

#[test]
fn fail_after_completion_is_rejected() {
    let mut job = Job::new("https://example.com");
    job.transition(JobStatus::Processing).unwrap();
    job.transition(JobStatus::Completed).unwrap();
    assert!(job.fail("late").is_err());
    assert!(job.error.is_none());
}

#[test]
fn progress_never_decreases_and_is_clamped() {
    let mut job = Job::new("https://example.com");
    job.advance_progress(50);
    job.advance_progress(10);
    assert_eq!(job.progress, 50);
    job.advance_progress(250);
    assert_eq!(job.progress, 100);
}

#[test]
fn job_status_serializes_lowercase() {
    let json = serde_json::to_string(&JobStatus::Processing).unwrap();
    assert_eq!(json, "\"processing\"");
}

// --- Impact ---

#[test]
fn impact_known_values_round_trip_by_name() {
    for raw in ["critical", "serious", "moderate", "minor"] {
        let impact = Impact::from(raw);
        assert!(impact.is_known());
        assert_eq!(impact.as_str(), raw);
    }
}

#[test]
fn unknown_impact_is_passed_through() {
    let impact: Impact = serde_json::from_str("\"blocker\"").unwrap();
    assert_eq!(impact, Impact::Other("blocker".into()));
    assert_eq!(serde_json::to_string(&impact).unwrap(), "\"blocker\"");
}

#[test]
fn null_impact_deserializes_to_empty_other() {
    let impact: Impact = serde_json::from_str("null").unwrap();
    assert_eq!(impact, Impact::Other(String::new()));
}

// --- Finding / request ---

#[test]
fn finding_reads_axe_field_names() {
    let json = r#"{
        "id": "image-alt",
        "impact": "critical",
        "tags": ["wcag2a"],
        "description": "Ensures <img> elements have alternate text",
        "help": "Images must have alternate text",
        "helpUrl": "https://dequeuniversity.com/rules/axe/4.8/image-alt",
        "nodes": [{
            "html": "<img src=\"a.png\">",
            "target": ["img"],
            "failureSummary": "Fix any of the following",
            "all": [{"id": "has-alt", "impact": "critical", "message": "Element has no alt", "data": null}]
        }]
    }"#;
    let finding: Finding = serde_json::from_str(json).unwrap();
    assert_eq!(finding.impact, Impact::Critical);
    assert_eq!(finding.help_url, "https://dequeuniversity.com/rules/axe/4.8/image-alt");
    assert_eq!(finding.nodes[0].failure_summary, "Fix any of the following");
    assert_eq!(finding.nodes[0].all[0].message, "Element has no alt");
    assert!(finding.nodes[0].any.is_empty());
}

#[test]
fn analysis_request_accepts_violations_alias() {
    let json = r#"{"url": "https://example.com", "violations": []}"#;
    let request: AnalysisRequest = serde_json::from_str(json).unwrap();
    assert_eq!(request.findings, Some(vec![]));
}

#[test]
fn analysis_request_without_findings_decodes_to_none() {
    let request: AnalysisRequest = serde_json::from_str(r#"{"url": "x"}"#).unwrap();
    assert!(request.findings.is_none());
}

// --- Buckets / summary ---

#[test]
fn buckets_start_with_four_empty_known_severities() {
    let buckets = IssueBuckets::new();
    let order: Vec<&str> = buckets.impacts().map(Impact::as_str).collect();
    assert_eq!(order, vec!["critical", "serious", "moderate", "minor"]);
    assert_eq!(buckets.total(), 0);
}

#[test]
fn unknown_severity_gets_its_own_trailing_bucket() {
    let mut buckets = IssueBuckets::new();
    buckets.push(issue("a", Impact::Other("blocker".into())));
    buckets.push(issue("b", Impact::Minor));
    buckets.push(issue("c", Impact::Other("blocker".into())));

    assert_eq!(buckets.bucket_count(), 5);
    assert_eq!(buckets.get(&Impact::Other("blocker".into())).len(), 2);
    assert_eq!(buckets.get(&Impact::Minor).len(), 1);
    assert_eq!(buckets.total(), 3);
}

#[test]
fn buckets_serialize_as_ordered_object_and_back() {
    let mut buckets = IssueBuckets::new();
    buckets.push(issue("x", Impact::Serious));
    let json = serde_json::to_string(&buckets).unwrap();

    let critical_at = json.find("\"critical\"").unwrap();
    let serious_at = json.find("\"serious\"").unwrap();
    let minor_at = json.find("\"minor\"").unwrap();
    assert!(critical_at < serious_at && serious_at < minor_at);

    let back: IssueBuckets = serde_json::from_str(&json).unwrap();
    assert_eq!(back, buckets);
}

#[test]
fn summary_record_counts_unknown_only_in_total_and_scores() {
    let mut summary = ReportSummary::default();
    summary.record(&Impact::Critical);
    summary.record(&Impact::Other("blocker".into()));

    assert_eq!(summary.total_issues, 2);
    assert_eq!(summary.critical, 1);
    assert_eq!(
        summary.critical + summary.serious + summary.moderate + summary.minor,
        1
    );
    assert_eq!(summary.impact_scores.get("blocker"), Some(&1));
}

// --- Properties ---

proptest! {
    #[test]
    fn progress_is_monotonic_for_any_sequence(steps in prop::collection::vec(any::<u8>(), 0..50)) {
        let mut job = Job::new("https://example.com");
        let mut last = job.progress;
        for step in steps {
            job.advance_progress(step);
            prop_assert!(job.progress >= last);
            prop_assert!(job.progress <= 100);
            last = job.progress;
        }
    }

    #[test]
    fn summary_total_equals_sum_of_scores(impacts in prop::collection::vec("[a-z]{0,9}", 0..60)) {
        let mut summary = ReportSummary::default();
        for raw in &impacts {
            summary.record(&Impact::from(raw.as_str()));
        }
        prop_assert_eq!(summary.total_issues, impacts.len());
        prop_assert_eq!(summary.impact_scores.values().sum::<usize>(), impacts.len());
        prop_assert!(summary.critical + summary.serious + summary.moderate + summary.minor <= impacts.len());
    }
}
