//! Property tests for sanitising, truncation and report totals.

use a11y_core::models::{AffectedNode, Finding, Impact};
use a11y_report::{build_report, sanitize, truncate_example};
use proptest::prelude::*;

fn impact_strategy() -> impl Strategy<Value = Impact> {
    prop_oneof![
        Just(Impact::Critical),
        Just(Impact::Serious),
        Just(Impact::Moderate),
        Just(Impact::Minor),
        "[a-z]{3,8}".prop_map(Impact::from),
    ]
}

fn finding_strategy() -> impl Strategy<Value = Finding> {
    ("[a-z-]{1,12}", impact_strategy(), 0usize..5).prop_map(|(id, impact, nodes)| Finding {
        id,
        impact,
        nodes: vec![AffectedNode::default(); nodes],
        ..Default::default()
    })
}

proptest! {
    #[test]
    fn sanitize_is_idempotent(text in "\\PC{0,200}") {
        let once = sanitize(&text);
        prop_assert_eq!(sanitize(&once), once.clone());
    }

    #[test]
    fn sanitize_leaves_no_markup(text in "[a-zа-я *_~`#\\n\\t]{0,120}") {
        let out = sanitize(&text);
        prop_assert!(!out.contains(['*', '_', '~', '`', '#']));
        prop_assert!(!out.contains("  "));
        prop_assert_eq!(out.trim(), out.as_str());
    }

    #[test]
    fn truncation_law(html in "\\PC{0,250}") {
        let out = truncate_example(&html);
        let source_len = html.chars().count();
        prop_assert!(out.chars().count() <= 103);
        if source_len > 100 {
            prop_assert!(out.ends_with("..."));
            prop_assert_eq!(out.chars().count(), 103);
        } else {
            prop_assert_eq!(out, html);
        }
    }

    #[test]
    fn totals_match_input(findings in prop::collection::vec(finding_strategy(), 0..40)) {
        let report = build_report("job", "https://example.com", &findings, &[]);
        let s = &report.summary;
        prop_assert_eq!(s.total_issues, findings.len());
        prop_assert_eq!(report.issues_by_impact.total(), findings.len());
        prop_assert_eq!(s.impact_scores.values().sum::<usize>(), findings.len());
        let unknown = findings.iter().filter(|f| !f.impact.is_known()).count();
        prop_assert_eq!(s.critical + s.serious + s.moderate + s.minor + unknown, s.total_issues);
        prop_assert!(!report.recommendations.is_empty());
    }

    #[test]
    fn every_issue_has_display_text(findings in prop::collection::vec(finding_strategy(), 1..20)) {
        let report = build_report("job", "https://example.com", &findings, &[]);
        for issue in report.issues() {
            prop_assert!(!issue.how_to_fix.is_empty());
            prop_assert!(issue.examples.len() <= 3);
        }
    }
}
