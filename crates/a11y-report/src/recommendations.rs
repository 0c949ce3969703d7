//! Report-level recommendations derived from the counters and issue ids.

use a11y_core::constants::{
    EXPERT_AUDIT_THRESHOLD, FREQUENT_ISSUE_LIMIT, FREQUENT_ISSUE_MIN_OCCURRENCES,
};
use a11y_core::models::{IssueBuckets, ReportSummary};

/// Recommendations in fixed order: critical, serious, expert audit, frequent
/// rules. If none applies, a single positive message.
pub fn recommendations(summary: &ReportSummary, buckets: &IssueBuckets) -> Vec<String> {
    let mut out = Vec::new();

    if summary.critical > 0 {
        out.push(format!(
            "[!] Обнаружено {} критических проблем. Рекомендуется исправить их в первую очередь.",
            summary.critical
        ));
    }
    if summary.serious > 0 {
        out.push(format!(
            "[!!] Найдено {} серьезных проблем, которые могут значительно затруднить использование сайта.",
            summary.serious
        ));
    }
    if summary.total_issues > EXPERT_AUDIT_THRESHOLD {
        out.push(
            "[i] Рекомендуется провести комплексный аудит доступности с участием экспертов."
                .to_string(),
        );
    }

    let frequent = frequent_rules(buckets);
    if !frequent.is_empty() {
        let listed: Vec<String> = frequent
            .iter()
            .map(|(id, count)| format!("{id} ({count})"))
            .collect();
        out.push(format!(
            "[*] Частые проблемы: {}. Рассмотрите возможность автоматизации проверок.",
            listed.join(", ")
        ));
    }

    if out.is_empty() {
        out.push("[OK] Отличная работа! Серьезных проблем с доступностью не обнаружено.".to_string());
    }
    out
}

/// Rule ids seen at least twice, most frequent first. Ties keep the order in
/// which the rule was first seen walking the buckets.
pub fn frequent_rules(buckets: &IssueBuckets) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for (_, issues) in buckets.iter() {
        for issue in issues {
            match counts.iter_mut().find(|(id, _)| *id == issue.id) {
                Some((_, count)) => *count += 1,
                None => counts.push((issue.id.clone(), 1)),
            }
        }
    }
    counts.retain(|(_, count)| *count >= FREQUENT_ISSUE_MIN_OCCURRENCES);
    // Stable sort keeps first-seen order among equal counts.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(FREQUENT_ISSUE_LIMIT);
    counts
}
