//! Converting one finding plus its enrichment text into an [`Issue`].

use a11y_core::constants::{
    EXAMPLE_MAX_CHARS, MAX_EXAMPLES_PER_ISSUE, SOLUTION_DELIMITER, TRUNCATION_MARKER,
};
use a11y_core::models::{Finding, Issue};

use crate::sanitize::sanitize;
use crate::translations;

/// Build the display issue for `finding`.
///
/// Built-in texts come first, falling back to the finding's own text. A
/// non-empty `enrichment` overrides them: the part before the first
/// `Решение:` becomes the description and the part after it the remediation.
/// Without the delimiter the whole text replaces the description only.
pub fn issue_from_finding(finding: &Finding, enrichment: &str) -> Issue {
    let mut description = default_description(finding);
    let mut how_to_fix = default_fix(finding);

    if !enrichment.trim().is_empty() {
        match enrichment.split_once(SOLUTION_DELIMITER) {
            Some((before, after)) => {
                replace_if_not_blank(&mut description, sanitize(before));
                replace_if_not_blank(&mut how_to_fix, sanitize(after));
            }
            None => replace_if_not_blank(&mut description, sanitize(enrichment)),
        }
    }

    Issue {
        id: finding.id.clone(),
        impact: finding.impact.clone(),
        title: title(finding),
        description,
        how_to_fix,
        affected_elements: finding.nodes.len(),
        tags: finding.tags.clone(),
        help_url: finding.help_url.clone(),
        examples: finding
            .nodes
            .iter()
            .take(MAX_EXAMPLES_PER_ISSUE)
            .map(|node| truncate_example(&node.html))
            .collect(),
    }
}

/// Cut `html` to its first 100 characters and append `...` if anything was cut.
pub fn truncate_example(html: &str) -> String {
    match html.char_indices().nth(EXAMPLE_MAX_CHARS) {
        Some((cut, _)) => format!("{}{TRUNCATION_MARKER}", &html[..cut]),
        None => html.to_string(),
    }
}

fn title(finding: &Finding) -> String {
    match translations::title(&finding.id) {
        Some(title) => title.to_string(),
        None => sanitize(&finding.help),
    }
}

fn default_description(finding: &Finding) -> String {
    sanitize(translations::description(&finding.id).unwrap_or(finding.description.as_str()))
}

fn default_fix(finding: &Finding) -> String {
    if let Some(fix) = translations::fix(&finding.id) {
        return sanitize(fix);
    }
    let first_check = finding
        .nodes
        .first()
        .and_then(|node| node.all.first())
        .map(|check| sanitize(&check.message))
        .filter(|message| !message.is_empty());
    first_check.unwrap_or_else(|| translations::GENERIC_FIX.to_string())
}

// Enrichment such as "Решение: ..." with nothing before the delimiter keeps
// the built-in description.
fn replace_if_not_blank(slot: &mut String, candidate: String) {
    if !candidate.is_empty() {
        *slot = candidate;
    }
}
