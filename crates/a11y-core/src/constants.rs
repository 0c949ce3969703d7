/// Workspace version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Findings per enrichment request.
pub const DEFAULT_BATCH_SIZE: usize = 10;

/// Upper bound accepted for a configured batch size.
pub const MAX_BATCH_SIZE: usize = 50;

/// Markup examples kept per issue.
pub const MAX_EXAMPLES_PER_ISSUE: usize = 3;

/// Characters kept from one markup example before truncation.
pub const EXAMPLE_MAX_CHARS: usize = 100;

/// Appended to a markup example that was cut.
pub const TRUNCATION_MARKER: &str = "...";

/// Delimiter between explanation and remediation in enrichment text.
pub const SOLUTION_DELIMITER: &str = "Решение:";

// --- Job progress checkpoints ---
pub const PROGRESS_STARTED: u8 = 10;
pub const PROGRESS_FINDINGS_READY: u8 = 50;
pub const PROGRESS_REPORT_ASSEMBLED: u8 = 90;
pub const PROGRESS_DONE: u8 = 100;

// --- Recommendations ---
/// Above this many issues an expert audit is suggested.
pub const EXPERT_AUDIT_THRESHOLD: usize = 10;
/// A rule must occur at least this often to count as frequent.
pub const FREQUENT_ISSUE_MIN_OCCURRENCES: usize = 2;
/// Frequent rules listed in the recommendation.
pub const FREQUENT_ISSUE_LIMIT: usize = 3;
