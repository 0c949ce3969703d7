//! Submission checks.

use a11y_core::errors::A11yError;
use a11y_core::models::{AnalysisRequest, Finding};
use a11y_core::A11yResult;

/// Check a submission and hand back its findings.
///
/// The URL must be non-blank with an `http` or `https` scheme, the findings
/// list must be present (it may be empty), and every finding needs a rule id.
pub fn validate_request(request: AnalysisRequest) -> A11yResult<(String, Vec<Finding>)> {
    let url = request.url.trim().to_string();
    if url.is_empty() {
        return Err(A11yError::validation("url", "must not be empty"));
    }
    let lower = url.to_ascii_lowercase();
    let has_host = ["http://", "https://"]
        .iter()
        .any(|scheme| lower.starts_with(scheme) && lower.len() > scheme.len());
    if !has_host {
        return Err(A11yError::validation("url", "must be an http or https URL"));
    }

    let findings = request
        .findings
        .ok_or_else(|| A11yError::validation("findings", "is required"))?;
    if let Some(index) = findings.iter().position(|f| f.id.trim().is_empty()) {
        return Err(A11yError::validation(
            format!("findings[{index}].id"),
            "must not be empty",
        ));
    }
    Ok((url, findings))
}
