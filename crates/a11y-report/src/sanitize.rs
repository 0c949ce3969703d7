//! Markup stripping for display text.

use std::sync::LazyLock;

use regex::Regex;

static ASTERISK_RUNS: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\*+").ok());
static MARKUP_CHARS: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"[_~`#]+").ok());
static WHITESPACE_RUNS: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\s+").ok());

/// Remove `*`, `_`, `~`, backticks and `#`, collapse whitespace runs to one
/// space and trim. `sanitize(sanitize(x)) == sanitize(x)`.
pub fn sanitize(text: &str) -> String {
    let mut out = text.to_string();
    for (pattern, replacement) in [
        (&ASTERISK_RUNS, ""),
        (&MARKUP_CHARS, ""),
        (&WHITESPACE_RUNS, " "),
    ] {
        if let Some(re) = pattern.as_ref() {
            out = re.replace_all(&out, replacement).into_owned();
        }
    }
    out.trim().to_string()
}
