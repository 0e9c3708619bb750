use once_cell::sync::Lazy;
use regex::Regex;

// Code capture ends before the optional trailing dot, so "1.1.1.1. Name"
// and "1.1.1.1 Name" both yield the code "1.1.1.1".
static ENTRY_LINE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+(?:\.\d+)*)\.?\s+(.+)$").unwrap());

/// Splits a trimmed outline line into its numeric code and name.
///
/// Recognized shape: one-or-more digit groups joined by single dots, an
/// optional trailing dot, whitespace, then the name. Whitespace never occurs
/// inside the code capture. Returns `None` for blank lines, prose headers,
/// and anything else that doesn't match; callers skip those silently.
pub fn classify_line(line: &str) -> Option<(&str, &str)> {
    let caps = ENTRY_LINE_REGEX.captures(line)?;
    let code = caps.get(1)?.as_str();
    let name = caps.get(2)?.as_str().trim();
    if name.is_empty() {
        return None;
    }
    Some((code, name))
}
