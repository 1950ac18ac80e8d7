//! Answer checks used by the prompter.
//!
//! These are pure functions so they can be exercised without any input
//! stream attached.

use url::Url;

/// Line that ends multi-line entry and skips the dependency prompt.
pub const SENTINEL: &str = "END";

/// Whether `line` is the sentinel, ignoring case and surrounding whitespace.
pub fn is_sentinel(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case(SENTINEL)
}

/// Whether `candidate` is an absolute URL with a host.
///
/// `mailto:` and similar authority-less URLs parse but are rejected, since a
/// project link needs somewhere to point at.
pub fn is_valid_url(candidate: &str) -> bool {
    match Url::parse(candidate.trim()) {
        Ok(url) => url.host_str().is_some_and(|host| !host.is_empty()),
        Err(_) => false,
    }
}

/// Split a comma-separated answer into trimmed, non-empty dependency names.
///
/// The sentinel or a blank answer yields an empty list.
pub fn parse_dependencies(answer: &str) -> Vec<String> {
    let answer = answer.trim();
    if answer.is_empty() || is_sentinel(answer) {
        return Vec::new();
    }

    answer
        .split(',')
        .map(str::trim)
        .filter(|dep| !dep.is_empty())
        .map(str::to_string)
        .collect()
}
