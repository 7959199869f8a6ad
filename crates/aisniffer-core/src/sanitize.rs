//! Validation of untrusted path candidates (e.g. text produced by a
//! generation service) before they are used to build request or file paths.

use std::sync::LazyLock;

use regex::Regex;

static SCHEME_HOST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^/]+").expect("scheme/host pattern is valid"));

static PATH_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9/_\-.%]+$").expect("path token pattern is valid"));

/// Normalizes a raw candidate into a path token, or rejects it with `None`.
///
/// - Surrounding whitespace is trimmed; blank input is rejected.
/// - A leading `http(s)://host` is removed so full URLs reduce to their path.
/// - Only ASCII letters, digits, `/`, `_`, `-`, `.` and `%` are accepted.
/// - A bare `/` is rejected.
///
/// Rejection is the normal outcome for junk lines; callers simply skip them.
pub fn sanitize_candidate(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let without_host = SCHEME_HOST.replace(trimmed, "");
    let candidate = without_host.trim();

    if !PATH_TOKEN.is_match(candidate) || candidate == "/" {
        return None;
    }
    Some(candidate.to_string())
}
