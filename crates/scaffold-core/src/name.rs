//! Target directory and package name normalization

use regex::Regex;
use std::sync::LazyLock;

/// npm package name grammar: optional `@scope/`, then a name starting with a
/// lowercase letter, digit, hyphen, or tilde. No uppercase anywhere.
static PACKAGE_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:@[a-z0-9\-~][a-z0-9\-._~]*/)?[a-z0-9\-~][a-z0-9\-._~]*$")
        .expect("package name regex is valid")
});

static WHITESPACE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace regex is valid"));

static DISALLOWED_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\-~]+").expect("disallowed-char regex is valid"));

/// Normalize a raw target directory string: trim surrounding whitespace and
/// strip the trailing run of path separators. Idempotent.
pub fn format_target_dir(raw: &str) -> String {
    raw.trim_start()
        .trim_end_matches(|c: char| c.is_whitespace() || c == '/' || c == '\\')
        .to_string()
}

/// Whether `name` is a valid npm package name (scoped or unscoped)
pub fn is_valid_package_name(name: &str) -> bool {
    PACKAGE_NAME_RE.is_match(name)
}

/// Derive a valid package name from arbitrary input: trim, lowercase,
/// whitespace runs become single hyphens, one leading `.` or `_` is dropped,
/// and any run of other disallowed characters becomes a single hyphen.
///
/// The result satisfies [`is_valid_package_name`] whenever it is non-empty;
/// callers must re-prompt when everything was stripped away.
pub fn to_valid_package_name(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let hyphenated = WHITESPACE_RUN_RE.replace_all(&lowered, "-");
    let stripped = hyphenated.strip_prefix(['.', '_']).unwrap_or(&hyphenated);
    DISALLOWED_RUN_RE.replace_all(stripped, "-").into_owned()
}
