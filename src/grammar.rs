use once_cell::sync::Lazy;
use regex::Regex;

// 0, or digits without a leading zero
const NUMERIC: &str = r"0|[1-9][0-9]*";

// numeric, or at least one non-digit among [0-9A-Za-z-]
const PRE_RELEASE_IDENTIFIER: &str = r"0|[1-9][0-9]*|[0-9]*[A-Za-z-][0-9A-Za-z-]*";

const BUILD_IDENTIFIER: &str = r"[0-9A-Za-z-]+";

static SEMVER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^(?:{NUMERIC})\.(?:{NUMERIC})\.(?:{NUMERIC})(?:-(?:{PRE_RELEASE_IDENTIFIER})(?:\.(?:{PRE_RELEASE_IDENTIFIER}))*)?(?:\+{BUILD_IDENTIFIER}(?:\.{BUILD_IDENTIFIER})*)?$"
    ))
    .expect("semantic version grammar should compile")
});

/// Returns true if `text` is a valid Semantic Versioning 2.0.0 string in its entirety.
///
/// Nothing is trimmed or coerced: surrounding whitespace, a leading `v`, or a fourth numeric
/// component all make the string invalid.
///
/// ```
/// use strict_semver::is_valid;
///
/// assert!(is_valid("1.0.0-beta+exp.sha.5114f85"));
/// assert!(!is_valid("v1.0.0"));
/// assert!(!is_valid("1.0.0-beta.2..1"));
/// ```
pub fn is_valid(text: &str) -> bool {
    SEMVER_RE.is_match(text)
}
