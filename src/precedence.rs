//! Semantic version precedence.
//!
//! Precedence is a total order over versions that ignores build metadata. Major, minor, and patch
//! are compared numerically in that order. When they tie, a pre-release sorts before the release,
//! and two pre-releases are compared identifier by identifier.
use crate::{identifier::is_numeric_identifier, version::Version};
use core::cmp::Ordering;

/// Compares two pre-release identifiers that share a position.
///
/// Numeric identifiers are compared by value and sort before alphanumeric ones. Alphanumeric
/// identifiers are compared lexically by ASCII value.
///
/// Numeric values are compared on their digits, never parsed, so they have no upper bound.
fn cmp_identifier(a: &str, b: &str) -> Ordering {
    match (is_numeric_identifier(a), is_numeric_identifier(b)) {
        // no leading zeros, so more digits is a larger number
        (true, true) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.cmp(b),
    }
}

fn cmp_pre_release(a: &[String], b: &[String]) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        // a release is newer than any of its pre-releases
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a
            .iter()
            .zip(b)
            .map(|(a, b)| cmp_identifier(a, b))
            .find(|ord| ord.is_ne())
            .unwrap_or_else(|| a.len().cmp(&b.len())),
    }
}

/// Returns the precedence of `a` relative to `b`.
///
/// Build metadata is never considered, so two versions that differ only in their build compare
/// [Ordering::Equal].
///
/// ```
/// use core::cmp::Ordering;
/// use strict_semver::{compare, parse};
///
/// let alpha = parse("1.0.0-alpha").unwrap();
/// let release = parse("1.0.0").unwrap();
/// assert_eq!(Ordering::Less, compare(&alpha, &release));
///
/// let built = parse("1.0.0+20130313144700").unwrap();
/// assert_eq!(Ordering::Equal, compare(&release, &built));
/// ```
pub fn compare(a: &Version, b: &Version) -> Ordering {
    a.major()
        .cmp(&b.major())
        .then(a.minor().cmp(&b.minor()))
        .then(a.patch().cmp(&b.patch()))
        .then_with(|| cmp_pre_release(a.pre_release(), b.pre_release()))
}
