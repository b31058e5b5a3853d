//! # strict-semver
//!
//! A library for validating, parsing, comparing, and incrementing
//! [Semantic Versioning 2.0.0](https://semver.org/) versions.
//!
//! Only versions that follow the SemVer 2.0.0 grammar exactly are accepted. Strings like
//! `v1.2.3`, `1.2`, `1.2.3.4`, or `1.02.3` are rejected, not coerced.
//!
//! ## Examples
//!
//! Work directly with strings:
//!
//! ```
//! use strict_semver::prelude::*;
//!
//! assert!(is_valid("1.0.0-alpha+001"));
//! assert!(is_newer("1.0.0", "1.0.0-rc.1"));
//! assert!(is_equivalent("2.0.1", "2.0.1+build.125124"));
//!
//! let next = increment("1.3.9", "patch").unwrap();
//! assert_eq!(next, "1.3.10");
//! ```
//!
//! Or, parse into a [`Version`] for reuse:
//!
//! ```
//! use strict_semver::prelude::*;
//!
//! let version = Version::parse("1.0.0-beta.11").unwrap();
//! assert_eq!(["beta", "11"], version.pre_release());
//!
//! let next = version.next(&Level::Minor).unwrap();
//! assert_eq!("1.1.0", next.to_string());
//! assert!(version < next);
//! ```
//!
//! ## Important Terms
//!
//! - **Version**: `MAJOR.MINOR.PATCH`, then optionally `-` and dot-separated *pre-release*
//!   identifiers, then optionally `+` and dot-separated *build metadata* identifiers. It's modeled
//!   by the [`Version`] struct.
//! - **Precedence**: How versions are ordered. Build metadata never affects precedence. See
//!   [`compare`].
//! - **Level**: The part of a version to [`increment`]: `major`, `minor`, or `patch`. It's modeled
//!   by the [`Level`] enum.
//!
//! ## Prelude
//!
//! strict-semver provides a prelude module for convenience. It contains everything needed to
//! interact with the library.
//!
//! Use it with:
//!
//! ```
//! use strict_semver::prelude::*;
//! ```
#![warn(missing_docs)]

mod error;
mod grammar;
mod identifier;
mod level;
mod precedence;
mod version;

pub use crate::error::VersionError;
pub use crate::grammar::is_valid;
pub use crate::identifier::is_numeric_identifier;
pub use crate::level::Level;
pub use crate::precedence::compare;
pub use crate::version::Version;

use core::cmp::Ordering;

/// Parses a version string. Shorthand for [Version::parse].
///
/// # Errors
///
/// See [Version::parse].
pub fn parse(text: &str) -> Result<Version, VersionError> {
    Version::parse(text)
}

/// Renders a version back to its canonical string. Shorthand for [Version::to_string].
///
/// ```
/// use strict_semver::{parse, render};
///
/// let text = "1.0.0-beta+exp.sha.5114f85";
/// assert_eq!(text, render(&parse(text).unwrap()));
/// ```
pub fn render(version: &Version) -> String {
    version.to_string()
}

fn cmp_strs(a: &str, b: &str) -> Option<Ordering> {
    let a = Version::parse(a).ok()?;
    let b = Version::parse(b).ok()?;
    Some(compare(&a, &b))
}

/// Returns true if `a` has higher precedence than `b`.
///
/// Returns false if either doesn't [parse]. Note that this includes strings that pass
/// [is_valid] but whose major, minor, or patch doesn't fit in a `u64`: those are not comparable,
/// so [is_newer], [is_older], and [is_equivalent] are all false for them.
///
/// ```
/// use strict_semver::is_newer;
///
/// assert!(is_newer("3.1.2", "3.1.2-alpha"));
/// assert!(!is_newer("3.1.2", "not a version"));
/// ```
pub fn is_newer(a: &str, b: &str) -> bool {
    cmp_strs(a, b) == Some(Ordering::Greater)
}

/// Returns true if `a` has lower precedence than `b`. Returns false if either doesn't [parse]
/// (see [is_newer]).
pub fn is_older(a: &str, b: &str) -> bool {
    cmp_strs(a, b) == Some(Ordering::Less)
}

/// Returns true if `a` and `b` have the same precedence, ignoring build metadata. Returns false if
/// either doesn't [parse] (see [is_newer]).
pub fn is_equivalent(a: &str, b: &str) -> bool {
    cmp_strs(a, b) == Some(Ordering::Equal)
}

/// Increments the `field` of version string `text`, where `field` is one of `major`, `minor`, or
/// `patch`, and returns the new version string. Lesser fields are reset to zero, and pre-release
/// and build metadata are dropped.
///
/// ```
/// use strict_semver::increment;
///
/// assert_eq!(Ok("1.4.0".to_string()), increment("1.3.10-rc.1", "minor"));
/// ```
///
/// # Errors
///
/// - [VersionError::InvalidField] if `field` isn't a known level. This is checked before `text`.
/// - Any error from [Version::parse] if `text` is invalid.
/// - [VersionError::NumericOverflow] if the field can't be incremented.
pub fn increment(text: &str, field: &str) -> Result<String, VersionError> {
    let level: Level = field.parse()?;
    let version = Version::parse(text)?;
    Ok(version.next(&level)?.to_string())
}

/// A convenience module appropriate for glob imports (`use strict_semver::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::compare;
    #[doc(no_inline)]
    pub use crate::increment;
    #[doc(no_inline)]
    pub use crate::is_equivalent;
    #[doc(no_inline)]
    pub use crate::is_newer;
    #[doc(no_inline)]
    pub use crate::is_older;
    #[doc(no_inline)]
    pub use crate::is_valid;
    #[doc(no_inline)]
    pub use crate::parse;
    #[doc(no_inline)]
    pub use crate::render;
    #[doc(no_inline)]
    pub use crate::Level;
    #[doc(no_inline)]
    pub use crate::Version;
    #[doc(no_inline)]
    pub use crate::VersionError;
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rstest::*;

    #[fixture]
    fn versions() -> Vec<&'static str> {
        vec![
            "0.0.0",
            "0.9.0",
            "1.0.0-alpha",
            "1.0.0-alpha.1",
            "1.0.0-beta.11",
            "1.0.0",
            "1.0.0+exp",
            "2.0.1",
            "2.0.1+build.125124",
            "3.1.2",
        ]
    }

    #[rstest]
    #[case("3.1.2", "3.1.1")]
    #[case("3.2.0", "3.1.2")]
    #[case("4.0.0", "3.1.2")]
    #[case("3.1.2", "3.1.2-alpha")]
    #[case("3.1.2-alpha.1", "3.1.2-alpha")]
    #[case("3.1.2-alpha.beta", "3.1.2-alpha.1")]
    #[case("3.1.2-beta", "3.1.2-alpha.beta")]
    #[case("3.1.2-beta.2", "3.1.2-beta")]
    #[case("3.1.2-beta.11", "3.1.2-beta.2")]
    #[case("3.1.2-rc.1", "3.1.2-beta.11")]
    #[case("3.1.2", "3.1.2-rc.1")]
    fn test_is_newer(#[case] newer: &str, #[case] older: &str) {
        assert!(is_newer(newer, older));
        assert!(is_older(older, newer));
        assert!(!is_newer(older, newer));
        assert!(!is_equivalent(newer, older));
    }

    #[test]
    fn test_is_equivalent() {
        assert!(is_equivalent("2.0.1", "2.0.1+build.125124"));
        assert!(!is_newer("2.0.1", "2.0.1+build.125124"));
        assert!(!is_older("2.0.1", "2.0.1+build.125124"));

        // equivalent, but each keeps its own build when rendered
        assert_eq!("2.0.1", render(&parse("2.0.1").unwrap()));
        assert_eq!(
            "2.0.1+build.125124",
            render(&parse("2.0.1+build.125124").unwrap())
        );
    }

    #[rstest]
    fn test_exactly_one_holds(versions: Vec<&'static str>) {
        for (a, b) in versions.iter().cartesian_product(versions.iter()) {
            let held = [is_newer(a, b), is_older(a, b), is_equivalent(a, b)]
                .into_iter()
                .filter(|held| *held)
                .count();
            assert_eq!(1, held, "{a} vs {b}");
        }
    }

    #[rstest]
    #[case("1.0.0", "1.09.0")]
    #[case("v1.0.0", "1.0.0")]
    #[case("1.0.0-beta.2..1", "1.0.0-beta.2..1")]
    #[case("", "")]
    fn test_invalid_is_never_compared(#[case] a: &str, #[case] b: &str) {
        for (a, b) in [(a, b), (b, a)] {
            assert!(!is_newer(a, b));
            assert!(!is_older(a, b));
            assert!(!is_equivalent(a, b));
        }
    }

    #[test]
    fn test_too_large_core_is_not_comparable() {
        let huge = "18446744073709551616.0.0";
        assert!(is_valid(huge));
        assert!(parse(huge).is_err());
        for (a, b) in [(huge, "1.0.0"), ("1.0.0", huge), (huge, huge)] {
            assert!(!is_newer(a, b));
            assert!(!is_older(a, b));
            assert!(!is_equivalent(a, b));
        }
    }

    #[test]
    fn test_increment_chain() {
        let ver = "1.3.9";

        let ver = increment(ver, "patch").unwrap();
        assert_eq!("1.3.10", ver);

        let ver = increment(&ver, "minor").unwrap();
        assert_eq!("1.4.0", ver);

        let ver = increment(&ver, "major").unwrap();
        assert_eq!("2.0.0", ver);
    }

    #[rstest]
    #[case("9.0.0", "major", "10.0.0")]
    #[case("9.1.0", "major", "10.0.0")]
    #[case("9.0.10", "major", "10.0.0")]
    #[case("1.9.0", "minor", "1.10.0")]
    #[case("1.999.100", "minor", "1.1000.0")]
    #[case("1.10.99", "patch", "1.10.100")]
    #[case("1.0.0", "patch", "1.0.1")]
    #[case("1.0.0-alpha+001", "patch", "1.0.1")]
    fn test_increment(#[case] text: &str, #[case] field: &str, #[case] expected: &str) {
        assert_eq!(Ok(expected.to_string()), increment(text, field));
    }

    #[test]
    fn test_increment_errors() {
        assert_eq!(
            Err(VersionError::InvalidField {
                field: "build".to_string()
            }),
            increment("1.0.0", "build")
        );
        // field is rejected before the version is looked at
        assert_eq!(
            Err(VersionError::InvalidField {
                field: "Major".to_string()
            }),
            increment("not a version", "Major")
        );
        assert_eq!(
            Err(VersionError::InvalidVersion {
                version: "1.0".to_string()
            }),
            increment("1.0", "major")
        );
        assert!(matches!(
            increment("1.0.0-01", "patch"),
            Err(VersionError::InvalidPreRelease { .. })
        ));
        assert_eq!(
            Err(VersionError::NumericOverflow { level: "patch" }),
            increment("0.0.18446744073709551615", "patch")
        );
    }

    #[rstest]
    fn test_render_parse_round_trip(versions: Vec<&'static str>) {
        for text in versions {
            assert!(is_valid(text));
            assert_eq!(text, render(&parse(text).unwrap()));
        }
    }

    #[test]
    fn test_version_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Version>();
        assert_send_sync::<VersionError>();
    }
}
