use crate::{
    error::VersionError,
    grammar::is_valid,
    identifier::{is_build_identifier, is_numeric_component, is_pre_release_identifier},
    level::Level,
    precedence::compare,
};
use core::{
    cmp::Ordering,
    fmt::{self, Display},
    str::FromStr,
};

/// Splits `text` at the first `delimiter`, returning what comes before it and, if the delimiter
/// was found, what comes after it.
fn split_first(text: &str, delimiter: char) -> (&str, Option<&str>) {
    match text.split_once(delimiter) {
        Some((lead, tail)) => (lead, Some(tail)),
        None => (text, None),
    }
}

fn split_identifiers(text: Option<&str>) -> Vec<String> {
    text.map(|text| text.split('.').map(str::to_owned).collect())
        .unwrap_or_default()
}

/// Figures out which portion of a version string that failed the grammar is to blame.
fn diagnose(version_str: &str) -> VersionError {
    let (rest, build) = split_first(version_str, '+');
    let (core, pre_release) = split_first(rest, '-');

    let core_ok = {
        let fields: Vec<&str> = core.split('.').collect();
        fields.len() == 3 && fields.iter().all(|field| is_numeric_component(field))
    };
    if !core_ok {
        return VersionError::InvalidVersion {
            version: version_str.to_owned(),
        };
    }

    if let Some(pre_release) = pre_release {
        if !pre_release.split('.').all(is_pre_release_identifier) {
            return VersionError::InvalidPreRelease {
                version: version_str.to_owned(),
                pre_release: pre_release.to_owned(),
            };
        }
    }

    if let Some(build) = build {
        if !build.split('.').all(is_build_identifier) {
            return VersionError::InvalidBuildMetadata {
                version: version_str.to_owned(),
                build: build.to_owned(),
            };
        }
    }

    VersionError::InvalidVersion {
        version: version_str.to_owned(),
    }
}

/// A Semantic Versioning 2.0.0 version: `MAJOR.MINOR.PATCH`, optionally followed by
/// `-PRE.RELEASE` identifiers and `+BUILD.METADATA` identifiers.
///
/// Versions are created by [parsing](Version::parse) a string, with [Version::new], or by
/// [incrementing](Version::next) another version. They are never modified in place.
///
/// Versions can be [displayed](Version::to_string) back to the exact string they were parsed
/// from, [incremented](Version::next), and [compared](Version::cmp_precedence).
///
/// # Ordering
///
/// Versions are ordered by semantic version precedence, which ignores build metadata. Equality,
/// however, is structural: `1.0.0+a` and `1.0.0+b` are not equal even though neither has
/// precedence over the other. For that reason, `Version` only implements [PartialOrd], and
/// [PartialOrd::partial_cmp] returns `None` for such pairs. Use [Version::cmp_precedence] for
/// the total order.
///
/// # Examples
///
/// ```
/// use strict_semver::prelude::*;
///
/// let cur = Version::parse("1.2.3-rc.1+build.5").unwrap();
/// let next = cur.next(&Level::Minor).unwrap();
/// assert_eq!("1.3.0", next.to_string());
/// assert!(cur < next);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: Vec<String>,
    build: Vec<String>,
}

impl Version {
    /// Returns a release version with no pre-release or build metadata.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            pre_release: Vec::new(),
            build: Vec::new(),
        }
    }

    /// Parses a version string, returning a [Version] if it is a valid semantic version.
    ///
    /// The whole string must match. No leading `v`, whitespace, or missing components are
    /// tolerated.
    ///
    /// # Errors
    ///
    /// - [VersionError::InvalidPreRelease] if only the pre-release portion is malformed.
    /// - [VersionError::InvalidBuildMetadata] if only the build metadata portion is malformed.
    /// - [VersionError::InvalidVersion] otherwise, including when a numeric field is too large
    ///   for a `u64`.
    pub fn parse(version_str: &str) -> Result<Self, VersionError> {
        if !is_valid(version_str) {
            return Err(diagnose(version_str));
        }

        // the grammar guarantees the core holds neither delimiter, so the first of each is the
        // right place to split.
        let (rest, build) = split_first(version_str, '+');
        let (core, pre_release) = split_first(rest, '-');

        let mut fields = core.splitn(3, '.').map(str::parse::<u64>);
        let mut next_field = || -> Result<u64, VersionError> {
            fields
                .next()
                .and_then(Result::ok)
                .ok_or_else(|| VersionError::InvalidVersion {
                    version: version_str.to_owned(),
                })
        };

        Ok(Self {
            major: next_field()?,
            minor: next_field()?,
            patch: next_field()?,
            pre_release: split_identifiers(pre_release),
            build: split_identifiers(build),
        })
    }

    /// The major version number.
    pub fn major(&self) -> u64 {
        self.major
    }

    /// The minor version number.
    pub fn minor(&self) -> u64 {
        self.minor
    }

    /// The patch version number.
    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// The pre-release identifiers. Empty if this is not a pre-release.
    pub fn pre_release(&self) -> &[String] {
        &self.pre_release
    }

    /// The build metadata identifiers. Empty if there is no build metadata.
    pub fn build(&self) -> &[String] {
        &self.build
    }

    /// Returns true if this version has pre-release identifiers.
    pub fn is_prerelease(&self) -> bool {
        !self.pre_release.is_empty()
    }

    /// Returns the precedence of this version relative to `other`. See [crate::compare].
    pub fn cmp_precedence(&self, other: &Self) -> Ordering {
        compare(self, other)
    }

    /// Returns a new version where the value at `level` is incremented, and all lesser values
    /// are reset to zero. The new version is always a release: pre-release and build metadata are
    /// dropped.
    ///
    /// # Example
    ///
    /// ```
    /// use strict_semver::{Level, Version};
    ///
    /// let version = Version::parse("1.2.3-beta.1+exp").unwrap();
    /// let new_version = version.next(&Level::Major).unwrap();
    /// assert_eq!("2.0.0", new_version.to_string());
    ///
    /// let newer_version = new_version.next(&Level::Patch).unwrap();
    /// assert_eq!("2.0.1", newer_version.to_string());
    /// ```
    ///
    /// # Errors
    ///
    /// - Returns a [VersionError::NumericOverflow] if the value at `level` is already
    ///   [u64::MAX].
    pub fn next(&self, level: &Level) -> Result<Self, VersionError> {
        let bump = |value: u64| {
            value
                .checked_add(1)
                .ok_or(VersionError::NumericOverflow {
                    level: level.name(),
                })
        };

        Ok(match level {
            Level::Major => Self::new(bump(self.major)?, 0, 0),
            Level::Minor => Self::new(self.major, bump(self.minor)?, 0),
            Level::Patch => Self::new(self.major, self.minor, bump(self.patch)?),
        })
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl PartialOrd for Version {
    /// Compares two versions by precedence.
    ///
    /// Returns `None` when they have equal precedence but different build metadata, since they
    /// are then neither equal nor ordered.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.cmp_precedence(other) {
            Ordering::Equal if self.build != other.build => None,
            ord => Some(ord),
        }
    }
}

impl Display for Version {
    /// Renders the canonical version string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.pre_release.is_empty() {
            write!(f, "-{}", self.pre_release.join("."))?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build.join("."))?;
        }

        Ok(())
    }
}
