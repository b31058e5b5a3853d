use crate::error::VersionError;
use core::{
    fmt::{self, Display},
    str::FromStr,
};

/// The part of a version to increment: `major`, `minor`, or `patch`.
///
/// Parse one from its (case-sensitive) name with [str::parse]:
///
/// ```
/// use strict_semver::Level;
///
/// assert_eq!(Ok(Level::Minor), "minor".parse());
/// assert!("Minor".parse::<Level>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// Increment major, resetting minor and patch.
    Major,
    /// Increment minor, resetting patch.
    Minor,
    /// Increment patch.
    Patch,
}

impl Level {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Level::Major => "major",
            Level::Minor => "minor",
            Level::Patch => "patch",
        }
    }
}

impl FromStr for Level {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "major" => Ok(Level::Major),
            "minor" => Ok(Level::Minor),
            "patch" => Ok(Level::Patch),
            _ => Err(VersionError::InvalidField {
                field: s.to_owned(),
            }),
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
