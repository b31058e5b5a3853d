/// Errors from parsing or incrementing a version.
#[allow(missing_docs)]
#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum VersionError {
    #[error("Version `{version}` is not a valid semantic version")]
    InvalidVersion { version: String },

    #[error("Pre-release `{pre_release}` of version `{version}` should be dot-separated, non-empty identifiers without leading zeros on numeric ones")]
    InvalidPreRelease {
        version: String,
        pre_release: String,
    },

    #[error("Build metadata `{build}` of version `{version}` should be dot-separated, non-empty identifiers of `[0-9A-Za-z-]`")]
    InvalidBuildMetadata { version: String, build: String },

    #[error("Unknown field `{field}` to increment, expected one of `major`, `minor`, or `patch`")]
    InvalidField { field: String },

    #[error("Incrementing `{level}` would overflow its value")]
    NumericOverflow { level: &'static str },
}
