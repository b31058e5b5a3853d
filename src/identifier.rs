//! Predicates over single, already dot-split identifiers.

fn is_identifier_byte(byte: &u8) -> bool {
    byte.is_ascii_alphanumeric() || *byte == b'-'
}

/// Returns true if `id` is made up only of ASCII digits.
///
/// This says nothing about leading zeros: `"007"` is numeric, but it is not a valid numeric
/// pre-release identifier. See [is_numeric_component] for that.
///
/// ```
/// use strict_semver::is_numeric_identifier;
///
/// assert!(is_numeric_identifier("11"));
/// assert!(!is_numeric_identifier("beta"));
/// assert!(!is_numeric_identifier("01a"));
/// ```
pub fn is_numeric_identifier(id: &str) -> bool {
    !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit())
}

/// `0`, or digits that don't start with `0`. This is the form of major, minor, patch, and of
/// numeric pre-release identifiers.
pub(crate) fn is_numeric_component(id: &str) -> bool {
    is_numeric_identifier(id) && (id == "0" || !id.starts_with('0'))
}

pub(crate) fn is_pre_release_identifier(id: &str) -> bool {
    if is_numeric_identifier(id) {
        is_numeric_component(id)
    } else {
        !id.is_empty() && id.as_bytes().iter().all(is_identifier_byte)
    }
}

pub(crate) fn is_build_identifier(id: &str) -> bool {
    !id.is_empty() && id.as_bytes().iter().all(is_identifier_byte)
}
