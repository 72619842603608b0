//! API version selection.
//!
//! Shoplazza versions its Admin API with `YYYY-MM` strings. Selecting a
//! version changes the path prefix prepended to every resource path; without
//! one, requests go to the unversioned `openapi` surface.
//!
//! The prefix is carried by each [`Client`](crate::Client) instance, so two
//! clients built with different versions never interfere with each other.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// The path prefix used when no API version is selected.
const DEFAULT_PREFIX: &str = "openapi";

/// A Shoplazza Admin API version.
///
/// # Example
///
/// ```rust
/// use shoplazza_api::ApiVersion;
///
/// let version: ApiVersion = "2022-01".parse().unwrap();
/// assert_eq!(version.path_prefix(), "admin/api/2022-01");
///
/// assert_eq!(ApiVersion::Default.path_prefix(), "openapi");
/// assert!("22-1".parse::<ApiVersion>().is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// The unversioned default API surface.
    #[default]
    Default,
    /// A dated version in `YYYY-MM` form.
    Stable(String),
}

impl ApiVersion {
    /// Parses a `YYYY-MM` version string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiVersion`] if the string is not four
    /// digits, a dash, and two digits.
    pub fn new(version: impl Into<String>) -> Result<Self, ConfigError> {
        let version = version.into();
        if is_valid_version(&version) {
            Ok(Self::Stable(version))
        } else {
            Err(ConfigError::InvalidApiVersion { version })
        }
    }

    /// Returns the path prefix for this version.
    ///
    /// Stable versions map to `admin/api/<version>`; the default maps to
    /// `openapi`.
    #[must_use]
    pub fn path_prefix(&self) -> String {
        match self {
            Self::Default => DEFAULT_PREFIX.to_string(),
            Self::Stable(version) => format!("admin/api/{version}"),
        }
    }
}

fn is_valid_version(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 7
        && bytes[..4].iter().all(u8::is_ascii_digit)
        && bytes[4] == b'-'
        && bytes[5..].iter().all(u8::is_ascii_digit)
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("default"),
            Self::Stable(version) => f.write_str(version),
        }
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_version_builds_dated_prefix() {
        let version = ApiVersion::new("2022-01").unwrap();
        assert_eq!(version.path_prefix(), "admin/api/2022-01");
    }

    #[test]
    fn test_default_version_uses_openapi_prefix() {
        assert_eq!(ApiVersion::Default.path_prefix(), "openapi");
        assert_eq!(ApiVersion::default(), ApiVersion::Default);
    }

    #[test]
    fn test_invalid_versions_are_rejected() {
        for bad in ["", "2022", "2022-1", "22-01", "2022/01", "2022-o1", "2022-011"] {
            let result = ApiVersion::new(bad);
            assert!(
                matches!(result, Err(ConfigError::InvalidApiVersion { .. })),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_from_str_round_trips_display() {
        let version: ApiVersion = "2023-10".parse().unwrap();
        assert_eq!(version.to_string(), "2023-10");
    }
}
