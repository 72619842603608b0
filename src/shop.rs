//! Shop naming utilities.
//!
//! This module provides the [`ShopDomain`] type, which normalizes a shop
//! identifier into its canonical `<name>.myshoplaza.com` form and derives
//! the base URL used for all API requests.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The root domain appended to bare shop names.
const ROOT_DOMAIN: &str = "myshoplaza.com";

/// A normalized Shoplazza shop domain.
///
/// Construction is total: any input is trimmed and canonicalized rather than
/// rejected. Surrounding whitespace and dot characters are stripped, and the
/// root domain is appended unless it is already present.
///
/// Normalization is idempotent:
///
/// ```rust
/// use shoplazza_api::ShopDomain;
///
/// let domain = ShopDomain::new(" theshop. ");
/// assert_eq!(domain.full_name(), "theshop.myshoplaza.com");
/// assert_eq!(ShopDomain::new(domain.full_name()), domain);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShopDomain {
    full_name: String,
}

impl ShopDomain {
    /// Creates a shop domain from a bare name or a full domain.
    #[must_use]
    pub fn new(name: impl AsRef<str>) -> Self {
        let name = name.as_ref().trim().trim_matches('.');
        let full_name = if name.contains(ROOT_DOMAIN) {
            name.to_string()
        } else {
            format!("{name}.{ROOT_DOMAIN}")
        };
        Self { full_name }
    }

    /// Returns the full shop name, including the root domain.
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Returns the short shop name, with the root domain removed.
    #[must_use]
    pub fn short_name(&self) -> String {
        self.full_name.replace(&format!(".{ROOT_DOMAIN}"), "")
    }

    /// Returns the shop's base URL, with no trailing path or slash.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("https://{}", self.full_name)
    }
}

impl fmt::Display for ShopDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name)
    }
}

impl<T: AsRef<str>> From<T> for ShopDomain {
    fn from(name: T) -> Self {
        Self::new(name)
    }
}

impl Serialize for ShopDomain {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.full_name)
    }
}

impl<'de> Deserialize<'de> for ShopDomain {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::new(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_appends_root_domain() {
        assert_eq!(
            ShopDomain::new("theshop").full_name(),
            "theshop.myshoplaza.com"
        );
    }

    #[test]
    fn test_full_name_keeps_existing_root_domain() {
        assert_eq!(
            ShopDomain::new("theshop.myshoplaza.com").full_name(),
            "theshop.myshoplaza.com"
        );
    }

    #[test]
    fn test_full_name_trims_whitespace_and_dots() {
        assert_eq!(
            ShopDomain::new("  .theshop.  ").full_name(),
            "theshop.myshoplaza.com"
        );
    }

    #[test]
    fn test_full_name_is_idempotent() {
        let cases = ["theshop", " theshop ", "theshop.myshoplaza.com", ".shop."];
        for case in cases {
            let once = ShopDomain::new(case);
            let twice = ShopDomain::new(once.full_name());
            assert_eq!(once, twice, "normalization not idempotent for {case:?}");
        }
    }

    #[test]
    fn test_short_name_strips_root_domain() {
        assert_eq!(ShopDomain::new("theshop").short_name(), "theshop");
        assert_eq!(
            ShopDomain::new("theshop.myshoplaza.com").short_name(),
            "theshop"
        );
        assert_eq!(ShopDomain::new(" theshop. ").short_name(), "theshop");
    }

    #[test]
    fn test_base_url_has_no_trailing_slash() {
        assert_eq!(
            ShopDomain::new("theshop").base_url(),
            "https://theshop.myshoplaza.com"
        );
    }

    #[test]
    fn test_serializes_to_full_domain_string() {
        let domain = ShopDomain::new("theshop");
        let json = serde_json::to_string(&domain).unwrap();
        assert_eq!(json, r#""theshop.myshoplaza.com""#);

        let restored: ShopDomain = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, domain);
    }
}
