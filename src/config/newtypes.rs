//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Polytoria `PT_AUTH` session cookie value.
///
/// Holds just the cookie value, not the entire `Cookie` header. The value is
/// masked in debug output to prevent accidental exposure in logs.
///
/// Using internal APIs is not directly allowed by Polytoria and abuse of
/// them may result in a ban.
///
/// # Example
///
/// ```rust
/// use polytoria_api::AuthCookie;
///
/// let cookie = AuthCookie::new("cookie-value").unwrap();
/// assert_eq!(cookie.as_ref(), "cookie-value");
/// assert_eq!(format!("{:?}", cookie), "AuthCookie(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AuthCookie(String);

impl AuthCookie {
    /// The name of the cookie the value is sent under.
    pub const NAME: &'static str = "PT_AUTH";

    /// Creates a new validated auth cookie.
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAuthCookie`] if the value is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigError> {
        let value = value.into();
        let value = value.trim();
        if value.is_empty() {
            return Err(ConfigError::EmptyAuthCookie);
        }
        Ok(Self(value.to_string()))
    }

    /// Returns the `Cookie` header value (`PT_AUTH=<value>`).
    #[must_use]
    pub fn header_value(&self) -> String {
        format!("{}={}", Self::NAME, self.0)
    }
}

impl AsRef<str> for AuthCookie {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthCookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthCookie(*****)")
    }
}

/// A validated base URL for one of the remote hosts.
///
/// The URL must carry a scheme and a host. A trailing `/` is removed so that
/// paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use polytoria_api::BaseUrl;
///
/// let url = BaseUrl::new("https://api.polytoria.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.polytoria.com");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "api.polytoria.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
    host_end: usize,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no scheme or host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidBaseUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidBaseUrl { url });
        }
        if url[host_end..].contains(['?', '#']) {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        Ok(Self {
            url,
            scheme_end,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.scheme_end + 3..self.host_end]
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl Serialize for BaseUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.url)
    }
}

impl<'de> Deserialize<'de> for BaseUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_cookie_rejects_empty_string() {
        assert!(matches!(AuthCookie::new(""), Err(ConfigError::EmptyAuthCookie)));
        assert!(matches!(
            AuthCookie::new("   "),
            Err(ConfigError::EmptyAuthCookie)
        ));
    }

    #[test]
    fn test_auth_cookie_masks_value_in_debug() {
        let cookie = AuthCookie::new("super-secret-cookie").unwrap();
        let debug_output = format!("{:?}", cookie);
        assert_eq!(debug_output, "AuthCookie(*****)");
        assert!(!debug_output.contains("super-secret-cookie"));
    }

    #[test]
    fn test_auth_cookie_header_value() {
        let cookie = AuthCookie::new(" abc123 ").unwrap();
        assert_eq!(cookie.header_value(), "PT_AUTH=abc123");
    }

    #[test]
    fn test_base_url_strips_trailing_slash() {
        let url = BaseUrl::new("https://polytoria.com/").unwrap();
        assert_eq!(url.as_ref(), "https://polytoria.com");
        assert_eq!(url.host_name(), "polytoria.com");
    }

    #[test]
    fn test_base_url_accepts_port() {
        let url = BaseUrl::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), "127.0.0.1");
        assert_eq!(url.to_string(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_base_url_rejects_invalid_urls() {
        for invalid in ["", "api.polytoria.com", "://host", "https://", "https://host?x=1"] {
            assert!(
                matches!(BaseUrl::new(invalid), Err(ConfigError::InvalidBaseUrl { .. })),
                "expected {invalid:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_base_url_serde_round_trip_validates() {
        let url: BaseUrl = serde_json::from_str(r#""https://api.polytoria.com""#).unwrap();
        assert_eq!(serde_json::to_string(&url).unwrap(), r#""https://api.polytoria.com""#);

        let invalid: Result<BaseUrl, _> = serde_json::from_str(r#""not a url""#);
        assert!(invalid.is_err());
    }
}
