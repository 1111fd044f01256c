//! Credential injection for outgoing requests.
//!
//! A [`Credential`] adds authentication headers to every request issued by
//! an [`HttpClient`](crate::clients::HttpClient). The default strategy is the
//! `PT_AUTH` session cookie ([`AuthCookie`]); other schemes can be plugged in
//! through [`PolytoriaConfigBuilder::credential`](crate::PolytoriaConfigBuilder::credential)
//! without touching the transport.

use std::collections::HashMap;
use std::fmt;

use crate::config::AuthCookie;

/// A strategy for attaching credentials to outgoing requests.
///
/// Implementations must not log or expose the secret in their `Debug` output.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use polytoria_api::Credential;
///
/// #[derive(Debug)]
/// struct BearerToken(&'static str);
///
/// impl Credential for BearerToken {
///     fn apply(&self, headers: &mut HashMap<String, String>) {
///         headers.insert("Authorization".to_string(), format!("Bearer {}", self.0));
///     }
/// }
/// ```
pub trait Credential: fmt::Debug + Send + Sync {
    /// Inserts the credential's headers into `headers`.
    fn apply(&self, headers: &mut HashMap<String, String>);
}

impl Credential for AuthCookie {
    fn apply(&self, headers: &mut HashMap<String, String>) {
        headers.insert("Cookie".to_string(), self.header_value());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_cookie_sets_cookie_header() {
        let cookie = AuthCookie::new("session").unwrap();
        let mut headers = HashMap::new();
        cookie.apply(&mut headers);

        assert_eq!(headers.get("Cookie"), Some(&"PT_AUTH=session".to_string()));
    }

    #[test]
    fn test_auth_cookie_replaces_existing_cookie_header() {
        let cookie = AuthCookie::new("fresh").unwrap();
        let mut headers = HashMap::new();
        headers.insert("Cookie".to_string(), "PT_AUTH=stale".to_string());
        cookie.apply(&mut headers);

        assert_eq!(headers.get("Cookie"), Some(&"PT_AUTH=fresh".to_string()));
    }
}
