//! Configuration types for the Polytoria API client.
//!
//! This module provides the configuration consumed by every request: the
//! rate-limit policy, the session credential, diagnostic logging, and the
//! remote hosts.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`PolytoriaConfig`]: The configuration struct, built once and shared
//! - [`PolytoriaConfigBuilder`]: A builder for constructing [`PolytoriaConfig`] instances
//! - [`AuthCookie`]: A validated `PT_AUTH` cookie value with masked debug output
//! - [`BaseUrl`]: A validated base URL for a remote host
//! - [`Credential`]: The credential injection strategy
//!
//! # Example
//!
//! ```rust
//! use polytoria_api::{AuthCookie, PolytoriaConfig};
//!
//! let config = PolytoriaConfig::builder()
//!     .auth_cookie(AuthCookie::new("cookie-value").unwrap())
//!     .debug(false)
//!     .build();
//!
//! assert!(config.handle_rate_limits());
//! assert!(config.has_credential());
//! ```

mod credential;
mod newtypes;

pub use credential::Credential;
pub use newtypes::{AuthCookie, BaseUrl};

use std::sync::Arc;

/// Default host of the public API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.polytoria.com";

/// Default host of the website, which serves the internal API.
pub const DEFAULT_SITE_BASE_URL: &str = "https://polytoria.com";

/// Configuration for the Polytoria API client.
///
/// Built once via [`PolytoriaConfig::builder`] and read on every request.
/// Nothing in the crate mutates it after construction.
///
/// # Rate Limits
///
/// With `handle_rate_limits` enabled (the default), a `429` response is
/// retried after `250ms + retry_index * 250ms`. Without a configured
/// [`max_rate_limit_retries`](PolytoriaConfigBuilder::max_rate_limit_retries)
/// the retry loop is unbounded, so an await may take arbitrarily long if the
/// service never recovers.
///
/// # Thread Safety
///
/// `PolytoriaConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct PolytoriaConfig {
    handle_rate_limits: bool,
    max_rate_limit_retries: Option<u32>,
    credential: Option<Arc<dyn Credential>>,
    debug: bool,
    api_base_url: BaseUrl,
    site_base_url: BaseUrl,
    user_agent_prefix: Option<String>,
}

impl PolytoriaConfig {
    /// Creates a new builder for constructing a `PolytoriaConfig`.
    #[must_use]
    pub fn builder() -> PolytoriaConfigBuilder {
        PolytoriaConfigBuilder::new()
    }

    /// Returns whether `429` responses are retried.
    #[must_use]
    pub const fn handle_rate_limits(&self) -> bool {
        self.handle_rate_limits
    }

    /// Returns the maximum number of `429` retries, if bounded.
    #[must_use]
    pub const fn max_rate_limit_retries(&self) -> Option<u32> {
        self.max_rate_limit_retries
    }

    /// Returns the configured credential, if any.
    #[must_use]
    pub fn credential(&self) -> Option<&dyn Credential> {
        self.credential.as_deref()
    }

    /// Returns whether a credential is configured.
    #[must_use]
    pub const fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    /// Returns whether per-request diagnostic logging is enabled.
    #[must_use]
    pub const fn debug(&self) -> bool {
        self.debug
    }

    /// Returns the base URL of the public API host.
    #[must_use]
    pub const fn api_base_url(&self) -> &BaseUrl {
        &self.api_base_url
    }

    /// Returns the base URL of the website host.
    #[must_use]
    pub const fn site_base_url(&self) -> &BaseUrl {
        &self.site_base_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

impl Default for PolytoriaConfig {
    fn default() -> Self {
        PolytoriaConfigBuilder::new().build()
    }
}

// Verify PolytoriaConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PolytoriaConfig>();
};

/// Builder for constructing [`PolytoriaConfig`] instances.
///
/// # Defaults
///
/// - `handle_rate_limits`: `true`
/// - `max_rate_limit_retries`: `None` (unbounded)
/// - `credential`: `None`
/// - `debug`: `true`
/// - `api_base_url`: [`DEFAULT_API_BASE_URL`]
/// - `site_base_url`: [`DEFAULT_SITE_BASE_URL`]
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use polytoria_api::{BaseUrl, PolytoriaConfig};
///
/// let config = PolytoriaConfig::builder()
///     .handle_rate_limits(true)
///     .max_rate_limit_retries(20)
///     .api_base_url(BaseUrl::new("http://localhost:8080").unwrap())
///     .user_agent_prefix("MyBot/1.0")
///     .build();
///
/// assert_eq!(config.max_rate_limit_retries(), Some(20));
/// ```
#[derive(Debug, Default)]
pub struct PolytoriaConfigBuilder {
    handle_rate_limits: Option<bool>,
    max_rate_limit_retries: Option<u32>,
    credential: Option<Arc<dyn Credential>>,
    debug: Option<bool>,
    api_base_url: Option<BaseUrl>,
    site_base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
}

impl PolytoriaConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether `429` responses are retried with a linear backoff.
    ///
    /// The aggregation helpers refuse to run when this is disabled.
    #[must_use]
    pub const fn handle_rate_limits(mut self, enabled: bool) -> Self {
        self.handle_rate_limits = Some(enabled);
        self
    }

    /// Bounds the number of `429` retries for a single request.
    ///
    /// Once spent, the next `429` fails with
    /// [`HttpError::MaxRetries`](crate::clients::HttpError::MaxRetries).
    #[must_use]
    pub const fn max_rate_limit_retries(mut self, retries: u32) -> Self {
        self.max_rate_limit_retries = Some(retries);
        self
    }

    /// Sets the `PT_AUTH` session cookie sent with every request.
    ///
    /// Required by internal endpoints such as the leaderboard.
    #[must_use]
    pub fn auth_cookie(mut self, cookie: AuthCookie) -> Self {
        self.credential = Some(Arc::new(cookie));
        self
    }

    /// Sets a custom credential injection strategy, replacing any auth cookie.
    #[must_use]
    pub fn credential(mut self, credential: impl Credential + 'static) -> Self {
        self.credential = Some(Arc::new(credential));
        self
    }

    /// Sets whether a diagnostic log line is emitted per request attempt.
    #[must_use]
    pub const fn debug(mut self, enabled: bool) -> Self {
        self.debug = Some(enabled);
        self
    }

    /// Overrides the public API host.
    #[must_use]
    pub fn api_base_url(mut self, url: BaseUrl) -> Self {
        self.api_base_url = Some(url);
        self
    }

    /// Overrides the website host serving the internal API.
    #[must_use]
    pub fn site_base_url(mut self, url: BaseUrl) -> Self {
        self.site_base_url = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`PolytoriaConfig`], filling in defaults for unset fields.
    #[must_use]
    pub fn build(self) -> PolytoriaConfig {
        PolytoriaConfig {
            handle_rate_limits: self.handle_rate_limits.unwrap_or(true),
            max_rate_limit_retries: self.max_rate_limit_retries,
            credential: self.credential,
            debug: self.debug.unwrap_or(true),
            api_base_url: self
                .api_base_url
                .unwrap_or_else(|| default_base_url(DEFAULT_API_BASE_URL)),
            site_base_url: self
                .site_base_url
                .unwrap_or_else(|| default_base_url(DEFAULT_SITE_BASE_URL)),
            user_agent_prefix: self.user_agent_prefix,
        }
    }
}

fn default_base_url(url: &'static str) -> BaseUrl {
    match BaseUrl::new(url) {
        Ok(url) => url,
        Err(e) => unreachable!("default base URL {url} is invalid: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = PolytoriaConfig::builder().build();

        assert!(config.handle_rate_limits());
        assert!(config.max_rate_limit_retries().is_none());
        assert!(!config.has_credential());
        assert!(config.debug());
        assert_eq!(config.api_base_url().as_ref(), "https://api.polytoria.com");
        assert_eq!(config.site_base_url().as_ref(), "https://polytoria.com");
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_default_matches_empty_builder() {
        let config = PolytoriaConfig::default();
        assert!(config.handle_rate_limits());
        assert!(config.debug());
        assert!(!config.has_credential());
    }

    #[test]
    fn test_auth_cookie_becomes_credential() {
        let config = PolytoriaConfig::builder()
            .auth_cookie(AuthCookie::new("abc").unwrap())
            .build();

        let mut headers = HashMap::new();
        config.credential().unwrap().apply(&mut headers);
        assert_eq!(headers.get("Cookie"), Some(&"PT_AUTH=abc".to_string()));
    }

    #[test]
    fn test_custom_credential_replaces_cookie() {
        #[derive(Debug)]
        struct Header;

        impl Credential for Header {
            fn apply(&self, headers: &mut HashMap<String, String>) {
                headers.insert("X-Test".to_string(), "1".to_string());
            }
        }

        let config = PolytoriaConfig::builder()
            .auth_cookie(AuthCookie::new("abc").unwrap())
            .credential(Header)
            .build();

        let mut headers = HashMap::new();
        config.credential().unwrap().apply(&mut headers);
        assert!(headers.get("Cookie").is_none());
        assert_eq!(headers.get("X-Test"), Some(&"1".to_string()));
    }

    #[test]
    fn test_debug_output_masks_cookie() {
        let config = PolytoriaConfig::builder()
            .auth_cookie(AuthCookie::new("very-secret").unwrap())
            .build();

        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("PolytoriaConfig"));
        assert!(!debug_str.contains("very-secret"));
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = PolytoriaConfig::builder()
            .handle_rate_limits(false)
            .max_rate_limit_retries(3)
            .debug(false)
            .api_base_url(BaseUrl::new("http://localhost:1234").unwrap())
            .site_base_url(BaseUrl::new("http://localhost:5678").unwrap())
            .user_agent_prefix("MyBot/1.0")
            .build();

        assert!(!config.handle_rate_limits());
        assert_eq!(config.max_rate_limit_retries(), Some(3));
        assert!(!config.debug());
        assert_eq!(config.api_base_url().as_ref(), "http://localhost:1234");
        assert_eq!(config.site_base_url().as_ref(), "http://localhost:5678");
        assert_eq!(config.user_agent_prefix(), Some("MyBot/1.0"));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PolytoriaConfig>();
    }
}
