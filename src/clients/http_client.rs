//! HTTP client for Polytoria API communication.
//!
//! This module provides the [`HttpClient`] type: the transport primitive that
//! issues one logical request, injects the configured credential, absorbs
//! `429` responses with a linear backoff, and turns service-reported errors
//! into failures.

use std::collections::HashMap;
use std::time::Duration;

use crate::clients::errors::{HttpError, HttpResponseError, MaxHttpRetriesExceededError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::{parse_body, HttpResponse};
use crate::config::{BaseUrl, PolytoriaConfig};

/// Delay before the first retry of a rate-limited request, in milliseconds.
pub const RATE_LIMIT_BASE_DELAY_MS: u64 = 250;

/// Additional delay added per retry of a rate-limited request, in milliseconds.
pub const RATE_LIMIT_DELAY_STEP_MS: u64 = 250;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the wait before retry number `retry_index` (starting at 0).
///
/// The backoff is linear: 250ms, 500ms, 750ms, ...
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use polytoria_api::clients::rate_limit_delay;
///
/// assert_eq!(rate_limit_delay(0), Duration::from_millis(250));
/// assert_eq!(rate_limit_delay(3), Duration::from_millis(1000));
/// ```
#[must_use]
pub fn rate_limit_delay(retry_index: u32) -> Duration {
    let step = RATE_LIMIT_DELAY_STEP_MS.saturating_mul(u64::from(retry_index));
    Duration::from_millis(RATE_LIMIT_BASE_DELAY_MS.saturating_add(step))
}

/// HTTP client for making requests to one Polytoria host.
///
/// The client handles:
/// - URL construction from a base URL and base path
/// - Default headers including User-Agent and the configured credential
/// - Linear-backoff retries for `429` responses when rate-limit handling is on
/// - Detection of service-reported `errors` in 200 bodies
///
/// No timeout is enforced beyond the defaults of the underlying `reqwest`
/// client.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`.
///
/// # Example
///
/// ```rust,ignore
/// use polytoria_api::PolytoriaConfig;
/// use polytoria_api::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let config = PolytoriaConfig::default();
/// let client = HttpClient::new(config.api_base_url(), "/v1", &config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "users/1").build()?;
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://api.polytoria.com`).
    base_uri: String,
    /// Base path (e.g., "/v1").
    base_path: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    handle_rate_limits: bool,
    max_rate_limit_retries: Option<u32>,
    debug: bool,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given host.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The host to send requests to
    /// * `base_path` - The path prefix for every request (e.g., "/v1")
    /// * `config` - Rate-limit policy, credential, logging, and user agent settings
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(
        base_url: &BaseUrl,
        base_path: impl Into<String>,
        config: &PolytoriaConfig,
    ) -> Result<Self, HttpError> {
        let base_path = base_path.into();
        let base_path = format!("/{}", base_path.trim_matches('/'));
        let base_path = if base_path == "/" {
            String::new()
        } else {
            base_path
        };

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}polytoria-api v{SDK_VERSION} | Rust");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        if let Some(credential) = config.credential() {
            credential.apply(&mut default_headers);
        }

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            base_uri: base_url.as_ref().to_string(),
            base_path,
            default_headers,
            handle_rate_limits: config.handle_rate_limits(),
            max_rate_limit_retries: config.max_rate_limit_retries(),
            debug: config.debug(),
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the base path for this client.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the full URL a request path resolves to, without query.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}{}/{}",
            self.base_uri,
            self.base_path,
            path.trim_matches('/')
        )
    }

    /// Sends an HTTP request and returns the decoded 200 response.
    ///
    /// On a `429` with rate-limit handling enabled, the identical request is
    /// resent after [`rate_limit_delay`]. Without a configured retry bound
    /// this repeats until the service answers with something else.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network error occurs (`Network`)
    /// - A non-200 response is received (`Response`), including `429` when
    ///   rate-limit handling is disabled
    /// - The configured retry bound is spent (`MaxRetries`)
    /// - A 200 body is not JSON (`InvalidBody`)
    /// - A 200 body carries a truthy `errors` field (`Service`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.url_for(&request.path);

        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }
        for (key, value) in &request.extra_headers {
            headers.insert(key.clone(), value.clone());
        }

        let mut retry_count: u32 = 0;
        loop {
            if self.debug {
                tracing::debug!("Fetching {} (attempt {})", url, retry_count + 1);
            }

            let mut req_builder = match request.http_method {
                HttpMethod::Get => self.client.get(&url),
                HttpMethod::Post => self.client.post(&url),
                HttpMethod::Put => self.client.put(&url),
                HttpMethod::Delete => self.client.delete(&url),
            };

            for (key, value) in &headers {
                req_builder = req_builder.header(key, value);
            }

            if !request.query.is_empty() {
                req_builder = req_builder.query(&request.query);
            }

            if let Some(body) = &request.body {
                req_builder = req_builder.body(body.to_string());
            }

            let res = req_builder.send().await?;
            let status = res.status();
            let code = status.as_u16();

            if code == 429 && self.handle_rate_limits {
                if let Some(max) = self.max_rate_limit_retries {
                    if retry_count >= max {
                        return Err(HttpError::MaxRetries(MaxHttpRetriesExceededError {
                            url,
                            code,
                            retries: retry_count,
                        }));
                    }
                }

                let delay = rate_limit_delay(retry_count);
                if self.debug {
                    tracing::debug!(
                        "Rate limit encountered, retrying in {} ms",
                        delay.as_millis()
                    );
                }
                tokio::time::sleep(delay).await;
                retry_count = retry_count.saturating_add(1);
                continue;
            }

            if code != 200 {
                return Err(HttpError::Response(HttpResponseError {
                    url,
                    code,
                    status_text: status.canonical_reason().unwrap_or_default().to_string(),
                }));
            }

            let body_text = res.text().await?;
            let body = parse_body(&body_text)?;
            let response = HttpResponse::new(code, body);

            if let Some(error) = response.service_error(&url) {
                return Err(HttpError::Service(error));
            }

            return Ok(response);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthCookie;

    fn create_client(config: &PolytoriaConfig) -> HttpClient {
        HttpClient::new(config.api_base_url(), "/v1", config).unwrap()
    }

    #[test]
    fn test_rate_limit_delay_is_linear() {
        assert_eq!(rate_limit_delay(0), Duration::from_millis(250));
        assert_eq!(rate_limit_delay(1), Duration::from_millis(500));
        assert_eq!(rate_limit_delay(2), Duration::from_millis(750));
        assert_eq!(rate_limit_delay(39), Duration::from_millis(10_000));
    }

    #[test]
    fn test_rate_limit_delay_saturates() {
        assert!(rate_limit_delay(u32::MAX) >= Duration::from_millis(250));
    }

    #[test]
    fn test_client_construction() {
        let config = PolytoriaConfig::default();
        let client = create_client(&config);

        assert_eq!(client.base_uri(), "https://api.polytoria.com");
        assert_eq!(client.base_path(), "/v1");
        assert_eq!(
            client.url_for("/users/1/"),
            "https://api.polytoria.com/v1/users/1"
        );
    }

    #[test]
    fn test_base_path_is_normalized() {
        let config = PolytoriaConfig::default();
        let client = HttpClient::new(config.site_base_url(), "api/", &config).unwrap();
        assert_eq!(client.base_path(), "/api");

        let client = HttpClient::new(config.site_base_url(), "", &config).unwrap();
        assert_eq!(client.url_for("rankings"), "https://polytoria.com/rankings");
    }

    #[test]
    fn test_user_agent_header_format() {
        let config = PolytoriaConfig::builder().user_agent_prefix("MyBot/1.0").build();
        let client = create_client(&config);

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyBot/1.0 | "));
        assert!(user_agent.contains("polytoria-api v"));
    }

    #[test]
    fn test_cookie_header_injection() {
        let config = PolytoriaConfig::builder()
            .auth_cookie(AuthCookie::new("cookie-value").unwrap())
            .build();
        let client = create_client(&config);

        assert_eq!(
            client.default_headers().get("Cookie"),
            Some(&"PT_AUTH=cookie-value".to_string())
        );
    }

    #[test]
    fn test_no_cookie_header_without_credential() {
        let config = PolytoriaConfig::default();
        let client = create_client(&config);

        assert!(client.default_headers().get("Cookie").is_none());
        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
