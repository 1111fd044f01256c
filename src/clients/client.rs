//! Top-level client for the Polytoria APIs.
//!
//! [`PolytoriaClient`] owns the configuration and one [`HttpClient`] per
//! remote host: the public API (`/v1` on the API host) and the internal API
//! (`/api` on the website host).

use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse};
use crate::config::PolytoriaConfig;

/// Base path of the public API.
pub const API_BASE_PATH: &str = "/v1";

/// Base path of the internal API on the website host.
pub const SITE_BASE_PATH: &str = "/api";

/// Client handle passed to every resource accessor.
///
/// # Thread Safety
///
/// `PolytoriaClient` is `Send + Sync`. Requests issued through it are
/// independent; the crate itself never runs two of them concurrently.
///
/// # Example
///
/// ```rust,ignore
/// use polytoria_api::{PolytoriaClient, PolytoriaConfig};
/// use polytoria_api::resources::User;
///
/// let client = PolytoriaClient::new(PolytoriaConfig::default())?;
/// let user = User::find(&client, 1).await?;
/// println!("{}", user.username);
/// ```
#[derive(Debug)]
pub struct PolytoriaClient {
    config: PolytoriaConfig,
    api: HttpClient,
    site: HttpClient,
}

// Verify PolytoriaClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PolytoriaClient>();
};

impl PolytoriaClient {
    /// Creates a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if an underlying HTTP client cannot be
    /// created.
    pub fn new(config: PolytoriaConfig) -> Result<Self, HttpError> {
        let api = HttpClient::new(config.api_base_url(), API_BASE_PATH, &config)?;
        let site = HttpClient::new(config.site_base_url(), SITE_BASE_PATH, &config)?;

        Ok(Self { config, api, site })
    }

    /// Returns the configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &PolytoriaConfig {
        &self.config
    }

    /// Returns the HTTP client for the public API host.
    #[must_use]
    pub const fn api(&self) -> &HttpClient {
        &self.api
    }

    /// Returns the HTTP client for the website host.
    #[must_use]
    pub const fn site(&self) -> &HttpClient {
        &self.site
    }

    /// Sends a GET request to the public API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for validation, transport, and service errors.
    pub async fn get(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, path)
            .query(query)
            .build()?;
        self.api.request(request).await
    }

    /// Sends a GET request to the internal API on the website host.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for validation, transport, and service errors.
    pub async fn get_internal(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, path)
            .query(query)
            .build()?;
        self.site.request(request).await
    }
}
