//! HTTP-specific error types for the Polytoria API client.
//!
//! This module contains error types for transport operations: non-200
//! responses, service-reported errors, retry exhaustion, and request
//! validation failures.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: A non-200 response that was not retried
//! - [`ServiceError`]: A 200 response whose body carries a truthy `errors` field
//! - [`MaxHttpRetriesExceededError`]: The configured `429` retry bound was spent
//! - [`InvalidHttpRequestError`]: A request failed validation before sending
//! - [`HttpError`]: Unified error type encompassing all of the above
//!
//! # Example
//!
//! ```rust,ignore
//! use polytoria_api::clients::HttpError;
//!
//! match client.get("users/1", Vec::new()).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => println!("HTTP {} {}", e.code, e.status_text),
//!     Err(HttpError::Service(e)) => println!("Service error {}: {}", e.code, e.message),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when a request receives a non-200 response.
///
/// A `429` only ends up here when rate-limit handling is disabled.
///
/// # Example
///
/// ```rust
/// use polytoria_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     url: "https://api.polytoria.com/v1/users/0".to_string(),
///     code: 404,
///     status_text: "Not Found".to_string(),
/// };
///
/// assert_eq!(
///     error.to_string(),
///     "Failed to fetch https://api.polytoria.com/v1/users/0: 404 Not Found"
/// );
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Failed to fetch {url}: {code} {status_text}")]
pub struct HttpResponseError {
    /// The requested URL.
    pub url: String,
    /// The HTTP status code of the response.
    pub code: u16,
    /// The canonical reason phrase of the status code (e.g., "Not Found"),
    /// not the phrase sent by the server.
    pub status_text: String,
}

/// Error returned when a 200 response declares application-level errors.
///
/// Only the first entry of the response's `errors` array is kept.
///
/// # Example
///
/// ```rust
/// use polytoria_api::clients::ServiceError;
///
/// let error = ServiceError {
///     url: "https://api.polytoria.com/v1/users".to_string(),
///     code: "invalid_parameter".to_string(),
///     message: "Invalid sort key".to_string(),
/// };
///
/// assert!(error.to_string().contains("invalid_parameter Invalid sort key"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Failed to fetch {url}: {code} {message}")]
pub struct ServiceError {
    /// The requested URL.
    pub url: String,
    /// The error code reported by the service.
    pub code: String,
    /// The error message reported by the service.
    pub message: String,
}

/// Error returned when the `429` retry bound has been exhausted.
///
/// Only produced when a bound is configured via
/// [`PolytoriaConfigBuilder::max_rate_limit_retries`](crate::PolytoriaConfigBuilder::max_rate_limit_retries).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Exceeded maximum rate limit retry count of {retries} for {url}.")]
pub struct MaxHttpRetriesExceededError {
    /// The requested URL.
    pub url: String,
    /// The HTTP status code of the last response.
    pub code: u16,
    /// The number of retries that were attempted.
    pub retries: u32,
}

/// Error returned when an HTTP request fails validation.
///
/// Raised before a request is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The request path is empty after normalization.
    #[error("Request path cannot be empty.")]
    EmptyPath,

    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for all transport errors.
///
/// # Example
///
/// ```rust,ignore
/// match client.get("users", Vec::new()).await {
///     Ok(response) => { /* handle success */ }
///     Err(HttpError::Response(e)) => { /* non-200 status */ }
///     Err(HttpError::Service(e)) => { /* errors array in a 200 body */ }
///     Err(HttpError::MaxRetries(e)) => { /* retry bound spent */ }
///     Err(HttpError::InvalidRequest(e)) => { /* validation error */ }
///     Err(HttpError::InvalidBody(e)) => { /* body is not JSON */ }
///     Err(HttpError::Network(e)) => { /* connection error */ }
/// }
/// ```
#[derive(Debug, Error)]
pub enum HttpError {
    /// A non-200 HTTP response.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// A 200 response carrying service-reported errors.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// The configured `429` retry bound was spent.
    #[error(transparent)]
    MaxRetries(#[from] MaxHttpRetriesExceededError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// A 200 response body is not valid JSON.
    #[error("Response body is not valid JSON: {0}")]
    InvalidBody(#[from] serde_json::Error),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code associated with this error, if any.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::MaxRetries(e) => Some(e.code),
            Self::Service(_) => Some(200),
            Self::InvalidRequest(_) | Self::InvalidBody(_) | Self::Network(_) => None,
        }
    }
}
