//! HTTP client types for Polytoria API communication.
//!
//! This module provides the transport layer used by every resource accessor.
//! It handles request construction, credential injection, rate-limit retries,
//! and the normalization of service-reported errors.
//!
//! # Overview
//!
//! - [`PolytoriaClient`]: The handle passed to resource accessors
//! - [`HttpClient`]: The per-host transport primitive with the retry loop
//! - [`HttpRequest`]: A request to be sent
//! - [`HttpResponse`]: A decoded 200 response
//! - [`HttpMethod`] and [`DataType`]: Request method and body content type
//! - [`HttpError`]: Unified transport error type
//!
//! # Retry Behavior
//!
//! - **429 (Rate Limited)** with rate-limit handling enabled: retried after
//!   `250ms + retry_index * 250ms`, without limit unless
//!   `max_rate_limit_retries` is configured
//! - **429** with rate-limit handling disabled: returned as [`HttpResponseError`]
//! - **Any other non-200 status**: returned immediately as [`HttpResponseError`]
//! - **200 with a truthy `errors` field**: returned as [`ServiceError`]

mod client;
mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use client::{PolytoriaClient, API_BASE_PATH, SITE_BASE_PATH};
pub use errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
    ServiceError,
};
pub use http_client::{
    rate_limit_delay, HttpClient, RATE_LIMIT_BASE_DELAY_MS, RATE_LIMIT_DELAY_STEP_MS,
    SDK_VERSION,
};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
