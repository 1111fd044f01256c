//! Configuration error types for the Polytoria API client.
//!
//! This module contains the error type raised when a caller violates a
//! precondition before any network activity takes place: invalid
//! configuration values, a page size over the API maximum, or an operation
//! that needs a feature (rate-limit handling, a session credential) that is
//! not configured.
//!
//! # Error Handling
//!
//! Every [`ConfigError`] is produced synchronously, before a request is
//! built. These errors are never retried.
//!
//! # Example
//!
//! ```rust
//! use polytoria_api::{AuthCookie, ConfigError};
//!
//! let result = AuthCookie::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAuthCookie)));
//! ```

use thiserror::Error;

/// Errors raised when a caller-side precondition is violated.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The auth cookie value cannot be empty.
    #[error("Auth cookie cannot be empty. Provide just the PT_AUTH cookie value, not the entire cookie.")]
    EmptyAuthCookie,

    /// A base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://api.polytoria.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A single-page request asked for more items than the API returns per page.
    #[error("Limit cannot be greater than {max} (got {limit}). Use SearchUser::list_many instead.")]
    LimitTooLarge {
        /// The requested page size.
        limit: u32,
        /// The maximum page size accepted by the API.
        max: u32,
    },

    /// An aggregation helper was called while rate-limit handling is disabled.
    #[error("Cannot use {operation} without rate limit handling enabled.")]
    RateLimitHandlingDisabled {
        /// The operation that was attempted.
        operation: &'static str,
    },

    /// An internal endpoint was called without a session credential.
    #[error("Cannot use {operation} without a valid Polytoria auth cookie.")]
    MissingCredential {
        /// The operation that was attempted.
        operation: &'static str,
    },
}
