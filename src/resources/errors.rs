//! Resource-specific error types.
//!
//! [`ResourceError`] is what every accessor and aggregation helper returns.
//! It separates caller-side precondition violations ([`ConfigError`]) from
//! transport failures ([`HttpError`]) and from responses whose shape does not
//! match the expected payload.
//!
//! # Example
//!
//! ```rust,ignore
//! use polytoria_api::resources::{ResourceError, SearchUser, UserSearchParams};
//!
//! match SearchUser::list(&client, &UserSearchParams::default()).await {
//!     Ok(users) => println!("{} users", users.len()),
//!     Err(ResourceError::Config(e)) => println!("Fix the call: {e}"),
//!     Err(ResourceError::Http(e)) => println!("Request failed: {e}"),
//!     Err(e) => println!("Unexpected payload: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::{HttpError, ServiceError};
use crate::error::ConfigError;

/// Error type for resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// A precondition was violated before any request was sent.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The request failed at the transport or service level.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The response body lacks the field wrapping the payload.
    #[error("Missing key '{key}' in {resource} response body")]
    MissingField {
        /// The resource type name (e.g., "SearchUser").
        resource: &'static str,
        /// The envelope key that was expected.
        key: &'static str,
    },

    /// The payload does not match the expected shape.
    #[error("Failed to decode {resource} at '{}': {}", .source.path(), .source.inner())]
    Decode {
        /// The resource type name.
        resource: &'static str,
        /// The decode failure, including the path to the offending value.
        #[source]
        source: serde_path_to_error::Error<serde_json::Error>,
    },

    /// Request parameters could not be converted into a query string.
    #[error("Failed to serialize {resource} parameters: {message}")]
    InvalidParams {
        /// The resource type name.
        resource: &'static str,
        /// The serialization failure.
        message: String,
    },
}

impl ResourceError {
    /// Returns `true` if the error was raised before any request was sent.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Returns the HTTP status code of a transport failure, if any.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status_code(),
            _ => None,
        }
    }

    /// Returns the service-reported error, if that is what failed the call.
    #[must_use]
    pub const fn service_error(&self) -> Option<&ServiceError> {
        match self {
            Self::Http(HttpError::Service(e)) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;

    #[test]
    fn test_config_errors_are_flagged() {
        let error: ResourceError = ConfigError::LimitTooLarge {
            limit: 101,
            max: 100,
        }
        .into();
        assert!(error.is_config());
        assert!(error.status_code().is_none());
        assert!(error.to_string().contains("greater than 100"));
    }

    #[test]
    fn test_http_errors_expose_status_code() {
        let error: ResourceError = HttpError::Response(HttpResponseError {
            url: "https://api.polytoria.com/v1/users/1".to_string(),
            code: 404,
            status_text: "Not Found".to_string(),
        })
        .into();
        assert!(!error.is_config());
        assert_eq!(error.status_code(), Some(404));
    }

    #[test]
    fn test_service_error_accessor() {
        let error: ResourceError = HttpError::Service(ServiceError {
            url: String::new(),
            code: "bad".to_string(),
            message: "Bad request".to_string(),
        })
        .into();
        assert_eq!(error.service_error().unwrap().code, "bad");
    }

    #[test]
    fn test_decode_error_names_path() {
        let value = serde_json::json!({"id": "not-a-number"});
        #[derive(Debug, serde::Deserialize)]
        struct Item {
            #[allow(dead_code)]
            id: u64,
        }
        let source = serde_path_to_error::deserialize::<_, Item>(&value).unwrap_err();
        let error = ResourceError::Decode {
            resource: "Item",
            source,
        };
        let message = error.to_string();
        assert!(message.contains("Item"));
        assert!(message.contains("'id'"));
    }

    #[test]
    fn test_missing_field_message() {
        let error = ResourceError::MissingField {
            resource: "Friendship",
            key: "friends",
        };
        assert_eq!(
            error.to_string(),
            "Missing key 'friends' in Friendship response body"
        );
    }
}
