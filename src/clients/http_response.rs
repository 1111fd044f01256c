//! HTTP response types for the Polytoria API client.
//!
//! This module provides the [`HttpResponse`] type and the service-error
//! detection applied to every successful response body.

use serde_json::Value;

use crate::clients::errors::ServiceError;

/// A decoded response from one of the Polytoria hosts.
///
/// Only 200 responses without a service-level `errors` field are returned
/// to callers; everything else becomes an [`HttpError`](crate::clients::HttpError).
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The decoded JSON body (`{}` when the body is empty).
    pub body: Value,
}

impl HttpResponse {
    /// Creates a new response.
    #[must_use]
    pub const fn new(code: u16, body: Value) -> Self {
        Self { code, body }
    }

    /// Returns `true` if the status code is exactly 200.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code == 200
    }

    /// Extracts the first service-reported error from the body, if any.
    ///
    /// The body reports errors as `{"errors": [{"code": .., "message": ..}]}`.
    /// Only the first entry is kept. The field counts when it is truthy:
    /// `null`, `false`, `0`, and `""` do not fail the response, while an
    /// empty array or a malformed entry still does.
    #[must_use]
    pub fn service_error(&self, url: &str) -> Option<ServiceError> {
        let errors = self.body.get("errors").filter(|e| is_truthy(e))?;
        let first = errors.as_array().and_then(|entries| entries.first());

        let code = first
            .and_then(|entry| entry.get("code"))
            .and_then(value_as_text)
            .unwrap_or_else(|| "unknown".to_string());
        let message = first
            .and_then(|entry| entry.get("message"))
            .and_then(value_as_text)
            .unwrap_or_else(|| "The service reported an error without details".to_string());

        Some(ServiceError {
            url: url.to_string(),
            code,
            message,
        })
    }
}

/// Parses a response body, treating an empty body as `{}`.
pub(crate) fn parse_body(text: &str) -> Result<Value, serde_json::Error> {
    if text.trim().is_empty() {
        Ok(Value::Object(serde_json::Map::new()))
    } else {
        serde_json::from_str(text)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f.abs() > 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn value_as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
