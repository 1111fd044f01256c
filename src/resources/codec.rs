//! Query serialization and typed payload decoding.
//!
//! Parameters structs are flattened into ordered query pairs; response bodies
//! are decoded through `serde_path_to_error` so that a shape mismatch names
//! the offending field.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::resources::ResourceError;

/// Serializes a params struct to query pairs, skipping `null` values.
///
/// Keys come out in the order `serde_json` stores them (sorted).
pub(crate) fn serialize_to_query<T: Serialize>(
    params: &T,
    resource: &'static str,
) -> Result<Vec<(String, String)>, ResourceError> {
    let value = serde_json::to_value(params).map_err(|e| ResourceError::InvalidParams {
        resource,
        message: e.to_string(),
    })?;

    let Value::Object(map) = value else {
        return Err(ResourceError::InvalidParams {
            resource,
            message: "parameters must serialize to an object".to_string(),
        });
    };

    let mut query = Vec::with_capacity(map.len());
    for (key, val) in map {
        match val {
            Value::Null => {}
            Value::String(s) => query.push((key, s)),
            Value::Number(n) => query.push((key, n.to_string())),
            Value::Bool(b) => query.push((key, b.to_string())),
            Value::Array(_) | Value::Object(_) => query.push((key, val.to_string())),
        }
    }

    Ok(query)
}

/// Decodes a whole response body as `T`.
pub(crate) fn decode_body<T: DeserializeOwned>(
    body: &Value,
    resource: &'static str,
) -> Result<T, ResourceError> {
    serde_path_to_error::deserialize(body)
        .map_err(|source| ResourceError::Decode { resource, source })
}

/// Decodes the payload wrapped under `key` in a response body.
pub(crate) fn decode_field<T: DeserializeOwned>(
    body: &Value,
    key: &'static str,
    resource: &'static str,
) -> Result<T, ResourceError> {
    let value = body
        .get(key)
        .ok_or(ResourceError::MissingField { resource, key })?;
    decode_body(value, resource)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Serialize)]
    struct Params {
        search: Option<String>,
        page: Option<u32>,
        descending: bool,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: u64,
    }

    #[test]
    fn test_serialize_to_query_skips_nulls() {
        let query = serialize_to_query(
            &Params {
                search: Some("bob".to_string()),
                page: None,
                descending: true,
            },
            "Params",
        )
        .unwrap();

        assert_eq!(
            query,
            vec![
                ("descending".to_string(), "true".to_string()),
                ("search".to_string(), "bob".to_string()),
            ]
        );
    }

    #[test]
    fn test_serialize_to_query_rejects_non_objects() {
        let result = serialize_to_query(&42, "Number");
        assert!(matches!(result, Err(ResourceError::InvalidParams { .. })));
    }

    #[test]
    fn test_decode_field_extracts_envelope() {
        let body = json!({"users": [{"id": 1}, {"id": 2}]});
        let items: Vec<Item> = decode_field(&body, "users", "Item").unwrap();
        assert_eq!(items, vec![Item { id: 1 }, Item { id: 2 }]);
    }

    #[test]
    fn test_decode_field_missing_key() {
        let body = json!({"data": []});
        let result: Result<Vec<Item>, _> = decode_field(&body, "users", "Item");
        assert!(matches!(
            result,
            Err(ResourceError::MissingField {
                resource: "Item",
                key: "users"
            })
        ));
    }

    #[test]
    fn test_decode_reports_path_of_bad_value() {
        let body = json!({"users": [{"id": 1}, {"id": "two"}]});
        let result: Result<Vec<Item>, _> = decode_field(&body, "users", "Item");
        match result {
            Err(ResourceError::Decode { source, .. }) => {
                assert_eq!(source.path().to_string(), "[1].id");
            }
            other => panic!("expected decode error, got {other:?}"),
        }
    }
}
