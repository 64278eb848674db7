//! `{ "data": ... }` envelopes for request and response bodies

use crate::core::error::{ApiError, RequestError};
use axum::{
    Json,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Success envelope wrapping an entity or a list of entities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Axum extractor yielding the `data` member of a JSON request body
///
/// Only the JSON syntax is checked here. A missing or non-object `data`
/// comes through as-is (absent becomes `null`) and is rejected by the
/// route's validation chain, so an unknown id is still reported first.
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_dish(DataPayload(data): DataPayload) -> ApiResult<...> {
///     // data is whatever the body held under "data"
/// }
/// ```
#[derive(Debug, Clone)]
pub struct DataPayload(pub Value);

impl DataPayload {
    /// Pull the `data` member out of an already parsed body
    pub fn from_body(body: Value) -> Self {
        match body {
            Value::Object(mut map) => DataPayload(map.remove("data").unwrap_or(Value::Null)),
            _ => DataPayload(Value::Null),
        }
    }
}

impl<S> FromRequest<S> for DataPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body): Json<Value> = Json::from_request(req, state).await.map_err(|e| {
            RequestError::InvalidBody {
                message: e.body_text(),
            }
        })?;

        Ok(Self::from_body(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_body_extracts_data_member() {
        let DataPayload(data) = DataPayload::from_body(json!({ "data": { "name": "Taco" } }));
        assert_eq!(data, json!({ "name": "Taco" }));
    }

    #[test]
    fn test_from_body_without_data_yields_null() {
        let DataPayload(data) = DataPayload::from_body(json!({ "name": "Taco" }));
        assert!(data.is_null());

        let DataPayload(data) = DataPayload::from_body(json!([{ "data": {} }]));
        assert!(data.is_null());
    }

    #[test]
    fn test_from_body_passes_non_object_data_through() {
        let DataPayload(data) = DataPayload::from_body(json!({ "data": [1, 2] }));
        assert_eq!(data, json!([1, 2]));
    }

    #[test]
    fn test_envelope_serializes_under_data() {
        let json = serde_json::to_value(Envelope::new(vec![1, 2, 3])).unwrap();
        assert_eq!(json, json!({ "data": [1, 2, 3] }));
    }
}
