//! Untyped JSON payload extractor
//!
//! Payload validation works over `serde_json::Value` rather than typed
//! request structs: type errors have to be collected per field, not
//! rejected at deserialization time. The extractor only enforces the
//! content type and that the body parses as JSON.

use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::{header, HeaderMap};
use serde_json::Value;

use crate::response::ApiError;

/// Extractor for an `application/json` body parsed to a `Value`
#[derive(Debug)]
pub struct JsonPayload(pub Value);

/// Parse a JSON request body, enforcing the content type first.
///
/// Exposed separately from the extractor for the routes that must run a
/// path-parameter check before touching the body.
pub fn parse_payload(headers: &HeaderMap, body: &[u8]) -> Result<Value, ApiError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    if !content_type.starts_with("application/json") {
        return Err(ApiError::InvalidContentType);
    }

    serde_json::from_slice(body).map_err(|_| ApiError::MalformedBody)
}

#[async_trait]
impl<S> FromRequest<S> for JsonPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let headers = req.headers().clone();
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|_| ApiError::MalformedBody)?;

        parse_payload(&headers, &body).map(Self)
    }
}
