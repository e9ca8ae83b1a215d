//! Request body presence and media type checks.

use axum::body::Bytes;
use axum::http::{header, HeaderMap};
use serde::de::DeserializeOwned;

use crate::mediator::HandlerError;

/// Deserialize a JSON body that must be present.
///
/// An empty body or a literal `null` is reported as "`<name>` object is
/// null" and malformed JSON as "`<name>` object is invalid" (both 400). A
/// body sent without a JSON `Content-Type` is rejected with 415.
pub fn required_json<T: DeserializeOwned>(
    headers: &HeaderMap,
    body: &Bytes,
    name: &str,
) -> Result<T, HandlerError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(HandlerError::Validation(format!("{} object is null", name)));
    }

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    if !is_json(content_type) {
        return Err(HandlerError::UnsupportedMediaType(format!(
            "Unsupported media type '{}'; expected application/json",
            content_type
        )));
    }

    let value: Option<T> = serde_json::from_slice(body)
        .map_err(|e| HandlerError::Validation(format!("{} object is invalid: {}", name, e)))?;
    value.ok_or_else(|| HandlerError::Validation(format!("{} object is null", name)))
}

/// `application/json` or any `application/*+json`, parameters ignored.
fn is_json(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}
