use serde::Serialize;

use crate::error::Result;

/// A serialized response body plus the content type it should ship with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonResponse {
    pub body: String,
    pub content_type: &'static str,
}

/// Encode `value` as a compact JSON response body.
pub fn encode<T: Serialize>(value: &T) -> Result<JsonResponse> {
    Ok(JsonResponse {
        body: serde_json::to_string(value)?,
        content_type: "application/json",
    })
}

/// Encode `value` as pretty-printed JSON.
pub fn encode_pretty<T: Serialize>(value: &T) -> Result<JsonResponse> {
    Ok(JsonResponse {
        body: serde_json::to_string_pretty(value)?,
        content_type: "application/json",
    })
}

/// Encode `value` wrapped in a JSONP callback invocation.
///
/// The body becomes `callback(<json>);` and the content type switches to
/// the script media type, since the payload is now executable.
pub fn encode_jsonp<T: Serialize>(value: &T, callback: &str) -> Result<JsonResponse> {
    let json = serde_json::to_string(value)?;
    Ok(JsonResponse {
        body: format!("{}({});", callback, json),
        content_type: "application/javascript",
    })
}
