//! Uniform response envelope returned to the handler's invoker.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Header carrying the body's media type.
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
/// Header carrying the configured version.
pub const VERSION_HEADER: &str = "X-Lambda-Version";
/// Media type of every envelope body.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Status, headers and JSON-encoded body handed back to the invoker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    /// Status code, passed through unvalidated.
    pub status_code: i64,
    /// Response headers.
    pub headers: BTreeMap<String, String>,
    /// JSON text of the caller's body.
    pub body: String,
}

impl ResponseEnvelope {
    /// The `X-Lambda-Version` header, if set.
    pub fn version(&self) -> Option<&str> {
        self.headers.get(VERSION_HEADER).map(String::as_str)
    }

    /// Decode the body text back into a value.
    pub fn decode_body<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// Build an envelope from an already-resolved version string.
///
/// `serde_json` writes non-ASCII characters literally, so the body keeps
/// them unescaped.
pub fn build_response<T>(
    status_code: i64,
    version: &str,
    body: &T,
) -> Result<ResponseEnvelope, serde_json::Error>
where
    T: Serialize + ?Sized,
{
    let body = serde_json::to_string(body)?;
    let headers = BTreeMap::from([
        (CONTENT_TYPE_HEADER.to_string(), JSON_CONTENT_TYPE.to_string()),
        (VERSION_HEADER.to_string(), version.to_string()),
    ]);
    Ok(ResponseEnvelope {
        status_code,
        headers,
        body,
    })
}
