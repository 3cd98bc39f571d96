//! Data Transfer Objects
//!
//! Response bodies of the activities backend and the helpers that turn a
//! raw `(status, body)` pair into typed results. Both HTTP clients read the
//! body as text and hand it here, so status handling lives in one place.

use serde::{Deserialize, Serialize};

use super::error::{ApiError, ApiResult};
use crate::catalog::Catalog;

/// Success body of signup and unregister
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionReply {
    pub message: String,
}

/// Failure body of signup and unregister
///
/// `detail` is a plain string for application errors but a list of
/// objects for request validation errors, so it is kept loosely typed.
#[derive(Debug, Deserialize)]
pub struct ErrorReply {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorReply {
    /// The detail, when the server sent it as text
    pub fn message(self) -> Option<String> {
        match self.detail {
            Some(serde_json::Value::String(text)) => Some(text),
            _ => None,
        }
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Decode the body of `GET /activities`
pub fn decode_catalog(status: u16, body: &str) -> ApiResult<Catalog> {
    if !is_success(status) {
        return Err(rejection(status, body));
    }
    Ok(serde_json::from_str(body)?)
}

/// Decode the body of a signup or unregister call
pub fn decode_action(status: u16, body: &str) -> ApiResult<ActionReply> {
    if !is_success(status) {
        return Err(rejection(status, body));
    }
    Ok(serde_json::from_str(body)?)
}

/// A non-success answer. A body that is not JSON at all is a parse
/// failure; JSON without a text `detail` is a rejection without detail.
fn rejection(status: u16, body: &str) -> ApiError {
    let value: serde_json::Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => return ApiError::from(e),
    };
    let detail = serde_json::from_value::<ErrorReply>(value)
        .ok()
        .and_then(ErrorReply::message);
    ApiError::Rejected { status, detail }
}
