//! API Error Types
//!
//! Errors a backend call can end in, split the way the board reports them:
//! transport and parse failures get a generic message, rejections carry
//! the server's own detail.

use thiserror::Error;

/// Errors that can occur when talking to the activities backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Request never produced a response (unreachable, reset, timed out)
    #[error("Network error: {0}")]
    Network(String),

    /// Response body was not the expected JSON
    #[error("Parse error: {0}")]
    Parse(String),

    /// Server answered with a non-success status
    #[error("Request rejected ({status}): {}", .detail.as_deref().unwrap_or("no detail"))]
    Rejected { status: u16, detail: Option<String> },
}

impl ApiError {
    /// Whether the failure happened below the application level
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Network(_) | ApiError::Parse(_))
    }

    /// Server-provided detail of a rejection, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Parse(err.to_string())
    }
}

/// Result type alias for backend calls
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiError::Rejected {
            status: 400,
            detail: Some("Student is already signed up".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Request rejected (400): Student is already signed up"
        );

        let err = ApiError::Rejected { status: 500, detail: None };
        assert_eq!(err.to_string(), "Request rejected (500): no detail");
    }

    #[test]
    fn test_classification() {
        assert!(ApiError::Network("refused".into()).is_transport());
        assert!(ApiError::Parse("eof".into()).is_transport());

        let rejected = ApiError::Rejected { status: 404, detail: Some("Activity not found".into()) };
        assert!(!rejected.is_transport());
        assert_eq!(rejected.detail(), Some("Activity not found"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ApiError = json_err.into();
        assert!(matches!(err, ApiError::Parse(_)));
    }
}
