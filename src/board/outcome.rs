//! Mapping backend results of mutating actions to notices

use crate::api::{ActionReply, ApiError};

use super::notice::Notice;

/// Shown when a rejection carries no usable detail
pub const GENERIC_ERROR_TEXT: &str = "An error occurred";

/// A mutating board action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardAction {
    Signup,
    Unregister,
}

impl BoardAction {
    /// Notice text for a transport failure
    pub fn fallback_text(self) -> &'static str {
        match self {
            BoardAction::Signup => "Failed to sign up. Please try again.",
            BoardAction::Unregister => "Failed to unregister. Please try again.",
        }
    }

    pub fn verb(self) -> &'static str {
        match self {
            BoardAction::Signup => "signing up",
            BoardAction::Unregister => "unregistering",
        }
    }
}

/// What the board does after an action resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    pub action: BoardAction,
    pub notice: Notice,
    pub succeeded: bool,
    /// Set when the request failed below the application level
    pub transport_error: Option<ApiError>,
}

impl ActionOutcome {
    /// Classify a resolved action and log failures
    pub fn resolve(action: BoardAction, result: Result<ActionReply, ApiError>) -> Self {
        match result {
            Ok(reply) => Self {
                action,
                notice: Notice::success(reply.message),
                succeeded: true,
                transport_error: None,
            },
            Err(ApiError::Rejected { status, detail }) => {
                tracing::warn!(status, ?detail, "Server rejected {}", action.verb());
                Self {
                    action,
                    notice: Notice::error(detail.unwrap_or_else(|| GENERIC_ERROR_TEXT.to_string())),
                    succeeded: false,
                    transport_error: None,
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Error {}", action.verb());
                Self {
                    action,
                    notice: Notice::error(action.fallback_text()),
                    succeeded: false,
                    transport_error: Some(e),
                }
            }
        }
    }

    /// Only a successful signup clears the form
    pub fn resets_form(&self) -> bool {
        self.succeeded && self.action == BoardAction::Signup
    }

    pub fn reloads_catalog(&self) -> bool {
        self.succeeded
    }
}
