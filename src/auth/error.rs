//! Authentication failures and the `{success, message}` outcome shown to users

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Generic message for anything unexpected (storage, serialization)
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Missing field or malformed value
    #[error("{0}")]
    Validation(String),

    /// Email or tax ID already registered
    #[error("{0}")]
    Conflict(String),

    /// Unknown email and wrong password are indistinguishable
    #[error("Incorrect email or password")]
    InvalidCredentials,

    /// Persisted user or token could not be decoded
    #[error("Corrupted session: {0}")]
    CorruptedSession(String),

    /// Unexpected failure; details are logged, never shown
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    pub(crate) fn validation(message: &str) -> Self {
        AuthError::Validation(message.to_string())
    }

    /// Text safe to show to the user
    pub fn user_message(&self) -> String {
        match self {
            AuthError::Internal(_) | AuthError::CorruptedSession(_) => {
                INTERNAL_ERROR_MESSAGE.to_string()
            }
            other => other.to_string(),
        }
    }
}

impl From<crate::error::Error> for AuthError {
    fn from(err: crate::error::Error) -> Self {
        AuthError::Internal(err.to_string())
    }
}

impl From<serde_json::Error> for AuthError {
    fn from(err: serde_json::Error) -> Self {
        AuthError::Internal(err.to_string())
    }
}

/// Result of a session operation as reported to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthOutcome {
    pub success: bool,
    pub message: String,
}

impl AuthOutcome {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

impl From<&AuthError> for AuthOutcome {
    fn from(err: &AuthError) -> Self {
        AuthOutcome::failed(err.user_message())
    }
}
