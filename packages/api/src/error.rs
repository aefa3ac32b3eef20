//! Error taxonomy for calls against the student service.

use serde::Deserialize;
use thiserror::Error;

use crate::models::StudentId;

/// Result type alias for student service calls.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Failure of a single call against the student service.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never reached the server or no response came back.
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("server returned {status}: {body}")]
    Remote { status: u16, body: String },

    /// The server answered 2xx but the body did not have the expected shape.
    #[error("could not decode response: {0}")]
    Decode(String),

    /// No record with this id exists.
    #[error("student {0} not found")]
    NotFound(StudentId),
}

/// Error bodies produced by the backend: `{"errors": [...]}` or `{"error": "..."}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ApiError {
    /// Create a remote error from a status code and raw body.
    pub fn remote(status: u16, body: impl Into<String>) -> Self {
        Self::Remote {
            status,
            body: body.into(),
        }
    }

    /// Status code for remote errors (404 for [`ApiError::NotFound`]).
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } => Some(*status),
            Self::NotFound(_) => Some(404),
            _ => None,
        }
    }

    /// User-facing messages carried by a remote error body.
    ///
    /// Understands the backend's validation (`errors`) and failure (`error`) shapes,
    /// falls back to the raw body, and to `"HTTP {status}"` when the body is empty.
    /// Non-remote errors yield their `Display` text.
    pub fn remote_messages(&self) -> Vec<String> {
        let Self::Remote { status, body } = self else {
            return vec![self.to_string()];
        };

        if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
            let mut messages = parsed.errors;
            messages.extend(parsed.error);
            if !messages.is_empty() {
                return messages;
            }
        }

        let trimmed = body.trim();
        if trimmed.is_empty() {
            vec![format!("HTTP {status}")]
        } else {
            vec![trimmed.to_string()]
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
