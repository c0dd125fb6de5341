//! API client errors.

use serde::Deserialize;
use thiserror::Error;

/// Errors returned by [`super::ApiClient`].
///
/// All variants are transport failures from the caller's point of view; they
/// are never retried or recovered inside the client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request could not be built, sent, or its body read.
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),

    /// Backend answered with a non-success status.
    #[error("API error: {status} - {body}")]
    Status { status: u16, body: String },

    /// Payload did not match the requested response type.
    #[error("Parse error: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Error document the backend sends alongside 4xx statuses.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    /// HTTP status code, when the backend answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            Self::Decode(_) => None,
        }
    }

    /// Whether the backend rejected the request for lack of a session.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// The backend's `{"error": "..."}` text, if the body carried one.
    #[must_use]
    pub fn server_message(&self) -> Option<String> {
        match self {
            Self::Status { body, .. } => serde_json::from_str::<ErrorBody>(body)
                .ok()
                .map(|b| b.error),
            _ => None,
        }
    }
}
