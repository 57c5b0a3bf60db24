//! Error types for GitHub API operations

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Result alias used by every client operation
pub type Result<T> = std::result::Result<T, GitHubError>;

/// Errors surfaced by [`GitHubClient`](crate::GitHubClient)
///
/// Nothing is retried or swallowed: each variant reaches the caller as-is.
#[derive(Debug, Error)]
pub enum GitHubError {
    /// An argument was rejected before any request was sent
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The API answered with a non-success status
    #[error("Error {status}: {message}")]
    Request { status: u16, message: String },

    /// Connection, DNS, TLS or timeout failure from the HTTP layer
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// A success response whose body did not have the expected shape
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// A timestamp field that is not valid ISO-8601
    #[error("invalid timestamp '{value}': {source}")]
    Timestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Pagination hit its configured page limit without seeing an empty page
    #[error("pagination stopped after {limit} pages without reaching the last page")]
    PageLimitExceeded { limit: u32 },
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl GitHubError {
    /// Build a [`GitHubError::Request`] from a failed response body.
    ///
    /// GitHub reports failures as `{"message": "..."}`. Bodies that are not
    /// JSON, or lack the field, fall back to the status' canonical reason.
    pub(crate) fn from_response(status: StatusCode, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            });

        GitHubError::Request {
            status: status.as_u16(),
            message,
        }
    }

    /// HTTP status of a [`GitHubError::Request`], if that is what this is
    pub fn status(&self) -> Option<u16> {
        match self {
            GitHubError::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}
