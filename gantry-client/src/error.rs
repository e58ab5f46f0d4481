//! Error types for the gate client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the gate
///
/// Only failures where no HTTP response was obtained end up here. A response
/// with any status code, 4xx and 5xx included, is returned to the caller as a
/// [`RawResponse`](crate::RawResponse).
#[derive(Debug, Error)]
pub enum ClientError {
    /// Request never produced a response (refused, DNS, timeout, reset)
    #[error("request to gate failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Base URL cannot carry a path
    #[error("invalid gate endpoint: {0}")]
    InvalidEndpoint(String),

    /// Underlying HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
}

impl ClientError {
    /// Check if the request timed out
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }

    /// Check if the connection could not be established
    pub fn is_connect(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_connect())
    }
}
