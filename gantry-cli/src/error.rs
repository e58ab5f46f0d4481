//! Command error taxonomy
//!
//! Every failed invocation ends in exactly one of these. All of them are
//! terminal and map to the same non-zero exit status; `kind()` keeps them
//! apart in logs and diagnostics.

use gantry_client::ClientError;
use gantry_core::DecodeError;
use thiserror::Error;

/// Exit status reported on success
pub const EXIT_SUCCESS: i32 = 0;

/// Exit status reported on any failure
pub const EXIT_FAILURE: i32 = 1;

/// Errors that end a command invocation
#[derive(Debug, Error)]
pub enum CommandError {
    /// Required flag missing or malformed; no request was made
    #[error("usage error: {0}")]
    Usage(String),

    /// Gate could not be reached
    #[error("transport error: {0}")]
    Transport(ClientError),

    /// Gate answered with a non-2xx status
    #[error("server error: gate responded with HTTP {status}")]
    Server { status: u16, body: String },

    /// Gate answered 2xx with a body that is not a pipeline listing
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// HTTP client could not be set up; no request was made
    #[error("client error: {0}")]
    Client(String),

    /// Listing could not be rendered or written to stdout
    #[error("output error: {0}")]
    Output(String),
}

impl CommandError {
    /// Stable label for the error class
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Usage(_) => "usage",
            Self::Transport(_) => "transport",
            Self::Server { .. } => "server",
            Self::Decode(_) => "decode",
            Self::Client(_) => "client",
            Self::Output(_) => "output",
        }
    }
}

impl From<ClientError> for CommandError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::InvalidEndpoint(endpoint) => {
                Self::Usage(format!("gate endpoint '{endpoint}' cannot be used as a base URL"))
            }
            ClientError::Build(e) => Self::Client(e.to_string()),
            other => Self::Transport(other),
        }
    }
}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        Self::Output(err.to_string())
    }
}

impl From<serde_json::Error> for CommandError {
    fn from(err: serde_json::Error) -> Self {
        Self::Output(err.to_string())
    }
}
