//! Error types for the Jamf Pro client.
//!
//! Every failure surfaces exactly once to the immediate caller; nothing in
//! this crate retries or recovers internally.

use thiserror::Error;

/// Result type alias for Jamf client operations
pub type JamfResult<T> = std::result::Result<T, JamfError>;

/// Errors surfaced by [`JamfClient`](crate::JamfClient).
#[derive(Debug, Error)]
pub enum JamfError {
    /// Invalid client configuration. Raised at construction time; no client
    /// instance is produced.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The server answered with a status outside the success set {200, 201}.
    #[error("{message}")]
    Status {
        /// Numeric HTTP status code
        code: u16,
        /// `"<code> <canonical reason>"`, e.g. `"404 Not Found"`
        message: String,
    },

    /// The request failed below the HTTP layer, or the response body could
    /// not be read. `code` carries the response status when one exists.
    #[error("Transport error: {source}")]
    Transport {
        code: Option<u16>,
        #[source]
        source: reqwest::Error,
    },
}

impl JamfError {
    /// Build a `Status` error from a non-success response status.
    pub(crate) fn from_status(status: reqwest::StatusCode) -> Self {
        let code = status.as_u16();
        let message = match status.canonical_reason() {
            Some(reason) => format!("{} {}", code, reason),
            None => code.to_string(),
        };
        Self::Status { code, message }
    }

    /// Wrap a reqwest error, capturing the response status when one is
    /// attached. Must never panic: a connection-level failure carries no
    /// response at all.
    pub(crate) fn transport(source: reqwest::Error) -> Self {
        let code = source.status().map(|status| status.as_u16());
        Self::Transport { code, source }
    }

    /// HTTP status code associated with this error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Config(_) => None,
            Self::Status { code, .. } => Some(*code),
            Self::Transport { code, .. } => *code,
        }
    }
}
