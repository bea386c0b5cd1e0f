//! Error taxonomy for portal operations.
//!
//! Every engine operation returns [`PortalError`] on failure. Callers decide how
//! to present a failure by looking at [`PortalError::kind`]; the engine itself
//! never retries, logs, or translates errors.

use thiserror::Error;

/// Errors produced while talking to the portal or rendering its data.
#[derive(Debug, Error)]
pub enum PortalError {
    /// Connection errors, non-2xx statuses, and body read failures.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The login call succeeded but the session cookie was missing or empty.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The response body could not be decoded into the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// A bilingual field was absent or could not be split.
    #[error("malformed text: {0}")]
    MalformedText(String),

    /// The decoded result tree could not be rendered.
    #[error("malformed results: {0}")]
    MalformedResults(String),

    /// An RPC parameter could not be encoded.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

/// Caller-facing category of a [`PortalError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network or HTTP trouble; trying again later may succeed.
    Transient,
    /// The portal rejected the credentials; the user should re-enter them.
    Credentials,
    /// The portal returned data the engine cannot use.
    UpstreamData,
    /// A request could not be built locally.
    Internal,
}

impl PortalError {
    pub fn malformed_response(reason: impl Into<String>) -> Self {
        Self::MalformedResponse(reason.into())
    }

    pub fn malformed_text(reason: impl Into<String>) -> Self {
        Self::MalformedText(reason.into())
    }

    pub fn malformed_results(reason: impl Into<String>) -> Self {
        Self::MalformedResults(reason.into())
    }

    /// Wraps a JSON decoding failure for the named payload.
    pub fn decode(payload: &str, err: serde_json::Error) -> Self {
        Self::MalformedResponse(format!("failed to decode {payload}: {err}"))
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport(_) => ErrorKind::Transient,
            Self::InvalidCredentials => ErrorKind::Credentials,
            Self::MalformedResponse(_) | Self::MalformedText(_) | Self::MalformedResults(_) => {
                ErrorKind::UpstreamData
            }
            Self::InvalidRequest(_) => ErrorKind::Internal,
        }
    }

    pub fn is_transient(&self) -> bool {
        self.kind() == ErrorKind::Transient
    }
}
