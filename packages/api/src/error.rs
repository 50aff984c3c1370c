//! Errors returned by the API client.
//!
//! Every failure carries enough structure to be classified without looking at
//! its message: [`ApiError::kind`] maps it onto the three failure families the
//! client reacts to differently.

use std::fmt;

/// How the caller should react to a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The token is missing, expired, or rejected. The session must be cleared.
    Authorization,
    /// The request was refused before reaching the network.
    Validation,
    /// Any other non-2xx response or network error.
    TransportOrServer,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Authorization => write!(f, "authorization"),
            FailureKind::Validation => write!(f, "validation"),
            FailureKind::TransportOrServer => write!(f, "transport_or_server"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx response.
    #[error("HTTP {status}")]
    Status { status: u16, body: String },

    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 2xx response whose body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Update or delete of a resource that has no server-assigned id.
    #[error("{path}: resource has no id")]
    MissingId { path: &'static str },

    /// A login response whose id and token disagree.
    #[error("login response did not contain a usable session")]
    InvalidSession,

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// HTTP status code, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            ApiError::MissingId { .. } | ApiError::Config(_) => FailureKind::Validation,
            _ => match self.status() {
                Some(401 | 403) => FailureKind::Authorization,
                _ => FailureKind::TransportOrServer,
            },
        }
    }

    /// Shorthand for `kind() == FailureKind::Authorization`.
    pub fn is_unauthorized(&self) -> bool {
        self.kind() == FailureKind::Authorization
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
