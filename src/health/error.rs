// src/health/error.rs
use reqwest::StatusCode;
use std::fmt;

/// The only text a user ever sees for a failed health check.
pub const BACKEND_UNREACHABLE: &str = "Failed to connect to backend";

#[derive(Debug, thiserror::Error)]
pub enum HealthCheckError {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    #[error("backend answered HTTP {0}")]
    HttpStatus(StatusCode),

    #[error("malformed health payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl HealthCheckError {
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err)
        } else {
            Self::Transport(err)
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Transport(_) => FailureKind::Transport,
            Self::Timeout(_) => FailureKind::Timeout,
            Self::HttpStatus(_) => FailureKind::HttpStatus,
            Self::Decode(_) => FailureKind::Decode,
            Self::InvalidUrl(_) => FailureKind::InvalidUrl,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Transport,
    Timeout,
    HttpStatus,
    Decode,
    InvalidUrl,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureKind::Transport => "transport",
            FailureKind::Timeout => "timeout",
            FailureKind::HttpStatus => "http_status",
            FailureKind::Decode => "decode",
            FailureKind::InvalidUrl => "invalid_url",
        };
        f.write_str(name)
    }
}

/// A failed check as kept in display state: the cause is retained for
/// diagnostics, the presentation is always [`BACKEND_UNREACHABLE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckFailure {
    pub kind: FailureKind,
    pub diagnostic: String,
}

impl CheckFailure {
    pub fn user_message(&self) -> &'static str {
        BACKEND_UNREACHABLE
    }
}

impl From<&HealthCheckError> for CheckFailure {
    fn from(err: &HealthCheckError) -> Self {
        Self {
            kind: err.kind(),
            diagnostic: err.to_string(),
        }
    }
}
