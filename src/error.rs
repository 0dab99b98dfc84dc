use std::fmt;

use crate::island::GraphqlError;

/// Status code and reason reported inside an API envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiStatus {
    pub code: u16,
    pub reason: Option<String>,
}

impl ApiStatus {
    pub fn new(code: u16, reason: Option<String>) -> Self {
        Self { code, reason }
    }
}

impl fmt::Display for ApiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "API returned code {}", self.code)?;
        if let Some(reason) = &self.reason {
            write!(f, ": \"{}\"", reason)?;
        }
        Ok(())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum MccError {
    #[error("{0}")]
    RateLimit(ApiStatus),
    #[error("{0}")]
    InvalidGame(ApiStatus),
    #[error("{0}")]
    InvalidTeam(ApiStatus),
    #[error("{0}")]
    InvalidEvent(ApiStatus),
    #[error("{0}")]
    InvalidParticipant(ApiStatus),
    #[error("{0}")]
    Api(ApiStatus),
    #[error("request timed out: {0}")]
    Timeout(reqwest::Error),
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed envelope: {0}")]
    Envelope(String),
    #[error("invalid client configuration: {0}")]
    Config(String),
    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),
    #[error("GraphQL errors: {}", join_messages(.0))]
    Graphql(Vec<GraphqlError>),
}

impl MccError {
    /// The envelope status behind a taxonomy error, if this is one.
    pub fn status(&self) -> Option<&ApiStatus> {
        match self {
            MccError::RateLimit(status)
            | MccError::InvalidGame(status)
            | MccError::InvalidTeam(status)
            | MccError::InvalidEvent(status)
            | MccError::InvalidParticipant(status)
            | MccError::Api(status) => Some(status),
            _ => None,
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, MccError::RateLimit(_))
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, MccError::Timeout(_))
    }
}

// Timeouts get their own variant so callers can branch without digging into reqwest.
impl From<reqwest::Error> for MccError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            MccError::Timeout(err)
        } else {
            MccError::Http(err)
        }
    }
}

fn join_messages(errors: &[GraphqlError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
