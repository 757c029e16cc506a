// src/client/error.rs
use crate::application::dto::LoginOutcome;
use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("transport failure: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A path segment that would change the route once normalised.
    #[error("invalid path segment '{0}'")]
    InvalidSegment(String),

    /// The server answered with a non-success status.
    #[error("api error {status}: {message}")]
    Api { status: u16, message: String },

    /// Credentials were checked and did not match.
    #[error("login rejected: {0}")]
    Rejected(LoginOutcome),

    #[error("session storage failure: {0}")]
    Storage(String),

    #[error("malformed payload: {0}")]
    Serde(#[from] serde_json::Error),
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
