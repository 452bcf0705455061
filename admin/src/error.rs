//! Error handling for the offer administration client
//!
//! Client errors are propagated unchanged to the screen, which reduces them
//! to a single localized banner message per action.

use thiserror::Error;

/// Failures of a backend call
#[derive(Error, Debug)]
pub enum ClientError {
    /// The backend answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),
}

impl ClientError {
    /// Status code of an HTTP failure, if the backend answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Http { status, .. } => Some(*status),
            ClientError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Result type alias for backend calls
pub type ClientResult<T> = Result<T, ClientError>;
