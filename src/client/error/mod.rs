//! Error types for the Devla client.
//!
//! Every failure a page can run into is collected in [`Error`]. Errors never escape the
//! page that triggered them: pages either show [`Error::user_message`] in a visible error
//! slot or log the error and keep their previous state.

pub mod config;

use thiserror::Error;

use crate::client::error::config::ConfigError;

/// Message shown when a request could not reach the backend at all
pub const NETWORK_FAILURE_MESSAGE: &str =
    "Unable to reach the server, please check your connection and try again.";

/// Main error type for the Devla client.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid backend URL).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// The request could not be completed (connection refused, DNS, CORS...).
    #[error("Failed to send request: {0}")]
    Network(#[from] reqwest::Error),
    /// The backend answered with a non-success status.
    ///
    /// `message` holds the backend's own message when it provided one.
    #[error("Request failed with status {status}: {message}")]
    Rejected { status: u16, message: String },
    /// The backend answered successfully but the body did not match the expected shape.
    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),
    /// A protected request was attempted without a session token.
    #[error("No session token present for an authenticated request")]
    Unauthorized,
    /// The session token payload could not be read.
    #[error("Failed to decode session token: {0}")]
    Token(String),
    /// Durable session storage is unavailable or failed to write.
    #[error("Session storage error: {0}")]
    Storage(String),
}

impl Error {
    /// Text displayed to the user in an inline error slot.
    ///
    /// Backend rejections are shown verbatim, everything else gets a generic message.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { message, .. } => message.clone(),
            Self::Network(_) => NETWORK_FAILURE_MESSAGE.to_string(),
            Self::Unauthorized => "Please log in to continue.".to_string(),
            err => err.to_string(),
        }
    }

    /// Status code of a backend rejection, if this is one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            Self::Network(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }
}
