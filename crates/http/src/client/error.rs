//! Client error types

use forum_core::TransportError;
use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

/// Only the underlying cause reaches the user; the `Request failed:` prefix
/// stays in logs.
impl From<ClientError> for TransportError {
    fn from(error: ClientError) -> Self {
        match error {
            ClientError::Request(e) => Self::new(e.to_string()),
            ClientError::Configuration(message) => Self::new(message),
        }
    }
}
