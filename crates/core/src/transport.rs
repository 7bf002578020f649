//! Vote transport seam

use crate::reaction::VoteIntent;
use async_trait::async_trait;

/// A completed HTTP exchange, reduced to what classification needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, content_type: Option<&str>, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: content_type.map(str::to_string),
            body: body.into(),
        }
    }

    /// A JSON response with `application/json` content type
    pub fn json(status: u16, body: &serde_json::Value) -> Self {
        Self::new(status, Some("application/json"), body.to_string())
    }
}

/// The request never produced a response (offline, CORS, aborted)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Sends one vote to the server.
///
/// Futures are not `Send`: in the browser they run on the single UI thread.
#[async_trait(?Send)]
pub trait VoteTransport {
    async fn send_vote(
        &self,
        endpoint: &str,
        intent: &VoteIntent,
    ) -> Result<RawResponse, TransportError>;
}
