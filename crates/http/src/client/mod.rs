//! Forum reaction HTTP client

pub mod error;

use async_trait::async_trait;
use error::ClientError;
use forum_core::{RawResponse, TransportError, VoteIntent, VoteTransport};
use reqwest::{Client, ClientBuilder, header};
use std::time::Duration;

/// Marks the request as issued by page scripts rather than navigation
const REQUESTED_WITH: &str = "XMLHttpRequest";

/// Client for the `/like_post` and `/like_comment` endpoints
#[derive(Clone)]
pub struct ReactionClient {
    client: Client,
    base_url: String,
}

impl ReactionClient {
    /// Create a new client with default configuration
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> ReactionClientBuilder {
        ReactionClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the GET request for one vote.
    ///
    /// Session cookies must travel with the request; in the browser that is
    /// the fetch `credentials: include` mode.
    pub fn vote_request(&self, endpoint: &str, intent: &VoteIntent) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, endpoint);
        let request = self
            .client
            .get(url)
            .query(&intent.query())
            .header(header::ACCEPT, "application/json")
            .header("X-Requested-With", REQUESTED_WITH);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request
    }

    /// Send a vote and return the raw response, whatever its status.
    ///
    /// Errors never carry the request URL: it holds the target id, which
    /// must not leak into messages shown to the user.
    pub async fn send(
        &self,
        endpoint: &str,
        intent: &VoteIntent,
    ) -> Result<RawResponse, ClientError> {
        let response = self
            .vote_request(endpoint, intent)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.text().await.map_err(reqwest::Error::without_url)?;

        tracing::debug!(status, content_type = ?content_type, "Vote response received");

        Ok(RawResponse {
            status,
            content_type,
            body,
        })
    }
}

#[async_trait(?Send)]
impl VoteTransport for ReactionClient {
    async fn send_vote(
        &self,
        endpoint: &str,
        intent: &VoteIntent,
    ) -> Result<RawResponse, TransportError> {
        Ok(self.send(endpoint, intent).await?)
    }
}

/// Builder for ReactionClient
#[derive(Default)]
pub struct ReactionClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ReactionClientBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout (ignored on wasm, where fetch has none)
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent (ignored on wasm, where the browser owns it)
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ReactionClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        #[cfg(not(target_arch = "wasm32"))]
        let client = {
            let mut builder = ClientBuilder::new().user_agent(
                self.user_agent
                    .unwrap_or_else(|| "forum-client/0.1.0".to_string()),
            );
            if let Some(timeout) = self.timeout {
                builder = builder.timeout(timeout);
            }
            builder.build()?
        };

        #[cfg(target_arch = "wasm32")]
        let client = {
            let _ = (self.timeout, self.user_agent);
            ClientBuilder::new().build()?
        };

        Ok(ReactionClient { client, base_url })
    }
}
