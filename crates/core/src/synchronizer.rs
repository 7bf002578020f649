//! Reaction synchronizer
//!
//! Turns a vote intent into one server round-trip and one UI step. Responses
//! are applied in arrival order: two overlapping votes on the same target are
//! neither queued nor deduplicated, and the last response to arrive decides
//! the displayed counters.

use crate::config::FrontendConfig;
use crate::outcome::{VoteFailure, VoteOutcome, classify};
use crate::reaction::VoteIntent;
use crate::reconcile::{ReactionSurface, apply, plan};
use crate::transport::VoteTransport;
use tracing::{debug, warn};

pub struct Synchronizer<T> {
    transport: T,
    config: FrontendConfig,
}

impl<T: VoteTransport> Synchronizer<T> {
    pub const fn new(transport: T, config: FrontendConfig) -> Self {
        Self { transport, config }
    }

    pub const fn config(&self) -> &FrontendConfig {
        &self.config
    }

    /// Send a vote and reconcile the page with whatever the server answers
    pub async fn submit_vote<S>(&self, intent: &VoteIntent, surface: &S) -> VoteOutcome
    where
        S: ReactionSurface + ?Sized,
    {
        let endpoint = intent.target.kind.endpoint(&self.config);
        debug!(
            kind = %intent.target.kind,
            id = %intent.target.id,
            like = %intent.like,
            direction = ?intent.direction(),
            endpoint,
            "Reaction click"
        );

        let outcome = match self.transport.send_vote(endpoint, intent).await {
            Ok(response) => {
                debug!(status = response.status, "Reaction response");
                classify(
                    response.status,
                    response.content_type.as_deref(),
                    &response.body,
                )
            }
            Err(e) => {
                warn!(error = %e, "Reaction request failed");
                VoteOutcome::Failure(VoteFailure::Transport(e.message))
            }
        };

        match &outcome {
            VoteOutcome::Failure(failure) => {
                warn!(id = %intent.target.id, error = %failure, "Reaction not applied");
            }
            other => debug!(id = %intent.target.id, outcome = ?other, "Reaction outcome"),
        }

        apply(&plan(&outcome, &self.config.login_path), surface);
        outcome
    }
}
