//! Forum HTTP module providing the reaction vote client

pub mod client;

pub use client::error::ClientError;
pub use client::{ReactionClient, ReactionClientBuilder};
