//! Forum frontend core: reaction synchronisation and page preferences

pub mod config;
pub mod container;
pub mod error;
pub mod filter;
pub mod outcome;
pub mod reaction;
pub mod reconcile;
pub mod synchronizer;
pub mod theme;
pub mod transport;

pub use config::FrontendConfig;
pub use container::{ContainerRule, ContainerStrategy};
pub use error::{CoreError, CoreResult};
pub use outcome::{VoteFailure, VoteOutcome, classify};
pub use reaction::{Counters, ReactionKind, ReactionTarget, VoteDirection, VoteIntent};
pub use reconcile::{ReactionSurface, Reconciliation, apply, plan};
pub use synchronizer::Synchronizer;
pub use theme::{KeyValueStore, MemoryStore, Theme, ThemeSettings};
pub use transport::{RawResponse, TransportError, VoteTransport};
