//! Session Provider Abstraction
//!
//! The orchestrator is a client of an abstract session backend, never a
//! reimplementation of one. A concrete provider wraps whatever service the
//! target platform supplies (LAN beacon, platform lobby service, dedicated
//! matchmaker) behind these seven operations.
//!
//! Every operation is request/then-later-completion: the future resolving
//! IS the completion event, delivered exactly once. Timeouts are the
//! provider's responsibility; the orchestrator has no watchdog for a
//! completion that never arrives.

mod types;

pub use types::{JoinOutcome, ProviderRef, SearchCriteria, SessionSearchResult};

use std::fmt;

use async_trait::async_trait;

use crate::api::types::{SessionConfig, SessionHandle};
use crate::errors::Result;

/// Abstract backend capability for registering, discovering and joining
/// sessions.
///
/// Sessions are keyed by a well-known name; one backend registration per
/// name per instance.
#[async_trait]
pub trait SessionProvider: Send + Sync + fmt::Debug {
    /// Register a new session under `name`. Resolves to the completion
    /// success flag.
    async fn create_session(&self, name: &str, config: &SessionConfig) -> bool;

    /// Tear down the session registered under `name`.
    async fn destroy_session(&self, name: &str) -> bool;

    /// Search for discoverable sessions within `criteria` bounds.
    async fn find_sessions(&self, criteria: &SearchCriteria) -> Result<Vec<SessionSearchResult>>;

    /// Join the session behind an earlier search result, registering it
    /// locally under `name`.
    async fn join_session(&self, name: &str, target: &ProviderRef) -> JoinOutcome;

    /// Mark the session registered under `name` as in progress, closing it
    /// to further discovery.
    async fn start_session(&self, name: &str) -> bool;

    /// Resolve the connect address of the session registered under `name`.
    async fn resolved_address(&self, name: &str) -> Result<String>;

    /// Look up a session this instance already has registered under `name`.
    async fn existing_session(&self, name: &str) -> Option<SessionHandle>;
}
