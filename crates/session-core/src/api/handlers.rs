//! Event Handlers for Session Lifecycle Notifications
//!
//! Two seams connect the orchestrator to the rest of the game:
//!
//! 1. [`SessionEventHandler`]: the UI layer's view of session lifecycle
//!    events. Default implementations log and do nothing else, so an
//!    implementor overrides only what it presents.
//! 2. [`TravelHandler`]: the transport layer that physically moves
//!    participants between environments and addresses.
//!
//! Handlers are called after the orchestrator has already updated its own
//! state, and must not assume any particular ordering relative to other
//! listeners.

use std::fmt;

use async_trait::async_trait;

use crate::api::types::{HostFailure, JoinFailure, ServerListing};

/// Receives the orchestrator's lifecycle events.
#[async_trait]
pub trait SessionEventHandler: Send + Sync + fmt::Debug {
    /// A hosted session is registered and the lobby is about to load
    async fn on_session_ready(&self) {
        tracing::info!("session ready");
    }

    /// A host request failed; no session is active
    async fn on_host_failed(&self, reason: HostFailure) {
        tracing::warn!("host request failed: {}", reason);
    }

    /// A completed search replaced the server list
    async fn on_server_list_updated(&self, listings: Vec<ServerListing>) {
        tracing::info!(count = listings.len(), "server list updated");
    }

    /// A join resolved to a connect address; travel follows
    async fn on_join_resolved(&self, address: &str) {
        tracing::info!(%address, "join resolved");
    }

    /// A join request failed; re-entry policy belongs to the caller
    async fn on_join_failed(&self, reason: JoinFailure) {
        tracing::warn!("join failed: {}", reason);
    }

    /// The transport dropped; the orchestrator has reset to a sessionless
    /// state and travel back to the main menu is underway
    async fn on_session_lost(&self, reason: &str) {
        tracing::warn!(%reason, "session lost");
    }

    /// The menu should dismiss itself. Raised when a hosted session comes
    /// up, and optimistically when a join is issued, before its result is
    /// known.
    async fn on_menu_teardown(&self) {}
}

/// Handler that relies entirely on the default logging implementations.
#[derive(Debug, Default)]
pub struct LoggingEventHandler;

#[async_trait]
impl SessionEventHandler for LoggingEventHandler {}

/// Executes travel side effects against the game's transport layer.
#[async_trait]
pub trait TravelHandler: Send + Sync + fmt::Debug {
    /// Move the local participant to a resolved connect address
    async fn travel_to_address(&self, address: &str);

    /// Move the host into the shared lobby environment and begin listening
    /// for sessionless clients
    async fn travel_to_lobby(&self);

    /// Move every connected participant into the match environment
    /// (server-authoritative; clients follow automatically)
    async fn travel_to_match(&self);

    /// Return the local participant to the main menu
    async fn travel_to_main_menu(&self);
}

/// Travel handler that logs and goes nowhere. Useful for tests and
/// headless tools.
#[derive(Debug, Default)]
pub struct NullTravelHandler;

#[async_trait]
impl TravelHandler for NullTravelHandler {
    async fn travel_to_address(&self, address: &str) {
        tracing::debug!(%address, "travel to address ignored");
    }

    async fn travel_to_lobby(&self) {
        tracing::debug!("travel to lobby ignored");
    }

    async fn travel_to_match(&self) {
        tracing::debug!("travel to match ignored");
    }

    async fn travel_to_main_menu(&self) {
        tracing::debug!("travel to main menu ignored");
    }
}
