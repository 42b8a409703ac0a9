//! Menu and Match Control APIs
//!
//! High-level capability traits implemented for `Arc<SessionOrchestrator>`.
//! Callers depend only on these traits, never the concrete orchestrator
//! type.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::coordinator::SessionOrchestrator;
use crate::errors::Result;

/// The fixed capability interface menus drive the orchestrator through.
#[async_trait]
pub trait MenuControl: Send + Sync {
    /// Host a session advertised under `server_name`
    async fn host(&self, server_name: &str) -> Result<()>;

    /// Join the `index`-th entry of the most recent server list
    async fn join(&self, index: usize) -> Result<()>;

    /// Start a fresh search for discoverable sessions
    async fn refresh_server_list(&self) -> Result<()>;

    /// Return to a neutral, session-less main menu. Always succeeds
    /// locally.
    async fn load_main_menu(&self) -> Result<()>;
}

#[async_trait]
impl MenuControl for Arc<SessionOrchestrator> {
    async fn host(&self, server_name: &str) -> Result<()> {
        SessionOrchestrator::host(self, server_name).await
    }

    async fn join(&self, index: usize) -> Result<()> {
        SessionOrchestrator::join(self, index).await
    }

    async fn refresh_server_list(&self) -> Result<()> {
        SessionOrchestrator::refresh_server_list(self).await
    }

    async fn load_main_menu(&self) -> Result<()> {
        SessionOrchestrator::load_main_menu(self.as_ref()).await
    }
}

/// Start-of-match control handed to the lobby layer.
#[async_trait]
pub trait MatchControl: Send + Sync + fmt::Debug {
    /// Mark the active session as in progress at the backend, closing it
    /// to further discovery
    async fn start_match_session(&self) -> Result<()>;
}

#[async_trait]
impl MatchControl for Arc<SessionOrchestrator> {
    async fn start_match_session(&self) -> Result<()> {
        SessionOrchestrator::start_match_session(self.as_ref()).await
    }
}
