//! Core SessionOrchestrator structure and request entry points.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::api::builder::OrchestratorConfig;
use crate::api::handlers::{SessionEventHandler, TravelHandler};
use crate::api::types::{PendingOperation, ServerListing, SessionConfig, SessionHandle};
use crate::errors::{Result, SessionError};
use crate::provider::SessionProvider;

/// Orchestrates the lifecycle of this instance's one multiplayer session:
/// hosting, discovery, joining and teardown.
///
/// Requests return as soon as the backend operation is issued; completion
/// handling lives in spawned driver tasks (see `event_handler.rs`). At most
/// one create/destroy/join operation is in flight at a time; a request that
/// would overlap is rejected, never queued. Searches supersede each other
/// instead and are ordered by `search_seq`.
#[derive(Debug)]
pub struct SessionOrchestrator {
    pub(crate) config: OrchestratorConfig,

    /// Intended settings of the session being hosted, set per host request
    pub(crate) session_config: RwLock<Option<SessionConfig>>,

    /// Handle of the active session, if any
    pub(crate) handle: RwLock<Option<SessionHandle>>,

    /// The exclusive operation currently in flight
    pub(crate) pending: Mutex<Option<PendingOperation>>,

    /// Listings published by the most recent completed search
    pub(crate) listings: RwLock<Vec<ServerListing>>,

    /// Sequence of the most recently issued search; completions carrying an
    /// older sequence are discarded
    pub(crate) search_seq: AtomicU64,

    pub(crate) provider: Arc<dyn SessionProvider>,
    pub(crate) handler: Arc<dyn SessionEventHandler>,
    pub(crate) travel: Arc<dyn TravelHandler>,
}

impl SessionOrchestrator {
    pub(crate) fn new(
        config: OrchestratorConfig,
        provider: Arc<dyn SessionProvider>,
        handler: Arc<dyn SessionEventHandler>,
        travel: Arc<dyn TravelHandler>,
    ) -> Arc<Self> {
        Arc::new(Self {
            config,
            session_config: RwLock::new(None),
            handle: RwLock::new(None),
            pending: Mutex::new(None),
            listings: RwLock::new(Vec::new()),
            search_seq: AtomicU64::new(0),
            provider,
            handler,
            travel,
        })
    }

    /// Handle of the active session, if one is registered.
    pub async fn active_session(&self) -> Option<SessionHandle> {
        *self.handle.read().await
    }

    /// Snapshot of the listings from the most recent completed search.
    pub async fn server_listings(&self) -> Vec<ServerListing> {
        self.listings.read().await.clone()
    }

    /// Host a new session advertised under `server_name`.
    ///
    /// When a previous session is still registered at the backend it is
    /// destroyed first; the create request is issued from the destroy
    /// completion, so the backend never sees both at once. The outcome
    /// arrives later as `SessionReady` or `HostFailed`.
    pub async fn host(self: &Arc<Self>, server_name: &str) -> Result<()> {
        let mut pending = self.pending.lock().await;
        if let Some(operation) = *pending {
            tracing::warn!(%server_name, %operation, "host request rejected");
            return Err(SessionError::OperationInProgress { operation });
        }

        *self.session_config.write().await = Some(SessionConfig {
            desired_name: server_name.to_string(),
            max_participants: self.config.max_participants,
            advertise: self.config.advertise,
            presence_enabled: self.config.presence_enabled,
            is_local_only: self.config.local_only,
        });

        let has_existing = self
            .provider
            .existing_session(&self.config.session_name)
            .await
            .is_some();

        if has_existing {
            *pending = Some(PendingOperation::Destroying);
            drop(pending);
            tracing::info!(%server_name, "existing session found, destroying it first");
            self.issue_destroy();
        } else {
            *pending = Some(PendingOperation::Creating);
            drop(pending);
            tracing::info!(%server_name, "hosting new session");
            self.issue_create();
        }
        Ok(())
    }

    /// Join the `index`-th entry of the most recent server list.
    ///
    /// The menu is told to tear itself down before the result is known, so
    /// it never sits on a stale list during the attempt. A failed join
    /// surfaces as `JoinFailed`; menu re-entry is the caller's policy.
    pub async fn join(self: &Arc<Self>, index: usize) -> Result<()> {
        let mut pending = self.pending.lock().await;
        if let Some(operation) = *pending {
            tracing::warn!(index, %operation, "join request rejected");
            return Err(SessionError::OperationInProgress { operation });
        }

        let target = {
            let listings = self.listings.read().await;
            match listings.get(index) {
                Some(listing) => listing.provider_ref.clone(),
                None => {
                    let len = listings.len();
                    tracing::warn!(index, len, "join request out of range");
                    return Err(SessionError::IndexOutOfRange { index, len });
                }
            }
        };
        *pending = Some(PendingOperation::Joining { index });
        drop(pending);

        tracing::info!(index, "joining listed session");
        self.handler.on_menu_teardown().await;
        self.issue_join(target);
        Ok(())
    }

    /// Start a fresh search for discoverable sessions.
    ///
    /// Always allowed: a new search supersedes any outstanding one, and a
    /// superseded search's completion is discarded unseen. Results arrive
    /// later as `ServerListUpdated`.
    pub async fn refresh_server_list(self: &Arc<Self>) -> Result<()> {
        let seq = self.search_seq.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::info!(seq, "starting session search");
        self.issue_find(seq);
        Ok(())
    }

    /// Return the local participant to the main menu.
    ///
    /// Any registered session is left standing at the backend; the next
    /// host request destroys it before creating a replacement.
    pub async fn load_main_menu(&self) -> Result<()> {
        tracing::info!("returning to main menu");
        self.travel.travel_to_main_menu().await;
        Ok(())
    }

    /// Mark the active session as in progress at the backend, closing it
    /// to further discovery.
    pub async fn start_match_session(&self) -> Result<()> {
        if self.handle.read().await.is_none() {
            return Err(SessionError::NoActiveSession);
        }
        if self.provider.start_session(&self.config.session_name).await {
            tracing::info!("session marked in progress");
            Ok(())
        } else {
            Err(SessionError::provider_failure(
                "start",
                "backend refused to start the session",
            ))
        }
    }
}
