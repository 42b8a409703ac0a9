//! Completion handling for in-flight backend operations.
//!
//! Each request spawns a driver task that awaits the provider and hands the
//! resolution to one of the `on_*_complete` handlers below. Handlers update
//! orchestrator state before raising derived events, so a completion
//! delivered on the same tick as its request can never observe
//! half-applied state.
//!
//! Nothing here retries. Every backend failure is terminal for its request
//! and surfaces as a single event; silent retries against a remote session
//! backend risk duplicate sessions or duplicate joins.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use crate::api::types::{HostFailure, JoinFailure, PendingOperation, SessionHandle};
use crate::coordinator::server_list;
use crate::coordinator::SessionOrchestrator;
use crate::errors::Result;
use crate::provider::{JoinOutcome, ProviderRef, SessionSearchResult};

impl SessionOrchestrator {
    pub(crate) fn issue_create(self: &Arc<Self>) {
        let this = Arc::clone(self);
        tokio::spawn(async move {
            let config = this.session_config.read().await.clone();
            let success = match config {
                Some(config) => {
                    this.provider
                        .create_session(&this.config.session_name, &config)
                        .await
                }
                None => {
                    tracing::error!("create issued with no stored session config");
                    false
                }
            };
            this.on_create_session_complete(success).await;
        });
    }

    pub(crate) fn issue_destroy(self: &Arc<Self>) {
        let this = Arc::clone(self);
        tokio::spawn(async move {
            let success = this
                .provider
                .destroy_session(&this.config.session_name)
                .await;
            this.on_destroy_session_complete(success).await;
        });
    }

    pub(crate) fn issue_find(self: &Arc<Self>, seq: u64) {
        let this = Arc::clone(self);
        tokio::spawn(async move {
            let outcome = this.provider.find_sessions(&this.config.search).await;
            this.on_find_sessions_complete(seq, outcome).await;
        });
    }

    pub(crate) fn issue_join(self: &Arc<Self>, target: ProviderRef) {
        let this = Arc::clone(self);
        tokio::spawn(async move {
            let outcome = this
                .provider
                .join_session(&this.config.session_name, &target)
                .await;
            this.on_join_session_complete(outcome).await;
        });
    }

    pub(crate) async fn on_create_session_complete(&self, success: bool) {
        if !success {
            tracing::warn!("session create failed");
            *self.pending.lock().await = None;
            self.handler.on_host_failed(HostFailure::CreateFailed).await;
            return;
        }

        let handle = SessionHandle::new();
        tracing::info!(%handle, "session created");
        *self.handle.write().await = Some(handle);
        *self.pending.lock().await = None;

        self.handler.on_menu_teardown().await;
        self.handler.on_session_ready().await;
        self.travel.travel_to_lobby().await;
    }

    pub(crate) async fn on_destroy_session_complete(self: &Arc<Self>, success: bool) {
        if !success {
            tracing::warn!("session destroy failed, abandoning host request");
            *self.pending.lock().await = None;
            self.handler
                .on_host_failed(HostFailure::DestroyFailed)
                .await;
            return;
        }

        *self.handle.write().await = None;

        // Mid-host-flow the destroy was only ever clearing the way; the
        // create it deferred is issued here.
        let continue_host = {
            let mut pending = self.pending.lock().await;
            if *pending == Some(PendingOperation::Destroying) {
                *pending = Some(PendingOperation::Creating);
                true
            } else {
                false
            }
        };
        if continue_host {
            tracing::info!("previous session destroyed, creating replacement");
            self.issue_create();
        }
    }

    pub(crate) async fn on_find_sessions_complete(
        &self,
        seq: u64,
        outcome: Result<Vec<SessionSearchResult>>,
    ) {
        if seq != self.search_seq.load(Ordering::SeqCst) {
            tracing::debug!(seq, "discarding superseded search completion");
            return;
        }

        match outcome {
            Ok(results) => {
                let listings = server_list::build_listings(results);
                tracing::info!(seq, count = listings.len(), "session search complete");
                *self.listings.write().await = listings.clone();
                self.handler.on_server_list_updated(listings).await;
            }
            Err(error) => {
                tracing::warn!(seq, %error, "session search failed");
            }
        }
    }

    pub(crate) async fn on_join_session_complete(&self, outcome: JoinOutcome) {
        *self.pending.lock().await = None;

        if outcome != JoinOutcome::Success {
            tracing::warn!(?outcome, "join failed");
            self.handler.on_join_failed(JoinFailure::from(outcome)).await;
            return;
        }

        match self
            .provider
            .resolved_address(&self.config.session_name)
            .await
        {
            Ok(address) => {
                tracing::info!(%address, "join resolved");
                self.handler.on_join_resolved(&address).await;
                self.travel.travel_to_address(&address).await;
            }
            Err(error) => {
                tracing::warn!(%error, "joined session but no connect address");
                self.handler
                    .on_join_failed(JoinFailure::AddressUnresolved)
                    .await;
            }
        }
    }

    /// Transport-level disconnection: the universal recovery path.
    ///
    /// Arrives unsolicited, outside any request's lifecycle. All local
    /// session state is cleared and the local participant returns to the
    /// main menu, regardless of which operation was in flight.
    pub async fn on_network_failure(&self, reason: &str) {
        tracing::warn!(%reason, "network failure, tearing down session state");
        *self.handle.write().await = None;
        *self.session_config.write().await = None;
        *self.pending.lock().await = None;

        self.handler.on_session_lost(reason).await;
        self.travel.travel_to_main_menu().await;
    }
}
