//! Orchestrator Builder API
//!
//! Fluent builder for constructing a [`SessionOrchestrator`] with its
//! injected provider and notification sinks. One orchestrator is built per
//! process in production; tests build as many isolated instances as they
//! need.

use std::sync::Arc;

use crate::api::handlers::{
    LoggingEventHandler, NullTravelHandler, SessionEventHandler, TravelHandler,
};
use crate::coordinator::SessionOrchestrator;
use crate::errors::{Result, SessionError};
use crate::provider::{SearchCriteria, SessionProvider};

/// Configuration for the session orchestrator.
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    /// Well-known name sessions are registered under at the backend
    pub session_name: String,

    /// Participant cap written into hosted sessions
    pub max_participants: u32,

    /// Advertise hosted sessions to searches
    pub advertise: bool,

    /// Publish presence for hosted sessions
    pub presence_enabled: bool,

    /// Keep hosted sessions on the local network
    pub local_only: bool,

    /// Search bounds used by server list refreshes
    pub search: SearchCriteria,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            session_name: "GameSession".to_string(),
            max_participants: 4,
            advertise: true,
            presence_enabled: true,
            local_only: false,
            search: SearchCriteria::default(),
        }
    }
}

/// Builder for a configured [`SessionOrchestrator`].
pub struct OrchestratorBuilder {
    config: OrchestratorConfig,
    provider: Option<Arc<dyn SessionProvider>>,
    handler: Option<Arc<dyn SessionEventHandler>>,
    travel: Option<Arc<dyn TravelHandler>>,
}

impl OrchestratorBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: OrchestratorConfig::default(),
            provider: None,
            handler: None,
            travel: None,
        }
    }

    /// Set the well-known backend session name
    pub fn with_session_name(mut self, name: impl Into<String>) -> Self {
        self.config.session_name = name.into();
        self
    }

    /// Set the participant cap for hosted sessions
    pub fn with_max_participants(mut self, max: u32) -> Self {
        self.config.max_participants = max;
        self
    }

    /// Restrict hosted sessions to the local network
    pub fn with_local_only(mut self, local_only: bool) -> Self {
        self.config.local_only = local_only;
        self
    }

    /// Set the search bounds used by server list refreshes
    pub fn with_search_criteria(mut self, criteria: SearchCriteria) -> Self {
        self.config.search = criteria;
        self
    }

    /// Set the session backend
    pub fn with_provider(mut self, provider: Arc<dyn SessionProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Set the UI event handler
    pub fn with_event_handler(mut self, handler: Arc<dyn SessionEventHandler>) -> Self {
        self.handler = Some(handler);
        self
    }

    /// Set the travel executor
    pub fn with_travel_handler(mut self, travel: Arc<dyn TravelHandler>) -> Self {
        self.travel = Some(travel);
        self
    }

    /// Build the orchestrator. Fails when no provider was supplied; the
    /// event and travel handlers fall back to logging no-ops.
    pub fn build(self) -> Result<Arc<SessionOrchestrator>> {
        let provider = self
            .provider
            .ok_or(SessionError::MissingConfiguration { field: "provider" })?;
        let handler = self
            .handler
            .unwrap_or_else(|| Arc::new(LoggingEventHandler));
        let travel = self.travel.unwrap_or_else(|| Arc::new(NullTravelHandler));

        Ok(SessionOrchestrator::new(
            self.config,
            provider,
            handler,
            travel,
        ))
    }
}

impl Default for OrchestratorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
