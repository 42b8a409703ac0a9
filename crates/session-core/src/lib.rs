//! Session lifecycle orchestration for partylink multiplayer games.
//!
//! This crate coordinates discovering, hosting, joining and tearing down a
//! shared game session against an abstract backend. The hard part is
//! sequencing: backend operations complete on an unpredictable timeline, an
//! existing session must be torn down before its replacement is created,
//! and user-visible state (menus, server lists, map transitions) must move
//! exactly once and in the right order despite overlapping requests and
//! failures.
//!
//! # Overview
//!
//! - [`SessionOrchestrator`]: one per process; owns all session state and
//!   sequences backend requests. Built through [`OrchestratorBuilder`] with
//!   an injected [`SessionProvider`] plus notification sinks.
//! - [`SessionProvider`]: the abstract session backend (create, destroy,
//!   find, join, start, address resolution). Implemented outside this
//!   crate for whatever service the platform supplies.
//! - [`SessionEventHandler`]: the UI layer's view of lifecycle events
//!   (`SessionReady`, `HostFailed`, `ServerListUpdated`, `JoinResolved`,
//!   `JoinFailed`, `SessionLost`).
//! - [`TravelHandler`]: the transport layer that physically moves
//!   participants between environments and addresses.
//! - [`MenuControl`] / [`MatchControl`]: capability traits implemented
//!   for `Arc<SessionOrchestrator>`; menus and the lobby layer depend only
//!   on these.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use partylink_session_core::{
//!     JoinOutcome, OrchestratorBuilder, ProviderRef, Result, SearchCriteria,
//!     SessionConfig, SessionHandle, SessionProvider, SessionSearchResult,
//! };
//!
//! #[derive(Debug)]
//! struct BackendStub;
//!
//! #[async_trait::async_trait]
//! impl SessionProvider for BackendStub {
//!     async fn create_session(&self, _name: &str, _config: &SessionConfig) -> bool {
//!         true
//!     }
//!     async fn destroy_session(&self, _name: &str) -> bool {
//!         true
//!     }
//!     async fn find_sessions(
//!         &self,
//!         _criteria: &SearchCriteria,
//!     ) -> Result<Vec<SessionSearchResult>> {
//!         Ok(Vec::new())
//!     }
//!     async fn join_session(&self, _name: &str, _target: &ProviderRef) -> JoinOutcome {
//!         JoinOutcome::Success
//!     }
//!     async fn start_session(&self, _name: &str) -> bool {
//!         true
//!     }
//!     async fn resolved_address(&self, _name: &str) -> Result<String> {
//!         Ok("10.0.0.5:7777".into())
//!     }
//!     async fn existing_session(&self, _name: &str) -> Option<SessionHandle> {
//!         None
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<()> {
//! let orchestrator = OrchestratorBuilder::new()
//!     .with_session_name("GameSession")
//!     .with_provider(Arc::new(BackendStub))
//!     .build()?;
//!
//! orchestrator.host("Alice's Game").await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod coordinator;
pub mod errors;
pub mod provider;

// Re-exports of the main types
pub use api::builder::{OrchestratorBuilder, OrchestratorConfig};
pub use api::control::{MatchControl, MenuControl};
pub use api::handlers::{
    LoggingEventHandler, NullTravelHandler, SessionEventHandler, TravelHandler,
};
pub use api::types::{
    HostFailure, JoinFailure, PendingOperation, ServerListing, SessionConfig, SessionHandle,
};
pub use coordinator::SessionOrchestrator;
pub use errors::{Result, SessionError};
pub use provider::{JoinOutcome, ProviderRef, SearchCriteria, SessionProvider, SessionSearchResult};

/// One-stop imports for downstream crates
pub mod prelude {
    pub use crate::{
        HostFailure, JoinFailure, JoinOutcome, MatchControl, MenuControl, OrchestratorBuilder,
        OrchestratorConfig, PendingOperation, ProviderRef, Result, SearchCriteria, ServerListing,
        SessionConfig, SessionError, SessionEventHandler, SessionHandle, SessionOrchestrator,
        SessionProvider, SessionSearchResult, TravelHandler,
    };
}
