//! Session Orchestrator
//!
//! Owns the intended session configuration, sequences create/destroy/find/
//! join requests against the session provider, transforms raw search
//! results into a presentable server list, and raises lifecycle events for
//! the menu and lobby layers.

mod event_handler;
mod orchestrator;
mod server_list;

pub use orchestrator::SessionOrchestrator;
