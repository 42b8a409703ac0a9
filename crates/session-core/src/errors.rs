//! Error Types for Session Orchestration
//!
//! Every failure here is terminal for the request that triggered it; the
//! caller decides whether to retry. Errors that arrive asynchronously (a
//! create rejected by the backend, a join that resolves to a full session)
//! are surfaced through [`SessionEventHandler`](crate::api::handlers::SessionEventHandler)
//! events instead.

use thiserror::Error;

use crate::api::types::PendingOperation;

/// Main result type for session operations
pub type Result<T> = std::result::Result<T, SessionError>;

/// Main error type for session operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// A create/destroy/join request was made while another was in flight.
    /// Requests are rejected immediately, never queued.
    #[error("another session operation is pending: {operation}")]
    OperationInProgress { operation: PendingOperation },

    /// A join referenced a listing the most recent search never produced
    #[error("server list index {index} out of range ({len} listings)")]
    IndexOutOfRange { index: usize, len: usize },

    /// The session backend reported a failure for one of its operations
    #[error("session backend failed during {operation}: {reason}")]
    ProviderFailure {
        operation: &'static str,
        reason: String,
    },

    /// The backend accepted a join but could not produce a connect address
    #[error("joined session has no resolvable connect address")]
    AddressUnresolved,

    /// Transport-level disconnection, delivered outside any request lifecycle
    #[error("network failure: {reason}")]
    NetworkFailure { reason: String },

    /// The operation requires a registered session and none is active
    #[error("no active session")]
    NoActiveSession,

    /// A builder was finalized without a required component
    #[error("missing required configuration: {field}")]
    MissingConfiguration { field: &'static str },
}

impl SessionError {
    pub fn provider_failure(operation: &'static str, reason: impl Into<String>) -> Self {
        SessionError::ProviderFailure {
            operation,
            reason: reason.into(),
        }
    }

    pub fn network_failure(reason: impl Into<String>) -> Self {
        SessionError::NetworkFailure {
            reason: reason.into(),
        }
    }
}
