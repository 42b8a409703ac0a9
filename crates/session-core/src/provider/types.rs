//! Provider-facing request and result types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Bounds for a session search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    /// Hard cap on returned results
    pub max_results: u32,

    /// Only return sessions that advertise presence
    pub presence_only: bool,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            max_results: 100,
            presence_only: true,
        }
    }
}

/// Opaque token identifying one search result at the backend.
///
/// The orchestrator carries it back verbatim on a join-by-index request;
/// only the provider that produced it can interpret it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProviderRef(String);

impl ProviderRef {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn token(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProviderRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One raw search result as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSearchResult {
    /// Backend-assigned session identifier; may be empty on some backends
    pub session_id: String,

    /// Account name of the hosting user
    pub host_user_name: String,

    /// Total public participant slots
    pub max_public_slots: u32,

    /// Public slots still open
    pub open_public_slots: u32,

    /// Custom server name the host advertised, when present
    pub advertised_name: Option<String>,

    /// Join-by-reference token for this result
    pub provider_ref: ProviderRef,
}

/// Outcome of a join request, as classified by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoinOutcome {
    Success,
    SessionIsFull,
    SessionDoesNotExist,
    AlreadyInSession,
    CouldNotRetrieveAddress,
    UnknownError,
}
