//! Core Types for Session Orchestration
//!
//! Shared state and event payload types. Everything a presentation layer
//! receives is a snapshot; orchestrator state is never handed out by
//! reference.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::provider::{JoinOutcome, ProviderRef};

/// Opaque identifier bound to a successfully created session.
///
/// At most one non-`None` handle exists per orchestrator instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionHandle(pub Uuid);

impl SessionHandle {
    /// Mint a fresh handle
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SessionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for SessionHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Settings a hosted session is registered with at the backend.
///
/// Built per host request and kept until the next host request replaces it
/// wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Player-facing server name advertised alongside the session
    pub desired_name: String,

    /// Total participant slots
    pub max_participants: u32,

    /// Whether searches can discover this session
    pub advertise: bool,

    /// Whether presence information is published for this session
    pub presence_enabled: bool,

    /// Restrict the session to the local network
    pub is_local_only: bool,
}

/// A UI-facing summary of one discovered session.
///
/// Listing sets are immutable once published; a completed search replaces
/// the whole set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerListing {
    /// Name shown in the server browser
    pub display_name: String,

    /// Account name of the hosting user
    pub host_user_name: String,

    /// Participants currently connected
    pub current_participants: u32,

    /// Total participant slots
    pub max_participants: u32,

    /// Opaque back-reference used to join this listing; only the provider
    /// that produced it can interpret it
    pub provider_ref: ProviderRef,
}

/// The single exclusive backend operation allowed in flight.
///
/// Searches are not tracked here: they supersede each other and are ordered
/// by sequence number instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingOperation {
    /// A create request is awaiting its completion
    Creating,

    /// An existing session is being torn down ahead of a create
    Destroying,

    /// A join against the listed server at `index` is awaiting its result
    Joining { index: usize },
}

impl fmt::Display for PendingOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PendingOperation::Creating => write!(f, "create session"),
            PendingOperation::Destroying => write!(f, "destroy session"),
            PendingOperation::Joining { index } => write!(f, "join session (listing {})", index),
        }
    }
}

/// Why a host request failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostFailure {
    /// The backend rejected the create request
    CreateFailed,

    /// The existing session could not be torn down first
    DestroyFailed,
}

impl fmt::Display for HostFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostFailure::CreateFailed => write!(f, "session create was rejected by the backend"),
            HostFailure::DestroyFailed => write!(f, "existing session could not be destroyed"),
        }
    }
}

/// Why a join request failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoinFailure {
    /// All participant slots are taken
    SessionIsFull,

    /// The listed session no longer exists at the backend
    SessionDoesNotExist,

    /// The local participant is already in a session
    AlreadyInSession,

    /// The backend accepted the join but no connect address could be obtained
    AddressUnresolved,

    /// The backend reported an unclassified failure
    Failed,
}

impl From<JoinOutcome> for JoinFailure {
    fn from(outcome: JoinOutcome) -> Self {
        match outcome {
            JoinOutcome::SessionIsFull => JoinFailure::SessionIsFull,
            JoinOutcome::SessionDoesNotExist => JoinFailure::SessionDoesNotExist,
            JoinOutcome::AlreadyInSession => JoinFailure::AlreadyInSession,
            JoinOutcome::CouldNotRetrieveAddress => JoinFailure::AddressUnresolved,
            // Success never reaches the failure path
            JoinOutcome::Success | JoinOutcome::UnknownError => JoinFailure::Failed,
        }
    }
}

impl fmt::Display for JoinFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinFailure::SessionIsFull => write!(f, "session is full"),
            JoinFailure::SessionDoesNotExist => write!(f, "session no longer exists"),
            JoinFailure::AlreadyInSession => write!(f, "already in a session"),
            JoinFailure::AddressUnresolved => {
                write!(f, "joined session has no resolvable connect address")
            }
            JoinFailure::Failed => write!(f, "session backend reported a failure"),
        }
    }
}
