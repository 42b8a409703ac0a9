//! Lobby control for partylink multiplayer games.
//!
//! Tracks the participants gathered in an active session's lobby and, once
//! their count exceeds a threshold, arms a single-shot countdown that
//! starts the match: the session is marked in progress at the backend
//! (closing discovery) and every connected participant travels to the
//! match environment.
//!
//! The controller never talks to the session backend directly; it drives
//! the orchestrator through
//! [`MatchControl`](partylink_session_core::MatchControl), and the
//! orchestrator forwards to its provider.

pub mod controller;

pub use controller::{LobbyConfig, LobbyController, LobbyState};
