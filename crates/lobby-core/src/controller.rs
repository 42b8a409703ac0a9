//! Participant counting and the threshold-triggered match start.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use partylink_session_core::{MatchControl, TravelHandler};

/// Tuning for the waiting lobby.
#[derive(Debug, Clone)]
pub struct LobbyConfig {
    /// Connected-participant count that must be exceeded before the
    /// countdown arms
    pub start_threshold: u32,

    /// Delay between arming and the match start
    pub countdown: Duration,
}

impl Default for LobbyConfig {
    fn default() -> Self {
        Self {
            start_threshold: 2,
            countdown: Duration::from_secs(10),
        }
    }
}

/// Where the lobby is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LobbyState {
    /// Gathering participants
    Waiting,

    /// Enough participants connected; the one-shot countdown is running
    CountdownArmed,

    /// The match was started; this controller is done
    Started,
}

#[derive(Debug)]
struct LobbyInner {
    participants: u32,
    state: LobbyState,
    timer: Option<JoinHandle<()>>,
}

/// Counts the participants gathered in an active session's lobby and
/// starts the match once enough of them have connected.
///
/// One controller serves one lobby; a fresh lobby takes a fresh instance.
/// Connect/disconnect notifications come from an external connection
/// tracker. The countdown is single-shot and idempotent: connects beyond
/// the arming one neither re-arm nor extend it, and a disconnect never
/// cancels it: the match starts at the originally scheduled time even if
/// the count has dropped back under the threshold. A refused match start
/// is logged and leaves the countdown spent, with the controller armed;
/// nothing retries.
#[derive(Debug)]
pub struct LobbyController {
    config: LobbyConfig,
    session: Arc<dyn MatchControl>,
    travel: Arc<dyn TravelHandler>,
    inner: Mutex<LobbyInner>,
}

impl LobbyController {
    pub fn new(
        config: LobbyConfig,
        session: Arc<dyn MatchControl>,
        travel: Arc<dyn TravelHandler>,
    ) -> Arc<Self> {
        Arc::new(Self {
            config,
            session,
            travel,
            inner: Mutex::new(LobbyInner {
                participants: 0,
                state: LobbyState::Waiting,
                timer: None,
            }),
        })
    }

    pub async fn state(&self) -> LobbyState {
        self.inner.lock().await.state
    }

    pub async fn participant_count(&self) -> u32 {
        self.inner.lock().await.participants
    }

    /// A participant finished connecting to the lobby.
    pub async fn on_participant_connected(self: &Arc<Self>) {
        let mut inner = self.inner.lock().await;
        inner.participants += 1;
        tracing::info!(participants = inner.participants, "participant connected");

        if inner.state == LobbyState::Waiting && inner.participants > self.config.start_threshold {
            inner.state = LobbyState::CountdownArmed;
            tracing::info!(delay = ?self.config.countdown, "match countdown armed");

            let this = Arc::clone(self);
            inner.timer = Some(tokio::spawn(async move {
                tokio::time::sleep(this.config.countdown).await;
                this.start_match().await;
            }));
        }
    }

    /// A participant dropped from the lobby.
    ///
    /// Decrements the count, floored at zero; a running countdown keeps
    /// running.
    pub async fn on_participant_disconnected(&self) {
        let mut inner = self.inner.lock().await;
        if inner.participants == 0 {
            tracing::warn!("participant disconnect with none tracked");
            return;
        }
        inner.participants -= 1;
        tracing::info!(
            participants = inner.participants,
            "participant disconnected"
        );
    }

    /// Tear the lobby down, invalidating a countdown that has not fired.
    pub async fn shutdown(&self) {
        let mut inner = self.inner.lock().await;
        if let Some(timer) = inner.timer.take() {
            timer.abort();
            tracing::info!("lobby shut down, countdown invalidated");
        }
    }

    async fn start_match(&self) {
        match self.session.start_match_session().await {
            Ok(()) => {
                {
                    let mut inner = self.inner.lock().await;
                    inner.state = LobbyState::Started;
                    inner.timer = None;
                }
                tracing::info!("starting match");
                self.travel.travel_to_match().await;
            }
            Err(error) => {
                tracing::error!(%error, "match start failed");
            }
        }
    }
}
