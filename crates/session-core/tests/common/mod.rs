//! Common Test Helpers for Session Orchestration Testing
//!
//! Provides a scriptable session backend plus recording event/travel sinks
//! so tests can drive the orchestrator through full request/completion
//! cycles and assert on everything it raised, in order.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use partylink_session_core::{
    HostFailure, JoinFailure, JoinOutcome, OrchestratorBuilder, ProviderRef, Result,
    SearchCriteria, ServerListing, SessionConfig, SessionError, SessionEventHandler,
    SessionHandle, SessionOrchestrator, SessionProvider, SessionSearchResult, TravelHandler,
};

/// One scripted backend reply, optionally delayed on the (virtual) clock.
#[derive(Debug, Clone)]
pub struct Script<T> {
    pub delay: Duration,
    pub result: T,
}

impl<T> Script<T> {
    pub fn now(result: T) -> Self {
        Self {
            delay: Duration::ZERO,
            result,
        }
    }

    pub fn after(delay: Duration, result: T) -> Self {
        Self { delay, result }
    }
}

/// Scriptable session backend.
///
/// Each operation pops the next script from its queue, or falls back to an
/// immediate success. Successful creates register the session so a later
/// `existing_session` lookup finds it, the way a named-session backend
/// behaves; destroys deregister it.
#[derive(Debug, Default)]
pub struct MockProvider {
    pub create_scripts: Mutex<VecDeque<Script<bool>>>,
    pub destroy_scripts: Mutex<VecDeque<Script<bool>>>,
    pub find_scripts: Mutex<VecDeque<Script<Result<Vec<SessionSearchResult>>>>>,
    pub join_scripts: Mutex<VecDeque<Script<JoinOutcome>>>,
    pub start_scripts: Mutex<VecDeque<Script<bool>>>,
    pub address_scripts: Mutex<VecDeque<Script<Result<String>>>>,
    pub existing: Mutex<Option<SessionHandle>>,
    /// Ordered log of backend calls; destroys also log completion so tests
    /// can assert create-after-destroy ordering
    pub calls: Mutex<Vec<String>>,
}

impl MockProvider {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub async fn push_create(&self, script: Script<bool>) {
        self.create_scripts.lock().await.push_back(script);
    }

    pub async fn push_destroy(&self, script: Script<bool>) {
        self.destroy_scripts.lock().await.push_back(script);
    }

    pub async fn push_find(&self, script: Script<Result<Vec<SessionSearchResult>>>) {
        self.find_scripts.lock().await.push_back(script);
    }

    pub async fn push_join(&self, script: Script<JoinOutcome>) {
        self.join_scripts.lock().await.push_back(script);
    }

    pub async fn push_start(&self, script: Script<bool>) {
        self.start_scripts.lock().await.push_back(script);
    }

    pub async fn push_address(&self, script: Script<Result<String>>) {
        self.address_scripts.lock().await.push_back(script);
    }

    pub async fn register_existing(&self) {
        *self.existing.lock().await = Some(SessionHandle::new());
    }

    pub async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }

    async fn log(&self, entry: impl Into<String>) {
        self.calls.lock().await.push(entry.into());
    }

    async fn run<T>(&self, script: Option<Script<T>>, fallback: T) -> T {
        match script {
            Some(script) => {
                if !script.delay.is_zero() {
                    tokio::time::sleep(script.delay).await;
                }
                script.result
            }
            None => fallback,
        }
    }
}

#[async_trait]
impl SessionProvider for MockProvider {
    async fn create_session(&self, _name: &str, config: &SessionConfig) -> bool {
        self.log(format!("create:{}", config.desired_name)).await;
        let script = self.create_scripts.lock().await.pop_front();
        let success = self.run(script, true).await;
        if success {
            *self.existing.lock().await = Some(SessionHandle::new());
        }
        success
    }

    async fn destroy_session(&self, _name: &str) -> bool {
        self.log("destroy").await;
        let script = self.destroy_scripts.lock().await.pop_front();
        let success = self.run(script, true).await;
        if success {
            *self.existing.lock().await = None;
        }
        self.log(format!("destroy:done:{}", success)).await;
        success
    }

    async fn find_sessions(&self, _criteria: &SearchCriteria) -> Result<Vec<SessionSearchResult>> {
        self.log("find").await;
        let script = self.find_scripts.lock().await.pop_front();
        self.run(script, Ok(Vec::new())).await
    }

    async fn join_session(&self, _name: &str, target: &ProviderRef) -> JoinOutcome {
        self.log(format!("join:{}", target.token())).await;
        let script = self.join_scripts.lock().await.pop_front();
        self.run(script, JoinOutcome::Success).await
    }

    async fn start_session(&self, _name: &str) -> bool {
        self.log("start").await;
        let script = self.start_scripts.lock().await.pop_front();
        self.run(script, true).await
    }

    async fn resolved_address(&self, _name: &str) -> Result<String> {
        self.log("resolve").await;
        let script = self.address_scripts.lock().await.pop_front();
        self.run(script, Ok("10.0.0.5".to_string())).await
    }

    async fn existing_session(&self, _name: &str) -> Option<SessionHandle> {
        *self.existing.lock().await
    }
}

/// Everything the orchestrator raised, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedEvent {
    SessionReady,
    HostFailed(HostFailure),
    ServerListUpdated(Vec<ServerListing>),
    JoinResolved(String),
    JoinFailed(JoinFailure),
    SessionLost(String),
    MenuTeardown,
}

#[derive(Debug, Default)]
pub struct RecordingHandler {
    events: Mutex<Vec<RecordedEvent>>,
}

impl RecordingHandler {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub async fn events(&self) -> Vec<RecordedEvent> {
        self.events.lock().await.clone()
    }

    async fn record(&self, event: RecordedEvent) {
        self.events.lock().await.push(event);
    }
}

#[async_trait]
impl SessionEventHandler for RecordingHandler {
    async fn on_session_ready(&self) {
        self.record(RecordedEvent::SessionReady).await;
    }

    async fn on_host_failed(&self, reason: HostFailure) {
        self.record(RecordedEvent::HostFailed(reason)).await;
    }

    async fn on_server_list_updated(&self, listings: Vec<ServerListing>) {
        self.record(RecordedEvent::ServerListUpdated(listings)).await;
    }

    async fn on_join_resolved(&self, address: &str) {
        self.record(RecordedEvent::JoinResolved(address.to_string()))
            .await;
    }

    async fn on_join_failed(&self, reason: JoinFailure) {
        self.record(RecordedEvent::JoinFailed(reason)).await;
    }

    async fn on_session_lost(&self, reason: &str) {
        self.record(RecordedEvent::SessionLost(reason.to_string()))
            .await;
    }

    async fn on_menu_teardown(&self) {
        self.record(RecordedEvent::MenuTeardown).await;
    }
}

/// Every travel side effect performed, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trip {
    Address(String),
    Lobby,
    Match,
    MainMenu,
}

#[derive(Debug, Default)]
pub struct RecordingTravel {
    trips: Mutex<Vec<Trip>>,
}

impl RecordingTravel {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub async fn trips(&self) -> Vec<Trip> {
        self.trips.lock().await.clone()
    }
}

#[async_trait]
impl TravelHandler for RecordingTravel {
    async fn travel_to_address(&self, address: &str) {
        self.trips
            .lock()
            .await
            .push(Trip::Address(address.to_string()));
    }

    async fn travel_to_lobby(&self) {
        self.trips.lock().await.push(Trip::Lobby);
    }

    async fn travel_to_match(&self) {
        self.trips.lock().await.push(Trip::Match);
    }

    async fn travel_to_main_menu(&self) {
        self.trips.lock().await.push(Trip::MainMenu);
    }
}

/// A full orchestrator wired to scriptable/recording collaborators.
pub struct TestHarness {
    pub provider: Arc<MockProvider>,
    pub handler: Arc<RecordingHandler>,
    pub travel: Arc<RecordingTravel>,
    pub orchestrator: Arc<SessionOrchestrator>,
}

pub fn build_harness() -> TestHarness {
    init_tracing();
    let provider = MockProvider::new();
    let handler = RecordingHandler::new();
    let travel = RecordingTravel::new();
    let orchestrator = OrchestratorBuilder::new()
        .with_provider(provider.clone())
        .with_event_handler(handler.clone())
        .with_travel_handler(travel.clone())
        .build()
        .expect("harness build");
    TestHarness {
        provider,
        handler,
        travel,
        orchestrator,
    }
}

/// Two orchestrators (a host and a peer) sharing one backend.
pub fn build_peer_harness() -> (TestHarness, TestHarness) {
    let host = build_harness();
    let handler = RecordingHandler::new();
    let travel = RecordingTravel::new();
    let orchestrator = OrchestratorBuilder::new()
        .with_provider(host.provider.clone())
        .with_event_handler(handler.clone())
        .with_travel_handler(travel.clone())
        .build()
        .expect("peer harness build");
    let peer = TestHarness {
        provider: host.provider.clone(),
        handler,
        travel,
        orchestrator,
    };
    (host, peer)
}

/// Let spawned driver tasks run to completion on the current-thread
/// runtime. Scripts with delays need `tokio::time::sleep` in the test
/// instead.
pub async fn settle() {
    for _ in 0..64 {
        tokio::task::yield_now().await;
    }
}

pub fn search_result(
    advertised: Option<&str>,
    id: &str,
    host_user: &str,
    max: u32,
    open: u32,
    token: &str,
) -> SessionSearchResult {
    SessionSearchResult {
        session_id: id.to_string(),
        host_user_name: host_user.to_string(),
        max_public_slots: max,
        open_public_slots: open,
        advertised_name: advertised.map(str::to_string),
        provider_ref: ProviderRef::new(token),
    }
}

pub fn find_failure() -> SessionError {
    SessionError::provider_failure("find", "backend unavailable")
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init();
}
