/// Per-session phase machine.
pub mod session;

use std::sync::Arc;

use dashmap::DashMap;
use uuid::Uuid;

use crate::{dao::player_store::PlayerStore, game::Game};

pub use self::session::{InvalidTransition, SessionEvent, SessionPhase, SessionStateMachine};

/// Application state shared by handlers and sessions.
pub type SharedState = Arc<AppState>;

/// Central application state: the league, the game rules and live sessions.
pub struct AppState {
    store: Arc<dyn PlayerStore>,
    game: Arc<dyn Game>,
    game_page: Arc<str>,
    sessions: DashMap<Uuid, SessionPhase>,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn new(
        store: Arc<dyn PlayerStore>,
        game: Arc<dyn Game>,
        game_page: impl Into<Arc<str>>,
    ) -> SharedState {
        Arc::new(Self {
            store,
            game,
            game_page: game_page.into(),
            sessions: DashMap::new(),
        })
    }

    /// League storage shared by every request.
    pub fn store(&self) -> Arc<dyn PlayerStore> {
        self.store.clone()
    }

    /// Game rules used by live sessions.
    pub fn game(&self) -> Arc<dyn Game> {
        self.game.clone()
    }

    /// HTML served on `/game`.
    pub fn game_page(&self) -> &str {
        &self.game_page
    }

    /// Phases of the sessions currently connected, keyed by session id.
    pub fn sessions(&self) -> &DashMap<Uuid, SessionPhase> {
        &self.sessions
    }
}
