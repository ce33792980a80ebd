//! Drives one game session through its state machine, for the WebSocket bridge and the CLI.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::{
    dto::validation::validate_player_name,
    game::{AlertSink, Game},
    state::{InvalidTransition, SessionEvent, SessionPhase, SessionStateMachine},
};

/// Suffix of a winner declaration typed by a user, as in `"Cleo wins"`.
const WINNER_SUFFIX: &str = " wins";

/// One play-through: arms the blinds on the player count and records the winner.
pub struct Session {
    id: Uuid,
    machine: SessionStateMachine,
    game: Arc<dyn Game>,
    alerts: Arc<dyn AlertSink>,
}

impl Session {
    /// Start a session that will send its blind alerts to `alerts`.
    pub fn begin(id: Uuid, game: Arc<dyn Game>, alerts: Arc<dyn AlertSink>) -> Self {
        let mut machine = SessionStateMachine::new();
        // Idle always accepts Start.
        let _ = machine.apply(SessionEvent::Start);
        info!(session_id = %id, "game session started");
        Self {
            id,
            machine,
            game,
            alerts,
        }
    }

    /// Identifier used in logs and the live session registry.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Current phase of the underlying state machine.
    pub fn phase(&self) -> SessionPhase {
        self.machine.phase()
    }

    /// Move to the game itself and arm the blind schedule.
    ///
    /// Zero and negative counts are passed through; the game decides what they mean.
    pub fn declare_players(&mut self, players: i64) -> Result<(), InvalidTransition> {
        self.machine.apply(SessionEvent::PlayersDeclared(players))?;
        self.game.start(players, self.alerts.clone());
        Ok(())
    }

    /// Finish the game and record the winner. Armed alerts keep firing.
    pub async fn declare_winner(&mut self, winner: String) -> Result<(), InvalidTransition> {
        self.machine
            .apply(SessionEvent::WinnerDeclared(winner.clone()))?;
        self.game.finish(&winner).await;
        info!(session_id = %self.id, %winner, "game session finished");
        Ok(())
    }

    /// End the session without recording anything.
    pub fn abort(&mut self) -> Result<(), InvalidTransition> {
        self.machine.apply(SessionEvent::Abort)?;
        info!(session_id = %self.id, "game session aborted");
        Ok(())
    }
}

/// Parse a player count line. Any integer is accepted, including negative ones.
pub fn parse_player_count(input: &str) -> Option<i64> {
    input.trim().parse().ok()
}

/// Extract the winner from a `"<name> wins"` declaration.
pub fn extract_winner(input: &str) -> Option<String> {
    let name = input.trim_end().strip_suffix(WINNER_SUFFIX)?;
    validate_player_name(name).ok()?;
    Some(name.to_string())
}
