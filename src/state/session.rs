use thiserror::Error;

/// Phases a single game session goes through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionPhase {
    /// No session is running.
    Idle,
    /// The session was requested; waiting for the number of players.
    AwaitingPlayerCount,
    /// Blinds are armed and the game is being played.
    InProgress {
        /// Number of players at the table, as typed by the user.
        players: i64,
    },
    /// A winner was declared and recorded.
    Finished {
        /// Name of the winning player.
        winner: String,
    },
}

/// Events that can be applied to the session state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A client asked to start a session.
    Start,
    /// A player count was received.
    PlayersDeclared(i64),
    /// A valid winner was received.
    WinnerDeclared(String),
    /// Malformed input or a lost client ends the session early.
    Abort,
}

/// Error returned when attempting to apply an invalid transition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid session transition: {event:?} cannot be applied while in {from:?}")]
pub struct InvalidTransition {
    /// The phase the session was in when the event was received.
    pub from: SessionPhase,
    /// The event that cannot be applied from this phase.
    pub event: SessionEvent,
}

/// State machine for one play-through, from player count to winner.
#[derive(Debug, Clone)]
pub struct SessionStateMachine {
    phase: SessionPhase,
}

impl Default for SessionStateMachine {
    fn default() -> Self {
        Self {
            phase: SessionPhase::Idle,
        }
    }
}

impl SessionStateMachine {
    /// Create a state machine in the idle phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inspect the current phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase.clone()
    }

    /// Apply `event`, returning the new phase. The phase is unchanged on error.
    pub fn apply(&mut self, event: SessionEvent) -> Result<SessionPhase, InvalidTransition> {
        self.phase = self.compute_transition(event)?;
        Ok(self.phase.clone())
    }

    fn compute_transition(&self, event: SessionEvent) -> Result<SessionPhase, InvalidTransition> {
        let next = match (&self.phase, event) {
            (SessionPhase::Idle, SessionEvent::Start) => SessionPhase::AwaitingPlayerCount,
            (SessionPhase::AwaitingPlayerCount, SessionEvent::PlayersDeclared(players)) => {
                SessionPhase::InProgress { players }
            }
            (SessionPhase::InProgress { .. }, SessionEvent::WinnerDeclared(winner)) => {
                SessionPhase::Finished { winner }
            }
            (
                SessionPhase::AwaitingPlayerCount | SessionPhase::InProgress { .. },
                SessionEvent::Abort,
            ) => SessionPhase::Idle,
            (from, event) => {
                return Err(InvalidTransition {
                    from: from.clone(),
                    event,
                });
            }
        };

        Ok(next)
    }
}
