use serde::Serialize;
use utoipa::ToSchema;

/// Simple health response returned by the `/healthcheck` route.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status, always "ok" while the server answers.
    pub status: String,
    /// Number of players in the league.
    pub players: usize,
    /// Number of game sessions currently connected over WebSocket.
    pub live_sessions: usize,
}

impl HealthResponse {
    /// Create a health response indicating the system is operational.
    pub fn ok(players: usize, live_sessions: usize) -> Self {
        Self {
            status: "ok".to_string(),
            players,
            live_sessions,
        }
    }
}
