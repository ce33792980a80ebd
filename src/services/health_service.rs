use crate::{dto::health::HealthResponse, state::SharedState};

/// Report the league size and the number of connected game sessions.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    let players = state.store().player_count().await;
    HealthResponse::ok(players, state.sessions().len())
}
