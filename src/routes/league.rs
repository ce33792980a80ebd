use axum::{Json, Router, extract::State, routing::get};

use crate::{dto::league::PlayerDto, services::league_service, state::SharedState};

#[utoipa::path(
    get,
    path = "/league",
    tag = "league",
    responses((status = 200, description = "Players sorted by wins", body = [PlayerDto]))
)]
/// Return every player, most wins first.
pub async fn get_league(State(state): State<SharedState>) -> Json<Vec<PlayerDto>> {
    Json(league_service::league(&state).await)
}

/// Configure the league routes subtree.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new().route("/league", get(get_league))
}
