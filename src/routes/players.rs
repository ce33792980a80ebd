use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::validation::PlayerPath, error::AppError, services::league_service, state::SharedState,
};

/// Routes reading and recording a player's wins.
pub fn router() -> Router<SharedState> {
    Router::new().route("/players/{name}", get(get_score).post(record_win))
}

#[utoipa::path(
    get,
    path = "/players/{name}",
    tag = "league",
    params(PlayerPath),
    responses(
        (status = 200, description = "Number of wins", body = String),
        (status = 404, description = "Player has no recorded win", body = String)
    )
)]
/// Return the player's win count as plain text; a count of 0 is reported as 404.
pub async fn get_score(
    State(state): State<SharedState>,
    Path(path): Path<PlayerPath>,
) -> (StatusCode, String) {
    let score = league_service::score(&state, &path.name).await;
    let status = if score == 0 {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };
    (status, score.to_string())
}

#[utoipa::path(
    post,
    path = "/players/{name}",
    tag = "league",
    params(PlayerPath),
    responses(
        (status = 202, description = "Win recorded"),
        (status = 400, description = "Invalid player name")
    )
)]
/// Record one win for the player.
pub async fn record_win(
    State(state): State<SharedState>,
    Path(path): Path<PlayerPath>,
) -> Result<StatusCode, AppError> {
    league_service::record_win(&state, &path).await?;
    Ok(StatusCode::ACCEPTED)
}
