use axum::{Router, extract::State, response::Html, routing::get};

use crate::state::SharedState;

#[utoipa::path(
    get,
    path = "/game",
    tag = "game",
    responses((status = 200, description = "Game session page", body = String, content_type = "text/html"))
)]
/// Serve the page used to run a game session.
pub async fn game_page(State(state): State<SharedState>) -> Html<String> {
    Html(state.game_page().to_owned())
}

/// Configure the game page route.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new().route("/game", get(game_page))
}
