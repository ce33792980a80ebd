use axum::Router;

use crate::state::SharedState;

pub mod docs;
pub mod game;
pub mod health;
pub mod index;
pub mod league;
pub mod players;
pub mod websocket;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = index::router()
        .merge(health::router())
        .merge(league::router())
        .merge(players::router())
        .merge(game::router())
        .merge(websocket::router())
        .merge(docs::router());

    api_router.with_state(state)
}
