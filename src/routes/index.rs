use axum::{Router, routing::get};

use crate::state::SharedState;

const GREETING: &str = "Hello, run cli tool to record score!\n\
/players/$playername to check a player\n\
/league to check the league\n\
/game to check the game\n";

/// Plain-text overview of the available routes.
pub async fn index() -> &'static str {
    GREETING
}

/// Routes serving the greeting.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new().route("/", get(index))
}
