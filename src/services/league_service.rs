//! Service helpers behind the league and player routes.

use tracing::info;
use validator::Validate;

use crate::{
    dto::{league::PlayerDto, validation::PlayerPath},
    error::ServiceError,
    state::SharedState,
};

/// Return the league sorted by wins, highest first.
pub async fn league(state: &SharedState) -> Vec<PlayerDto> {
    state
        .store()
        .league()
        .await
        .into_iter()
        .map(PlayerDto::from)
        .collect()
}

/// Return the number of wins recorded for `name` (0 when unknown).
pub async fn score(state: &SharedState, name: &str) -> u32 {
    state.store().score(name).await
}

/// Record one win for the player named in `path`.
pub async fn record_win(state: &SharedState, path: &PlayerPath) -> Result<(), ServiceError> {
    path.validate()?;
    state.store().record_win(&path.name).await;
    info!(player = %path.name, "recorded win");
    Ok(())
}
