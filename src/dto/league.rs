use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dao::models::Player;

/// League entry returned by `/league`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PlayerDto {
    /// Player name.
    #[serde(rename = "Name")]
    pub name: String,
    /// Number of games won.
    #[serde(rename = "Wins")]
    pub wins: u32,
}

impl From<Player> for PlayerDto {
    fn from(player: Player) -> Self {
        Self {
            name: player.name,
            wins: player.wins,
        }
    }
}
