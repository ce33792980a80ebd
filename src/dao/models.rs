use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::dao::storage::{StorageError, StorageResult};

/// A league entry: a player and the number of games they won.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Unique, case-sensitive player name.
    #[serde(rename = "Name")]
    pub name: String,
    /// Number of recorded wins.
    #[serde(rename = "Wins")]
    pub wins: u32,
}

impl Player {
    /// Create an entry for a player with the given win count.
    pub fn new(name: impl Into<String>, wins: u32) -> Self {
        Self {
            name: name.into(),
            wins,
        }
    }
}

/// Every player known to the store.
pub type League = Vec<Player>;

/// Find the entry for `name` using an exact, case-sensitive match.
pub fn find_player_mut<'a>(league: &'a mut [Player], name: &str) -> Option<&'a mut Player> {
    league.iter_mut().find(|player| player.name == name)
}

/// Order the league by wins, highest first. Ties keep their relative order.
pub fn sort_by_wins(league: &mut [Player]) {
    league.sort_by(|a, b| b.wins.cmp(&a.wins));
}

/// Decode a league snapshot from a reader positioned at its first byte.
pub fn decode_league<R: Read>(reader: R) -> StorageResult<League> {
    serde_json::from_reader(reader).map_err(|source| StorageError::Decode { source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_uses_capitalized_field_names() {
        let league = vec![Player::new("Cleo", 3)];
        let json = serde_json::to_string(&league).unwrap();
        assert_eq!(json, r#"[{"Name":"Cleo","Wins":3}]"#);
    }

    #[test]
    fn decode_rejects_non_array_snapshot() {
        let err = decode_league(r#"{"Name":"Cleo"}"#.as_bytes()).unwrap_err();
        assert!(matches!(err, StorageError::Decode { .. }));
    }

    #[test]
    fn sort_keeps_ties_in_place() {
        let mut league = vec![
            Player::new("Ann", 1),
            Player::new("Bob", 4),
            Player::new("Cid", 1),
        ];
        sort_by_wins(&mut league);
        let names: Vec<_> = league.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Bob", "Ann", "Cid"]);
    }

    #[test]
    fn find_is_case_sensitive() {
        let mut league = vec![Player::new("Pepper", 2)];
        assert!(find_player_mut(&mut league, "pepper").is_none());
        find_player_mut(&mut league, "Pepper").unwrap().wins += 1;
        assert_eq!(league[0].wins, 3);
    }
}
