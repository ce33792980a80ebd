use std::collections::HashMap;

use futures::future::BoxFuture;
use tokio::sync::RwLock;

use crate::dao::{
    models::{League, Player},
    player_store::PlayerStore,
};

/// Map-backed ledger without persistence.
#[derive(Debug, Default)]
pub struct InMemoryPlayerStore {
    scores: RwLock<HashMap<String, u32>>,
}

impl InMemoryPlayerStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlayerStore for InMemoryPlayerStore {
    fn score<'a>(&'a self, name: &'a str) -> BoxFuture<'a, u32> {
        Box::pin(async move { self.scores.read().await.get(name).copied().unwrap_or(0) })
    }

    fn record_win<'a>(&'a self, name: &'a str) -> BoxFuture<'a, ()> {
        Box::pin(async move {
            *self.scores.write().await.entry(name.to_string()).or_insert(0) += 1;
        })
    }

    fn league(&self) -> BoxFuture<'_, League> {
        Box::pin(async move {
            let mut league: League = self
                .scores
                .read()
                .await
                .iter()
                .map(|(name, wins)| Player::new(name.clone(), *wins))
                .collect();
            // Map iteration order is random; break ties by name.
            league.sort_by(|a, b| b.wins.cmp(&a.wins).then_with(|| a.name.cmp(&b.name)));
            league
        })
    }

    fn player_count(&self) -> BoxFuture<'_, usize> {
        Box::pin(async move { self.scores.read().await.len() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_wins_and_reports_sorted_league() {
        let store = InMemoryPlayerStore::new();
        store.record_win("Cleo").await;
        store.record_win("Chris").await;
        store.record_win("Chris").await;
        store.record_win("Amy").await;

        assert_eq!(store.score("Chris").await, 2);
        assert_eq!(store.score("Nobody").await, 0);
        assert_eq!(store.player_count().await, 3);
        assert_eq!(
            store.league().await,
            vec![
                Player::new("Chris", 2),
                Player::new("Amy", 1),
                Player::new("Cleo", 1),
            ]
        );
    }
}
