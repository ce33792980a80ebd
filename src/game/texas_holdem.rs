use std::{sync::Arc, time::Duration};

use futures::future::BoxFuture;
use tracing::info;

use crate::{
    dao::player_store::PlayerStore,
    game::{
        Game,
        alerter::{AlertSink, BlindAlerter},
    },
};

/// Blind amounts, raised one step per blind increment.
pub const BLIND_AMOUNTS: [u32; 11] = [100, 200, 300, 400, 500, 600, 800, 1000, 2000, 4000, 8000];
/// Minutes per blind level before accounting for the table size.
const BASE_BLIND_MINUTES: i64 = 5;

/// One blind raise, relative to the start of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledAlert {
    /// Time since the start of the game.
    pub delay: Duration,
    /// Blind value announced by the alert.
    pub amount: u32,
}

/// Time between two blind raises: five minutes plus one per player.
///
/// Degenerate player counts are not rejected; an increment below zero is clamped
/// so every alert fires immediately.
pub fn blind_increment(number_of_players: i64) -> Duration {
    let minutes = BASE_BLIND_MINUTES.saturating_add(number_of_players).max(0);
    Duration::from_secs((minutes as u64).saturating_mul(60))
}

/// Full blind ladder for a table of `number_of_players`.
pub fn blind_schedule(number_of_players: i64) -> Vec<ScheduledAlert> {
    let increment = blind_increment(number_of_players);
    BLIND_AMOUNTS
        .iter()
        .zip(0u32..)
        .map(|(&amount, level)| ScheduledAlert {
            delay: increment.saturating_mul(level),
            amount,
        })
        .collect()
}

/// Texas Hold'em: raises the blinds on a timer and records the winner in the league.
pub struct TexasHoldem {
    store: Arc<dyn PlayerStore>,
    alerter: Arc<dyn BlindAlerter>,
}

impl TexasHoldem {
    /// Game recording winners in `store` and raising blinds through `alerter`.
    pub fn new(store: Arc<dyn PlayerStore>, alerter: Arc<dyn BlindAlerter>) -> Self {
        Self { store, alerter }
    }
}

impl Game for TexasHoldem {
    fn start(&self, number_of_players: i64, alerts_destination: Arc<dyn AlertSink>) {
        let schedule = blind_schedule(number_of_players);
        info!(
            players = number_of_players,
            increment_secs = blind_increment(number_of_players).as_secs(),
            "arming blind schedule"
        );

        for alert in schedule {
            self.alerter
                .schedule_alert_at(alert.delay, alert.amount, alerts_destination.clone());
        }
    }

    fn finish<'a>(&'a self, winner: &'a str) -> BoxFuture<'a, ()> {
        Box::pin(async move {
            self.store.record_win(winner).await;
            info!(%winner, "game finished");
        })
    }
}

#[cfg(test)]
mod tests {
    use tokio::time::sleep;

    use super::*;
    use crate::{
        dao::player_store::InMemoryPlayerStore,
        game::{TokioBlindAlerter, WriterSink},
        test_support::SpyBlindAlerter,
    };

    fn minutes(values: &[u64]) -> Vec<Duration> {
        values.iter().map(|m| Duration::from_secs(m * 60)).collect()
    }

    fn scheduled(players: i64) -> (Arc<SpyBlindAlerter>, TexasHoldem) {
        let alerter = Arc::new(SpyBlindAlerter::default());
        let game = TexasHoldem::new(Arc::new(InMemoryPlayerStore::new()), alerter.clone());
        game.start(players, Arc::new(WriterSink::new(Vec::new())));
        (alerter, game)
    }

    #[test]
    fn schedules_alerts_for_five_players() {
        let (alerter, _game) = scheduled(5);
        let alerts = alerter.alerts();

        let delays: Vec<_> = alerts.iter().map(|a| a.delay).collect();
        let amounts: Vec<_> = alerts.iter().map(|a| a.amount).collect();
        assert_eq!(
            delays,
            minutes(&[0, 10, 20, 30, 40, 50, 60, 70, 80, 90, 100])
        );
        assert_eq!(amounts, BLIND_AMOUNTS);
    }

    #[test]
    fn schedules_alerts_for_seven_players() {
        let (alerter, _game) = scheduled(7);
        let alerts = alerter.alerts();

        let delays: Vec<_> = alerts.iter().take(4).map(|a| a.delay).collect();
        assert_eq!(delays, minutes(&[0, 12, 24, 36]));
        assert_eq!(alerts.len(), BLIND_AMOUNTS.len());
        assert_eq!(alerts[10].delay, Duration::from_secs(120 * 60));
    }

    #[test]
    fn degenerate_player_counts_keep_the_ladder() {
        assert_eq!(blind_increment(0), Duration::from_secs(5 * 60));
        let schedule = blind_schedule(-9);
        assert!(schedule.iter().all(|alert| alert.delay == Duration::ZERO));
        assert_eq!(schedule.len(), BLIND_AMOUNTS.len());
    }

    #[test]
    fn negative_table_size_shortens_the_increment() {
        let (alerter, _game) = scheduled(-3);
        let delays: Vec<_> = alerter.alerts().iter().take(3).map(|a| a.delay).collect();
        assert_eq!(delays, minutes(&[0, 2, 4]));
    }

    #[tokio::test]
    async fn finish_records_the_winner() {
        let store = Arc::new(InMemoryPlayerStore::new());
        let game = TexasHoldem::new(store.clone(), Arc::new(SpyBlindAlerter::default()));

        game.finish("Ruth").await;

        assert_eq!(store.score("Ruth").await, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn alerts_reach_the_sink_in_order() {
        let sink = Arc::new(WriterSink::new(Vec::new()));
        let game = TexasHoldem::new(
            Arc::new(InMemoryPlayerStore::new()),
            Arc::new(TokioBlindAlerter),
        );

        game.start(5, sink.clone());

        sleep(Duration::from_secs(1)).await;
        assert_eq!(sink.contents(), "Blind is now 100\n");

        sleep(Duration::from_secs(10 * 60)).await;
        assert_eq!(sink.contents(), "Blind is now 100\nBlind is now 200\n");

        sleep(Duration::from_secs(100 * 60)).await;
        let expected: String = BLIND_AMOUNTS
            .iter()
            .map(|amount| format!("Blind is now {amount}\n"))
            .collect();
        assert_eq!(sink.contents(), expected);
    }
}
