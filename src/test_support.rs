//! Fakes and fixtures shared by the unit tests.

use std::{
    env, fs,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
    time::Duration,
};

use futures::future::BoxFuture;
use uuid::Uuid;

use crate::game::{
    AlertSink, BlindAlerter, Game,
    texas_holdem::ScheduledAlert,
};

/// Records scheduled alerts instead of arming timers.
#[derive(Debug, Default)]
pub struct SpyBlindAlerter {
    alerts: Mutex<Vec<ScheduledAlert>>,
}

impl SpyBlindAlerter {
    pub fn alerts(&self) -> Vec<ScheduledAlert> {
        self.alerts.lock().unwrap().clone()
    }
}

impl BlindAlerter for SpyBlindAlerter {
    fn schedule_alert_at(&self, delay: Duration, amount: u32, _to: Arc<dyn AlertSink>) {
        self.alerts
            .lock()
            .unwrap()
            .push(ScheduledAlert { delay, amount });
    }
}

/// Game double remembering how it was started and finished.
#[derive(Debug, Default)]
pub struct GameSpy {
    /// Alert pushed to the sink as soon as the game starts.
    pub blind_alert: Option<String>,
    started_with: Mutex<Option<i64>>,
    finished_with: Mutex<Option<String>>,
}

impl GameSpy {
    pub fn with_blind_alert(alert: &str) -> Self {
        Self {
            blind_alert: Some(alert.to_string()),
            ..Self::default()
        }
    }

    pub fn started_with(&self) -> Option<i64> {
        *self.started_with.lock().unwrap()
    }

    pub fn finished_with(&self) -> Option<String> {
        self.finished_with.lock().unwrap().clone()
    }
}

impl Game for GameSpy {
    fn start(&self, number_of_players: i64, alerts_destination: Arc<dyn AlertSink>) {
        *self.started_with.lock().unwrap() = Some(number_of_players);
        if let Some(alert) = &self.blind_alert {
            alerts_destination.send_alert(alert).unwrap();
        }
    }

    fn finish<'a>(&'a self, winner: &'a str) -> BoxFuture<'a, ()> {
        Box::pin(async move {
            *self.finished_with.lock().unwrap() = Some(winner.to_string());
        })
    }
}

/// Database file in the temp directory, removed on drop.
pub struct TempDb {
    path: PathBuf,
}

impl TempDb {
    pub fn new() -> Self {
        Self {
            path: env::temp_dir().join(format!("poker-league-{}.json", Uuid::new_v4())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDb {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}
