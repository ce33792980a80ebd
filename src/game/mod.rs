//! Card game sessions: blind scheduling and result recording.

pub mod alerter;
pub mod texas_holdem;

use std::sync::Arc;

use futures::future::BoxFuture;

pub use self::{
    alerter::{AlertSink, BlindAlerter, SinkError, TokioBlindAlerter, WriterSink},
    texas_holdem::TexasHoldem,
};

/// A game that can be started with a number of players and finished with a winner.
pub trait Game: Send + Sync {
    /// Arm the blind schedule for `number_of_players`, sending alerts to `alerts_destination`.
    ///
    /// Returns as soon as every alert is scheduled.
    fn start(&self, number_of_players: i64, alerts_destination: Arc<dyn AlertSink>);
    /// Record the win of `winner`.
    fn finish<'a>(&'a self, winner: &'a str) -> BoxFuture<'a, ()>;
}
