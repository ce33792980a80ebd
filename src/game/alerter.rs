use std::{
    io::{self, Write},
    sync::{Arc, Mutex},
    time::Duration,
};

use thiserror::Error;
use tokio::time::sleep;
use tracing::debug;

/// Error returned when an alert cannot be delivered.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The receiving side is gone (for example a disconnected WebSocket).
    #[error("alert sink closed")]
    Closed,
    /// Writing to the underlying stream failed.
    #[error("failed to write alert")]
    Io(#[from] io::Error),
}

/// Destination for the human readable alerts of a running game.
pub trait AlertSink: Send + Sync {
    /// Deliver one alert line.
    fn send_alert(&self, message: &str) -> Result<(), SinkError>;
}

/// Alert sink writing to any [`Write`] implementation, such as stdout.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: Mutex<W>,
}

impl<W> WriterSink<W>
where
    W: Write + Send,
{
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Write `text` and flush it right away.
    pub fn write_str(&self, text: &str) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| io::Error::other("writer lock poisoned"))?;
        writer.write_all(text.as_bytes())?;
        writer.flush()
    }
}

impl WriterSink<Vec<u8>> {
    /// Everything written so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        let writer = self.writer.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        String::from_utf8_lossy(&writer).into_owned()
    }
}

impl<W> AlertSink for WriterSink<W>
where
    W: Write + Send,
{
    fn send_alert(&self, message: &str) -> Result<(), SinkError> {
        Ok(self.write_str(message)?)
    }
}

/// Schedules a single blind alert.
pub trait BlindAlerter: Send + Sync {
    /// Send the alert for `amount` to `to` once `delay` has elapsed.
    fn schedule_alert_at(&self, delay: Duration, amount: u32, to: Arc<dyn AlertSink>);
}

/// Message sent when the blind goes up.
pub fn blind_message(amount: u32) -> String {
    format!("Blind is now {amount}\n")
}

/// Alerter firing each alert from its own tokio task.
///
/// Must be used from inside a tokio runtime. Alerts cannot be cancelled once
/// scheduled; those hitting a closed sink are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioBlindAlerter;

impl BlindAlerter for TokioBlindAlerter {
    fn schedule_alert_at(&self, delay: Duration, amount: u32, to: Arc<dyn AlertSink>) {
        tokio::spawn(async move {
            sleep(delay).await;
            if let Err(err) = to.send_alert(&blind_message(amount)) {
                debug!(amount, error = %err, "dropping blind alert");
            }
        });
    }
}
