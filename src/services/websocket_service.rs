use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket};
use futures::{SinkExt, Stream, StreamExt};
use thiserror::Error;
use tokio::{sync::mpsc, task::JoinHandle};
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    dto::validation::validate_player_name,
    game::{AlertSink, SinkError},
    services::session_service::{Session, parse_player_count},
    state::{InvalidTransition, SharedState},
};

/// Transport failures of the live session bridge.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The peer closed the socket or the stream ended.
    #[error("websocket closed by peer")]
    Closed,
    /// Reading the next frame failed.
    #[error("websocket receive error")]
    Receive(#[source] axum::Error),
}

/// Reasons a session stops before a winner is recorded.
#[derive(Debug, Error)]
enum SessionError {
    #[error(transparent)]
    Bridge(#[from] BridgeError),
    #[error(transparent)]
    Transition(#[from] InvalidTransition),
}

/// Alert sink pushing text frames onto a socket's outbound channel.
#[derive(Debug, Clone)]
pub struct WebSocketAlertSink {
    tx: mpsc::UnboundedSender<Message>,
}

impl WebSocketAlertSink {
    /// Wrap the outbound channel of one socket.
    pub fn new(tx: mpsc::UnboundedSender<Message>) -> Self {
        Self { tx }
    }
}

impl AlertSink for WebSocketAlertSink {
    fn send_alert(&self, message: &str) -> Result<(), SinkError> {
        self.tx
            .send(Message::Text(message.to_owned().into()))
            .map_err(|_| SinkError::Closed)
    }
}

/// Handle the full lifecycle for one game session WebSocket connection.
pub async fn handle_socket(state: SharedState, socket: WebSocket) {
    let session_id = Uuid::new_v4();
    let (mut sender, mut receiver) = socket.split();
    let (outbound_tx, mut outbound_rx) = mpsc::unbounded_channel::<Message>();

    // Dedicated writer task keeps blind alerts flowing while we await inbound frames.
    let writer_task = tokio::spawn(async move {
        while let Some(message) = outbound_rx.recv().await {
            let closing = matches!(message, Message::Close(_));
            if sender.send(message).await.is_err() || closing {
                break;
            }
        }
    });

    let sink: Arc<dyn AlertSink> = Arc::new(WebSocketAlertSink::new(outbound_tx.clone()));
    let mut session = Session::begin(session_id, state.game(), sink);
    state.sessions().insert(session_id, session.phase());

    if let Err(err) = run_session(&state, &mut session, &mut receiver, &outbound_tx).await {
        warn!(%session_id, error = %err, "game session ended early");
        if let Err(err) = session.abort() {
            warn!(%session_id, error = %err, "failed to abort game session");
        }
    }

    state.sessions().remove(&session_id);
    info!(%session_id, phase = ?session.phase(), "game session disconnected");

    let _ = outbound_tx.send(Message::Close(None));
    finalize(writer_task, outbound_tx).await;
}

/// Read the player count, arm the blinds, then wait for the winner.
async fn run_session<S>(
    state: &SharedState,
    session: &mut Session,
    receiver: &mut S,
    outbound_tx: &mpsc::UnboundedSender<Message>,
) -> Result<(), SessionError>
where
    S: Stream<Item = Result<Message, axum::Error>> + Unpin,
{
    let players_message = wait_for_message(receiver, outbound_tx).await?;
    let players = parse_player_count(&players_message).unwrap_or_else(|| {
        warn!(
            session_id = %session.id(),
            payload = %players_message,
            "couldn't convert the number of players; starting with 0"
        );
        0
    });
    session.declare_players(players)?;
    state.sessions().insert(session.id(), session.phase());

    let winner = wait_for_message(receiver, outbound_tx).await?;
    if let Err(err) = validate_player_name(&winner) {
        warn!(session_id = %session.id(), error = %err, "rejected winner name");
        session.abort()?;
        return Ok(());
    }

    session.declare_winner(winner).await?;
    Ok(())
}

/// Block until the next text frame arrives, answering pings meanwhile.
pub async fn wait_for_message<S>(
    receiver: &mut S,
    outbound_tx: &mpsc::UnboundedSender<Message>,
) -> Result<String, BridgeError>
where
    S: Stream<Item = Result<Message, axum::Error>> + Unpin,
{
    while let Some(message) = receiver.next().await {
        match message {
            Ok(Message::Text(text)) => return Ok(text.as_str().to_owned()),
            Ok(Message::Ping(payload)) => {
                let _ = outbound_tx.send(Message::Pong(payload));
            }
            Ok(Message::Close(_)) => return Err(BridgeError::Closed),
            Ok(Message::Binary(_)) | Ok(Message::Pong(_)) => {}
            Err(err) => return Err(BridgeError::Receive(err)),
        }
    }

    Err(BridgeError::Closed)
}

/// Ensure the writer task winds down before we return from the socket handler.
async fn finalize(writer_task: JoinHandle<()>, outbound_tx: mpsc::UnboundedSender<Message>) {
    drop(outbound_tx);
    let _ = writer_task.await;
}
