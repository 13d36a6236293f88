//! WebSocket connection handler.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{
    sink::SinkExt,
    stream::{SplitSink, StreamExt},
};
use tokio::sync::mpsc;

use crate::ui::{session::Session, state::AppState};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Spawns a task that drains the outbound queue into the WebSocket sink.
///
/// The task ends when the queue is closed (the connection was unregistered)
/// or when a write fails.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(frame) = rx.recv().await {
            if sender.send(Message::Text(frame.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (sender, mut receiver) = socket.split();

    let (tx, rx) = mpsc::unbounded_channel();
    let mut session = Session::open(state.coordinator.clone(), tx).await;
    let connection_id = session.connection().id.clone();

    let mut send_task = pusher_loop(rx, sender);

    // Inbound frames are handled on this task, one at a time. Leaving the loop
    // means no further request from this connection is accepted.
    loop {
        tokio::select! {
            frame = receiver.next() => match frame {
                Some(Ok(Message::Text(text))) => session.handle_text(text.as_str()).await,
                Some(Ok(Message::Close(_))) => {
                    tracing::info!("Connection '{}' requested close", connection_id);
                    break;
                }
                Some(Ok(Message::Binary(_))) => {
                    tracing::warn!("Dropping binary frame from '{}'", connection_id);
                }
                // Ping/pong is handled automatically by the WebSocket protocol
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    tracing::warn!("WebSocket error on '{}': {}", connection_id, e);
                    break;
                }
                None => break,
            },
            _ = &mut send_task => {
                tracing::debug!("Writer for '{}' stopped", connection_id);
                break;
            }
        }
    }

    session.close().await;
    send_task.abort();
}
