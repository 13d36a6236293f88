//! `MessagePusher` backed by per-connection WebSocket queues.
//!
//! The UI layer creates one `UnboundedSender` per accepted socket and a writer
//! task that drains the matching receiver into the socket. This pusher only
//! encodes events and enqueues them, so it never waits on a slow socket.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    domain::{ConnectionId, MessagePushError, MessagePusher, PusherChannel, RoomEvent},
    infrastructure::dto::websocket::ServerEvent,
};

/// Encode a room event as one protocol text frame.
pub fn encode_event(event: &RoomEvent) -> Result<String, MessagePushError> {
    serde_json::to_string(&ServerEvent::from(event))
        .map_err(|e| MessagePushError::EncodeFailed(e.to_string()))
}

pub struct WebSocketMessagePusher {
    /// Outbound queue per connected client.
    clients: Arc<RwLock<HashMap<ConnectionId, PusherChannel>>>,
}

impl WebSocketMessagePusher {
    pub fn new(clients: Arc<RwLock<HashMap<ConnectionId, PusherChannel>>>) -> Self {
        Self { clients }
    }
}

impl Default for WebSocketMessagePusher {
    fn default() -> Self {
        Self::new(Arc::new(RwLock::new(HashMap::new())))
    }
}

#[async_trait]
impl MessagePusher for WebSocketMessagePusher {
    async fn register_client(&self, client_id: ConnectionId, sender: PusherChannel) {
        let mut clients = self.clients.write().await;
        tracing::debug!("Client '{}' registered to MessagePusher", client_id);
        clients.insert(client_id, sender);
    }

    async fn unregister_client(&self, client_id: &ConnectionId) {
        let mut clients = self.clients.write().await;
        clients.remove(client_id);
        tracing::debug!("Client '{}' unregistered from MessagePusher", client_id);
    }

    async fn push_to(
        &self,
        client_id: &ConnectionId,
        event: &RoomEvent,
    ) -> Result<(), MessagePushError> {
        let frame = encode_event(event)?;
        let clients = self.clients.read().await;

        let sender = clients
            .get(client_id)
            .ok_or_else(|| MessagePushError::ClientNotFound(client_id.to_string()))?;
        sender
            .send(frame)
            .map_err(|e| MessagePushError::PushFailed(e.to_string()))?;
        tracing::debug!("Pushed event to client '{}'", client_id);
        Ok(())
    }

    async fn broadcast(
        &self,
        targets: &[ConnectionId],
        event: &RoomEvent,
    ) -> Result<(), MessagePushError> {
        if targets.is_empty() {
            return Ok(());
        }
        let frame = encode_event(event)?;
        let clients = self.clients.read().await;

        for target in targets {
            match clients.get(target) {
                // A closed queue means the socket is going away; its session
                // will disconnect it from the room.
                Some(sender) => {
                    if let Err(e) = sender.send(frame.clone()) {
                        tracing::warn!("Failed to push event to client '{}': {}", target, e);
                    }
                }
                None => {
                    tracing::warn!("Client '{}' not found during broadcast, skipping", target);
                }
            }
        }
        tracing::debug!(
            "Broadcasted event for room '{}' to {} client(s)",
            event.room_id(),
            targets.len()
        );

        Ok(())
    }
}
