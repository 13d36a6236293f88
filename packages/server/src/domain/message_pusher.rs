//! Outbound delivery interface.
//!
//! The coordinator hands already-formed events to a `MessagePusher` while it
//! holds a room. Implementations must only enqueue: actual socket writes happen
//! elsewhere, so a slow member never blocks the room.

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{ConnectionId, MessagePushError, RoomEvent};

/// Per-connection outbound queue carrying encoded frames.
pub type PusherChannel = mpsc::UnboundedSender<String>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// Register the outbound queue of a newly accepted connection.
    async fn register_client(&self, client_id: ConnectionId, sender: PusherChannel);

    /// Drop the outbound queue of a closed connection.
    async fn unregister_client(&self, client_id: &ConnectionId);

    /// Enqueue an event for a single connection.
    async fn push_to(
        &self,
        client_id: &ConnectionId,
        event: &RoomEvent,
    ) -> Result<(), MessagePushError>;

    /// Enqueue an event for every target. Partial failure is tolerated.
    async fn broadcast(
        &self,
        targets: &[ConnectionId],
        event: &RoomEvent,
    ) -> Result<(), MessagePushError>;
}
