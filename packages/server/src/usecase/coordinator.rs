//! Room Coordinator: the single authority over room state and broadcast order.
//!
//! Every operation takes hold of its room through the registry, commits the
//! state change, and enqueues the resulting events while still holding the
//! room. Because the per-room lock is FIFO and enqueuing never blocks, every
//! member observes the room's events in exactly the order they were committed.
//!
//! The operations live in sibling modules, one per protocol event:
//! `join_room`, `send_message`, `clear_history`, `leave_room`,
//! `disconnect_participant`, plus the read-only `get_rooms`.

use std::sync::Arc;

use roomcast_shared::time::Clock;

use crate::{
    domain::{Connection, ConnectionId, MessagePusher, PusherChannel, RoomEvent, Timestamp},
    infrastructure::registry::{InMemoryRoomRegistry, RegistryChange, RegistryObserver},
};

/// ルームの状態とブロードキャスト順序を管理するコーディネーター
pub struct RoomCoordinator {
    /// ルームレジストリ（ルームごとの FIFO ロック）
    pub(super) registry: Arc<InMemoryRoomRegistry>,
    /// MessagePusher（メッセージ通知の抽象化）
    pub(super) message_pusher: Arc<dyn MessagePusher>,
    clock: Arc<dyn Clock>,
}

impl RoomCoordinator {
    /// 新しい RoomCoordinator を作成
    pub fn new(
        registry: Arc<InMemoryRoomRegistry>,
        message_pusher: Arc<dyn MessagePusher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            registry,
            message_pusher,
            clock,
        }
    }

    /// 新しく受け付けた接続の送信キューを登録
    ///
    /// # Arguments
    ///
    /// * `connection` - 受け付けた接続（Domain Model）
    /// * `sender` - この接続の送信キュー
    pub async fn connect(&self, connection: &Connection, sender: PusherChannel) {
        self.message_pusher
            .register_client(connection.id.clone(), sender)
            .await;
        tracing::info!(
            "Connection '{}' accepted as '{}' {}",
            connection.id,
            connection.identity.display_name,
            connection.identity.avatar
        );
    }

    pub(super) fn now(&self) -> Timestamp {
        Timestamp::new(self.clock.now_millis())
    }

    /// 一つの接続にイベントを送信（失敗はログ出力のみ）
    pub(super) async fn push_to(&self, target: &ConnectionId, event: &RoomEvent) {
        if let Err(e) = self.message_pusher.push_to(target, event).await {
            tracing::warn!("Failed to push event to '{}': {}", target, e);
        }
    }

    /// 対象の全接続にイベントを送信（失敗はログ出力のみ）
    pub(super) async fn broadcast(&self, targets: &[ConnectionId], event: &RoomEvent) {
        if let Err(e) = self.message_pusher.broadcast(targets, event).await {
            tracing::warn!(
                "Failed to broadcast event in room '{}': {}",
                event.room_id(),
                e
            );
        }
    }
}

/// レジストリの確定済み変更を debug レベルでログ出力するオブザーバー
pub fn trace_registry_change() -> RegistryObserver {
    Arc::new(|change: &RegistryChange| match change {
        RegistryChange::RoomCreated { room_id } => {
            tracing::debug!("Room '{}' created", room_id);
        }
        RegistryChange::MessageAppended {
            room_id,
            message_id,
            log_len,
        } => {
            tracing::debug!(
                "Room '{}': appended message {} (log length {})",
                room_id,
                message_id.as_str(),
                log_len
            );
        }
        RegistryChange::HistoryCleared { room_id, removed } => {
            tracing::debug!("Room '{}': cleared {} message(s)", room_id, removed);
        }
        RegistryChange::MemberAdded {
            room_id,
            member_id,
            member_count,
        } => {
            tracing::debug!(
                "Room '{}': member '{}' added ({} member(s))",
                room_id,
                member_id,
                member_count
            );
        }
        RegistryChange::MemberRemoved {
            room_id,
            member_id,
            member_count,
        } => {
            tracing::debug!(
                "Room '{}': member '{}' removed ({} member(s))",
                room_id,
                member_id,
                member_count
            );
        }
    })
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Coordinator wired to a real WebSocket pusher, with the outbound queues
    //! exposed as receivers.

    use std::sync::Arc;

    use roomcast_shared::time::FixedClock;
    use tokio::sync::mpsc;

    use super::RoomCoordinator;
    use crate::{
        domain::{Connection, ConnectionId, DisplayIdentity, MessagePusher, RoomId},
        infrastructure::{
            dto::websocket::ServerEvent, message_pusher::WebSocketMessagePusher,
            registry::InMemoryRoomRegistry,
        },
    };

    pub const NOW: i64 = 1_700_000_000_000;

    pub fn create_test_registry() -> Arc<InMemoryRoomRegistry> {
        Arc::new(InMemoryRoomRegistry::new(Arc::new(FixedClock::new(NOW))))
    }

    pub fn create_test_coordinator() -> Arc<RoomCoordinator> {
        create_test_coordinator_with(Arc::new(WebSocketMessagePusher::default()))
    }

    pub fn create_test_coordinator_with(pusher: Arc<dyn MessagePusher>) -> Arc<RoomCoordinator> {
        Arc::new(RoomCoordinator::new(
            create_test_registry(),
            pusher,
            Arc::new(FixedClock::new(NOW)),
        ))
    }

    pub fn room(name: &str) -> RoomId {
        RoomId::new(name.to_string()).unwrap()
    }

    pub fn connection(id: &str) -> Connection {
        Connection::new(
            ConnectionId::new(id.to_string()).unwrap(),
            DisplayIdentity::new(format!("Brave Lion {}", id), "🚀"),
        )
    }

    /// Accept a connection and return it with its outbound queue.
    pub async fn connect(
        coordinator: &RoomCoordinator,
        id: &str,
    ) -> (Connection, mpsc::UnboundedReceiver<String>) {
        let connection = connection(id);
        let (tx, rx) = mpsc::unbounded_channel();
        coordinator.connect(&connection, tx).await;
        (connection, rx)
    }

    /// Everything currently queued for a connection, decoded.
    pub fn drain(rx: &mut mpsc::UnboundedReceiver<String>) -> Vec<ServerEvent> {
        let mut events = Vec::new();
        while let Ok(frame) = rx.try_recv() {
            events.push(serde_json::from_str(&frame).unwrap());
        }
        events
    }

    /// Texts of the `message` events in `events`, in order.
    pub fn message_texts(events: &[ServerEvent]) -> Vec<String> {
        events
            .iter()
            .filter_map(|event| match event {
                ServerEvent::Message(payload) => Some(payload.text.clone()),
                _ => None,
            })
            .collect()
    }
}
