//! Connection session: bridges one transport connection to the coordinator.
//!
//! Inbound frames are decoded into a [`RoomRequest`] here, at the boundary.
//! Anything that fails to decode or validate is dropped with a log line and
//! never reaches the coordinator.

use std::sync::Arc;

use crate::{
    domain::{Connection, ConnectionId, PusherChannel, RoomId, RoomRequest, identity},
    infrastructure::dto::websocket::ClientEvent,
    usecase::RoomCoordinator,
};

pub struct Session {
    connection: Connection,
    coordinator: Arc<RoomCoordinator>,
}

impl Session {
    /// Accept a new connection: assign its id and display identity and
    /// register its outbound queue.
    pub async fn open(coordinator: Arc<RoomCoordinator>, sender: PusherChannel) -> Self {
        let id = ConnectionId::generate();
        let identity = identity::assign(&id);
        let connection = Connection::new(id, identity);
        coordinator.connect(&connection, sender).await;

        Self {
            connection,
            coordinator,
        }
    }

    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    /// Handle one inbound text frame.
    pub async fn handle_text(&mut self, frame: &str) {
        let event = match serde_json::from_str::<ClientEvent>(frame) {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!(
                    "Dropping undecodable frame from '{}': {}",
                    self.connection.id,
                    e
                );
                return;
            }
        };

        match RoomRequest::try_from(event) {
            Ok(request) => self.dispatch(request).await,
            Err(e) => {
                tracing::warn!(
                    "Dropping invalid request from '{}': {}",
                    self.connection.id,
                    e
                );
            }
        }
    }

    pub async fn dispatch(&mut self, request: RoomRequest) {
        tracing::debug!(
            "Connection '{}' -> {:?}",
            self.connection.id,
            request
        );

        match request {
            RoomRequest::Join(room_id) => {
                self.coordinator.join(&mut self.connection, room_id).await;
            }
            RoomRequest::Send { room_id, text } => {
                self.coordinator.send(&self.connection, room_id, text).await;
            }
            RoomRequest::ClearHistory(room_id) => {
                self.coordinator
                    .clear_history(&self.connection, room_id)
                    .await;
            }
            RoomRequest::Leave(room_id) => {
                self.coordinator.leave(&mut self.connection, room_id).await;
            }
        }
    }

    /// Disconnect. Consumes the session, so no request can follow.
    pub async fn close(mut self) -> Vec<RoomId> {
        self.coordinator.disconnect(&mut self.connection).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::dto::websocket::ServerEvent;
    use crate::usecase::coordinator::test_support::*;
    use tokio::sync::mpsc;

    async fn open_session() -> (Session, mpsc::UnboundedReceiver<String>) {
        let coordinator = create_test_coordinator();
        let (tx, rx) = mpsc::unbounded_channel();
        (Session::open(coordinator, tx).await, rx)
    }

    #[tokio::test]
    async fn test_open_assigns_identity_from_connection_id() {
        // テスト項目: 接続時に ID と表示アイデンティティが割り当てられる
        // given (前提条件):
        let (session, _rx) = open_session().await;

        // when (操作):
        let connection = session.connection();

        // then (期待する結果):
        assert!(
            connection
                .identity
                .display_name
                .ends_with(connection.id.short())
        );
        assert!(!connection.identity.avatar.is_empty());
    }

    #[tokio::test]
    async fn test_join_frame_dispatches_join() {
        // テスト項目: join フレームでルームに参加し joined を受け取る
        // given (前提条件):
        let (mut session, mut rx) = open_session().await;

        // when (操作):
        session
            .handle_text(r#"{"event":"join","data":"lobby"}"#)
            .await;

        // then (期待する結果):
        assert!(session.connection().is_member_of(&room("lobby")));
        let events = drain(&mut rx);
        assert!(matches!(events.as_slice(), [ServerEvent::Joined(_)]));
    }

    #[tokio::test]
    async fn test_invalid_requests_are_silently_dropped() {
        // テスト項目: 空の roomId / text や壊れたフレームは応答なしで破棄され状態も変わらない
        // given (前提条件):
        let (mut session, mut rx) = open_session().await;
        session
            .handle_text(r#"{"event":"join","data":"R"}"#)
            .await;
        drain(&mut rx);

        // when (操作):
        for frame in [
            r#"{"event":"message","data":{"roomId":"","text":"hi"}}"#,
            r#"{"event":"message","data":{"roomId":"R","text":""}}"#,
            r#"{"event":"message","data":{"roomId":"R","text":"   "}}"#,
            r#"{"event":"join","data":""}"#,
            r#"{"event":"shout","data":"R"}"#,
            "not json",
        ] {
            session.handle_text(frame).await;
        }

        // then (期待する結果):
        assert!(drain(&mut rx).is_empty());
        let room = session.coordinator.room("R".to_string()).await.unwrap();
        assert!(room.log().is_empty());
        assert_eq!(session.coordinator.rooms().await.len(), 1);
    }

    #[tokio::test]
    async fn test_message_frame_is_broadcast_back_to_sender() {
        // テスト項目: message フレームは送信者自身にも配信される
        // given (前提条件):
        let (mut session, mut rx) = open_session().await;
        session
            .handle_text(r#"{"event":"join","data":"lobby"}"#)
            .await;
        drain(&mut rx);

        // when (操作):
        session
            .handle_text(r#"{"event":"message","data":{"roomId":"lobby","text":"hello"}}"#)
            .await;

        // then (期待する結果):
        assert_eq!(message_texts(&drain(&mut rx)), vec!["hello"]);
    }

    #[tokio::test]
    async fn test_close_leaves_joined_rooms() {
        // テスト項目: close で参加中の全ルームから退出する
        // given (前提条件):
        let (mut session, _rx) = open_session().await;
        let coordinator = session.coordinator.clone();
        session
            .handle_text(r#"{"event":"join","data":"a"}"#)
            .await;
        session
            .handle_text(r#"{"event":"clearHistory","data":{"roomId":"a"}}"#)
            .await;
        session
            .handle_text(r#"{"event":"join","data":"b"}"#)
            .await;

        // when (操作):
        let mut left = session.close().await;

        // then (期待する結果):
        left.sort();
        assert_eq!(left, vec![room("a"), room("b")]);
        for room_id in ["a", "b"] {
            let room = coordinator.room(room_id.to_string()).await.unwrap();
            assert!(room.members().is_empty());
        }
    }
}
