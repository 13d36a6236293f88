//! Broadcast protocol frames.
//!
//! Every frame is a JSON object `{"event": <name>, "data": <payload>}` carried in
//! one WebSocket text message.

use serde::{Deserialize, Serialize};

/// Inbound events (client → server).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ClientEvent {
    /// `data` is the room id.
    Join(String),
    Message(SendMessagePayload),
    ClearHistory(RoomPayload),
    /// `data` is the room id.
    Leave(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SendMessagePayload {
    pub room_id: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoomPayload {
    pub room_id: String,
}

/// Outbound events (server → client).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ServerEvent {
    Joined(JoinedPayload),
    System(SystemPayload),
    Message(MessagePayload),
    HistoryCleared(HistoryClearedPayload),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinedPayload {
    pub room_id: String,
    pub user_id: String,
    pub display_name: String,
    pub avatar: String,
    pub history: Vec<MessagePayload>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemKind {
    Join,
    Leave,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemPayload {
    pub kind: SystemKind,
    pub user_id: String,
    pub display_name: String,
    pub avatar: String,
    pub room_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Message,
    System,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagePayload {
    pub id: String,
    pub text: String,
    pub user_id: String,
    pub display_name: String,
    pub avatar: String,
    /// ISO-8601, UTC
    pub created_at: String,
    pub r#type: MessageType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryClearedPayload {
    pub room_id: String,
    pub by: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_join_with_plain_room_id() {
        // テスト項目: join イベントはルーム ID 文字列をペイロードに持つ
        // given (前提条件):
        let frame = r#"{"event":"join","data":"lobby"}"#;

        // when (操作):
        let event: ClientEvent = serde_json::from_str(frame).unwrap();

        // then (期待する結果):
        assert_eq!(event, ClientEvent::Join("lobby".to_string()));
    }

    #[test]
    fn test_decode_message_with_missing_text_defaults_to_empty() {
        // テスト項目: text が欠けた message イベントは空文字としてデコードされる
        // given (前提条件):
        let frame = r#"{"event":"message","data":{"roomId":"lobby"}}"#;

        // when (操作):
        let event: ClientEvent = serde_json::from_str(frame).unwrap();

        // then (期待する結果):
        assert_eq!(
            event,
            ClientEvent::Message(SendMessagePayload {
                room_id: "lobby".to_string(),
                text: String::new(),
            })
        );
    }

    #[test]
    fn test_decode_clear_history() {
        // テスト項目: clearHistory イベントがデコードされる
        // given (前提条件):
        let frame = r#"{"event":"clearHistory","data":{"roomId":"lobby"}}"#;

        // when (操作):
        let event: ClientEvent = serde_json::from_str(frame).unwrap();

        // then (期待する結果):
        assert_eq!(
            event,
            ClientEvent::ClearHistory(RoomPayload {
                room_id: "lobby".to_string()
            })
        );
    }

    #[test]
    fn test_decode_unknown_event_fails() {
        // テスト項目: 未知のイベント名はデコードエラーになる
        // given (前提条件):
        let frame = r#"{"event":"shout","data":"lobby"}"#;

        // when (操作):
        let result = serde_json::from_str::<ClientEvent>(frame);

        // then (期待する結果):
        assert!(result.is_err());
    }

    #[test]
    fn test_encode_message_uses_wire_field_names() {
        // テスト項目: message イベントは camelCase と "type" フィールドでエンコードされる
        // given (前提条件):
        let event = ServerEvent::Message(MessagePayload {
            id: "1-abcdef".to_string(),
            text: "hello".to_string(),
            user_id: "u1".to_string(),
            display_name: "Brave Lion u1".to_string(),
            avatar: "🦁".to_string(),
            created_at: "2024-01-01T00:00:00.000Z".to_string(),
            r#type: MessageType::Message,
        });

        // when (操作):
        let value = serde_json::to_value(&event).unwrap();

        // then (期待する結果):
        assert_eq!(
            value,
            json!({
                "event": "message",
                "data": {
                    "id": "1-abcdef",
                    "text": "hello",
                    "userId": "u1",
                    "displayName": "Brave Lion u1",
                    "avatar": "🦁",
                    "createdAt": "2024-01-01T00:00:00.000Z",
                    "type": "message"
                }
            })
        );
    }

    #[test]
    fn test_encode_system_and_history_cleared() {
        // テスト項目: system / historyCleared イベントのワイヤ形式
        // given (前提条件):
        let system = ServerEvent::System(SystemPayload {
            kind: SystemKind::Leave,
            user_id: "u1".to_string(),
            display_name: "Kind Tiger u1".to_string(),
            avatar: "😇".to_string(),
            room_id: "lobby".to_string(),
        });
        let cleared = ServerEvent::HistoryCleared(HistoryClearedPayload {
            room_id: "lobby".to_string(),
            by: "u2".to_string(),
        });

        // when (操作):
        let system = serde_json::to_value(&system).unwrap();
        let cleared = serde_json::to_value(&cleared).unwrap();

        // then (期待する結果):
        assert_eq!(system["event"], "system");
        assert_eq!(system["data"]["kind"], "leave");
        assert_eq!(system["data"]["roomId"], "lobby");
        assert_eq!(
            cleared,
            json!({"event": "historyCleared", "data": {"roomId": "lobby", "by": "u2"}})
        );
    }
}
