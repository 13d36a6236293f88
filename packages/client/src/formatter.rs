//! Message formatting utilities for client display.

use roomcast_server::infrastructure::dto::websocket::{
    HistoryClearedPayload, JoinedPayload, MessagePayload, ServerEvent, SystemKind, SystemPayload,
};

const RULE: &str = "------------------------------------------------------------";

/// Message formatter for client display
pub struct MessageFormatter;

impl MessageFormatter {
    /// Format any server event. `me` is the user id assigned to this client.
    pub fn format_event(event: &ServerEvent, me: Option<&str>) -> String {
        match event {
            ServerEvent::Joined(payload) => Self::format_joined(payload),
            ServerEvent::System(payload) => Self::format_system(payload),
            ServerEvent::Message(payload) => Self::format_message(payload, me),
            ServerEvent::HistoryCleared(payload) => Self::format_history_cleared(payload, me),
        }
    }

    /// Join acknowledgement with the room history
    pub fn format_joined(payload: &JoinedPayload) -> String {
        let mut output = String::new();
        output.push_str("\n============================================================\n");
        output.push_str(&format!(
            "Joined '{}' as {} {}\n",
            payload.room_id, payload.avatar, payload.display_name
        ));

        if payload.history.is_empty() {
            output.push_str("(No messages yet)\n");
        } else {
            output.push_str(&format!("History ({} messages):\n", payload.history.len()));
            for message in &payload.history {
                let is_me = message.user_id == payload.user_id;
                output.push_str(&Self::format_history_line(message, is_me));
            }
        }

        output.push_str("============================================================\n");
        output
    }

    fn format_history_line(message: &MessagePayload, is_me: bool) -> String {
        let me_suffix = if is_me { " (me)" } else { "" };
        format!(
            "[{}] {} {}{}: {}\n",
            message.created_at, message.avatar, message.display_name, me_suffix, message.text
        )
    }

    /// Presence notification for another member
    pub fn format_system(payload: &SystemPayload) -> String {
        let (sign, verb) = match payload.kind {
            SystemKind::Join => ('+', "joined"),
            SystemKind::Leave => ('-', "left"),
        };
        format!(
            "\n{} {} {} {} '{}'\n",
            sign, payload.avatar, payload.display_name, verb, payload.room_id
        )
    }

    /// A chat message
    pub fn format_message(payload: &MessagePayload, me: Option<&str>) -> String {
        let me_suffix = if me == Some(payload.user_id.as_str()) {
            " (me)"
        } else {
            ""
        };
        format!(
            "\n{}\n{} {}{}: {}\nsent at {}\n{}\n",
            RULE,
            payload.avatar,
            payload.display_name,
            me_suffix,
            payload.text,
            payload.created_at,
            RULE
        )
    }

    pub fn format_history_cleared(payload: &HistoryClearedPayload, me: Option<&str>) -> String {
        let by = if me == Some(payload.by.as_str()) {
            "you"
        } else {
            payload.by.as_str()
        };
        format!("\n* History of '{}' cleared by {}\n", payload.room_id, by)
    }

    /// Format a binary message notification
    pub fn format_binary_message(byte_count: usize) -> String {
        format!("\n← Received {} bytes of binary data\n", byte_count)
    }

    /// Format a raw text message (when parsing fails)
    pub fn format_raw_message(text: &str) -> String {
        format!("\n← Received: {}\n", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomcast_server::infrastructure::dto::websocket::MessageType;

    fn message(user_id: &str, text: &str) -> MessagePayload {
        MessagePayload {
            id: "1672531200000-abc123".to_string(),
            text: text.to_string(),
            user_id: user_id.to_string(),
            display_name: format!("Kind Tiger {}", user_id),
            avatar: "🌟".to_string(),
            created_at: "2023-01-01T00:00:00.000Z".to_string(),
            r#type: MessageType::Message,
        }
    }

    fn joined(history: Vec<MessagePayload>) -> JoinedPayload {
        JoinedPayload {
            room_id: "lobby".to_string(),
            user_id: "alice".to_string(),
            display_name: "Kind Tiger alice".to_string(),
            avatar: "🌟".to_string(),
            history,
        }
    }

    #[test]
    fn test_format_joined_with_empty_history() {
        // テスト項目: 履歴が空の場合、その旨が表示される
        // given (前提条件):
        let payload = joined(vec![]);

        // when (操作):
        let result = MessageFormatter::format_joined(&payload);

        // then (期待する結果):
        assert!(result.contains("Joined 'lobby' as 🌟 Kind Tiger alice"));
        assert!(result.contains("(No messages yet)"));
    }

    #[test]
    fn test_format_joined_with_history_marks_own_messages() {
        // テスト項目: 履歴が順番通り表示され、自分のメッセージにはマークが付く
        // given (前提条件):
        let payload = joined(vec![message("bob", "first"), message("alice", "second")]);

        // when (操作):
        let result = MessageFormatter::format_joined(&payload);

        // then (期待する結果):
        assert!(result.contains("History (2 messages):"));
        let first = result.find("first").unwrap();
        let second = result.find("second").unwrap();
        assert!(first < second);
        assert!(result.contains("Kind Tiger alice (me): second"));
        assert!(!result.contains("Kind Tiger bob (me)"));
    }

    #[test]
    fn test_format_system_join_and_leave() {
        // テスト項目: 参加・退出通知が正しくフォーマットされる
        // given (前提条件):
        let mut payload = SystemPayload {
            kind: SystemKind::Join,
            user_id: "bob".to_string(),
            display_name: "Brave Lion bob".to_string(),
            avatar: "🚀".to_string(),
            room_id: "lobby".to_string(),
        };

        // when (操作):
        let joined = MessageFormatter::format_system(&payload);
        payload.kind = SystemKind::Leave;
        let left = MessageFormatter::format_system(&payload);

        // then (期待する結果):
        assert!(joined.contains("+ 🚀 Brave Lion bob joined 'lobby'"));
        assert!(left.contains("- 🚀 Brave Lion bob left 'lobby'"));
    }

    #[test]
    fn test_format_message() {
        // テスト項目: チャットメッセージが送信時刻付きでフォーマットされる
        // given (前提条件):
        let payload = message("bob", "Hello, world!");

        // when (操作):
        let result = MessageFormatter::format_message(&payload, Some("alice"));

        // then (期待する結果):
        assert!(result.contains("Kind Tiger bob: Hello, world!"));
        assert!(result.contains("sent at 2023-01-01T00:00:00.000Z"));
        assert!(result.contains(RULE));
    }

    #[test]
    fn test_format_own_message() {
        // テスト項目: 自分のメッセージには (me) が付く
        // given (前提条件):
        let payload = message("alice", "mine");

        // when (操作):
        let result = MessageFormatter::format_event(&ServerEvent::Message(payload), Some("alice"));

        // then (期待する結果):
        assert!(result.contains("Kind Tiger alice (me): mine"));
    }

    #[test]
    fn test_format_history_cleared() {
        // テスト項目: 履歴クリア通知で、自分が実行した場合は "you" と表示される
        // given (前提条件):
        let payload = HistoryClearedPayload {
            room_id: "lobby".to_string(),
            by: "alice".to_string(),
        };

        // when (操作):
        let by_me = MessageFormatter::format_history_cleared(&payload, Some("alice"));
        let by_other = MessageFormatter::format_history_cleared(&payload, Some("bob"));

        // then (期待する結果):
        assert!(by_me.contains("History of 'lobby' cleared by you"));
        assert!(by_other.contains("cleared by alice"));
    }

    #[test]
    fn test_format_raw_and_binary_message() {
        // テスト項目: 解析できないフレームとバイナリフレームが表示される
        // given (前提条件):
        let text = "unknown message format";

        // when (操作):
        let raw = MessageFormatter::format_raw_message(text);
        let binary = MessageFormatter::format_binary_message(1024);

        // then (期待する結果):
        assert!(raw.contains("Received: unknown message format"));
        assert!(binary.contains("1024 bytes"));
    }
}
