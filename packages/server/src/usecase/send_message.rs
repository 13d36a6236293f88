//! UseCase: メッセージ送信処理 (Send)
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - RoomCoordinator::send()
//! - ログへの追加と、送信者を含む全メンバーへのブロードキャスト
//!
//! ### どのような状況を想定しているか
//! - 正常系：メンバー全員への配信
//! - エッジケース：非メンバーからの送信、メンバーのいないルームへの送信

use crate::domain::{Connection, Message, MessageText, RoomEvent, RoomId};

use super::coordinator::RoomCoordinator;

impl RoomCoordinator {
    /// メッセージ送信を実行
    ///
    /// ログに追加し、送信者を含む現在の全メンバーにブロードキャストする。
    /// 入力の検証はデコード時に済んでいる。
    ///
    /// # Arguments
    ///
    /// * `connection` - 送信者の接続（Domain Model）
    /// * `room_id` - 送信先のルーム ID（存在しなければ作成される）
    /// * `text` - メッセージ本文（Domain Model）
    ///
    /// # Returns
    ///
    /// ログに追加されたメッセージ
    pub async fn send(&self, connection: &Connection, room_id: RoomId, text: MessageText) -> Message {
        let mut entry = self.registry.get(&room_id).await;

        let message = Message::new(connection.as_member(), text, self.now());
        entry.append(message.clone());

        let targets = entry.room().member_ids();
        self.broadcast(
            &targets,
            &RoomEvent::Message {
                room_id: room_id.clone(),
                message: message.clone(),
            },
        )
        .await;
        drop(entry);

        tracing::debug!(
            "Message {} from '{}' accepted in room '{}' ({} recipient(s))",
            message.id.as_str(),
            connection.id,
            room_id,
            targets.len()
        );

        message
    }
}
