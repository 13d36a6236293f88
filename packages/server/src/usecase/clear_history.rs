//! UseCase: 履歴クリア処理 (ClearHistory)
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - RoomCoordinator::clear_history()
//! - ログが空になり、全メンバーに historyCleared が届くこと
//!
//! ### どのような状況を想定しているか
//! - 正常系：メッセージのあるルームのクリア
//! - エッジケース：クリア後に参加した接続は空の履歴を受け取る

use crate::domain::{Connection, RoomEvent, RoomId};

use super::coordinator::RoomCoordinator;

impl RoomCoordinator {
    /// ルームの履歴クリアを実行
    ///
    /// 要求者を含む全メンバーに historyCleared を通知する。
    /// どの接続からでもクリアできる（権限チェックなし）。
    ///
    /// # Arguments
    ///
    /// * `connection` - クリアを要求した接続（Domain Model）
    /// * `room_id` - 対象のルーム ID（存在しなければ作成される）
    ///
    /// # Returns
    ///
    /// 削除されたメッセージ数
    pub async fn clear_history(&self, connection: &Connection, room_id: RoomId) -> usize {
        let mut entry = self.registry.get(&room_id).await;

        let removed = entry.clear();
        let targets = entry.room().member_ids();
        self.broadcast(
            &targets,
            &RoomEvent::HistoryCleared {
                room_id: room_id.clone(),
                by: connection.id.clone(),
            },
        )
        .await;
        drop(entry);

        tracing::info!(
            "Connection '{}' cleared {} message(s) from room '{}'",
            connection.id,
            removed,
            room_id
        );

        removed
    }
}
