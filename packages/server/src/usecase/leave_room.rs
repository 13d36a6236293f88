//! UseCase: ルーム退出処理 (Leave)
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - RoomCoordinator::leave()
//! - 残りのメンバーへの system(leave) 通知
//!
//! ### どのような状況を想定しているか
//! - 正常系：メンバーの退出
//! - エッジケース：非メンバーの退出、存在しないルームからの退出（何も起きない）

use crate::domain::{Connection, ConnectionId, PresenceKind, RoomEvent, RoomId};

use super::coordinator::RoomCoordinator;

impl RoomCoordinator {
    /// ルーム退出を実行
    ///
    /// 残りのメンバーに system(leave) を通知する。非メンバーの場合は何もせず、
    /// ルームを作成することもない。
    ///
    /// # Arguments
    ///
    /// * `connection` - 退出する接続（Domain Model）
    /// * `room_id` - 退出するルーム ID
    ///
    /// # Returns
    ///
    /// 実際にメンバーから削除された場合は `true`
    pub async fn leave(&self, connection: &mut Connection, room_id: RoomId) -> bool {
        connection.left(&room_id);
        self.remove_from_room(&connection.id, &room_id).await
    }

    /// ルームのロックを保持したままメンバーを削除し、残りのメンバーに通知する
    ///
    /// `leave` と `disconnect` で共通の処理
    pub(super) async fn remove_from_room(
        &self,
        connection_id: &ConnectionId,
        room_id: &RoomId,
    ) -> bool {
        let Some(mut entry) = self.registry.get_existing(room_id).await else {
            tracing::debug!(
                "Connection '{}' left unknown room '{}', ignored",
                connection_id,
                room_id
            );
            return false;
        };

        let Some(member) = entry.remove_member(connection_id) else {
            tracing::debug!(
                "Connection '{}' is not a member of room '{}', ignored",
                connection_id,
                room_id
            );
            return false;
        };

        let remaining = entry.room().member_ids();
        self.broadcast(
            &remaining,
            &RoomEvent::Presence {
                kind: PresenceKind::Leave,
                room_id: room_id.clone(),
                member,
            },
        )
        .await;
        drop(entry);

        tracing::info!(
            "Connection '{}' left room '{}' ({} member(s) remain)",
            connection_id,
            room_id,
            remaining.len()
        );
        true
    }
}
