//! UseCase: 接続切断処理 (Disconnect)
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - RoomCoordinator::disconnect()
//! - 参加していた全ルームからの削除と、各ルームへの system(leave) 通知
//!
//! ### なぜこのテストが必要か
//! - 切断した接続がどのルームのメンバーにも残らないことを保証
//! - leave 通知が各ルームにちょうど一度だけ届くことを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：複数ルームに参加した接続の切断
//! - エッジケース：どのルームにも参加していない接続の切断
//! - エッジケース：明示的に退出した後の切断（二重通知しない）

use crate::domain::{Connection, RoomId};

use super::coordinator::RoomCoordinator;

impl RoomCoordinator {
    /// 接続切断を実行
    ///
    /// 参加していた全ルームから削除して各ルームに system(leave) を通知し、
    /// 最後に送信キューを登録解除する。セッションが受信処理を止めた後に呼ぶこと。
    ///
    /// # Arguments
    ///
    /// * `connection` - 切断された接続（Domain Model）
    ///
    /// # Returns
    ///
    /// 退出したルーム ID のリスト
    pub async fn disconnect(&self, connection: &mut Connection) -> Vec<RoomId> {
        let rooms = connection.take_rooms();

        for room_id in &rooms {
            self.remove_from_room(&connection.id, room_id).await;
        }

        self.message_pusher.unregister_client(&connection.id).await;

        tracing::info!(
            "Connection '{}' disconnected, left {} room(s)",
            connection.id,
            rooms.len()
        );

        rooms
    }
}
