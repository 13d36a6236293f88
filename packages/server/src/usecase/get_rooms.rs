//! UseCase: ルーム情報取得処理（読み取り専用）

use crate::domain::{Room, RoomId};

use super::{coordinator::RoomCoordinator, error::GetRoomDetailError};

impl RoomCoordinator {
    /// 参照済みの全ルームのスナップショットを ID 順で取得
    pub async fn rooms(&self) -> Vec<Room> {
        self.registry.snapshot_all().await
    }

    /// ルーム詳細を取得（ルームは作成しない）
    ///
    /// # Arguments
    ///
    /// * `room_id` - ルーム ID（文字列）
    ///
    /// # Returns
    ///
    /// * `Ok(Room)` - ルームのスナップショット（Domain Model）
    /// * `Err(GetRoomDetailError)` - ID が不正、またはルームが存在しない
    pub async fn room(&self, room_id: String) -> Result<Room, GetRoomDetailError> {
        let room_id = RoomId::new(room_id).map_err(|_| GetRoomDetailError::InvalidRoomId)?;
        self.registry
            .find(&room_id)
            .await
            .ok_or(GetRoomDetailError::RoomNotFound)
    }
}
