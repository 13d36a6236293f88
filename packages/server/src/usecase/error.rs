use thiserror::Error;

/// ルーム詳細取得のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GetRoomDetailError {
    #[error("Invalid room id")]
    InvalidRoomId,
    #[error("Room not found")]
    RoomNotFound,
}
