//! Requests accepted by the room coordinator and events it emits.

use super::{
    entity::{Member, Message},
    value_object::{ConnectionId, MessageText, RoomId},
};

/// A decoded, validated inbound request from one connection.
///
/// Closed set: the session dispatches it with an exhaustive `match`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomRequest {
    Join(RoomId),
    Send { room_id: RoomId, text: MessageText },
    ClearHistory(RoomId),
    Leave(RoomId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenceKind {
    Join,
    Leave,
}

/// Outbound event, addressed to one or more members of a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomEvent {
    /// Join acknowledgement with the history snapshot. Joining connection only.
    Joined {
        room_id: RoomId,
        member: Member,
        history: Vec<Message>,
    },
    /// Presence notification. Never logged.
    Presence {
        kind: PresenceKind,
        room_id: RoomId,
        member: Member,
    },
    Message {
        room_id: RoomId,
        message: Message,
    },
    HistoryCleared {
        room_id: RoomId,
        by: ConnectionId,
    },
}

impl RoomEvent {
    pub fn room_id(&self) -> &RoomId {
        match self {
            RoomEvent::Joined { room_id, .. }
            | RoomEvent::Presence { room_id, .. }
            | RoomEvent::Message { room_id, .. }
            | RoomEvent::HistoryCleared { room_id, .. } => room_id,
        }
    }
}
