//! Conversion logic between DTOs and domain types.

use roomcast_shared::time::timestamp_to_rfc3339;

use crate::domain::{
    Member, Message, MessageKind, MessageText, PresenceKind, Room, RoomEvent, RoomId, RoomRequest,
    ValueObjectError,
};
use crate::infrastructure::dto::{http, websocket as dto};

// ========================================
// DTO → Domain
// ========================================

impl TryFrom<dto::ClientEvent> for RoomRequest {
    type Error = ValueObjectError;

    fn try_from(event: dto::ClientEvent) -> Result<Self, Self::Error> {
        let request = match event {
            dto::ClientEvent::Join(room_id) => RoomRequest::Join(RoomId::new(room_id)?),
            dto::ClientEvent::Message(payload) => RoomRequest::Send {
                room_id: RoomId::new(payload.room_id)?,
                text: MessageText::new(payload.text)?,
            },
            dto::ClientEvent::ClearHistory(payload) => {
                RoomRequest::ClearHistory(RoomId::new(payload.room_id)?)
            }
            dto::ClientEvent::Leave(room_id) => RoomRequest::Leave(RoomId::new(room_id)?),
        };
        Ok(request)
    }
}

// ========================================
// Domain → DTO
// ========================================

impl From<MessageKind> for dto::MessageType {
    fn from(kind: MessageKind) -> Self {
        match kind {
            MessageKind::Message => dto::MessageType::Message,
            MessageKind::System => dto::MessageType::System,
        }
    }
}

impl From<PresenceKind> for dto::SystemKind {
    fn from(kind: PresenceKind) -> Self {
        match kind {
            PresenceKind::Join => dto::SystemKind::Join,
            PresenceKind::Leave => dto::SystemKind::Leave,
        }
    }
}

impl From<&Message> for dto::MessagePayload {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id.as_str().to_string(),
            text: message.text.as_str().to_string(),
            user_id: message.sender.id.as_str().to_string(),
            display_name: message.sender.identity.display_name.clone(),
            avatar: message.sender.identity.avatar.clone(),
            created_at: timestamp_to_rfc3339(message.created_at.value()),
            r#type: message.kind.into(),
        }
    }
}

impl From<&RoomEvent> for dto::ServerEvent {
    fn from(event: &RoomEvent) -> Self {
        match event {
            RoomEvent::Joined {
                room_id,
                member,
                history,
            } => dto::ServerEvent::Joined(dto::JoinedPayload {
                room_id: room_id.as_str().to_string(),
                user_id: member.id.as_str().to_string(),
                display_name: member.identity.display_name.clone(),
                avatar: member.identity.avatar.clone(),
                history: history.iter().map(dto::MessagePayload::from).collect(),
            }),
            RoomEvent::Presence {
                kind,
                room_id,
                member,
            } => dto::ServerEvent::System(dto::SystemPayload {
                kind: (*kind).into(),
                user_id: member.id.as_str().to_string(),
                display_name: member.identity.display_name.clone(),
                avatar: member.identity.avatar.clone(),
                room_id: room_id.as_str().to_string(),
            }),
            RoomEvent::Message { message, .. } => dto::ServerEvent::Message(message.into()),
            RoomEvent::HistoryCleared { room_id, by } => {
                dto::ServerEvent::HistoryCleared(dto::HistoryClearedPayload {
                    room_id: room_id.as_str().to_string(),
                    by: by.as_str().to_string(),
                })
            }
        }
    }
}

impl From<&Member> for http::MemberDto {
    fn from(member: &Member) -> Self {
        Self {
            user_id: member.id.as_str().to_string(),
            display_name: member.identity.display_name.clone(),
            avatar: member.identity.avatar.clone(),
        }
    }
}

impl From<&Room> for http::RoomSummaryDto {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id.as_str().to_string(),
            member_ids: room
                .members()
                .iter()
                .map(|m| m.id.as_str().to_string())
                .collect(),
            message_count: room.log().len(),
            created_at: timestamp_to_rfc3339(room.created_at.value()),
        }
    }
}

impl From<&Room> for http::RoomDetailDto {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id.as_str().to_string(),
            members: room.members().iter().map(http::MemberDto::from).collect(),
            history: room.log().iter().map(dto::MessagePayload::from).collect(),
            created_at: timestamp_to_rfc3339(room.created_at.value()),
        }
    }
}
