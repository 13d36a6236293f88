//! Domain layer for the room broadcast core.
//!
//! This module contains the state and rules of rooms, independent of
//! transport, DTOs and storage.

pub mod entity;
pub mod error;
pub mod event;
pub mod identity;
pub mod message_pusher;
pub mod value_object;

pub use entity::{Connection, Member, Message, Room};
pub use error::{MessagePushError, ValueObjectError};
pub use event::{PresenceKind, RoomEvent, RoomRequest};
pub use message_pusher::{MessagePusher, PusherChannel};
pub use value_object::{
    ConnectionId, DisplayIdentity, MessageId, MessageKind, MessageText, RoomId, Timestamp,
};

#[cfg(test)]
pub use message_pusher::MockMessagePusher;
