//! Infrastructure layer: storage, delivery and wire formats.

pub mod dto;
pub mod message_pusher;
pub mod registry;
