//! UseCase layer: the Room Coordinator and its operations.

pub mod clear_history;
pub mod coordinator;
pub mod disconnect_participant;
pub mod error;
pub mod get_rooms;
pub mod join_room;
pub mod leave_room;
pub mod send_message;

pub use coordinator::{RoomCoordinator, trace_registry_change};
pub use error::GetRoomDetailError;
pub use join_room::JoinOutcome;
