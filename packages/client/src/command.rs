//! Parsing of input lines into commands and protocol events.

use roomcast_server::infrastructure::dto::websocket::{
    ClientEvent, RoomPayload, SendMessagePayload,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Plain line: a message for the current room
    Say(String),
    Join(String),
    /// `/leave` without an argument leaves the current room
    Leave(Option<String>),
    Clear,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Usage: /join <room>")]
    MissingRoom,
    #[error("Unknown command: /{0} (try /join, /leave, /clear, /quit)")]
    Unknown(String),
    #[error("Not in a room. Use /join <room> first.")]
    NotInRoom,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let Some(rest) = line.strip_prefix('/') else {
            return Ok(Command::Say(line.to_string()));
        };

        let mut parts = rest.splitn(2, char::is_whitespace);
        let name = parts.next().unwrap_or_default();
        let argument = parts
            .next()
            .map(str::trim)
            .filter(|arg| !arg.is_empty())
            .map(str::to_string);

        match name {
            "join" => argument.map(Command::Join).ok_or(CommandError::MissingRoom),
            "leave" => Ok(Command::Leave(argument)),
            "clear" => Ok(Command::Clear),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }

    /// Turn the command into the event to send, tracking the current room.
    ///
    /// `Quit` produces no event.
    pub fn into_event(
        self,
        current_room: &mut Option<String>,
    ) -> Result<Option<ClientEvent>, CommandError> {
        let event = match self {
            Command::Say(text) => {
                let room_id = current_room.clone().ok_or(CommandError::NotInRoom)?;
                ClientEvent::Message(SendMessagePayload { room_id, text })
            }
            Command::Join(room_id) => {
                *current_room = Some(room_id.clone());
                ClientEvent::Join(room_id)
            }
            Command::Leave(room_id) => {
                let room_id = match room_id {
                    Some(room_id) => room_id,
                    None => current_room.clone().ok_or(CommandError::NotInRoom)?,
                };
                if current_room.as_deref() == Some(room_id.as_str()) {
                    *current_room = None;
                }
                ClientEvent::Leave(room_id)
            }
            Command::Clear => {
                let room_id = current_room.clone().ok_or(CommandError::NotInRoom)?;
                ClientEvent::ClearHistory(RoomPayload { room_id })
            }
            Command::Quit => return Ok(None),
        };

        Ok(Some(event))
    }
}
