//! Value objects for the room broadcast domain.
//!
//! Every constructor validates its input, so a value that exists is a value the
//! coordinator can act on. Malformed protocol input fails here, at the session
//! boundary.

use std::fmt;

use rand::Rng;
use serde::Serialize;
use uuid::Uuid;

use super::error::ValueObjectError;

/// Opaque identifier of one transport connection, stable for its lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ConnectionId(String);

impl ConnectionId {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        if value.is_empty() {
            return Err(ValueObjectError::ConnectionIdEmpty);
        }
        Ok(Self(value))
    }

    /// Generate a fresh random connection id (v4 UUID).
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short prefix used to make display names unique in practice.
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(4) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }
}

impl TryFrom<String> for ConnectionId {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Caller-supplied room name. Rooms are created on first reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RoomId(String);

impl RoomId {
    /// Blank names (empty or whitespace only) are rejected.
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        if value.trim().is_empty() {
            return Err(ValueObjectError::RoomIdEmpty);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RoomId {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Chat text. Must be non-empty after trimming; stored as sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageText(String);

impl MessageText {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        if value.trim().is_empty() {
            return Err(ValueObjectError::MessageTextEmpty);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for MessageText {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

const MESSAGE_ID_SUFFIX_LEN: usize = 6;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Message identifier: `<unix-millis>-<6 random base36 chars>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageId(String);

impl MessageId {
    pub fn generate(timestamp: Timestamp) -> Self {
        let mut rng = rand::rng();
        let suffix: String = (0..MESSAGE_ID_SUFFIX_LEN)
            .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
            .collect();
        Self(format!("{}-{}", timestamp.value(), suffix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Unix timestamp in UTC milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(millis: i64) -> Self {
        Self(millis)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// Display identity layered on top of a connection for its whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayIdentity {
    pub display_name: String,
    pub avatar: String,
}

impl DisplayIdentity {
    pub fn new(display_name: impl Into<String>, avatar: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            avatar: avatar.into(),
        }
    }
}

/// Kind of a logged message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Message,
    System,
}
