//! Domain error types.

use thiserror::Error;

/// Validation failures of value objects.
///
/// These only ever occur at the session boundary, where they cause the inbound
/// request to be dropped silently.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    #[error("connection id must not be empty")]
    ConnectionIdEmpty,

    #[error("room id must not be empty")]
    RoomIdEmpty,

    #[error("message text must not be empty")]
    MessageTextEmpty,
}

/// Failures while handing an outbound event to a connection's queue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessagePushError {
    #[error("client '{0}' is not registered")]
    ClientNotFound(String),

    #[error("failed to push message: {0}")]
    PushFailed(String),

    #[error("failed to encode event: {0}")]
    EncodeFailed(String),
}
