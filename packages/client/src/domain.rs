//! Domain logic for client-side operations.
//!
//! Pure functions without side effects, so they are easy to test.

use crate::error::ClientError;

/// Check if the client should exit immediately based on the error type.
///
/// Errors that would repeat on every attempt (bad URL, encoding) are fatal.
pub fn should_exit_immediately(error: &ClientError) -> bool {
    matches!(
        error,
        ClientError::InvalidUrl(_) | ClientError::Encode(_)
    )
}

/// Check if the client should attempt to reconnect.
///
/// # Arguments
///
/// * `error` - The client error that occurred
/// * `reconnects_made` - Reconnection attempts already made
/// * `max_reconnects` - The maximum number of reconnection attempts allowed
pub fn should_attempt_reconnect(
    error: &ClientError,
    reconnects_made: u32,
    max_reconnects: u32,
) -> bool {
    if should_exit_immediately(error) {
        return false;
    }

    reconnects_made < max_reconnects
}
