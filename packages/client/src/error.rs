//! Error types for the CLI client.

use thiserror::Error;
use tokio_tungstenite::tungstenite;

/// Client-specific errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server URL cannot be used at all; retrying will not help
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Connection error
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The server closed the connection or the stream ended
    #[error("Connection lost")]
    ConnectionLost,

    #[error("Failed to encode event: {0}")]
    Encode(#[from] serde_json::Error),
}

impl From<tungstenite::Error> for ClientError {
    fn from(e: tungstenite::Error) -> Self {
        match e {
            tungstenite::Error::Url(e) => ClientError::InvalidUrl(e.to_string()),
            other => ClientError::ConnectionError(other.to_string()),
        }
    }
}
