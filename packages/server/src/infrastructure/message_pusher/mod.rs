//! Outbound delivery implementations.
//!
//! - `websocket`: per-connection unbounded queues drained by socket writer tasks

pub mod websocket;

pub use websocket::WebSocketMessagePusher;
