//! Transport layer: axum server, HTTP inspection API and WebSocket sessions.

mod config;
mod handler;
mod server;
pub mod session;
mod signal;
pub mod state;

pub use config::ServerConfig;
pub use server::Server;
