//! Data Transfer Objects (DTOs).
//!
//! DTOs are organized by protocol:
//! - `websocket`: broadcast protocol frames
//! - `http`: inspection API responses

pub mod conversion;
pub mod http;
pub mod websocket;
