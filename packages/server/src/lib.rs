//! Real-time room broadcast server.
//!
//! Connections join named rooms, post messages, and receive every room event in
//! one total order per room.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
