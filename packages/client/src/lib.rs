//! Command line client for Roomcast rooms.
//!
//! Connects to a server's `/ws` endpoint, joins a room, prints room events and
//! sends stdin lines as messages. Lines starting with `/` are commands.

mod command;
mod domain;
mod error;
mod formatter;
mod runner;
mod session;
mod ui;

pub use error::ClientError;
pub use runner::run_client;
