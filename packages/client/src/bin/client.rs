//! Command line chat client with reconnection support.
//!
//! Connects to a Roomcast server, joins a room and sends stdin lines as
//! messages. Automatically reconnects on disconnection (max 5 attempts with 5
//! second interval) and rejoins the current room.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin roomcast-client
//! cargo run --bin roomcast-client -- --url ws://127.0.0.1:4000/ws --room games
//! ```

use clap::Parser;

use roomcast_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "roomcast-client")]
#[command(about = "Command line client for Roomcast chat rooms", long_about = None)]
struct Args {
    /// WebSocket server URL
    #[arg(short = 'u', long, default_value = "ws://127.0.0.1:4000/ws")]
    url: String,

    /// Room to join on connect
    #[arg(short = 'r', long, default_value = "lobby")]
    room: String,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    if let Err(e) = roomcast_client::run_client(args.url, args.room).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
