//! Real-time room broadcast server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin roomcast-server
//! cargo run --bin roomcast-server -- --host 0.0.0.0 --port 4000
//! ```

use std::sync::Arc;

use clap::Parser;
use roomcast_server::{
    infrastructure::{message_pusher::WebSocketMessagePusher, registry::InMemoryRoomRegistry},
    ui::{Server, ServerConfig},
    usecase::{RoomCoordinator, trace_registry_change},
};
use roomcast_shared::{logger::setup_logger, time::SystemClock};

#[derive(Parser, Debug)]
#[command(name = "roomcast-server")]
#[command(about = "Real-time chat room broadcast server", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, env = "HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, env = "PORT", default_value = "4000")]
    port: u16,

    /// Allowed CORS origin(s): `*` or a comma separated list
    #[arg(long, env = "CORS_ORIGIN", default_value = "*")]
    cors_origin: String,

    /// Default log level when RUST_LOG is not set
    #[arg(long, default_value = "debug")]
    log_level: String,
}

impl From<Args> for ServerConfig {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            cors_origin: args.cors_origin,
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &args.log_level);

    // Initialize dependencies in order:
    // 1. Clock
    // 2. Room registry
    // 3. MessagePusher
    // 4. Room coordinator
    // 5. Server
    let clock = Arc::new(SystemClock);
    let registry = Arc::new(
        InMemoryRoomRegistry::new(clock.clone()).with_observer(trace_registry_change()),
    );
    let message_pusher = Arc::new(WebSocketMessagePusher::default());
    let coordinator = Arc::new(RoomCoordinator::new(registry, message_pusher, clock));

    let server = Server::new(coordinator);
    if let Err(e) = server.run(ServerConfig::from(args)).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
