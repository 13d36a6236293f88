//! Server execution logic.

use std::sync::Arc;

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::usecase::RoomCoordinator;

use super::{
    config::ServerConfig,
    handler::{get_room_detail, get_rooms, health_check, index, websocket_handler},
    signal::shutdown_signal,
    state::AppState,
};

/// Room broadcast server
///
/// # Example
///
/// ```ignore
/// let server = Server::new(coordinator);
/// server.run(ServerConfig::default()).await?;
/// ```
pub struct Server {
    coordinator: Arc<RoomCoordinator>,
}

impl Server {
    pub fn new(coordinator: Arc<RoomCoordinator>) -> Self {
        Self { coordinator }
    }

    /// Build the router: `/ws` plus the HTTP inspection API.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured CORS origin is not a valid header value.
    pub fn router(&self, config: &ServerConfig) -> Result<Router, Box<dyn std::error::Error>> {
        let app_state = Arc::new(AppState {
            coordinator: self.coordinator.clone(),
        });

        let app = Router::new()
            // WebSocket エンドポイント
            .route("/ws", get(websocket_handler))
            // HTTP エンドポイント
            .route("/", get(index))
            .route("/api/health", get(health_check))
            .route("/api/rooms", get(get_rooms))
            .route("/api/rooms/{room_id}", get(get_room_detail))
            .with_state(app_state)
            .layer(config.cors_layer()?)
            .layer(TraceLayer::new_for_http());

        Ok(app)
    }

    /// Run the server until Ctrl+C / SIGTERM.
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the configured address or
    /// if there's an error during server execution.
    pub async fn run(self, config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
        let app = self.router(&config)?;

        let listener = TcpListener::bind(config.bind_addr()).await?;
        let local_addr = listener.local_addr()?;

        tracing::info!("Room broadcast server listening on {}", local_addr);
        tracing::info!("Connect to: ws://{}/ws", local_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
