//! Shared application state.

use std::sync::Arc;

use crate::usecase::RoomCoordinator;

pub struct AppState {
    /// Single authority over rooms; every handler goes through it.
    pub coordinator: Arc<RoomCoordinator>,
}
