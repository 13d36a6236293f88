//! Room state storage.
//!
//! - `inmemory`: HashMap-backed registry with one fair lock per room

pub mod inmemory;

pub use inmemory::{InMemoryRoomRegistry, RegistryChange, RegistryObserver, RoomEntry};
