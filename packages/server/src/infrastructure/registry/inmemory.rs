//! In-memory room registry.
//!
//! The registry maps room ids to rooms and is the only shared mutable state of
//! the server. Each room sits behind its own `tokio::sync::Mutex`, which is FIFO
//! fair: requests for one room are served in arrival order while different
//! rooms proceed in parallel.
//!
//! Mutations are only reachable through a [`RoomEntry`], i.e. while the room's
//! lock is held. The registry never talks to the network; it reports every
//! committed mutation to an optional observer callback instead.

use std::{collections::HashMap, sync::Arc};

use roomcast_shared::time::Clock;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::{ConnectionId, Member, Message, MessageId, Room, RoomId, Timestamp};

/// A committed registry mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryChange {
    RoomCreated {
        room_id: RoomId,
    },
    MessageAppended {
        room_id: RoomId,
        message_id: MessageId,
        log_len: usize,
    },
    HistoryCleared {
        room_id: RoomId,
        removed: usize,
    },
    MemberAdded {
        room_id: RoomId,
        member_id: ConnectionId,
        member_count: usize,
    },
    MemberRemoved {
        room_id: RoomId,
        member_id: ConnectionId,
        member_count: usize,
    },
}

/// Callback invoked after each committed mutation, with the room still held.
pub type RegistryObserver = Arc<dyn Fn(&RegistryChange) + Send + Sync>;

type RoomSlot = Arc<Mutex<Room>>;

/// HashMap-backed registry of rooms.
pub struct InMemoryRoomRegistry {
    rooms: Mutex<HashMap<RoomId, RoomSlot>>,
    clock: Arc<dyn Clock>,
    observer: Option<RegistryObserver>,
}

impl InMemoryRoomRegistry {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            rooms: Mutex::new(HashMap::new()),
            clock,
            observer: None,
        }
    }

    /// Install the mutation observer.
    pub fn with_observer(mut self, observer: RegistryObserver) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Get-or-create a room and take hold of it.
    ///
    /// Waits until every earlier holder of the same room has released it.
    pub async fn get(&self, room_id: &RoomId) -> RoomEntry {
        let slot = {
            let mut rooms = self.rooms.lock().await;
            match rooms.get(room_id) {
                Some(slot) => slot.clone(),
                None => {
                    let room = Room::new(room_id.clone(), Timestamp::new(self.clock.now_millis()));
                    let slot = Arc::new(Mutex::new(room));
                    rooms.insert(room_id.clone(), slot.clone());
                    self.notify(&RegistryChange::RoomCreated {
                        room_id: room_id.clone(),
                    });
                    slot
                }
            }
        };

        RoomEntry {
            room: slot.lock_owned().await,
            observer: self.observer.clone(),
        }
    }

    /// Take hold of a room only if it was already referenced.
    pub async fn get_existing(&self, room_id: &RoomId) -> Option<RoomEntry> {
        let slot = self.rooms.lock().await.get(room_id).cloned()?;
        Some(RoomEntry {
            room: slot.lock_owned().await,
            observer: self.observer.clone(),
        })
    }

    /// Snapshot of a room, without creating it.
    pub async fn find(&self, room_id: &RoomId) -> Option<Room> {
        let slot = self.rooms.lock().await.get(room_id).cloned()?;
        let room = slot.lock().await;
        Some(room.clone())
    }

    /// Snapshots of every room, sorted by id.
    pub async fn snapshot_all(&self) -> Vec<Room> {
        let slots: Vec<RoomSlot> = self.rooms.lock().await.values().cloned().collect();

        let mut rooms = Vec::with_capacity(slots.len());
        for slot in slots {
            rooms.push(slot.lock().await.clone());
        }
        rooms.sort_by(|a, b| a.id.cmp(&b.id));
        rooms
    }

    pub async fn room_count(&self) -> usize {
        self.rooms.lock().await.len()
    }

    fn notify(&self, change: &RegistryChange) {
        if let Some(observer) = &self.observer {
            observer(change);
        }
    }
}

/// Exclusive hold on one room. Released on drop.
pub struct RoomEntry {
    room: OwnedMutexGuard<Room>,
    observer: Option<RegistryObserver>,
}

impl RoomEntry {
    pub fn room(&self) -> &Room {
        &self.room
    }

    pub fn id(&self) -> &RoomId {
        &self.room.id
    }

    pub fn append(&mut self, message: Message) {
        let message_id = message.id.clone();
        self.room.append(message);
        self.notify(RegistryChange::MessageAppended {
            room_id: self.room.id.clone(),
            message_id,
            log_len: self.room.log().len(),
        });
    }

    pub fn clear(&mut self) -> usize {
        let removed = self.room.clear();
        self.notify(RegistryChange::HistoryCleared {
            room_id: self.room.id.clone(),
            removed,
        });
        removed
    }

    /// Returns `false` (and changes nothing) if already a member.
    pub fn add_member(&mut self, member: Member) -> bool {
        let member_id = member.id.clone();
        if !self.room.add_member(member) {
            return false;
        }
        self.notify(RegistryChange::MemberAdded {
            room_id: self.room.id.clone(),
            member_id,
            member_count: self.room.members().len(),
        });
        true
    }

    /// No-op for a non-member.
    pub fn remove_member(&mut self, id: &ConnectionId) -> Option<Member> {
        let removed = self.room.remove_member(id)?;
        self.notify(RegistryChange::MemberRemoved {
            room_id: self.room.id.clone(),
            member_id: removed.id.clone(),
            member_count: self.room.members().len(),
        });
        Some(removed)
    }

    fn notify(&self, change: RegistryChange) {
        if let Some(observer) = &self.observer {
            observer(&change);
        }
    }
}
