//! Domain entities: connections, room members, messages and rooms.

use std::collections::BTreeSet;

use super::value_object::{
    ConnectionId, DisplayIdentity, MessageId, MessageKind, MessageText, RoomId, Timestamp,
};

/// One live transport connection.
///
/// Owned by its session. Rooms only keep a [`Member`] snapshot of it.
#[derive(Debug, Clone)]
pub struct Connection {
    pub id: ConnectionId,
    pub identity: DisplayIdentity,
    member_of: BTreeSet<RoomId>,
}

impl Connection {
    pub fn new(id: ConnectionId, identity: DisplayIdentity) -> Self {
        Self {
            id,
            identity,
            member_of: BTreeSet::new(),
        }
    }

    /// Back-reference snapshot stored in a room's member set.
    pub fn as_member(&self) -> Member {
        Member {
            id: self.id.clone(),
            identity: self.identity.clone(),
        }
    }

    pub fn joined(&mut self, room_id: RoomId) {
        self.member_of.insert(room_id);
    }

    pub fn left(&mut self, room_id: &RoomId) {
        self.member_of.remove(room_id);
    }

    pub fn is_member_of(&self, room_id: &RoomId) -> bool {
        self.member_of.contains(room_id)
    }

    /// Drain the joined rooms. Each room is yielded exactly once.
    pub fn take_rooms(&mut self) -> Vec<RoomId> {
        std::mem::take(&mut self.member_of).into_iter().collect()
    }

    pub fn rooms(&self) -> impl Iterator<Item = &RoomId> {
        self.member_of.iter()
    }
}

/// Connection id plus the display identity it had when it joined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: ConnectionId,
    pub identity: DisplayIdentity,
}

/// An entry of a room log. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub text: MessageText,
    pub sender: Member,
    pub created_at: Timestamp,
    pub kind: MessageKind,
}

impl Message {
    pub fn new(sender: Member, text: MessageText, created_at: Timestamp) -> Self {
        Self {
            id: MessageId::generate(created_at),
            text,
            sender,
            created_at,
            kind: MessageKind::Message,
        }
    }
}

/// Named channel with an ordered log and a member set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: RoomId,
    pub created_at: Timestamp,
    log: Vec<Message>,
    members: Vec<Member>,
}

impl Room {
    pub fn new(id: RoomId, created_at: Timestamp) -> Self {
        Self {
            id,
            created_at,
            log: Vec::new(),
            members: Vec::new(),
        }
    }

    pub fn log(&self) -> &[Message] {
        &self.log
    }

    /// Members in join order.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn is_member(&self, id: &ConnectionId) -> bool {
        self.members.iter().any(|m| &m.id == id)
    }

    pub fn member_ids(&self) -> Vec<ConnectionId> {
        self.members.iter().map(|m| m.id.clone()).collect()
    }

    /// Ids of every member except `exclude`.
    pub fn member_ids_except(&self, exclude: &ConnectionId) -> Vec<ConnectionId> {
        self.members
            .iter()
            .filter(|m| &m.id != exclude)
            .map(|m| m.id.clone())
            .collect()
    }

    /// Returns `false` if the connection was already a member.
    pub fn add_member(&mut self, member: Member) -> bool {
        if self.is_member(&member.id) {
            return false;
        }
        self.members.push(member);
        true
    }

    /// Returns the removed member, or `None` for a non-member.
    pub fn remove_member(&mut self, id: &ConnectionId) -> Option<Member> {
        let idx = self.members.iter().position(|m| &m.id == id)?;
        Some(self.members.remove(idx))
    }

    pub fn append(&mut self, message: Message) {
        self.log.push(message);
    }

    /// Truncate the log, returning how many messages were dropped.
    pub fn clear(&mut self) -> usize {
        let removed = self.log.len();
        self.log.clear();
        removed
    }
}
