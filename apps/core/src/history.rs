use std::collections::{HashMap, VecDeque};

use crate::models::Turn;

/// Maximum number of turns retained per room.
pub const MAX_ROOM_TURNS: usize = 50;

/// In-memory, room-scoped conversation history.
///
/// Turns are kept in insertion order (most recent last). Each room holds at
/// most `capacity` turns; older turns are dropped first.
///
/// Rooms are never removed, so the map grows with every room id ever seen.
/// Fine for a single console session; a long-lived multi-room server needs
/// an eviction policy on top.
#[derive(Debug)]
pub struct RoomHistories {
    rooms: HashMap<String, VecDeque<Turn>>,
    capacity: usize,
}

impl Default for RoomHistories {
    fn default() -> Self {
        Self::new(MAX_ROOM_TURNS)
    }
}

impl RoomHistories {
    /// Creates an empty store.
    ///
    /// # Arguments
    ///
    /// * `capacity` - The number of turns kept per room. Clamped to at least 1.
    pub fn new(capacity: usize) -> Self {
        Self {
            rooms: HashMap::new(),
            capacity: capacity.max(1),
        }
    }

    /// Appends a turn to a room, evicting the oldest turn when full.
    pub fn push(&mut self, room: &str, turn: Turn) {
        let turns = self.rooms.entry(room.to_string()).or_default();
        if turns.len() == self.capacity {
            turns.pop_front();
        }
        turns.push_back(turn);
    }

    /// Returns up to `limit` of the most recent turns of a room, oldest first.
    pub fn recent(&self, room: &str, limit: usize) -> Vec<Turn> {
        match self.rooms.get(room) {
            Some(turns) => {
                let skip = turns.len().saturating_sub(limit);
                turns.iter().skip(skip).cloned().collect()
            }
            None => Vec::new(),
        }
    }

    pub fn len(&self, room: &str) -> usize {
        self.rooms.get(room).map_or(0, VecDeque::len)
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}
