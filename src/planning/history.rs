//! Per-episode exploration history.
//!
//! Tracks which rooms and viewpoints the agent has already searched in the
//! current episode. Membership only; insertion is idempotent and there are
//! no ordering guarantees. The owning caller marks nodes after each accepted
//! exploration action and clears the history at episode boundaries.

use std::collections::HashSet;

use crate::core::{NodeId, PlaceId, RoomId};

/// Sets of visited rooms and places for one episode.
#[derive(Clone, Debug, Default)]
pub struct ExplorationHistory {
    rooms: HashSet<RoomId>,
    places: HashSet<PlaceId>,
}

impl ExplorationHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a node as visited. Duplicate ids add nothing.
    pub fn visit(&mut self, node: NodeId) {
        match node {
            NodeId::Room(id) => {
                self.rooms.insert(id);
            }
            NodeId::Place(id) => {
                self.places.insert(id);
            }
        }
    }

    /// Whether a node has been visited this episode.
    pub fn contains(&self, node: NodeId) -> bool {
        match node {
            NodeId::Room(id) => self.rooms.contains(&id),
            NodeId::Place(id) => self.places.contains(&id),
        }
    }

    /// Whether a room has been visited this episode.
    pub fn contains_room(&self, room: RoomId) -> bool {
        self.rooms.contains(&room)
    }

    /// Whether a place has been visited this episode.
    pub fn contains_place(&self, place: PlaceId) -> bool {
        self.places.contains(&place)
    }

    /// Number of visited rooms.
    pub fn rooms_visited(&self) -> usize {
        self.rooms.len()
    }

    /// Number of visited places.
    pub fn places_visited(&self) -> usize {
        self.places.len()
    }

    /// Clear both sets at an episode boundary.
    pub fn clear(&mut self) {
        self.rooms.clear();
        self.places.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visit_idempotent() {
        let mut history = ExplorationHistory::new();
        history.visit(NodeId::Room(RoomId(1)));
        history.visit(NodeId::Room(RoomId(1)));

        assert_eq!(history.rooms_visited(), 1);
        assert!(history.contains_room(RoomId(1)));
    }

    #[test]
    fn test_rooms_and_places_independent() {
        let mut history = ExplorationHistory::new();
        history.visit(NodeId::Room(RoomId(3)));
        history.visit(NodeId::Place(PlaceId(3)));

        assert_eq!(history.rooms_visited(), 1);
        assert_eq!(history.places_visited(), 1);
        assert!(history.contains(NodeId::Room(RoomId(3))));
        assert!(history.contains(NodeId::Place(PlaceId(3))));
        assert!(!history.contains_place(PlaceId(4)));
    }

    #[test]
    fn test_clear() {
        let mut history = ExplorationHistory::new();
        history.visit(NodeId::Room(RoomId(1)));
        history.visit(NodeId::Place(PlaceId(2)));

        history.clear();

        assert_eq!(history.rooms_visited(), 0);
        assert_eq!(history.places_visited(), 0);
    }
}
