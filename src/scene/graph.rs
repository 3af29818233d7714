//! Scene graph snapshot: rooms and viewpoints with 3D positions.
//!
//! A [`SceneGraph`] is one time instance of the environment. Rooms and
//! places live in ordered maps so that every iteration-order-dependent
//! operation (nearest-id fallback, place enumeration) is deterministic.
//!
//! The graph is built once by the scene construction pipeline and read-only
//! during planning.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::{NodeId, PlaceId, Point3D, Quaternion, RoomId};
use crate::error::{AnveshaError, Result};

/// A viewpoint node: a pose the robot captured an observation from.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlaceNode {
    /// Place identifier
    pub id: PlaceId,
    /// Viewpoint position in world frame
    pub position: Point3D,
    /// Recorded camera orientation
    pub orientation: Quaternion,
    /// Yaw angle in radians, extracted from the orientation at capture time
    pub yaw: f32,
    /// Room this viewpoint belongs to (back-reference, never an ownership edge)
    pub room_parent: RoomId,
    /// Easily identifiable objects seen from this viewpoint
    #[serde(default)]
    pub tags: Vec<String>,
}

impl PlaceNode {
    /// Create a place node with no semantic tags.
    pub fn new(id: PlaceId, position: Point3D, orientation: Quaternion, room_parent: RoomId) -> Self {
        Self {
            id,
            position,
            yaw: orientation.yaw(),
            orientation,
            room_parent,
            tags: Vec::new(),
        }
    }

    /// Builder-style setter for semantic tags.
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}

/// A room node aggregating the viewpoints captured inside it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoomNode {
    /// Room identifier
    pub id: RoomId,
    /// Centroid of the member place positions
    pub position: Point3D,
    /// Human-readable room name (e.g. "kitchen")
    pub name: String,
    /// Semantic tags aggregated over member places
    #[serde(default)]
    pub tags: Vec<String>,
}

impl RoomNode {
    /// Create a room node.
    pub fn new(id: RoomId, position: Point3D, name: impl Into<String>) -> Self {
        Self {
            id,
            position,
            name: name.into(),
            tags: Vec::new(),
        }
    }
}

/// One snapshot of the environment: room and place maps for a single
/// time instance.
///
/// Invariant: every place's `room_parent` resolves to a room present in the
/// same snapshot. [`SceneGraph::insert_place`] enforces this, so rooms must
/// be inserted first.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SceneGraph {
    rooms: BTreeMap<RoomId, RoomNode>,
    places: BTreeMap<PlaceId, PlaceNode>,
}

impl SceneGraph {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a room node, replacing any previous node with the same id.
    pub fn insert_room(&mut self, room: RoomNode) {
        self.rooms.insert(room.id, room);
    }

    /// Insert a place node.
    ///
    /// Fails if the place's `room_parent` is not present in the snapshot.
    pub fn insert_place(&mut self, place: PlaceNode) -> Result<()> {
        if !self.rooms.contains_key(&place.room_parent) {
            return Err(AnveshaError::MissingRoomParent {
                place: place.id,
                room: place.room_parent,
            });
        }
        self.places.insert(place.id, place);
        Ok(())
    }

    /// Look up a room node.
    pub fn room(&self, id: RoomId) -> Option<&RoomNode> {
        self.rooms.get(&id)
    }

    /// Look up a place node.
    pub fn place(&self, id: PlaceId) -> Option<&PlaceNode> {
        self.places.get(&id)
    }

    /// Position of an addressable node, if present.
    pub fn position(&self, node: NodeId) -> Option<Point3D> {
        match node {
            NodeId::Room(id) => self.rooms.get(&id).map(|r| r.position),
            NodeId::Place(id) => self.places.get(&id).map(|p| p.position),
        }
    }

    /// Number of rooms in the snapshot.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Number of places in the snapshot.
    pub fn place_count(&self) -> usize {
        self.places.len()
    }

    /// Rooms in ascending id order.
    pub fn rooms(&self) -> impl Iterator<Item = &RoomNode> {
        self.rooms.values()
    }

    /// Places in ascending id order.
    pub fn places(&self) -> impl Iterator<Item = &PlaceNode> {
        self.places.values()
    }

    /// Place ids in ascending order.
    pub fn place_ids(&self) -> impl Iterator<Item = PlaceId> + '_ {
        self.places.keys().copied()
    }

    /// Room ids in ascending order.
    pub fn room_ids(&self) -> impl Iterator<Item = RoomId> + '_ {
        self.rooms.keys().copied()
    }

    /// Places belonging to a room, in ascending id order.
    pub fn places_in_room(&self, room: RoomId) -> impl Iterator<Item = &PlaceNode> {
        self.places.values().filter(move |p| p.room_parent == room)
    }

    /// First place in id order.
    ///
    /// Used as the deterministic stand-in position when a distance query
    /// names a place absent from this snapshot.
    pub fn first_place(&self) -> Option<&PlaceNode> {
        self.places.values().next()
    }

    /// Set each room's position to the centroid of its member places.
    ///
    /// Rooms with no member places keep their current position.
    pub fn recompute_room_centroids(&mut self) {
        let room_ids: Vec<RoomId> = self.rooms.keys().copied().collect();
        for room_id in room_ids {
            let positions: Vec<Point3D> = self
                .places
                .values()
                .filter(|p| p.room_parent == room_id)
                .map(|p| p.position)
                .collect();
            if let Some(centroid) = Point3D::centroid(&positions) {
                if let Some(room) = self.rooms.get_mut(&room_id) {
                    room.position = centroid;
                }
            }
        }
    }
}
