//! Fallback viewpoint selection inside a room.
//!
//! When the oracle proposes no usable viewpoints for the selected room (all
//! suggestions visited, or none given), the search still needs somewhere to
//! look from. This picks the room's unvisited places in id order, capped at
//! the configured limit.

use log::info;

use crate::core::{PlaceId, RoomId};
use crate::planning::history::ExplorationHistory;
use crate::scene::SceneGraph;

/// Up to `limit` unvisited places belonging to `room`, in ascending id order.
pub fn fallback_places(
    graph: &SceneGraph,
    room: RoomId,
    history: &ExplorationHistory,
    limit: usize,
) -> Vec<PlaceId> {
    let places: Vec<PlaceId> = graph
        .places_in_room(room)
        .map(|p| p.id)
        .filter(|id| !history.contains_place(*id))
        .take(limit)
        .collect();

    if places.is_empty() {
        info!("no unvisited places left in room {}", room);
    }
    places
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{NodeId, Point3D, Quaternion};
    use crate::scene::{PlaceNode, RoomNode};

    fn graph_with_places(room: u32, place_ids: &[u32]) -> SceneGraph {
        let mut graph = SceneGraph::new();
        graph.insert_room(RoomNode::new(RoomId(room), Point3D::ZERO, "study"));
        graph.insert_room(RoomNode::new(RoomId(room + 1), Point3D::ZERO, "other"));
        for &id in place_ids {
            graph
                .insert_place(PlaceNode::new(
                    PlaceId(id),
                    Point3D::ZERO,
                    Quaternion::IDENTITY,
                    RoomId(room),
                ))
                .unwrap();
        }
        // One place in the other room that must never be returned
        graph
            .insert_place(PlaceNode::new(
                PlaceId(999),
                Point3D::ZERO,
                Quaternion::IDENTITY,
                RoomId(room + 1),
            ))
            .unwrap();
        graph
    }

    #[test]
    fn test_skips_visited_and_caps() {
        let graph = graph_with_places(0, &[1, 2, 3, 4, 5, 6, 7]);
        let mut history = ExplorationHistory::new();
        history.visit(NodeId::Place(PlaceId(1)));
        history.visit(NodeId::Place(PlaceId(3)));

        let places = fallback_places(&graph, RoomId(0), &history, 3);
        let ids: Vec<u32> = places.iter().map(|p| p.index()).collect();
        assert_eq!(ids, vec![2, 4, 5]);
    }

    #[test]
    fn test_only_member_places() {
        let graph = graph_with_places(0, &[1, 2]);
        let places = fallback_places(&graph, RoomId(0), &ExplorationHistory::new(), 5);
        assert!(places.iter().all(|p| p.index() != 999));
        assert_eq!(places.len(), 2);
    }

    #[test]
    fn test_exhausted_room_is_empty() {
        let graph = graph_with_places(0, &[1]);
        let mut history = ExplorationHistory::new();
        history.visit(NodeId::Place(PlaceId(1)));

        assert!(fallback_places(&graph, RoomId(0), &history, 5).is_empty());
    }
}
