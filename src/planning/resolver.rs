//! Nearest-id resolution for stale node references.
//!
//! Planning calls can be handed ids recorded against a different snapshot
//! (an earlier episode, or a foreign evaluation log). Rather than failing,
//! the requested id resolves to the present id with the minimal absolute
//! index difference. Equal differences resolve to the smaller id; the
//! snapshot's ordered maps make that deterministic.

use crate::core::{PlaceId, RoomId};
use crate::scene::SceneGraph;

/// Resolve a place id to one present in the snapshot.
///
/// Identity when already present; None only for a snapshot with no places.
pub fn resolve_place(graph: &SceneGraph, requested: PlaceId) -> Option<PlaceId> {
    if graph.place(requested).is_some() {
        return Some(requested);
    }
    nearest_by_index(graph.place_ids().map(|p| p.index()), requested.index()).map(PlaceId)
}

/// Resolve a room id to one present in the snapshot.
///
/// Identity when already present; None only for a snapshot with no rooms.
pub fn resolve_room(graph: &SceneGraph, requested: RoomId) -> Option<RoomId> {
    if graph.room(requested).is_some() {
        return Some(requested);
    }
    nearest_by_index(graph.room_ids().map(|r| r.index()), requested.index()).map(RoomId)
}

/// Minimal |candidate - requested| over an ascending id iterator.
///
/// Strict `<` keeps the first (smaller) id on a tie.
fn nearest_by_index(ids: impl Iterator<Item = u32>, requested: u32) -> Option<u32> {
    let mut best: Option<(u32, u32)> = None;
    for id in ids {
        let diff = id.abs_diff(requested);
        match best {
            Some((_, best_diff)) if diff >= best_diff => {}
            _ => best = Some((id, diff)),
        }
    }
    best.map(|(id, _)| id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PlaceId, Point3D, Quaternion, RoomId};
    use crate::scene::{PlaceNode, RoomNode};

    fn graph_with_places(ids: &[u32]) -> SceneGraph {
        let mut graph = SceneGraph::new();
        graph.insert_room(RoomNode::new(RoomId(0), Point3D::ZERO, "hall"));
        for &id in ids {
            graph
                .insert_place(PlaceNode::new(
                    PlaceId(id),
                    Point3D::ZERO,
                    Quaternion::IDENTITY,
                    RoomId(0),
                ))
                .unwrap();
        }
        graph
    }

    #[test]
    fn test_present_id_is_identity() {
        let graph = graph_with_places(&[1, 5, 10]);
        assert_eq!(resolve_place(&graph, PlaceId(5)), Some(PlaceId(5)));
    }

    #[test]
    fn test_nearest_by_absolute_difference() {
        // |7-5| = 2 beats |7-10| = 3
        let graph = graph_with_places(&[1, 5, 10]);
        assert_eq!(resolve_place(&graph, PlaceId(7)), Some(PlaceId(5)));
    }

    #[test]
    fn test_tie_prefers_smaller_id() {
        // 6 is equidistant from 4 and 8
        let graph = graph_with_places(&[4, 8]);
        assert_eq!(resolve_place(&graph, PlaceId(6)), Some(PlaceId(4)));
    }

    #[test]
    fn test_empty_snapshot() {
        let graph = SceneGraph::new();
        assert_eq!(resolve_place(&graph, PlaceId(3)), None);
    }

    #[test]
    fn test_resolve_room() {
        let mut graph = SceneGraph::new();
        graph.insert_room(RoomNode::new(RoomId(2), Point3D::ZERO, "kitchen"));
        graph.insert_room(RoomNode::new(RoomId(6), Point3D::ZERO, "bedroom"));

        assert_eq!(resolve_room(&graph, RoomId(2)), Some(RoomId(2)));
        assert_eq!(resolve_room(&graph, RoomId(3)), Some(RoomId(2)));
        assert_eq!(resolve_room(&graph, RoomId(5)), Some(RoomId(6)));
        // tie at distance 2
        assert_eq!(resolve_room(&graph, RoomId(4)), Some(RoomId(2)));
    }
}
