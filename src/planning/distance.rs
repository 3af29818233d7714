//! Euclidean distance queries over a scene graph snapshot.
//!
//! Distances address nodes by id: a room id resolves to the room centroid,
//! a place id to the viewpoint position. A place id absent from the snapshot
//! degrades to the first place in id order instead of failing — a documented
//! weakness inherited from the recorded-log pipeline, where stale place ids
//! are common and a wrong-but-finite distance beats aborting the plan.

use log::warn;

use crate::core::{NodeId, Point3D, RoomId};
use crate::planning::resolver;
use crate::scene::SceneGraph;

/// Position a node id resolves to for distance purposes.
fn resolve_position(graph: &SceneGraph, node: NodeId) -> Option<Point3D> {
    match node {
        NodeId::Place(id) => match graph.place(id) {
            Some(place) => Some(place.position),
            None => {
                let stand_in = graph.first_place()?;
                warn!(
                    "place {} not in snapshot, substituting place {} for distance query",
                    id, stand_in.id
                );
                Some(stand_in.position)
            }
        },
        NodeId::Room(id) => match graph.room(id) {
            Some(room) => Some(room.position),
            None => {
                let nearest = resolver::resolve_room(graph, id)?;
                warn!(
                    "room {} not in snapshot, substituting nearest room {}",
                    id, nearest
                );
                graph.room(nearest).map(|r| r.position)
            }
        },
    }
}

/// Euclidean distance between two addressable nodes.
///
/// Non-negative, symmetric, no side effects. Returns 0.0 only when the
/// snapshot is too empty to resolve either endpoint.
pub fn node_distance(graph: &SceneGraph, a: NodeId, b: NodeId) -> f32 {
    match (resolve_position(graph, a), resolve_position(graph, b)) {
        (Some(pa), Some(pb)) => pa.distance(&pb),
        _ => {
            warn!("distance query {} -> {} on empty snapshot", a, b);
            0.0
        }
    }
}

/// Pairwise distances for one planning call.
///
/// The triple enumeration evaluates up to N·(N−1)·(N−2) orderings; each
/// agent→candidate and candidate→candidate distance is computed once here
/// and looked up inside the loop.
#[derive(Clone, Debug)]
pub struct PairwiseCache {
    from_agent: Vec<f32>,
    between: Vec<f32>,
    n: usize,
}

impl PairwiseCache {
    /// Precompute distances from the agent and between all candidate rooms.
    pub fn new(graph: &SceneGraph, agent: NodeId, candidates: &[RoomId]) -> Self {
        let n = candidates.len();
        let from_agent = candidates
            .iter()
            .map(|&room| node_distance(graph, agent, NodeId::Room(room)))
            .collect();

        let mut between = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = node_distance(graph, NodeId::Room(candidates[i]), NodeId::Room(candidates[j]));
                between[i * n + j] = d;
                between[j * n + i] = d;
            }
        }

        Self {
            from_agent,
            between,
            n,
        }
    }

    /// Distance from the agent to candidate `i`.
    #[inline]
    pub fn from_agent(&self, i: usize) -> f32 {
        self.from_agent[i]
    }

    /// Distance between candidates `i` and `j`.
    #[inline]
    pub fn between(&self, i: usize, j: usize) -> f32 {
        self.between[i * self.n + j]
    }

    /// Cost of visiting every candidate once, in index order, starting
    /// from the agent.
    pub fn sweep_total(&self) -> f32 {
        if self.n == 0 {
            return 0.0;
        }
        let mut total = self.from_agent(0);
        for i in 1..self.n {
            total += self.between(i - 1, i);
        }
        total
    }
}

/// Travel cost of visiting a sequence of viewpoints from a start place.
///
/// Stale place ids (start or waypoint) resolve through the nearest-id rule
/// before measuring. Returns the place the agent ends at and the total
/// distance traveled.
pub fn route_distance(
    graph: &SceneGraph,
    start: crate::core::PlaceId,
    waypoints: &[crate::core::PlaceId],
) -> (crate::core::PlaceId, f32) {
    let Some(mut current) = resolver::resolve_place(graph, start) else {
        warn!("route from place {} on snapshot with no places", start);
        return (start, 0.0);
    };

    let mut total = 0.0;
    for &requested in waypoints {
        let Some(next) = resolver::resolve_place(graph, requested) else {
            continue;
        };
        total += node_distance(graph, NodeId::Place(current), NodeId::Place(next));
        current = next;
    }

    (current, total)
}
