//! Branch-dependent expected-cost lookahead over the prediction set.
//!
//! Selects the next room to search and a directionality hint. The decision
//! branches on the number of surviving candidates:
//!
//! - 0: the filter's fallback room keeps the search alive.
//! - 1: trivial.
//! - 2: two-step plan comparison with normalized probabilities.
//! - 3+: fixed three-step finite-horizon minimization over every ordered
//!   triple of distinct candidates, with an independent Bernoulli success
//!   model per room. Bounded work: the ranking carries at most 10 candidates,
//!   so at most 720 triples, each a cache lookup.
//!
//! This is deliberately not a general MDP solver; the horizon is fixed at
//! three rooms with a tail cost of sweeping the remaining candidates in
//! ranked order.

use log::{debug, info};

use crate::belief::RankedRoom;
use crate::core::{NodeId, RoomId};
use crate::planning::config::PlannerConfig;
use crate::planning::distance::PairwiseCache;
use crate::planning::filter::PredictionSet;
use crate::planning::resolver;
use crate::scene::SceneGraph;

/// Planner output: the room to search next and whether the whole candidate
/// set can be swept in a single direction from the agent's room.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decision {
    /// Next room to visit
    pub room: RoomId,
    /// True when all candidates lie monotonically on one side of the agent
    pub single_direction: bool,
}

/// Expected-cost room selection over a filtered candidate set.
#[derive(Clone, Debug)]
pub struct LookaheadPlanner {
    config: PlannerConfig,
}

impl LookaheadPlanner {
    /// Create a planner.
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Access the active configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Pick the next room to visit.
    ///
    /// Returns None only when the prediction set has neither candidates nor
    /// a fallback, i.e. the oracle produced an empty ranking.
    pub fn decide(&self, set: &PredictionSet, agent: NodeId, graph: &SceneGraph) -> Option<Decision> {
        let candidates = set.candidates();

        let room = match candidates.len() {
            0 => {
                let fallback = set.fallback()?;
                info!("lookahead: candidate set empty, falling back to {}", fallback);
                fallback
            }
            1 => {
                debug!("lookahead: single candidate {}", candidates[0].room);
                candidates[0].room
            }
            2 => self.two_step(candidates, agent, graph),
            _ => self.three_step(candidates, agent, graph),
        };

        let mut single_direction =
            !candidates.is_empty() && self.is_single_direction(candidates, agent, graph);

        // The baseline planner never reports a direction hint; keep that
        // behavior bit-exact when lookahead is disabled.
        if !self.config.enable_lookahead {
            single_direction = false;
        }

        Some(Decision {
            room,
            single_direction,
        })
    }

    /// Two candidates: compare the "search C0 first" and "search C1 first"
    /// plans under normalized success probabilities.
    fn two_step(&self, candidates: &[RankedRoom], agent: NodeId, graph: &SceneGraph) -> RoomId {
        let rooms = [candidates[0].room, candidates[1].room];
        let cache = PairwiseCache::new(graph, agent, &rooms);
        let d0 = cache.from_agent(0);
        let d1 = cache.from_agent(1);
        let d01 = cache.between(0, 1);

        let sum = candidates[0].probability + candidates[1].probability;
        // Degenerate all-zero confidences: split evenly
        let (p0, p1) = if sum > f32::EPSILON {
            (candidates[0].probability / sum, candidates[1].probability / sum)
        } else {
            (0.5, 0.5)
        };

        let plan_a = p0 * d0 + (1.0 - p0) * (d0 + d01);
        let plan_b = p1 * d1 + (1.0 - p1) * (d1 + d01);
        debug!(
            "lookahead: two-step plan A ({}) = {:.3}, plan B ({}) = {:.3}",
            rooms[0], plan_a, rooms[1], plan_b
        );

        // Ties favor plan A
        if plan_a <= plan_b { rooms[0] } else { rooms[1] }
    }

    /// Three or more candidates: minimize the three-step decision-tree
    /// expected cost over every ordered triple of distinct candidates.
    fn three_step(&self, candidates: &[RankedRoom], agent: NodeId, graph: &SceneGraph) -> RoomId {
        let rooms: Vec<RoomId> = candidates.iter().map(|c| c.room).collect();
        let cache = PairwiseCache::new(graph, agent, &rooms);
        let n = rooms.len();

        // Tail cost if the first three guesses all miss: sweep every
        // candidate once in ranked order.
        let d_total = cache.sweep_total();
        debug!(
            "lookahead: three-step over {} candidates, sweep total {:.3}",
            n, d_total
        );

        let mut best_cost = f32::INFINITY;
        let mut best_room = rooms[0];

        for a in 0..n {
            let p_a = candidates[a].probability;
            let d_ra = cache.from_agent(a);
            for b in 0..n {
                if b == a {
                    continue;
                }
                let p_b = candidates[b].probability;
                let d_ab = cache.between(a, b);
                for c in 0..n {
                    if c == a || c == b {
                        continue;
                    }
                    let p_c = candidates[c].probability;
                    let d_bc = cache.between(b, c);

                    let cost = p_a * d_ra
                        + (1.0 - p_a)
                            * (p_b * (d_ra + d_ab)
                                + (1.0 - p_b)
                                    * (p_c * (d_ra + d_ab + d_bc) + (1.0 - p_c) * d_total));

                    // Strict < keeps the first triple in enumeration order on ties
                    if cost < best_cost {
                        best_cost = cost;
                        best_room = rooms[a];
                    }
                }
            }
        }

        debug!("lookahead: best first room {} (cost {:.3})", best_room, best_cost);
        best_room
    }

    /// Whether all candidate room indices lie on one side (>= or <=) of the
    /// agent's current room index, permitting a monotone sweep without
    /// backtracking.
    fn is_single_direction(
        &self,
        candidates: &[RankedRoom],
        agent: NodeId,
        graph: &SceneGraph,
    ) -> bool {
        if candidates.len() == 1 {
            return true;
        }

        let Some(agent_room) = self.agent_room(agent, graph) else {
            return false;
        };
        let here = agent_room.index();

        candidates.iter().all(|c| c.room.index() >= here)
            || candidates.iter().all(|c| c.room.index() <= here)
    }

    /// Room the agent currently occupies. A place location maps through its
    /// room parent, resolving stale place ids first.
    fn agent_room(&self, agent: NodeId, graph: &SceneGraph) -> Option<RoomId> {
        match agent {
            NodeId::Room(room) => resolver::resolve_room(graph, room),
            NodeId::Place(place) => {
                let present = resolver::resolve_place(graph, place)?;
                graph.place(present).map(|p| p.room_parent)
            }
        }
    }
}
