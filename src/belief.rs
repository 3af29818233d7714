//! Belief ranking over candidate rooms.
//!
//! The ranking is produced by an external oracle (a language model in the
//! reference system) once per planning call and discarded after use. The
//! planner trusts the descending probability order and never re-sorts it.

use crate::core::RoomId;
use crate::scene::SceneGraph;

/// Maximum number of candidates a ranking may carry, by convention.
pub const MAX_CANDIDATES: usize = 10;

/// Upper bound for a single room confidence.
pub const MAX_PROBABILITY: f32 = 0.99;

/// A candidate room with the oracle's confidence of finding the target there.
///
/// Probabilities are independent confidences in [0, 0.99]; they need not sum
/// to 1 across the ranking.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RankedRoom {
    /// Candidate room
    pub room: RoomId,
    /// Confidence of finding the target object in this room
    pub probability: f32,
}

impl RankedRoom {
    /// Create a ranked room, clamping the probability into valid range.
    pub fn new(room: RoomId, probability: f32) -> Self {
        Self {
            room,
            probability: probability.clamp(0.0, MAX_PROBABILITY),
        }
    }
}

/// An ordered sequence of ranked rooms, highest confidence first.
#[derive(Clone, Debug, Default)]
pub struct BeliefRanking {
    entries: Vec<RankedRoom>,
}

impl BeliefRanking {
    /// Build a ranking from entries already sorted descending by probability.
    ///
    /// Truncates to [`MAX_CANDIDATES`] entries and clamps probabilities; the
    /// order itself is the oracle's contract and is kept as-is.
    pub fn from_ranked(entries: impl IntoIterator<Item = (RoomId, f32)>) -> Self {
        let entries = entries
            .into_iter()
            .take(MAX_CANDIDATES)
            .map(|(room, p)| RankedRoom::new(room, p))
            .collect();
        Self { entries }
    }

    /// Ranked entries, highest confidence first.
    pub fn entries(&self) -> &[RankedRoom] {
        &self.entries
    }

    /// Number of candidates in the ranking.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ranking carries no candidates.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The search request the oracle ranks rooms for.
#[derive(Clone, Debug)]
pub struct SearchQuery {
    /// The user question driving the search
    pub question: String,
    /// Description of the target object to locate
    pub target_object: String,
}

impl SearchQuery {
    /// Create a search query.
    pub fn new(question: impl Into<String>, target_object: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            target_object: target_object.into(),
        }
    }
}

/// External ranking oracle.
///
/// Implement this to connect the planner to whatever produces room beliefs:
/// a language model, a learned model, or a scripted policy in tests. The
/// oracle owns prompt construction and response parsing; the planner only
/// sees the typed ranking.
///
/// # Example
///
/// ```ignore
/// struct UniformOracle;
///
/// impl BeliefOracle for UniformOracle {
///     fn rank_rooms(&mut self, _query: &SearchQuery, graph: &SceneGraph) -> BeliefRanking {
///         BeliefRanking::from_ranked(graph.room_ids().map(|r| (r, 0.5)))
///     }
/// }
/// ```
pub trait BeliefOracle {
    /// Rank candidate rooms for the query, highest confidence first.
    ///
    /// At most [`MAX_CANDIDATES`] entries; probabilities in [0, 0.99].
    fn rank_rooms(&mut self, query: &SearchQuery, graph: &SceneGraph) -> BeliefRanking;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probability_clamped() {
        let entry = RankedRoom::new(RoomId(1), 1.7);
        assert!((entry.probability - MAX_PROBABILITY).abs() < 1e-6);

        let entry = RankedRoom::new(RoomId(1), -0.2);
        assert_eq!(entry.probability, 0.0);
    }

    #[test]
    fn test_ranking_truncated() {
        let ranking = BeliefRanking::from_ranked((0..20).map(|i| (RoomId(i), 0.5)));
        assert_eq!(ranking.len(), MAX_CANDIDATES);
    }

    #[test]
    fn test_order_preserved() {
        let ranking = BeliefRanking::from_ranked([
            (RoomId(3), 0.8),
            (RoomId(1), 0.4),
            (RoomId(2), 0.2),
        ]);
        let rooms: Vec<u32> = ranking.entries().iter().map(|e| e.room.index()).collect();
        assert_eq!(rooms, vec![3, 1, 2]);
    }
}
