//! Conformal-style candidate filtering.
//!
//! Turns the oracle's ranking into a prediction set: candidates already
//! visited this episode are removed, as are candidates whose confidence
//! falls below the calibrated threshold. A threshold of 0.0 makes the
//! filter an identity modulo history removal.
//!
//! Alongside the surviving candidates the filter keeps a fallback room — the
//! lowest-priority candidate not in history, retained even when it fails the
//! threshold. The planner can therefore always return a concrete room as long
//! as the ranking itself was non-empty, even when every confident candidate
//! has already been searched.

use log::debug;

use crate::belief::{BeliefRanking, RankedRoom};
use crate::core::RoomId;
use crate::planning::config::PlannerConfig;
use crate::planning::history::ExplorationHistory;

/// The filtered candidate list plus the liveness fallback.
#[derive(Clone, Debug)]
pub struct PredictionSet {
    candidates: Vec<RankedRoom>,
    fallback: Option<RoomId>,
}

impl PredictionSet {
    /// Surviving candidates, still in descending probability order.
    pub fn candidates(&self) -> &[RankedRoom] {
        &self.candidates
    }

    /// Fallback room used when filtering removes every candidate.
    ///
    /// None only when the input ranking was empty.
    pub fn fallback(&self) -> Option<RoomId> {
        self.fallback
    }

    /// Number of surviving candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Whether filtering removed every candidate.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Confidence-threshold filter over a belief ranking.
#[derive(Clone, Debug)]
pub struct ConformalFilter {
    threshold: f32,
}

impl ConformalFilter {
    /// Create a filter with an explicit threshold. 0.0 disables filtering.
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    /// Create a filter from planner configuration.
    pub fn from_config(config: &PlannerConfig) -> Self {
        Self::new(config.effective_threshold())
    }

    /// The active threshold.
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Filter a ranking against the episode history.
    ///
    /// The ranking order is trusted and preserved. The fallback starts at the
    /// top-ranked candidate and moves to each unvisited candidate in ranking
    /// order, ending on the lowest-priority unvisited one; if every candidate
    /// was visited it stays on the top-ranked room.
    pub fn apply(&self, ranking: &BeliefRanking, history: &ExplorationHistory) -> PredictionSet {
        let mut fallback = ranking.entries().first().map(|e| e.room);
        let mut candidates = Vec::with_capacity(ranking.len());

        for entry in ranking.entries() {
            if history.contains_room(entry.room) {
                debug!("filter: room {} already explored", entry.room);
                continue;
            }
            fallback = Some(entry.room);
            if entry.probability >= self.threshold {
                candidates.push(*entry);
            } else {
                debug!(
                    "filter: room {} below threshold ({:.2} < {:.2})",
                    entry.room, entry.probability, self.threshold
                );
            }
        }

        PredictionSet {
            candidates,
            fallback,
        }
    }
}
