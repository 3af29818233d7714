//! Room-visit planning.
//!
//! Turns a ranked belief over candidate rooms into a concrete next-room
//! decision. Pipeline per planning call:
//!
//! 1. The external oracle produces a [`crate::belief::BeliefRanking`].
//! 2. [`ConformalFilter`] drops visited rooms and low-confidence candidates,
//!    keeping a fallback room for liveness.
//! 3. [`LookaheadPlanner`] minimizes expected travel cost over the surviving
//!    candidates and emits a [`Decision`].
//! 4. The caller executes the move, records it in [`ExplorationHistory`],
//!    and re-invokes with a fresh ranking.
//!
//! Every call is pure in its inputs: the scene graph snapshot is read-only,
//! and the history is mutated only by the owning caller between calls.

mod config;
mod distance;
mod filter;
mod history;
mod lookahead;
mod places;
mod resolver;

pub use config::PlannerConfig;
pub use distance::{node_distance, route_distance, PairwiseCache};
pub use filter::{ConformalFilter, PredictionSet};
pub use history::ExplorationHistory;
pub use lookahead::{Decision, LookaheadPlanner};
pub use places::fallback_places;
pub use resolver::{resolve_place, resolve_room};
