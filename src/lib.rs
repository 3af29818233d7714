//! # Anvesha-Plan: Room-Visit Planning for Embodied Object Search
//!
//! Decision core for a robot searching a partially known indoor environment
//! for a target object. The environment is a spatio-temporal scene graph:
//! rooms and capture viewpoints ("places") with 3D positions, snapshotted
//! once per episode. An external oracle — a language model in the reference
//! deployment — ranks candidate rooms by confidence; this crate turns that
//! uncertain ranking into a concrete, travel-cost-aware next-room decision.
//!
//! ## Quick Start
//!
//! ```rust
//! use anvesha_plan::core::{NodeId, Point3D, RoomId};
//! use anvesha_plan::scene::{RoomNode, SceneGraph};
//! use anvesha_plan::belief::BeliefRanking;
//! use anvesha_plan::planning::{
//!     ConformalFilter, ExplorationHistory, LookaheadPlanner, PlannerConfig,
//! };
//!
//! // Build a snapshot: rooms first, then their viewpoints
//! let mut graph = SceneGraph::new();
//! for i in 0..3u32 {
//!     graph.insert_room(RoomNode::new(
//!         RoomId(i),
//!         Point3D::new(i as f32, 0.0, 0.0),
//!         format!("room{}", i),
//!     ));
//! }
//!
//! // One planning call
//! let config = PlannerConfig::default();
//! let filter = ConformalFilter::from_config(&config);
//! let planner = LookaheadPlanner::new(config);
//! let mut history = ExplorationHistory::new();
//!
//! let ranking = BeliefRanking::from_ranked([(RoomId(1), 0.6), (RoomId(2), 0.5)]);
//! let set = filter.apply(&ranking, &history);
//! let decision = planner
//!     .decide(&set, NodeId::Room(RoomId(0)), &graph)
//!     .expect("non-empty ranking");
//!
//! // The caller executes the move, then records it before the next call
//! history.visit(NodeId::Room(decision.room));
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: fundamental types (points, quaternions, typed ids, episodes)
//! - [`scene`]: scene graph snapshots and the spatio-temporal snapshot store
//! - [`belief`]: the ranking produced by the external oracle, and the oracle
//!   trait itself
//! - [`planning`]: conformal filtering, expected-cost lookahead, exploration
//!   history, distance model, nearest-id resolution
//! - [`config`]: YAML configuration loading
//!
//! ## Decision Flow
//!
//! ```text
//!   BeliefOracle (external)
//!        │ BeliefRanking (≤10 rooms, descending confidence)
//!        ▼
//!   ConformalFilter ── drops visited rooms and sub-threshold candidates,
//!        │             keeps a fallback room for liveness
//!        ▼
//!   LookaheadPlanner ─ branch on candidate count:
//!        │               0 → fallback   1 → trivial
//!        │               2 → two-step plan comparison
//!        │               3+ → ordered-triple expected-cost minimization
//!        ▼
//!   Decision { room, single_direction }
//!        │
//!        ▼
//!   caller moves, marks ExplorationHistory, re-invokes
//! ```
//!
//! Planning is single-threaded and pure per call: snapshots are read-only,
//! the per-episode history is owned by one caller, and no planning operation
//! blocks or performs I/O.

pub mod belief;
pub mod config;
pub mod core;
pub mod error;
pub mod planning;
pub mod scene;

// Re-export main types at crate root
pub use belief::{BeliefOracle, BeliefRanking, RankedRoom, SearchQuery};
pub use config::AnveshaConfig;
pub use core::{Episode, NodeId, PlaceId, Point3D, Quaternion, RoomId};
pub use error::{AnveshaError, Result};
pub use planning::{
    ConformalFilter, Decision, ExplorationHistory, LookaheadPlanner, PlannerConfig, PredictionSet,
};
pub use scene::{PlaceNode, RoomNode, SceneGraph, SnapshotStore};
