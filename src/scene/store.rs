//! Spatio-temporal snapshot store.
//!
//! Holds one [`SceneGraph`] per episode: the live snapshot being built by the
//! agent plus any number of completed past recordings. Episode substitution
//! follows an explicit policy: when the live snapshot is requested but is
//! absent or still empty, the store falls back to the past snapshot with the
//! highest timestamp. Map iteration order never decides the outcome.

use std::collections::BTreeMap;

use log::warn;

use crate::core::Episode;
use crate::error::{AnveshaError, Result};
use crate::scene::SceneGraph;

/// Map of episode to scene graph snapshot.
#[derive(Clone, Debug, Default)]
pub struct SnapshotStore {
    snapshots: BTreeMap<Episode, SceneGraph>,
}

impl SnapshotStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the snapshot for an episode.
    pub fn insert(&mut self, episode: Episode, graph: SceneGraph) {
        self.snapshots.insert(episode, graph);
    }

    /// Number of stored snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether the store holds no snapshots.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Episodes in ascending order (past stamps first, live last).
    pub fn episodes(&self) -> impl Iterator<Item = Episode> + '_ {
        self.snapshots.keys().copied()
    }

    /// Exact snapshot lookup.
    pub fn graph(&self, episode: Episode) -> Result<&SceneGraph> {
        self.snapshots
            .get(&episode)
            .ok_or(AnveshaError::UnknownEpisode(episode))
    }

    /// The most recent completed (past) episode, by timestamp.
    pub fn latest_past(&self) -> Option<Episode> {
        self.snapshots
            .range(..Episode::Live)
            .next_back()
            .map(|(ep, _)| *ep)
    }

    /// Resolve an episode request to a usable snapshot.
    ///
    /// A request for a past episode must match exactly. A request for the
    /// live episode substitutes the most recent past snapshot when the live
    /// one is absent or has no place nodes yet (construction incomplete);
    /// the returned episode names the snapshot actually selected.
    pub fn select(&self, requested: Episode) -> Result<(Episode, &SceneGraph)> {
        if !requested.is_live() {
            return self.graph(requested).map(|g| (requested, g));
        }

        match self.snapshots.get(&Episode::Live) {
            Some(graph) if graph.place_count() > 0 => Ok((Episode::Live, graph)),
            live => {
                if live.is_some() {
                    warn!("live snapshot has no places yet, substituting latest past episode");
                } else {
                    warn!("live snapshot missing, substituting latest past episode");
                }
                let past = self.latest_past().ok_or(AnveshaError::UnknownEpisode(Episode::Live))?;
                self.graph(past).map(|g| (past, g))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PlaceId, Point3D, Quaternion, RoomId};
    use crate::scene::{PlaceNode, RoomNode};

    fn snapshot_with_place() -> SceneGraph {
        let mut graph = SceneGraph::new();
        graph.insert_room(RoomNode::new(RoomId(0), Point3D::ZERO, "hall"));
        graph
            .insert_place(PlaceNode::new(
                PlaceId(0),
                Point3D::ZERO,
                Quaternion::IDENTITY,
                RoomId(0),
            ))
            .unwrap();
        graph
    }

    #[test]
    fn test_exact_past_lookup() {
        let mut store = SnapshotStore::new();
        store.insert(Episode::Past(100), snapshot_with_place());

        let (ep, _) = store.select(Episode::Past(100)).unwrap();
        assert_eq!(ep, Episode::Past(100));
        assert!(store.select(Episode::Past(200)).is_err());
    }

    #[test]
    fn test_latest_past_is_max_stamp() {
        let mut store = SnapshotStore::new();
        store.insert(Episode::Past(300), snapshot_with_place());
        store.insert(Episode::Past(100), snapshot_with_place());
        store.insert(Episode::Live, snapshot_with_place());

        assert_eq!(store.latest_past(), Some(Episode::Past(300)));
    }

    #[test]
    fn test_live_substitution_when_missing() {
        let mut store = SnapshotStore::new();
        store.insert(Episode::Past(100), snapshot_with_place());
        store.insert(Episode::Past(250), snapshot_with_place());

        let (ep, _) = store.select(Episode::Live).unwrap();
        assert_eq!(ep, Episode::Past(250));
    }

    #[test]
    fn test_live_substitution_when_incomplete() {
        let mut store = SnapshotStore::new();
        store.insert(Episode::Live, SceneGraph::new()); // under construction
        store.insert(Episode::Past(50), snapshot_with_place());

        let (ep, _) = store.select(Episode::Live).unwrap();
        assert_eq!(ep, Episode::Past(50));
    }

    #[test]
    fn test_live_preferred_when_populated() {
        let mut store = SnapshotStore::new();
        store.insert(Episode::Live, snapshot_with_place());
        store.insert(Episode::Past(50), snapshot_with_place());

        let (ep, _) = store.select(Episode::Live).unwrap();
        assert_eq!(ep, Episode::Live);
    }

    #[test]
    fn test_no_snapshot_at_all() {
        let store = SnapshotStore::new();
        assert!(store.select(Episode::Live).is_err());
    }
}
