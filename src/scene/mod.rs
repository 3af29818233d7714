//! Scene graph snapshots and the spatio-temporal snapshot store.

mod graph;
mod store;

pub use graph::{PlaceNode, RoomNode, SceneGraph};
pub use store::SnapshotStore;
