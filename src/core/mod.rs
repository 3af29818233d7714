//! Fundamental types shared across the crate.

mod id;
mod point;

pub use id::{Episode, NodeId, ParseIdError, PlaceId, RoomId};
pub use point::{Point3D, Quaternion};
