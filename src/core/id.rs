//! Typed identifiers for scene graph nodes and episodes.
//!
//! Room ids render as `r<n>` and place ids as bare integers, matching the
//! recorded scene logs. Keeping the numeric index accessible is load-bearing:
//! nearest-id resolution and single-direction classification both operate on
//! the index, not the rendered string.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Room identifier, rendered as `r<n>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub u32);

impl RoomId {
    /// Numeric index of the room.
    #[inline]
    pub fn index(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.0)
    }
}

impl FromStr for RoomId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('r').ok_or_else(|| ParseIdError(s.to_string()))?;
        digits
            .parse::<u32>()
            .map(RoomId)
            .map_err(|_| ParseIdError(s.to_string()))
    }
}

/// Place (viewpoint) identifier, rendered as a bare integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceId(pub u32);

impl PlaceId {
    /// Numeric index of the place.
    #[inline]
    pub fn index(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlaceId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>()
            .map(PlaceId)
            .map_err(|_| ParseIdError(s.to_string()))
    }
}

/// Any addressable scene graph node.
///
/// Distance queries and the agent location accept either a room or a place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeId {
    /// A room node
    Room(RoomId),
    /// A place (viewpoint) node
    Place(PlaceId),
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Room(r) => r.fmt(f),
            NodeId::Place(p) => p.fmt(f),
        }
    }
}

impl From<RoomId> for NodeId {
    fn from(id: RoomId) -> Self {
        NodeId::Room(id)
    }
}

impl From<PlaceId> for NodeId {
    fn from(id: PlaceId) -> Self {
        NodeId::Place(id)
    }
}

/// A time instance of the environment.
///
/// `Live` is the snapshot currently being built by the agent; `Past` carries
/// the unix timestamp of a completed recording. The ordering places past
/// episodes by stamp and `Live` after all of them, so the maximum past key in
/// a sorted map is always the most recent completed snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Episode {
    /// A completed snapshot recorded at the given unix timestamp (seconds).
    Past(u64),
    /// The snapshot of the present environment ("now").
    Live,
}

impl Episode {
    /// Whether this is the live snapshot.
    #[inline]
    pub fn is_live(&self) -> bool {
        matches!(self, Episode::Live)
    }
}

impl fmt::Display for Episode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Episode::Live => write!(f, "now"),
            Episode::Past(stamp) => write!(f, "{}", stamp),
        }
    }
}

impl FromStr for Episode {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "now" {
            return Ok(Episode::Live);
        }
        s.parse::<u64>()
            .map(Episode::Past)
            .map_err(|_| ParseIdError(s.to_string()))
    }
}

/// Failed to parse an identifier from its string form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseIdError(pub String);

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid identifier: {:?}", self.0)
    }
}

impl std::error::Error for ParseIdError {}
