//! Error types for anvesha-plan.
//!
//! Only construction-time operations return errors: building a scene graph,
//! loading configuration, looking up an episode. The planning core itself
//! recovers locally (nearest-id resolution, fallback room) and never fails.

use thiserror::Error;

use crate::core::{Episode, PlaceId, RoomId};

/// anvesha-plan error type
#[derive(Error, Debug)]
pub enum AnveshaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown episode: {0}")]
    UnknownEpisode(Episode),

    #[error("Scene graph snapshot has no place nodes")]
    EmptyScene,

    #[error("Place {place} references room {room} which is not in the snapshot")]
    MissingRoomParent { place: PlaceId, room: RoomId },
}

impl From<serde_yaml::Error> for AnveshaError {
    fn from(e: serde_yaml::Error) -> Self {
        AnveshaError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AnveshaError>;
