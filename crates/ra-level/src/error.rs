use thiserror::Error;

use ra_core::PathId;

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("patrol path {0} not found in level")]
    PathNotFound(PathId),

    #[error("patrol path {0} has no waypoints")]
    EmptyPath(PathId),

    #[error("proximity factor must be positive, got {0}")]
    InvalidProximityFactor(f32),

    #[error("waypoint parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type LevelResult<T> = Result<T, LevelError>;
