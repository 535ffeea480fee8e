use ra_level::LevelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BrainError {
    #[error("level error: {0}")]
    Level(#[from] LevelError),
}

pub type BrainResult<T> = Result<T, BrainError>;
