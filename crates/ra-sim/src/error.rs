use ra_brain::BrainError;
use ra_core::RaError;
use ra_level::LevelError;
use ra_steer::SteerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] RaError),

    #[error("level error: {0}")]
    Level(#[from] LevelError),

    #[error("decision error: {0}")]
    Brain(#[from] BrainError),

    #[error("steering error: {0}")]
    Steer(#[from] SteerError),
}

pub type SimResult<T> = Result<T, SimError>;
