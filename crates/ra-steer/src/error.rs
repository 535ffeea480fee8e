use ra_core::ActorId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SteerError {
    #[error("no steering agent registered for {0}")]
    AgentNotFound(ActorId),
}

pub type SteerResult<T> = Result<T, SteerError>;
