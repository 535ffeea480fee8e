//! Framework error type.
//!
//! Sub-crates define their own error enums and either convert them into
//! `RaError` via `From` impls or wrap `RaError` as one variant.

use thiserror::Error;

use crate::ActorId;

/// The top-level error type for `ra-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum RaError {
    #[error("actor {0} not found")]
    ActorNotFound(ActorId),

    #[error("actor {actor} is missing required component `{component}`")]
    MissingComponent {
        actor:     ActorId,
        component: &'static str,
    },
}
