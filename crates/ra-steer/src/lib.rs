//! `ra-steer` — the steering collaborator: kinematic agents and the behaviors
//! that move them.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`agent`]     | `SteerAgent` — position, velocity and motion limits          |
//! | [`behavior`]  | `SteeringBehavior` — follow path, pursue, seek, idle         |
//! | [`store`]     | `SteerStore` — one agent + behavior per actor                |
//! | [`engine`]    | `SteeringEngine` — integrates active agents each tick        |
//! | [`error`]     | `SteerError`, `SteerResult<T>`                               |
//!
//! # Motion model
//!
//! Each active agent computes a desired velocity from its behavior, then:
//!
//! ```text
//! force    = clamp_len(desired - velocity, max_acceleration)
//! velocity = clamp_len(velocity + force / mass * dt, max_speed)
//! position = position + velocity * dt
//! ```
//!
//! Rotation follows the velocity heading whenever the agent is moving.
//! Inactive agents are left untouched; the simulation copies the render pose
//! into them instead.

pub mod agent;
pub mod behavior;
pub mod engine;
pub mod error;
pub mod store;

#[cfg(test)]
mod tests;

pub use agent::SteerAgent;
pub use behavior::SteeringBehavior;
pub use engine::SteeringEngine;
pub use error::{SteerError, SteerResult};
pub use store::SteerStore;
