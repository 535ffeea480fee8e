//! `ra-core` — foundational types for the `robo-arena` AI framework.
//!
//! This crate is a dependency of every other `ra-*` crate.  It intentionally
//! has no `ra-*` dependencies and minimal external ones (`glam`, `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `ActorId`, `PathId`                                   |
//! | [`geo`]         | `Vec2` re-export, heading and segment helpers         |
//! | [`time`]        | `Tick`, `SimClock`, `SimConfig`                       |
//! | [`tuning`]      | `Tuning` (robot, player and steering constants)       |
//! | [`rng`]         | `SimRng` (seeded, deterministic)                      |
//! | [`kind`]        | `ActorKind`, `Alignment`                              |
//! | [`error`]       | `RaError`                                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required to load `SimConfig` / `Tuning` from JSON.         |

pub mod error;
pub mod geo;
pub mod ids;
pub mod kind;
pub mod rng;
pub mod time;
pub mod tuning;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::RaError;
pub use geo::Vec2;
pub use ids::{ActorId, PathId};
pub use kind::{ActorKind, Alignment};
pub use rng::SimRng;
pub use time::{SimClock, SimConfig, Tick};
pub use tuning::{PlayerTuning, RobotTuning, SteeringTuning, Tuning};
