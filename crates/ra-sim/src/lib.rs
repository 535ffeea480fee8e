//! `ra-sim` — tick loop orchestrator for the robo-arena AI framework.
//!
//! # Tick pipeline
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Rules     — every `rules_update_interval_ticks`: build the
//!                 LevelStateSnapshot from last tick's poses, evaluate
//!                 every bad robot, update mandates.  All evaluations
//!                 finish before anything moves.
//!   ② Input     — PlayerControlled players move by their input.
//!   ③ Pose→agent — actors not driven by steering copy the render pose.
//!   ④ Machines  — advance player and robot state machines; a robot
//!                 consumes its (possibly new) mandate.
//!   ⑤ Resolve   — changed mandates become new steering behaviors.
//!   ⑥ Steer     — integrate agent-driven robots.
//!   ⑦ Agent→pose — write steered positions back to the render pose.
//!   ⑧ Combat    — contact hits on hunted targets, beam drain, flips.
//!   ⑨ Present   — animation requests and debug paths to the observer.
//! ```
//!
//! Everything runs on one thread in actor-id order.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ra_actor::{ActorStoreBuilder, PatrolAssignment};
//! use ra_core::{ActorKind, Alignment, PathId, SimConfig, Tuning, Vec2};
//! use ra_level::{Level, PatrolPath};
//! use ra_sim::{NoopObserver, SimBuilder};
//!
//! let tuning = Tuning::default();
//! let paths  = PatrolAssignment { good: PathId(0), bad: PathId(1) };
//! let actors = ActorStoreBuilder::new(&tuning)
//!     .player(Vec2::ZERO)
//!     .robot(ActorKind::GroundBot, Alignment::Bad, Vec2::new(200.0, 0.0), paths)
//!     .build();
//! let level = Level::new(300.0, vec![good_path, bad_path])?;
//! let mut sim = SimBuilder::new(SimConfig::default(), tuning, level, actors).build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod combat;
pub mod error;
pub mod flip;
pub mod mind;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use mind::{ActorMind, ActorState, RobotMind};
pub use observer::{NoopObserver, SimObserver, TickSummary};
pub use sim::Sim;
