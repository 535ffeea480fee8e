//! `ra-fsm` — actor lifecycle state machines.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                    |
//! |-----------------|-------------------------------------------------------------|
//! | [`machine`]     | `MachineState` trait, generic `StateMachine<S>`, `Transition` |
//! | [`player`]      | `PlayerState`, `PlayerMachine`                              |
//! | [`robot`]       | `RobotState`, `RobotMachine`                                |
//! | [`animation`]   | `AnimationState`, `CompassDirection`, `AnimationRegistry`   |
//!
//! # Ownership
//!
//! Machines never hold a reference to the actor they drive.  Every call takes
//! the components it reads or mutates (`Charge`, `PlayerInput`, the robot's
//! `Mandate` and steering agent) as explicit arguments.
//!
//! # Transition requests
//!
//! Each state declares the set of states it may move to.  A request outside
//! that set is ignored: `enter` returns `false` and nothing changes.
//! `force_enter` bypasses the check and is reserved for alignment flips.

pub mod animation;
pub mod machine;
pub mod player;
pub mod robot;


pub use animation::{
    AnimationRegistry, AnimationRequest, AnimationSet, AnimationSetKey, AnimationState,
    CompassDirection,
};
pub use machine::{MachineState, StateMachine, Transition};
pub use player::{PlayerMachine, PlayerState};
pub use robot::{RobotMachine, RobotState, RobotUpdate};
