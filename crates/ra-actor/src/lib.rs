//! `ra-actor` — Structure-of-Arrays actor registry for the `robo-arena` framework.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`component`]   | `Charge`, `PlayerInput`, `PatrolAssignment`               |
//! | [`store`]       | `ActorStore` (SoA arrays indexed by `ActorId`)            |
//! | [`builder`]     | `ActorStoreBuilder` (fluent construction)                 |
//!
//! The store is the scene collaborator's view of the live actor set: it owns
//! the render pose (`position`, `rotation`) and the per-actor components the
//! AI core reads and mutates.  State machines and steering agents refer to
//! actors by `ActorId` only, never by reference.

pub mod builder;
pub mod component;
pub mod store;


pub use builder::ActorStoreBuilder;
pub use component::{Charge, PatrolAssignment, PlayerInput};
pub use store::ActorStore;
