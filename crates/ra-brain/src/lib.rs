//! `ra-brain` — the robot decision core.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                       |
//! |-----------------|----------------------------------------------------------------|
//! | [`snapshot`]    | `EntityDistance`, `EntitySnapshot`, `LevelStateSnapshot`       |
//! | [`membership`]  | Piecewise-linear population and proximity grades              |
//! | [`rule`]        | `Fact`, `Rule`, `RuleSet`, `FactGrades`                        |
//! | [`inference`]   | `HuntScores`, `FuzzyBrain` — grades → mandate                  |
//! | [`mandate`]     | `Mandate`, `MandateKind`                                       |
//! | [`resolver`]    | `MandateResolver`, `DebugPath`, `DebugColor`                   |
//! | [`error`]       | `BrainError`, `BrainResult<T>`                                 |
//!
//! # Per-tick flow
//!
//! ```text
//! ActorStore ──► LevelStateSnapshot::build ──► EntitySnapshot (per actor)
//!                                                   │
//!                            RuleSet::evaluate ◄────┘
//!                                   │ FactGrades
//!                                   ▼
//!                     FuzzyBrain::decide ──► Mandate
//!                                   │
//!                     MandateResolver ──► SteeringBehavior + DebugPath
//! ```
//!
//! The snapshot is built once per evaluation and shared read-only by every
//! robot's rule evaluation.

pub mod error;
pub mod inference;
pub mod mandate;
pub mod membership;
pub mod resolver;
pub mod rule;
pub mod snapshot;


pub use error::{BrainError, BrainResult};
pub use inference::{Evaluation, FuzzyBrain, HuntScores};
pub use mandate::{Mandate, MandateKind};
pub use resolver::{DebugColor, DebugPath, MandateResolver};
pub use rule::{Fact, FactGrades, Rule, RuleSet};
pub use snapshot::{EntityDistance, EntitySnapshot, LevelStateSnapshot, TargetRef};
