//! Fluent builder for constructing an `ActorStore`.
//!
//! # Usage
//!
//! ```rust
//! use ra_actor::{ActorStoreBuilder, PatrolAssignment};
//! use ra_core::{ActorKind, Alignment, PathId, Tuning, Vec2};
//!
//! let paths = PatrolAssignment { good: PathId(0), bad: PathId(1) };
//! let store = ActorStoreBuilder::new(&Tuning::default())
//!     .player(Vec2::ZERO)
//!     .robot(ActorKind::GroundBot, Alignment::Bad, Vec2::new(200.0, 0.0), paths)
//!     .build();
//!
//! assert_eq!(store.count, 2);
//! assert!(store.is_bad_robot(ra_core::ActorId(1)));
//! ```

use ra_core::{ActorKind, Alignment, Tuning, Vec2};

use crate::{ActorStore, Charge, PatrolAssignment};

/// Fluent builder for [`ActorStore`].
///
/// Actors receive ids in call order, which is also the tie-break order for
/// nearest-target selection.  Players start fully charged; bad robots start
/// fully charged (the beam drains them), good robots start empty.
pub struct ActorStoreBuilder {
    store:        ActorStore,
    player_charge: f32,
    robot_charge: f32,
}

impl ActorStoreBuilder {
    /// Create a builder reading charge capacities from `tuning`.
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            store:         ActorStore::with_capacity(8),
            player_charge: tuning.player.max_charge,
            robot_charge:  tuning.robot.max_charge,
        }
    }

    /// Add a player at `position`.
    pub fn player(mut self, position: Vec2) -> Self {
        self.store.push(
            ActorKind::Player,
            None,
            position,
            Charge::full(self.player_charge),
            None,
        );
        self
    }

    /// Add a robot of `kind` with the given alignment and patrol paths.
    ///
    /// Passing `ActorKind::Player` is treated as [`player`](Self::player).
    pub fn robot(
        mut self,
        kind:      ActorKind,
        alignment: Alignment,
        position:  Vec2,
        patrol:    PatrolAssignment,
    ) -> Self {
        if !kind.is_robot() {
            return self.player(position);
        }
        let charge = match alignment {
            Alignment::Bad  => Charge::full(self.robot_charge),
            Alignment::Good => Charge::empty(self.robot_charge),
        };
        self.store.push(kind, Some(alignment), position, charge, Some(patrol));
        self
    }

    /// Construct the `ActorStore`.
    pub fn build(self) -> ActorStore {
        self.store
    }
}
