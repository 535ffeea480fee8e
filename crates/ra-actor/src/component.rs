//! Collaborator components attached to actors.

use ra_core::{ActorId, Alignment, PathId, Vec2};

// ── Charge ────────────────────────────────────────────────────────────────────

/// Charge (health) of an actor.
///
/// A player that loses charge is hit, and powers down at zero.  A bad robot
/// drained to zero flips good.  `current` is always within `[0, max]`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Charge {
    current: f32,
    max:     f32,
}

impl Charge {
    /// A fully charged component.
    pub fn full(max: f32) -> Self {
        Self { current: max, max }
    }

    /// An empty component with capacity `max`.
    pub fn empty(max: f32) -> Self {
        Self { current: 0.0, max }
    }

    #[inline]
    pub fn current(&self) -> f32 {
        self.current
    }

    #[inline]
    pub fn max(&self) -> f32 {
        self.max
    }

    #[inline]
    pub fn has_charge(&self) -> bool {
        self.current > 0.0
    }

    #[inline]
    pub fn is_fully_charged(&self) -> bool {
        self.current >= self.max
    }

    /// Add up to `amount`, saturating at `max`.  Returns the amount added.
    pub fn add(&mut self, amount: f32) -> f32 {
        let before = self.current;
        self.current = (self.current + amount.max(0.0)).min(self.max);
        self.current - before
    }

    /// Remove up to `amount`, saturating at zero.  Returns the amount lost.
    pub fn lose(&mut self, amount: f32) -> f32 {
        let before = self.current;
        self.current = (self.current - amount.max(0.0)).max(0.0);
        before - self.current
    }

    pub fn fill(&mut self) {
        self.current = self.max;
    }

    pub fn drain(&mut self) {
        self.current = 0.0;
    }
}

// ── PlayerInput ───────────────────────────────────────────────────────────────

/// What the input collaborator last reported for a player.
///
/// `movement` is a direction with length ≤ 1; the sim scales it by the
/// player's movement speed.  The whole component is ignored unless the
/// player's state machine is in `PlayerControlled` and `enabled` is set.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerInput {
    pub enabled:     bool,
    pub movement:    Vec2,
    pub beam_target: Option<ActorId>,
}

// ── PatrolAssignment ──────────────────────────────────────────────────────────

/// The two fixed patrol paths a robot walks, one per alignment.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatrolAssignment {
    pub good: PathId,
    pub bad:  PathId,
}

impl PatrolAssignment {
    #[inline]
    pub fn for_alignment(&self, alignment: Alignment) -> PathId {
        match alignment {
            Alignment::Good => self.good,
            Alignment::Bad  => self.bad,
        }
    }
}
