//! Core actor storage: `ActorStore` (SoA data).
//!
//! Every `Vec` field has exactly `count` elements; the `ActorId` value is the
//! index into all of them:
//!
//! ```ignore
//! let pos = store.position[actor.index()];  // O(1), cache-friendly
//! ```
//!
//! Component slots that only some kinds carry (`alignment`, `patrol`) are
//! `Option`s.  `charge` is an `Option` too so a misconfigured scene is
//! representable; the simulation builder rejects it before the first tick.

use ra_core::{ActorId, ActorKind, Alignment, Vec2};

use crate::component::{Charge, PatrolAssignment, PlayerInput};

/// Structure-of-Arrays storage for all live actors.
#[derive(Clone, Debug)]
pub struct ActorStore {
    /// Number of actors.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Player, ground bot or flying bot.
    pub kind: Vec<ActorKind>,

    /// Robot alignment.  `None` for players.
    pub alignment: Vec<Option<Alignment>>,

    // ── Render pose ───────────────────────────────────────────────────────
    /// World position of the rendered node.
    pub position: Vec<Vec2>,

    /// Rotation (radians) of the rendered node.
    pub rotation: Vec<f32>,

    // ── Components ────────────────────────────────────────────────────────
    /// Charge / health.  Required for every actor.
    pub charge: Vec<Option<Charge>>,

    /// Latest input collaborator report.  Only read for players.
    pub input: Vec<PlayerInput>,

    /// Good/bad patrol paths.  Required for robots, `None` for players.
    pub patrol: Vec<Option<PatrolAssignment>>,
}

impl ActorStore {
    /// `true` if there are no actors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `ActorId`s in ascending (insertion) order.
    pub fn actor_ids(&self) -> impl Iterator<Item = ActorId> + '_ {
        (0..self.count as u32).map(ActorId)
    }

    /// `true` if `actor` is within bounds.
    #[inline]
    pub fn contains(&self, actor: ActorId) -> bool {
        actor.index() < self.count
    }

    #[inline]
    pub fn is_robot(&self, actor: ActorId) -> bool {
        self.kind[actor.index()].is_robot()
    }

    #[inline]
    pub fn is_player(&self, actor: ActorId) -> bool {
        self.kind[actor.index()] == ActorKind::Player
    }

    /// `true` if `actor` is a robot with `Good` alignment.
    #[inline]
    pub fn is_good_robot(&self, actor: ActorId) -> bool {
        self.alignment[actor.index()] == Some(Alignment::Good)
    }

    /// `true` if `actor` is a robot with `Bad` alignment.
    #[inline]
    pub fn is_bad_robot(&self, actor: ActorId) -> bool {
        self.alignment[actor.index()] == Some(Alignment::Bad)
    }

    /// All robot ids in ascending order.
    pub fn robots(&self) -> impl Iterator<Item = ActorId> + '_ {
        self.actor_ids().filter(|&a| self.is_robot(a))
    }

    /// All player ids in ascending order.
    pub fn players(&self) -> impl Iterator<Item = ActorId> + '_ {
        self.actor_ids().filter(|&a| self.is_player(a))
    }

    /// Share of robots currently bad, in `[0, 1]`.  Zero when there are no
    /// robots at all.
    pub fn bad_bot_percentage(&self) -> f32 {
        let (robots, bad) = self
            .alignment
            .iter()
            .flatten()
            .fold((0u32, 0u32), |(r, b), a| (r + 1, b + u32::from(!a.is_good())));
        if robots == 0 {
            0.0
        } else {
            bad as f32 / robots as f32
        }
    }

    /// Euclidean distance between two actors' render positions.
    #[inline]
    pub fn distance(&self, a: ActorId, b: ActorId) -> f32 {
        self.position[a.index()].distance(self.position[b.index()])
    }

    // ── Package-private constructor used by ActorStoreBuilder ─────────────

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            count:     0,
            kind:      Vec::with_capacity(capacity),
            alignment: Vec::with_capacity(capacity),
            position:  Vec::with_capacity(capacity),
            rotation:  Vec::with_capacity(capacity),
            charge:    Vec::with_capacity(capacity),
            input:     Vec::with_capacity(capacity),
            patrol:    Vec::with_capacity(capacity),
        }
    }

    /// Append one actor to every array.  Returns its id.
    pub(crate) fn push(
        &mut self,
        kind:      ActorKind,
        alignment: Option<Alignment>,
        position:  Vec2,
        charge:    Charge,
        patrol:    Option<PatrolAssignment>,
    ) -> ActorId {
        let id = ActorId(self.count as u32);
        self.kind.push(kind);
        self.alignment.push(alignment);
        self.position.push(position);
        self.rotation.push(0.0);
        self.charge.push(Some(charge));
        self.input.push(PlayerInput::default());
        self.patrol.push(patrol);
        self.count += 1;
        id
    }
}
