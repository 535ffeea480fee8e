//! Animation selection and the animation-set registry.
//!
//! The animation collaborator plays clips; the core only decides which clip
//! and which facing.  Clip data is keyed by `(ActorKind, Alignment)` so a
//! robot's flip swaps its whole set.

use std::collections::HashMap;
use std::f32::consts::FRAC_PI_4;

use ra_core::geo::heading_of;
use ra_core::{ActorKind, Alignment, Vec2};
use tracing::debug;

use crate::player::PlayerState;
use crate::robot::RobotState;

// ── AnimationState ────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnimationState {
    Idle,
    WalkForward,
    WalkBackward,
    Inactive,
    Hit,
    Zapped,
    Blast,
}

impl AnimationState {
    pub fn as_str(self) -> &'static str {
        match self {
            AnimationState::Idle         => "idle",
            AnimationState::WalkForward  => "walk_forward",
            AnimationState::WalkBackward => "walk_backward",
            AnimationState::Inactive     => "inactive",
            AnimationState::Hit          => "hit",
            AnimationState::Zapped       => "zapped",
            AnimationState::Blast        => "blast",
        }
    }
}

// ── CompassDirection ──────────────────────────────────────────────────────────

/// Eight-way facing.  East is +x, north is +y.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompassDirection {
    East,
    NorthEast,
    North,
    NorthWest,
    West,
    SouthWest,
    South,
    SouthEast,
}

impl CompassDirection {
    const ORDER: [CompassDirection; 8] = [
        CompassDirection::East,
        CompassDirection::NorthEast,
        CompassDirection::North,
        CompassDirection::NorthWest,
        CompassDirection::West,
        CompassDirection::SouthWest,
        CompassDirection::South,
        CompassDirection::SouthEast,
    ];

    /// The sector containing `rotation` radians.
    pub fn from_rotation(rotation: f32) -> Self {
        let sector = (rotation / FRAC_PI_4).round().rem_euclid(8.0) as usize;
        Self::ORDER[sector % 8]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CompassDirection::East      => "e",
            CompassDirection::NorthEast => "ne",
            CompassDirection::North     => "n",
            CompassDirection::NorthWest => "nw",
            CompassDirection::West      => "w",
            CompassDirection::SouthWest => "sw",
            CompassDirection::South     => "s",
            CompassDirection::SouthEast => "se",
        }
    }
}

// ── Requests ──────────────────────────────────────────────────────────────────

/// Which registry entry an actor draws from.  Players have no alignment.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationSetKey {
    pub kind:      ActorKind,
    pub alignment: Option<Alignment>,
}

impl AnimationSetKey {
    pub fn new(kind: ActorKind, alignment: Option<Alignment>) -> Self {
        Self { kind, alignment: if kind.is_robot() { alignment } else { None } }
    }
}

/// What the animation collaborator should play.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationRequest {
    pub state:     AnimationState,
    pub direction: CompassDirection,
    pub set:       AnimationSetKey,
}

/// Below this speed a robot counts as standing still.
const MOVING_SPEED: f32 = 1.0;

/// Clip for a robot from its machine state and agent motion.
pub fn robot_animation(state: RobotState, velocity: Vec2, rotation: f32) -> (AnimationState, CompassDirection) {
    let facing = CompassDirection::from_rotation(heading_of(velocity).unwrap_or(rotation));
    let clip = match state {
        RobotState::Zapped => AnimationState::Zapped,
        RobotState::Blast  => AnimationState::Blast,
        RobotState::AgentControlled if velocity.length() >= MOVING_SPEED => AnimationState::WalkForward,
        RobotState::AgentControlled => AnimationState::Idle,
    };
    (clip, facing)
}

/// Clip for a player.  Moving against the facing plays the backward walk.
pub fn player_animation(state: PlayerState, movement: Vec2, rotation: f32) -> (AnimationState, CompassDirection) {
    let facing = CompassDirection::from_rotation(rotation);
    let clip = match state {
        PlayerState::Appear => AnimationState::Idle,
        PlayerState::Hit => AnimationState::Hit,
        PlayerState::Recharging => AnimationState::Inactive,
        PlayerState::PlayerControlled if movement.length_squared() <= f32::EPSILON => AnimationState::Idle,
        PlayerState::PlayerControlled => {
            if movement.dot(Vec2::from_angle(rotation)) >= 0.0 {
                AnimationState::WalkForward
            } else {
                AnimationState::WalkBackward
            }
        }
    };
    (clip, facing)
}

// ── Registry ──────────────────────────────────────────────────────────────────

/// Metadata for one loaded animation set.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationSet {
    pub name:            String,
    pub frames_per_clip: u32,
}

/// Animation sets shared by every actor of the same kind and alignment.
///
/// Built explicitly by the application and handed to the simulation.
/// `purge` drops everything, after which actors must not be stepped until
/// sets are loaded again.
#[derive(Clone, Debug, Default)]
pub struct AnimationRegistry {
    sets: HashMap<AnimationSetKey, AnimationSet>,
}

impl AnimationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with a placeholder set for every kind/alignment pair.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.load(AnimationSetKey::new(ActorKind::Player, None), AnimationSet {
            name:            "player".into(),
            frames_per_clip: 8,
        });
        for kind in [ActorKind::GroundBot, ActorKind::FlyingBot] {
            for alignment in [Alignment::Good, Alignment::Bad] {
                registry.load(AnimationSetKey::new(kind, Some(alignment)), AnimationSet {
                    name:            format!("{}_{}", kind.as_str(), alignment.as_str()),
                    frames_per_clip: 8,
                });
            }
        }
        registry
    }

    /// Register `set` under `key`, replacing any previous entry.
    pub fn load(&mut self, key: AnimationSetKey, set: AnimationSet) -> Option<AnimationSet> {
        debug!(set = %set.name, "animation set loaded");
        self.sets.insert(key, set)
    }

    pub fn purge(&mut self) {
        debug!(count = self.sets.len(), "animation sets purged");
        self.sets.clear();
    }

    #[inline]
    pub fn get(&self, key: &AnimationSetKey) -> Option<&AnimationSet> {
        self.sets.get(key)
    }

    #[inline]
    pub fn contains(&self, key: &AnimationSetKey) -> bool {
        self.sets.contains_key(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}
