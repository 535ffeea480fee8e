//! Steering behaviors.

use ra_core::{ActorId, Vec2};

/// What a steering agent is currently trying to do.
///
/// `radius` is the arrival tolerance: a waypoint counts as reached, and a
/// seek or pursue target as arrived at, once the agent is within it.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SteeringBehavior {
    #[default]
    Idle,

    /// Walk `points` in order, looping back to the first when `cyclical`.
    FollowPath {
        points:     Vec<Vec2>,
        cyclical:   bool,
        radius:     f32,
        next_index: usize,
    },

    /// Chase another actor's steering agent, leading its motion.
    Pursue { target: ActorId, radius: f32 },

    /// Go to a fixed point and stop there.
    Seek { point: Vec2, radius: f32 },
}

impl SteeringBehavior {
    /// A cyclic path-follow starting at waypoint `start`.
    pub fn patrol(points: Vec<Vec2>, radius: f32, start: usize) -> Self {
        let next_index = if points.is_empty() { 0 } else { start % points.len() };
        SteeringBehavior::FollowPath { points, cyclical: true, radius, next_index }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SteeringBehavior::Idle             => "idle",
            SteeringBehavior::FollowPath { .. } => "follow_path",
            SteeringBehavior::Pursue { .. }     => "pursue",
            SteeringBehavior::Seek { .. }       => "seek",
        }
    }
}
