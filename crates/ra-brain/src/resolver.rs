//! Mandate → steering behavior, plus the debug polyline the render
//! collaborator draws for it.

use ra_actor::PatrolAssignment;
use ra_core::{Alignment, SteeringTuning, Vec2};
use ra_level::Level;
use ra_steer::SteeringBehavior;

use crate::BrainResult;
use crate::mandate::{Mandate, MandateKind};

// ── Debug output ──────────────────────────────────────────────────────────────

/// Debug-path color, one per mandate kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DebugColor {
    Green,
    Magenta,
    Red,
    Yellow,
}

impl DebugColor {
    pub fn for_kind(kind: MandateKind) -> Self {
        match kind {
            MandateKind::GoodPatrol => DebugColor::Green,
            MandateKind::BadPatrol  => DebugColor::Magenta,
            MandateKind::Hunt       => DebugColor::Red,
            MandateKind::Return     => DebugColor::Yellow,
        }
    }

    /// RGB bytes.
    pub fn rgb(self) -> [u8; 3] {
        match self {
            DebugColor::Green   => [0x3c, 0xd0, 0x5a],
            DebugColor::Magenta => [0xd0, 0x3c, 0xc8],
            DebugColor::Red     => [0xe0, 0x30, 0x30],
            DebugColor::Yellow  => [0xf0, 0xd0, 0x30],
        }
    }
}

/// A polyline for the render collaborator.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DebugPath {
    pub points:   Vec<Vec2>,
    pub cyclical: bool,
    pub radius:   f32,
    pub color:    DebugColor,
}

// ── Resolver ──────────────────────────────────────────────────────────────────

/// Turns mandates into steering behaviors using the level's patrol paths.
#[derive(Clone, Debug)]
pub struct MandateResolver {
    tuning: SteeringTuning,
}

impl MandateResolver {
    pub fn new(tuning: SteeringTuning) -> Self {
        Self { tuning }
    }

    pub fn radius_for(&self, kind: MandateKind) -> f32 {
        match kind {
            MandateKind::GoodPatrol | MandateKind::BadPatrol => self.tuning.patrol_path_radius,
            MandateKind::Hunt   => self.tuning.hunt_path_radius,
            MandateKind::Return => self.tuning.return_path_radius,
        }
    }

    /// The steering behavior for `mandate`.
    ///
    /// A patrol starts from the waypoint after the closest point on the path
    /// so the robot joins the loop where it is instead of doubling back.
    pub fn behavior(
        &self,
        mandate:  &Mandate,
        position: Vec2,
        patrol:   PatrolAssignment,
        level:    &Level,
    ) -> BrainResult<SteeringBehavior> {
        let radius = self.radius_for(mandate.kind());
        Ok(match *mandate {
            Mandate::HuntAgent(target) => SteeringBehavior::Pursue { target, radius },
            Mandate::ReturnToPositionOnPath(point) => SteeringBehavior::Seek { point, radius },
            Mandate::FollowGoodPatrolPath | Mandate::FollowBadPatrolPath => {
                let alignment = if *mandate == Mandate::FollowGoodPatrolPath {
                    Alignment::Good
                } else {
                    Alignment::Bad
                };
                let id = patrol.for_alignment(alignment);
                let (_, start) = level.closest_point_on_path(id, position)?;
                SteeringBehavior::patrol(level.path(id)?.points.clone(), radius, start)
            }
        })
    }

    /// The debug polyline for `mandate`.
    ///
    /// Hunt paths are rebuilt from the live positions on every call;
    /// `target_position` is the hunted actor's position, if it still exists.
    pub fn debug_path(
        &self,
        mandate:         &Mandate,
        position:        Vec2,
        target_position: Option<Vec2>,
        patrol:          PatrolAssignment,
        level:           &Level,
    ) -> BrainResult<DebugPath> {
        let kind = mandate.kind();
        let (points, cyclical) = match *mandate {
            Mandate::HuntAgent(_) => {
                (target_position.map_or_else(|| vec![position], |t| vec![position, t]), false)
            }
            Mandate::ReturnToPositionOnPath(point) => (vec![position, point], false),
            Mandate::FollowGoodPatrolPath => (level.path(patrol.good)?.points.clone(), true),
            Mandate::FollowBadPatrolPath  => (level.path(patrol.bad)?.points.clone(), true),
        };
        Ok(DebugPath { points, cyclical, radius: self.radius_for(kind), color: DebugColor::for_kind(kind) })
    }

    /// The point a robot of `alignment` at `position` returns to.
    pub fn return_point(
        &self,
        alignment: Alignment,
        position:  Vec2,
        patrol:    PatrolAssignment,
        level:     &Level,
    ) -> BrainResult<Vec2> {
        let (point, _) = level.closest_point_on_path(patrol.for_alignment(alignment), position)?;
        Ok(point)
    }
}
