//! Robot mandates.

use std::fmt;

use ra_core::{ActorId, Alignment, Vec2};

/// The single behavioral goal a robot is pursuing.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mandate {
    /// Chase another actor's agent.
    HuntAgent(ActorId),
    FollowGoodPatrolPath,
    FollowBadPatrolPath,
    /// Head for a point on the patrol path, then resume patrolling.
    ReturnToPositionOnPath(Vec2),
}

/// Payload-free discriminant of a [`Mandate`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MandateKind {
    Hunt,
    GoodPatrol,
    BadPatrol,
    Return,
}

impl Mandate {
    /// The patrol mandate matching `alignment`.
    pub fn patrol_for(alignment: Alignment) -> Self {
        match alignment {
            Alignment::Good => Mandate::FollowGoodPatrolPath,
            Alignment::Bad  => Mandate::FollowBadPatrolPath,
        }
    }

    pub fn kind(&self) -> MandateKind {
        match self {
            Mandate::HuntAgent(_)              => MandateKind::Hunt,
            Mandate::FollowGoodPatrolPath      => MandateKind::GoodPatrol,
            Mandate::FollowBadPatrolPath       => MandateKind::BadPatrol,
            Mandate::ReturnToPositionOnPath(_) => MandateKind::Return,
        }
    }

    #[inline]
    pub fn hunt_target(&self) -> Option<ActorId> {
        match self {
            Mandate::HuntAgent(t) => Some(*t),
            _ => None,
        }
    }

    #[inline]
    pub fn is_patrol(&self) -> bool {
        matches!(self, Mandate::FollowGoodPatrolPath | Mandate::FollowBadPatrolPath)
    }

    /// `false` for a patrol mandate on the other alignment's path.
    pub fn is_consistent_with(&self, alignment: Alignment) -> bool {
        match self {
            Mandate::FollowGoodPatrolPath => alignment.is_good(),
            Mandate::FollowBadPatrolPath  => !alignment.is_good(),
            _ => true,
        }
    }
}

impl MandateKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MandateKind::Hunt       => "hunt",
            MandateKind::GoodPatrol => "good_patrol",
            MandateKind::BadPatrol  => "bad_patrol",
            MandateKind::Return     => "return",
        }
    }
}

impl fmt::Display for Mandate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mandate::HuntAgent(t) => write!(f, "hunt({t})"),
            Mandate::ReturnToPositionOnPath(p) => write!(f, "return({:.1}, {:.1})", p.x, p.y),
            other => f.write_str(other.kind().as_str()),
        }
    }
}
