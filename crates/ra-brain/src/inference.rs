//! Fuzzy inference: fact grades to a mandate.
//!
//! Conjunctions are minima and disjunctions maxima over raw grades.  Each
//! score is the maximum over a fixed list of conjunctions:
//!
//! | Score          | Conjunctions                                              |
//! |----------------|-----------------------------------------------------------|
//! | `hunt_player`  | High ∧ PlayerNear · Medium ∧ PlayerNear ·                 |
//! |                | High ∧ PlayerMedium ∧ GoodRobotMedium                     |
//! | `hunt_robot`   | Low ∧ GoodRobotNear · Medium ∧ GoodRobotNear ·            |
//! |                | High ∧ PlayerFar ∧ GoodRobotMedium ·                      |
//! |                | Medium ∧ PlayerFar ∧ GoodRobotMedium                      |

use ra_core::Vec2;
use tracing::trace;

use crate::BrainResult;
use crate::mandate::Mandate;
use crate::rule::{Fact, FactGrades, RuleSet};
use crate::snapshot::EntitySnapshot;

use Fact::*;

const HUNT_PLAYER: &[&[Fact]] = &[
    &[BadBotPercentageHigh, PlayerNear],
    &[BadBotPercentageMedium, PlayerNear],
    &[BadBotPercentageHigh, PlayerMedium, GoodRobotMedium],
];

const HUNT_ROBOT: &[&[Fact]] = &[
    &[BadBotPercentageLow, GoodRobotNear],
    &[BadBotPercentageMedium, GoodRobotNear],
    &[BadBotPercentageHigh, PlayerFar, GoodRobotMedium],
    &[BadBotPercentageMedium, PlayerFar, GoodRobotMedium],
];

/// Fuzzy AND over `facts`.
fn all_of(grades: &FactGrades, facts: &[Fact]) -> f32 {
    facts.iter().map(|&f| grades.get(f)).fold(f32::INFINITY, f32::min)
}

/// Fuzzy OR over conjunctions.
fn any_of(grades: &FactGrades, conjunctions: &[&[Fact]]) -> f32 {
    conjunctions
        .iter()
        .map(|c| all_of(grades, c))
        .fold(f32::NEG_INFINITY, f32::max)
}

/// The two competing motivations of a bad robot.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HuntScores {
    pub hunt_player: f32,
    pub hunt_robot:  f32,
}

impl HuntScores {
    pub fn from_grades(grades: &FactGrades) -> Self {
        Self {
            hunt_player: any_of(grades, HUNT_PLAYER),
            hunt_robot:  any_of(grades, HUNT_ROBOT),
        }
    }
}

/// Result of one robot's evaluation.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub grades:  FactGrades,
    pub scores:  HuntScores,
    pub mandate: Mandate,
}

/// Rule set plus decision step.
#[derive(Clone, Debug, Default)]
pub struct FuzzyBrain {
    pub rules: RuleSet,
}

impl FuzzyBrain {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Grade the rules against `snapshot` and pick the next mandate.
    ///
    /// `bad_path_point` is only called when the robot has to head back to its
    /// bad patrol path, and only its error can fail the evaluation.
    pub fn evaluate(
        &self,
        snapshot:       &EntitySnapshot,
        current:        &Mandate,
        bad_path_point: impl FnOnce() -> BrainResult<Vec2>,
    ) -> BrainResult<Evaluation> {
        let grades = self.rules.evaluate(snapshot);
        let scores = HuntScores::from_grades(&grades);
        trace!(
            actor = %snapshot.actor,
            hunt_player = scores.hunt_player,
            hunt_robot = scores.hunt_robot,
            "fuzzy scores"
        );
        let mandate = decide(scores, snapshot, current, bad_path_point)?;
        Ok(Evaluation { grades, scores, mandate })
    }
}

/// The decision step.
///
/// Equal scores favor the player only when positive; both zero means no
/// motivation, and the robot patrols.
pub fn decide(
    scores:         HuntScores,
    snapshot:       &EntitySnapshot,
    current:        &Mandate,
    bad_path_point: impl FnOnce() -> BrainResult<Vec2>,
) -> BrainResult<Mandate> {
    let HuntScores { hunt_player, hunt_robot } = scores;
    if hunt_player >= hunt_robot && hunt_player > 0.0 {
        if let Some(player) = snapshot.player_target {
            return Ok(Mandate::HuntAgent(player.actor));
        }
    } else if hunt_robot > hunt_player {
        if let Some(robot) = snapshot.nearest_good_robot {
            return Ok(Mandate::HuntAgent(robot.actor));
        }
    }
    Ok(match current {
        Mandate::FollowBadPatrolPath => Mandate::FollowBadPatrolPath,
        _ => Mandate::ReturnToPositionOnPath(bad_path_point()?),
    })
}
