//! Facts and the rules that grade them.

use std::fmt;

use crate::membership::{
    population_high, population_low, population_medium, proximity_far, proximity_medium,
    proximity_near,
};
use crate::snapshot::EntitySnapshot;

// ── Fact ──────────────────────────────────────────────────────────────────────

/// A named fuzzy proposition about one robot's surroundings.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Fact {
    BadBotPercentageLow,
    BadBotPercentageMedium,
    BadBotPercentageHigh,
    PlayerNear,
    PlayerMedium,
    PlayerFar,
    GoodRobotNear,
    GoodRobotMedium,
    GoodRobotFar,
}

impl Fact {
    pub const COUNT: usize = 9;

    /// All facts in evaluation order.
    pub const ALL: [Fact; Fact::COUNT] = [
        Fact::BadBotPercentageLow,
        Fact::BadBotPercentageMedium,
        Fact::BadBotPercentageHigh,
        Fact::PlayerNear,
        Fact::PlayerMedium,
        Fact::PlayerFar,
        Fact::GoodRobotNear,
        Fact::GoodRobotMedium,
        Fact::GoodRobotFar,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Fact::BadBotPercentageLow    => "bad_bot_percentage_low",
            Fact::BadBotPercentageMedium => "bad_bot_percentage_medium",
            Fact::BadBotPercentageHigh   => "bad_bot_percentage_high",
            Fact::PlayerNear             => "player_near",
            Fact::PlayerMedium           => "player_medium",
            Fact::PlayerFar              => "player_far",
            Fact::GoodRobotNear          => "good_robot_near",
            Fact::GoodRobotMedium        => "good_robot_medium",
            Fact::GoodRobotFar           => "good_robot_far",
        }
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Rule ──────────────────────────────────────────────────────────────────────

/// A stateless grading function tagged with the fact it grades.
#[derive(Copy, Clone)]
pub struct Rule {
    pub fact: Fact,
    grade_fn: fn(&EntitySnapshot) -> f32,
}

impl Rule {
    pub const fn new(fact: Fact, grade_fn: fn(&EntitySnapshot) -> f32) -> Self {
        Self { fact, grade_fn }
    }

    #[inline]
    pub fn grade(&self, snapshot: &EntitySnapshot) -> f32 {
        (self.grade_fn)(snapshot)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("fact", &self.fact).finish_non_exhaustive()
    }
}

// ── RuleSet ───────────────────────────────────────────────────────────────────

/// The ordered rule list a robot evaluates.
#[derive(Clone, Debug)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// One rule per [`Fact`], in [`Fact::ALL`] order.
    pub fn standard() -> Self {
        Self {
            rules: vec![
                Rule::new(Fact::BadBotPercentageLow, |s| population_low(s.bad_bot_percentage)),
                Rule::new(Fact::BadBotPercentageMedium, |s| population_medium(s.bad_bot_percentage)),
                Rule::new(Fact::BadBotPercentageHigh, |s| population_high(s.bad_bot_percentage)),
                Rule::new(Fact::PlayerNear, |s| proximity_near(s.player_distance(), s.proximity_factor)),
                Rule::new(Fact::PlayerMedium, |s| proximity_medium(s.player_distance(), s.proximity_factor)),
                Rule::new(Fact::PlayerFar, |s| proximity_far(s.player_distance(), s.proximity_factor)),
                Rule::new(Fact::GoodRobotNear, |s| {
                    proximity_near(s.good_robot_distance(), s.proximity_factor)
                }),
                Rule::new(Fact::GoodRobotMedium, |s| {
                    proximity_medium(s.good_robot_distance(), s.proximity_factor)
                }),
                Rule::new(Fact::GoodRobotFar, |s| {
                    proximity_far(s.good_robot_distance(), s.proximity_factor)
                }),
            ],
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Grade every rule against `snapshot`.
    ///
    /// Facts with no rule in the set grade 0.
    pub fn evaluate(&self, snapshot: &EntitySnapshot) -> FactGrades {
        let mut grades = FactGrades::default();
        for rule in &self.rules {
            grades.set(rule.fact, rule.grade(snapshot));
        }
        grades
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}

// ── FactGrades ────────────────────────────────────────────────────────────────

/// One grade per [`Fact`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FactGrades([f32; Fact::COUNT]);

impl FactGrades {
    #[inline]
    pub fn get(&self, fact: Fact) -> f32 {
        self.0[fact.index()]
    }

    #[inline]
    pub fn set(&mut self, fact: Fact, grade: f32) {
        self.0[fact.index()] = grade;
    }

    /// `(fact, grade)` pairs in [`Fact::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Fact, f32)> + '_ {
        Fact::ALL.iter().map(|&f| (f, self.get(f)))
    }
}
