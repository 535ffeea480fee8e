//! Per-actor decision state: the state machine plus, for robots, the mandate.

use std::fmt;

use ra_brain::Mandate;
use ra_fsm::{MachineState, PlayerMachine, PlayerState, RobotMachine, RobotState};

/// A robot's machine, mandate and bookkeeping.
#[derive(Clone, Debug)]
pub struct RobotMind {
    pub machine:         RobotMachine,
    pub mandate:         Mandate,
    /// Seconds until this robot may land another hit.
    pub attack_cooldown: f32,
    /// The mandate the current steering behavior was built from.
    pub(crate) resolved: Option<Mandate>,
}

impl RobotMind {
    pub fn new(machine: RobotMachine, mandate: Mandate) -> Self {
        Self { machine, mandate, attack_cooldown: 0.0, resolved: None }
    }

    /// Force the steering behavior to be rebuilt on the next resolve phase.
    #[inline]
    pub(crate) fn invalidate(&mut self) {
        self.resolved = None;
    }
}

#[derive(Clone, Debug)]
pub enum ActorMind {
    Player(PlayerMachine),
    Robot(RobotMind),
}

/// Machine state of either actor type.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ActorState {
    Player(PlayerState),
    Robot(RobotState),
}

impl ActorState {
    pub fn name(self) -> &'static str {
        match self {
            ActorState::Player(s) => s.name(),
            ActorState::Robot(s)  => s.name(),
        }
    }
}

impl fmt::Display for ActorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl ActorMind {
    pub fn state(&self) -> ActorState {
        match self {
            ActorMind::Player(m) => ActorState::Player(m.state()),
            ActorMind::Robot(m)  => ActorState::Robot(m.machine.state()),
        }
    }

    /// Only players in play may be hunted.
    pub fn is_targetable(&self) -> bool {
        match self {
            ActorMind::Player(m) => m.state().is_targetable(),
            ActorMind::Robot(_)  => false,
        }
    }

    pub fn mandate(&self) -> Option<Mandate> {
        match self {
            ActorMind::Robot(m)  => Some(m.mandate),
            ActorMind::Player(_) => None,
        }
    }
}
