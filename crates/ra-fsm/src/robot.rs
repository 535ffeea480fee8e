//! Robot lifecycle.

use ra_brain::Mandate;
use ra_core::{Alignment, RobotTuning};
use ra_steer::SteerAgent;
use tracing::debug;

use crate::machine::{MachineState, StateMachine, Transition};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RobotState {
    /// Mandate steering drives the robot.
    AgentControlled,
    /// Stunned after turning bad.
    Zapped,
    /// Flying robots only, after turning good.
    Blast,
}

impl MachineState for RobotState {
    fn can_enter(self, next: Self) -> bool {
        self != next
    }

    fn name(self) -> &'static str {
        match self {
            RobotState::AgentControlled => "agent_controlled",
            RobotState::Zapped          => "zapped",
            RobotState::Blast           => "blast",
        }
    }
}

/// What happened during one [`RobotMachine::update`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RobotUpdate {
    pub transition:       Option<Transition<RobotState>>,
    /// Set when a finished return replaced the mandate with a patrol.
    pub previous_mandate: Option<Mandate>,
}

/// A robot's state machine.
#[derive(Clone, Debug)]
pub struct RobotMachine {
    machine: StateMachine<RobotState>,
}

impl RobotMachine {
    pub fn new(initial: RobotState) -> Self {
        Self { machine: StateMachine::new(initial) }
    }

    #[inline]
    pub fn state(&self) -> RobotState {
        self.machine.state()
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.machine.elapsed()
    }

    /// `true` while the steering agent, not the render pose, owns motion.
    #[inline]
    pub fn is_agent_driven(&self) -> bool {
        self.machine.state() == RobotState::AgentControlled
    }

    /// Request a transition.  Returns `false` if it was rejected.
    pub fn request(&mut self, next: RobotState) -> bool {
        self.machine.enter(next).is_some()
    }

    /// Enter `next` regardless of the current state.
    pub fn force_enter(&mut self, next: RobotState) -> Transition<RobotState> {
        let t = self.machine.force_enter(next);
        debug!(from = t.from.name(), to = t.to.name(), "robot state forced");
        t
    }

    /// Advance timers and consume the current mandate.
    ///
    /// Timed states fall back to `AgentControlled`.  While agent-controlled,
    /// a robot that has reached its return point switches to the patrol
    /// mandate of its alignment.
    pub fn update(
        &mut self,
        dt:        f32,
        mandate:   &mut Mandate,
        agent:     &SteerAgent,
        alignment: Alignment,
        tuning:    &RobotTuning,
    ) -> RobotUpdate {
        self.machine.advance(dt);
        let mut out = RobotUpdate::default();

        let limit = match self.machine.state() {
            RobotState::Zapped => Some(tuning.zapped_duration),
            RobotState::Blast  => Some(tuning.blast_duration),
            RobotState::AgentControlled => None,
        };
        if let Some(limit) = limit {
            if self.machine.elapsed() > limit {
                out.transition = self.machine.enter(RobotState::AgentControlled);
                if let Some(t) = out.transition {
                    debug!(from = t.from.name(), to = t.to.name(), "robot state");
                }
            }
            return out;
        }

        if let Mandate::ReturnToPositionOnPath(point) = *mandate {
            if agent.position.distance(point) <= tuning.return_arrival_threshold {
                out.previous_mandate = Some(*mandate);
                *mandate = Mandate::patrol_for(alignment);
            }
        }
        out
    }
}
