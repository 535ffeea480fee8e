//! The `SteerStore` — one steering agent and behavior per actor.

use ra_core::ActorId;

use crate::{SteerAgent, SteerError, SteerResult, SteeringBehavior};

/// Steering state for every actor, indexed by `ActorId`.
///
/// `active[i]` says whether the engine integrates actor `i` this tick.  The
/// simulation toggles it from the actor's state machine: a robot is active
/// only while agent-controlled, players are never active.
pub struct SteerStore {
    pub agents:    Vec<SteerAgent>,
    pub behaviors: Vec<SteeringBehavior>,
    pub active:    Vec<bool>,
}

impl SteerStore {
    pub fn new(agents: Vec<SteerAgent>) -> Self {
        let n = agents.len();
        Self {
            agents,
            behaviors: vec![SteeringBehavior::Idle; n],
            active:    vec![false; n],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn agent(&self, actor: ActorId) -> SteerResult<&SteerAgent> {
        self.agents.get(actor.index()).ok_or(SteerError::AgentNotFound(actor))
    }

    pub fn agent_mut(&mut self, actor: ActorId) -> SteerResult<&mut SteerAgent> {
        self.agents.get_mut(actor.index()).ok_or(SteerError::AgentNotFound(actor))
    }

    pub fn behavior(&self, actor: ActorId) -> SteerResult<&SteeringBehavior> {
        self.behaviors.get(actor.index()).ok_or(SteerError::AgentNotFound(actor))
    }

    /// Replace the behavior of `actor`.
    pub fn set_behavior(&mut self, actor: ActorId, behavior: SteeringBehavior) -> SteerResult<()> {
        let slot = self
            .behaviors
            .get_mut(actor.index())
            .ok_or(SteerError::AgentNotFound(actor))?;
        *slot = behavior;
        Ok(())
    }

    pub fn set_active(&mut self, actor: ActorId, active: bool) -> SteerResult<()> {
        let slot = self.active.get_mut(actor.index()).ok_or(SteerError::AgentNotFound(actor))?;
        *slot = active;
        Ok(())
    }

    #[inline]
    pub fn is_active(&self, actor: ActorId) -> bool {
        self.active.get(actor.index()).copied().unwrap_or(false)
    }
}
