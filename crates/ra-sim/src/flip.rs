//! Alignment flips.
//!
//! A flip is not a machine state.  It rewires a robot in one step:
//!
//! | Aspect        | To bad                          | To good                                |
//! |---------------|---------------------------------|----------------------------------------|
//! | mandate       | return to closest bad-path point | return to closest good-path point     |
//! | charge        | filled                          | drained                                |
//! | speed / accel | `max_*_bad`                     | `max_*_good`                           |
//! | machine       | forced into `Zapped`            | `Blast` (flying) or `AgentControlled`  |
//!
//! The animation set follows the alignment, so the next presentation pass
//! requests clips from the new set.

use ra_brain::Mandate;
use ra_core::{ActorId, ActorKind, Alignment, RaError, Tick};
use ra_fsm::RobotState;
use tracing::info;

use crate::mind::{ActorMind, ActorState};
use crate::{Sim, SimObserver, SimResult};

impl Sim {
    /// Flip `actor` to the opposite alignment.
    ///
    /// Any in-flight return point is discarded; the new return point is the
    /// closest point on the new alignment's patrol path.
    pub fn flip_alignment<O: SimObserver>(
        &mut self,
        actor:    ActorId,
        now:      Tick,
        observer: &mut O,
    ) -> SimResult<Alignment> {
        let i = actor.index();
        let alignment = self
            .actors
            .alignment
            .get(i)
            .copied()
            .flatten()
            .ok_or(RaError::MissingComponent { actor, component: "alignment" })?;
        let patrol = self.actors.patrol[i]
            .ok_or(RaError::MissingComponent { actor, component: "patrol assignment" })?;
        let ActorMind::Robot(mind) = &mut self.minds[i] else {
            return Err(RaError::MissingComponent { actor, component: "robot state machine" }.into());
        };

        let to = alignment.flipped();
        let position = self.actors.position[i];
        let point = self.resolver.return_point(to, position, patrol, &self.level)?;

        self.actors.alignment[i] = Some(to);

        let from_mandate = std::mem::replace(&mut mind.mandate, Mandate::ReturnToPositionOnPath(point));
        mind.invalidate();
        mind.attack_cooldown = 0.0;

        if let Some(charge) = self.actors.charge[i].as_mut() {
            match to {
                Alignment::Bad  => charge.fill(),
                Alignment::Good => charge.drain(),
            }
        }

        let (max_speed, max_accel) = self.tuning.robot.limits(to.is_good());
        self.steer.agent_mut(actor)?.set_limits(max_speed, max_accel);

        let next = match (to, self.actors.kind[i]) {
            (Alignment::Bad, _)                    => RobotState::Zapped,
            (Alignment::Good, ActorKind::FlyingBot) => RobotState::Blast,
            (Alignment::Good, _)                   => RobotState::AgentControlled,
        };
        let t = mind.machine.force_enter(next);

        info!(actor = %actor, to = to.as_str(), state = ?next, "alignment flipped");
        observer.on_alignment_flipped(now, actor, to);
        observer.on_mandate_changed(now, actor, from_mandate, mind.mandate);
        if t.from != t.to {
            observer.on_state_changed(now, actor, ActorState::Robot(t.from), ActorState::Robot(t.to));
        }
        Ok(to)
    }
}
