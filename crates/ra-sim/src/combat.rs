//! Contact hits and the player's beam.
//!
//! Both phases collect candidates first and apply them afterwards in actor-id
//! order, so no actor sees another's partial update.

use ra_core::{ActorId, RaError, Tick};
use ra_fsm::PlayerState;
use tracing::debug;

use crate::mind::{ActorMind, ActorState};
use crate::{Sim, SimObserver, SimResult};

/// Counters for one combat phase.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CombatOutcome {
    pub hits:  usize,
    pub flips: usize,
}

impl Sim {
    pub(crate) fn resolve_combat<O: SimObserver>(
        &mut self,
        now:      Tick,
        dt:       f32,
        observer: &mut O,
    ) -> SimResult<CombatOutcome> {
        let mut out = CombatOutcome::default();

        // ── Contacts ──────────────────────────────────────────────────────
        for (robot, target) in self.contact_candidates(dt) {
            if self.actors.is_player(target) {
                if self.hit_player(robot, target, now, observer)? {
                    out.hits += 1;
                    self.reset_cooldown(robot);
                }
            } else if self.actors.is_good_robot(target) {
                debug!(robot = %robot, target = %target, "contact converts robot");
                self.flip_alignment(target, now, observer)?;
                out.flips += 1;
                self.reset_cooldown(robot);
            }
        }

        // ── Beam ──────────────────────────────────────────────────────────
        let drain = self.tuning.player.beam_drain_per_second * dt;
        for target in self.beam_targets() {
            let Some(charge) = self.actors.charge[target.index()].as_mut() else { continue };
            charge.lose(drain);
            if !charge.has_charge() && self.actors.is_bad_robot(target) {
                self.flip_alignment(target, now, observer)?;
                out.flips += 1;
            }
        }

        Ok(out)
    }

    /// Bad, agent-driven robots off cooldown whose hunt target is touching.
    fn contact_candidates(&mut self, dt: f32) -> Vec<(ActorId, ActorId)> {
        let reach = self.tuning.robot.attack_reach;
        let mut candidates = Vec::new();
        for i in 0..self.actors.count {
            let robot = ActorId(i as u32);
            let ActorMind::Robot(mind) = &mut self.minds[i] else { continue };
            mind.attack_cooldown = (mind.attack_cooldown - dt).max(0.0);
            if !self.actors.is_bad_robot(robot)
                || !mind.machine.is_agent_driven()
                || mind.attack_cooldown > 0.0
            {
                continue;
            }
            let Some(target) = mind.mandate.hunt_target() else { continue };
            let (Some(a), Some(b)) = (self.steer.agents.get(i), self.steer.agents.get(target.index()))
            else {
                continue;
            };
            if a.position.distance(b.position) <= a.radius + b.radius + reach {
                candidates.push((robot, target));
            }
        }
        candidates
    }

    /// Bad robots inside the beam of a controlled player, once per beam.
    fn beam_targets(&self) -> Vec<ActorId> {
        let range = self.tuning.player.beam_range;
        self.actors
            .players()
            .filter(|p| {
                matches!(&self.minds[p.index()], ActorMind::Player(m) if m.state() == PlayerState::PlayerControlled)
            })
            .filter_map(|p| {
                let input = self.actors.input[p.index()];
                let target = input.beam_target.filter(|_| input.enabled)?;
                (self.actors.contains(target)
                    && self.actors.is_bad_robot(target)
                    && self.actors.distance(p, target) <= range)
                    .then_some(target)
            })
            .collect()
    }

    /// Land a hit on a controlled player.  Returns `false` if the player is
    /// not in a state that can be hit.
    fn hit_player<O: SimObserver>(
        &mut self,
        robot:    ActorId,
        player:   ActorId,
        now:      Tick,
        observer: &mut O,
    ) -> SimResult<bool> {
        let i = player.index();
        let ActorMind::Player(machine) = &mut self.minds[i] else { return Ok(false) };
        if machine.state() != PlayerState::PlayerControlled {
            return Ok(false);
        }
        let charge = self.actors.charge[i]
            .as_mut()
            .ok_or(RaError::MissingComponent { actor: player, component: "charge" })?;
        let lost = charge.lose(self.tuning.robot.charge_loss_per_contact);
        debug!(robot = %robot, player = %player, lost, remaining = charge.current(), "contact hit");
        if let Some(t) = machine.on_charge_lost(charge, &mut self.actors.input[i]) {
            observer.on_state_changed(now, player, ActorState::Player(t.from), ActorState::Player(t.to));
        }
        Ok(true)
    }

    fn reset_cooldown(&mut self, robot: ActorId) {
        if let Some(ActorMind::Robot(mind)) = self.minds.get_mut(robot.index()) {
            mind.attack_cooldown = self.tuning.robot.attack_cooldown;
        }
    }
}
