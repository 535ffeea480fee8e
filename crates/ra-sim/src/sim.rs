//! The `Sim` struct and its tick loop.

use ra_actor::{ActorStore, PlayerInput};
use ra_brain::{FuzzyBrain, LevelStateSnapshot, Mandate, MandateResolver};
use ra_core::geo::heading_of;
use ra_core::{ActorId, Alignment, RaError, SimClock, SimConfig, Tick, Tuning, Vec2};
use ra_fsm::animation::{player_animation, robot_animation};
use ra_fsm::{AnimationRegistry, AnimationRequest, AnimationSetKey, PlayerState};
use ra_level::Level;
use ra_steer::{SteerStore, SteeringEngine};
use tracing::{debug, trace};

use crate::mind::{ActorMind, ActorState};
use crate::{SimObserver, SimResult, TickSummary};

/// The main simulation runner.
///
/// Holds every piece of per-level state and drives the tick pipeline
/// described in the crate docs.  Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    pub config: SimConfig,

    pub clock: SimClock,

    pub tuning: Tuning,

    /// Proximity factor and patrol paths.
    pub level: Level,

    /// Render pose and components, indexed by `ActorId`.  External code may
    /// move actors that are not agent-driven between ticks.
    pub actors: ActorStore,

    /// State machine (and mandate, for robots) per actor.
    pub minds: Vec<ActorMind>,

    /// One steering agent per actor.
    pub steer: SteerStore,

    pub engine: SteeringEngine,

    pub brain: FuzzyBrain,

    pub resolver: MandateResolver,

    pub animations: AnimationRegistry,

    pub(crate) last_animation: Vec<Option<AnimationRequest>>,
    pub(crate) last_snapshot:  Option<LevelStateSnapshot>,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick to `config.end_tick()`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.clock.current_tick < self.config.end_tick() {
            self.step(observer)?;
        }
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Run one tick and advance the clock.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<TickSummary> {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        let summary = self.process_tick(now, observer)?;
        observer.on_tick_end(now, &summary);
        if now.is_every(self.config.output_interval_ticks) {
            observer.on_snapshot(now, &self.actors, &self.minds);
        }
        self.clock.advance();
        Ok(summary)
    }

    pub fn mandate(&self, actor: ActorId) -> Option<Mandate> {
        self.minds.get(actor.index()).and_then(ActorMind::mandate)
    }

    pub fn state(&self, actor: ActorId) -> Option<ActorState> {
        self.minds.get(actor.index()).map(ActorMind::state)
    }

    pub fn is_targetable(&self, actor: ActorId) -> bool {
        self.minds.get(actor.index()).is_some_and(ActorMind::is_targetable)
    }

    /// The snapshot from the most recent rule evaluation.
    pub fn last_snapshot(&self) -> Option<&LevelStateSnapshot> {
        self.last_snapshot.as_ref()
    }

    /// Store the input collaborator's latest report for a player.
    ///
    /// `enabled` belongs to the player's machine, so the reported value is
    /// ignored and the current one kept.
    pub fn set_input(&mut self, actor: ActorId, input: PlayerInput) -> SimResult<()> {
        let slot = self.actors.input.get_mut(actor.index()).ok_or(RaError::ActorNotFound(actor))?;
        *slot = PlayerInput { enabled: slot.enabled, ..input };
        Ok(())
    }

    /// Ask a player's machine to move to `next`.  Returns `false` when the
    /// request is not allowed from the current state or `actor` is not a
    /// player.
    pub fn request_player_state(&mut self, actor: ActorId, next: PlayerState) -> bool {
        let i = actor.index();
        match self.minds.get_mut(i) {
            Some(ActorMind::Player(machine)) => machine.request(next, &mut self.actors.input[i]),
            _ => false,
        }
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<TickSummary> {
        let dt = self.clock.tick_duration_secs;
        let mut summary = TickSummary { tick: now, ..Default::default() };

        // ── ① Rules ───────────────────────────────────────────────────────
        if now.is_every(self.config.rules_update_interval_ticks) {
            self.evaluate_rules(now, observer)?;
            summary.evaluated = true;
        }

        // ── ② Input ───────────────────────────────────────────────────────
        self.move_players(dt);

        // ── ③ Pose → agent ────────────────────────────────────────────────
        self.sync_agents_from_pose(dt);

        // ── ④ Machines ────────────────────────────────────────────────────
        self.update_machines(now, dt, observer)?;

        // ── ⑤ Resolve ─────────────────────────────────────────────────────
        self.resolve_steering()?;

        // ── ⑥ Steer + ⑦ agent → pose ──────────────────────────────────────
        self.engine.step(&mut self.steer, dt);
        self.sync_pose_from_agents();

        // ── ⑧ Combat ──────────────────────────────────────────────────────
        let combat = self.resolve_combat(now, dt, observer)?;
        summary.hits = combat.hits;
        summary.flips = combat.flips;

        // ── ⑨ Present ─────────────────────────────────────────────────────
        self.emit_animations(now, observer)?;
        if self.config.debug_draw {
            self.emit_debug_paths(now, observer)?;
        }

        summary.bad_bot_percentage = self.actors.bad_bot_percentage();
        summary.hunting = self
            .minds
            .iter()
            .filter(|m| matches!(m.mandate(), Some(Mandate::HuntAgent(_))))
            .count();
        Ok(summary)
    }

    /// Move controlled players by their input and face them along it, or
    /// toward their beam target when they have one.
    fn move_players(&mut self, dt: f32) {
        let speed = self.tuning.player.movement_speed;
        for i in 0..self.actors.count {
            let ActorMind::Player(machine) = &self.minds[i] else { continue };
            let input = self.actors.input[i];
            if !machine.state().accepts_input() || !input.enabled {
                continue;
            }
            self.actors.position[i] += input.movement.clamp_length_max(1.0) * speed * dt;

            let facing = input
                .beam_target
                .and_then(|t| self.actors.position.get(t.index()).copied())
                .map(|t| t - self.actors.position[i])
                .unwrap_or(input.movement);
            if let Some(heading) = heading_of(facing) {
                self.actors.rotation[i] = heading;
            }
        }
    }

    fn sync_agents_from_pose(&mut self, dt: f32) {
        for i in 0..self.actors.count {
            if !self.is_agent_driven(i) {
                self.steer.agents[i].follow_pose(self.actors.position[i], self.actors.rotation[i], dt);
            }
        }
    }

    fn sync_pose_from_agents(&mut self) {
        for i in 0..self.actors.count {
            if self.is_agent_driven(i) {
                let agent = &self.steer.agents[i];
                self.actors.position[i] = agent.position;
                self.actors.rotation[i] = agent.rotation;
            }
        }
    }

    #[inline]
    fn is_agent_driven(&self, i: usize) -> bool {
        matches!(&self.minds[i], ActorMind::Robot(m) if m.machine.is_agent_driven())
    }

    /// Build the snapshot from the poses the previous tick ended with and let
    /// every bad robot pick its mandate.
    ///
    /// A return point that moved no further than the arrival threshold keeps
    /// the current mandate, so a returning robot is not re-steered each tick.
    fn evaluate_rules<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<()> {
        let targetable: Vec<bool> = self.minds.iter().map(ActorMind::is_targetable).collect();
        let snapshot =
            LevelStateSnapshot::build(&self.actors, &targetable, self.level.proximity_factor());

        for i in 0..self.actors.count {
            let actor = ActorId(i as u32);
            if !self.actors.is_bad_robot(actor) {
                continue;
            }
            let ActorMind::Robot(mind) = &mut self.minds[i] else { continue };
            let Some(own) = snapshot.get(actor) else { continue };

            let patrol = self.actors.patrol[i]
                .ok_or(RaError::MissingComponent { actor, component: "patrol assignment" })?;
            let position = self.actors.position[i];
            let eval = self.brain.evaluate(own, &mind.mandate, || {
                self.resolver.return_point(Alignment::Bad, position, patrol, &self.level)
            })?;
            trace!(actor = %actor, grades = ?eval.grades, "rules evaluated");

            let next = eval.mandate;
            let drift_only = matches!(
                (mind.mandate, next),
                (Mandate::ReturnToPositionOnPath(old), Mandate::ReturnToPositionOnPath(new))
                    if old.distance(new) <= self.tuning.robot.return_arrival_threshold
            );
            if next != mind.mandate && !drift_only {
                let from = std::mem::replace(&mut mind.mandate, next);
                debug!(actor = %actor, from = %from, to = %next, "mandate changed");
                observer.on_mandate_changed(now, actor, from, next);
            }
        }

        self.last_snapshot = Some(snapshot);
        Ok(())
    }

    fn update_machines<O: SimObserver>(&mut self, now: Tick, dt: f32, observer: &mut O) -> SimResult<()> {
        for i in 0..self.actors.count {
            let actor = ActorId(i as u32);
            match &mut self.minds[i] {
                ActorMind::Player(machine) => {
                    let charge = self.actors.charge[i]
                        .as_mut()
                        .ok_or(RaError::MissingComponent { actor, component: "charge" })?;
                    let input = &mut self.actors.input[i];
                    if let Some(t) = machine.update(dt, charge, input, &self.tuning.player) {
                        observer.on_state_changed(now, actor, ActorState::Player(t.from), ActorState::Player(t.to));
                    }
                }
                ActorMind::Robot(mind) => {
                    let alignment = self.actors.alignment[i]
                        .ok_or(RaError::MissingComponent { actor, component: "alignment" })?;
                    let out = mind.machine.update(
                        dt,
                        &mut mind.mandate,
                        &self.steer.agents[i],
                        alignment,
                        &self.tuning.robot,
                    );
                    if let Some(t) = out.transition {
                        observer.on_state_changed(now, actor, ActorState::Robot(t.from), ActorState::Robot(t.to));
                    }
                    if let Some(from) = out.previous_mandate {
                        debug!(actor = %actor, to = %mind.mandate, "returned to patrol path");
                        observer.on_mandate_changed(now, actor, from, mind.mandate);
                    }
                    debug_assert!(
                        mind.mandate.is_consistent_with(alignment),
                        "{actor} patrols the wrong path: {}",
                        mind.mandate
                    );
                }
            }
        }
        Ok(())
    }

    /// Rebuild steering behaviors for robots whose mandate changed and
    /// switch agents on or off by machine state.
    fn resolve_steering(&mut self) -> SimResult<()> {
        for i in 0..self.actors.count {
            let actor = ActorId(i as u32);
            let ActorMind::Robot(mind) = &mut self.minds[i] else { continue };
            self.steer.set_active(actor, mind.machine.is_agent_driven())?;
            if mind.resolved == Some(mind.mandate) {
                continue;
            }
            let patrol = self.actors.patrol[i]
                .ok_or(RaError::MissingComponent { actor, component: "patrol assignment" })?;
            let behavior =
                self.resolver.behavior(&mind.mandate, self.steer.agents[i].position, patrol, &self.level)?;
            debug!(actor = %actor, behavior = behavior.name(), "steering resolved");
            self.steer.set_behavior(actor, behavior)?;
            mind.resolved = Some(mind.mandate);
        }
        Ok(())
    }

    fn emit_animations<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<()> {
        for i in 0..self.actors.count {
            let actor = ActorId(i as u32);
            let set = AnimationSetKey::new(self.actors.kind[i], self.actors.alignment[i]);
            if !self.animations.contains(&set) {
                return Err(RaError::MissingComponent { actor, component: "animation set" }.into());
            }
            let rotation = self.actors.rotation[i];
            let (state, direction) = match &self.minds[i] {
                ActorMind::Player(m) => {
                    let input = self.actors.input[i];
                    let movement =
                        if m.state().accepts_input() && input.enabled { input.movement } else { Vec2::ZERO };
                    player_animation(m.state(), movement, rotation)
                }
                ActorMind::Robot(m) => robot_animation(m.machine.state(), self.steer.agents[i].velocity, rotation),
            };
            let request = AnimationRequest { state, direction, set };
            if self.last_animation[i] != Some(request) {
                self.last_animation[i] = Some(request);
                observer.on_animation(now, actor, &request);
            }
        }
        Ok(())
    }

    fn emit_debug_paths<O: SimObserver>(&self, now: Tick, observer: &mut O) -> SimResult<()> {
        for i in 0..self.actors.count {
            let actor = ActorId(i as u32);
            let ActorMind::Robot(mind) = &self.minds[i] else { continue };
            let Some(patrol) = self.actors.patrol[i] else { continue };
            let target = mind
                .mandate
                .hunt_target()
                .and_then(|t| self.actors.position.get(t.index()).copied());
            let path = self
                .resolver
                .debug_path(&mind.mandate, self.actors.position[i], target, patrol, &self.level)?;
            observer.on_debug_path(now, actor, &path);
        }
        Ok(())
    }
}
