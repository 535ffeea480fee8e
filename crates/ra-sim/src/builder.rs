//! Fluent builder for constructing a [`Sim`].

use ra_actor::ActorStore;
use ra_brain::{FuzzyBrain, Mandate, MandateResolver};
use ra_core::{ActorId, ActorKind, Alignment, RaError, SimConfig, Tuning};
use ra_fsm::{AnimationRegistry, AnimationSetKey, PlayerMachine, RobotMachine, RobotState};
use ra_level::{Level, LevelError};
use ra_steer::{SteerAgent, SteerStore, SteeringEngine};

use crate::mind::{ActorMind, RobotMind};
use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`] — tick duration, total ticks, rule cadence, …
/// - [`Tuning`] — every gameplay constant
/// - [`Level`] — proximity factor and patrol paths
/// - [`ActorStore`] — from [`ra_actor::ActorStoreBuilder`]
///
/// # Optional inputs (have defaults)
///
/// | Method             | Default                               |
/// |--------------------|---------------------------------------|
/// | `.animations(r)`   | `AnimationRegistry::with_defaults()`  |
/// | `.brain(b)`        | `FuzzyBrain::default()` (standard rules) |
///
/// # Validation
///
/// `build` rejects scenes the tick loop cannot run: a zero tick duration or
/// rule interval, an actor without charge, a robot without alignment or
/// patrol assignment, a patrol path the level does not have, or an actor
/// whose animation set is not loaded.  Robots are checked for both
/// alignments' paths and sets since a flip can switch at any time.
pub struct SimBuilder {
    config:     SimConfig,
    tuning:     Tuning,
    level:      Level,
    actors:     ActorStore,
    animations: Option<AnimationRegistry>,
    brain:      Option<FuzzyBrain>,
}

impl SimBuilder {
    pub fn new(config: SimConfig, tuning: Tuning, level: Level, actors: ActorStore) -> Self {
        Self { config, tuning, level, actors, animations: None, brain: None }
    }

    pub fn animations(mut self, registry: AnimationRegistry) -> Self {
        self.animations = Some(registry);
        self
    }

    pub fn brain(mut self, brain: FuzzyBrain) -> Self {
        self.brain = Some(brain);
        self
    }

    /// Validate inputs, create machines and steering agents, and return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        if !(self.config.tick_duration_secs > 0.0) {
            return Err(SimError::Config(format!(
                "tick_duration_secs must be positive, got {}",
                self.config.tick_duration_secs
            )));
        }
        if self.config.rules_update_interval_ticks == 0 {
            return Err(SimError::Config("rules_update_interval_ticks must be at least 1".into()));
        }

        let animations = self.animations.unwrap_or_else(AnimationRegistry::with_defaults);
        let actors = &self.actors;
        let robot = &self.tuning.robot;
        let player = &self.tuning.player;

        let mut minds  = Vec::with_capacity(actors.count);
        let mut agents = Vec::with_capacity(actors.count);

        for actor in actors.actor_ids() {
            let i = actor.index();
            let kind = actors.kind[i];
            let position = actors.position[i];

            if actors.charge[i].is_none() {
                return Err(missing(actor, "charge"));
            }

            if kind == ActorKind::Player {
                require_animation(&animations, actor, AnimationSetKey::new(kind, None))?;
                minds.push(ActorMind::Player(PlayerMachine::new()));
                agents.push(
                    SteerAgent::new(position, player.agent_radius, player.agent_mass)
                        .with_limits(player.movement_speed, 0.0),
                );
                continue;
            }

            let alignment = actors.alignment[i].ok_or_else(|| missing(actor, "alignment"))?;
            let patrol = actors.patrol[i].ok_or_else(|| missing(actor, "patrol assignment"))?;
            for path in [patrol.good, patrol.bad] {
                if !self.level.contains(path) {
                    return Err(LevelError::PathNotFound(path).into());
                }
            }
            for a in [Alignment::Good, Alignment::Bad] {
                require_animation(&animations, actor, AnimationSetKey::new(kind, Some(a)))?;
            }

            let (max_speed, max_accel) = robot.limits(alignment.is_good());
            minds.push(ActorMind::Robot(RobotMind::new(
                RobotMachine::new(RobotState::AgentControlled),
                Mandate::patrol_for(alignment),
            )));
            agents.push(
                SteerAgent::new(position, robot.agent_radius, robot.agent_mass)
                    .with_limits(max_speed, max_accel),
            );
        }

        let count = actors.count;
        Ok(Sim {
            clock:          self.config.make_clock(),
            config:         self.config,
            engine:         SteeringEngine::new(self.tuning.steering.max_prediction_time),
            resolver:       MandateResolver::new(self.tuning.steering.clone()),
            brain:          self.brain.unwrap_or_default(),
            tuning:         self.tuning,
            level:          self.level,
            actors:         self.actors,
            minds,
            steer:          SteerStore::new(agents),
            animations,
            last_animation: vec![None; count],
            last_snapshot:  None,
        })
    }
}

fn missing(actor: ActorId, component: &'static str) -> SimError {
    RaError::MissingComponent { actor, component }.into()
}

fn require_animation(
    registry: &AnimationRegistry,
    actor:    ActorId,
    key:      AnimationSetKey,
) -> SimResult<()> {
    if registry.contains(&key) { Ok(()) } else { Err(missing(actor, "animation set")) }
}
