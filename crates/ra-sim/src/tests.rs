//! Integration tests for the tick loop.

use ra_actor::{ActorStore, ActorStoreBuilder, PatrolAssignment, PlayerInput};
use ra_brain::{DebugPath, Mandate};
use ra_core::{ActorId, ActorKind, Alignment, PathId, SimConfig, Tick, Tuning, Vec2};
use ra_fsm::AnimationRequest;
use ra_level::{Level, PatrolPath};

use crate::{ActorState, Sim, SimBuilder, SimObserver};

const GOOD_PATH: PathId = PathId(0);
const BAD_PATH: PathId = PathId(1);
const PATHS: PatrolAssignment = PatrolAssignment { good: GOOD_PATH, bad: BAD_PATH };

fn square(center: Vec2, half: f32) -> PatrolPath {
    PatrolPath::new(vec![
        center + Vec2::new(-half, -half),
        center + Vec2::new(half, -half),
        center + Vec2::new(half, half),
        center + Vec2::new(-half, half),
    ])
}

fn level(proximity_factor: f32) -> Level {
    Level::new(
        proximity_factor,
        vec![square(Vec2::new(0.0, -4000.0), 100.0), square(Vec2::new(0.0, 4000.0), 100.0)],
    )
    .unwrap()
}

fn config() -> SimConfig {
    SimConfig { total_ticks: 60, ..SimConfig::default() }
}

fn build(config: SimConfig, tuning: Tuning, level: Level, actors: ActorStore) -> Sim {
    SimBuilder::new(config, tuning, level, actors).build().unwrap()
}

/// Player at `player`, one bad robot at the origin, good robots at `goods`.
fn scene(tuning: &Tuning, player: Vec2, goods: &[Vec2]) -> ActorStore {
    let mut b = ActorStoreBuilder::new(tuning)
        .player(player)
        .robot(ActorKind::GroundBot, Alignment::Bad, Vec2::ZERO, PATHS);
    for &g in goods {
        b = b.robot(ActorKind::GroundBot, Alignment::Good, g, PATHS);
    }
    b.build()
}

const PLAYER: ActorId = ActorId(0);
const BAD: ActorId = ActorId(1);

/// Records every observer callback.
#[derive(Default)]
struct Recorder {
    mandates:   Vec<(ActorId, Mandate, Mandate)>,
    states:     Vec<(ActorId, ActorState, ActorState)>,
    flips:      Vec<(ActorId, Alignment)>,
    animations: Vec<(ActorId, AnimationRequest)>,
    debug:      Vec<(ActorId, DebugPath)>,
    snapshots:  usize,
    ended:      Option<Tick>,
}

impl SimObserver for Recorder {
    fn on_mandate_changed(&mut self, _: Tick, actor: ActorId, from: Mandate, to: Mandate) {
        self.mandates.push((actor, from, to));
    }
    fn on_state_changed(&mut self, _: Tick, actor: ActorId, from: ActorState, to: ActorState) {
        self.states.push((actor, from, to));
    }
    fn on_alignment_flipped(&mut self, _: Tick, actor: ActorId, to: Alignment) {
        self.flips.push((actor, to));
    }
    fn on_animation(&mut self, _: Tick, actor: ActorId, request: &AnimationRequest) {
        self.animations.push((actor, *request));
    }
    fn on_debug_path(&mut self, _: Tick, actor: ActorId, path: &DebugPath) {
        self.debug.push((actor, path.clone()));
    }
    fn on_snapshot(&mut self, _: Tick, _: &ActorStore, _: &[crate::ActorMind]) {
        self.snapshots += 1;
    }
    fn on_sim_end(&mut self, tick: Tick) {
        self.ended = Some(tick);
    }
}

#[cfg(test)]
mod builder {
    use ra_core::RaError;
    use ra_fsm::AnimationRegistry;
    use ra_level::LevelError;

    use super::*;
    use crate::SimError;

    #[test]
    fn robots_start_on_their_patrol() {
        let tuning = Tuning::default();
        let actors = scene(&tuning, Vec2::new(500.0, 0.0), &[Vec2::new(0.0, 900.0)]);
        let sim = build(config(), tuning, level(300.0), actors);
        assert_eq!(sim.mandate(BAD), Some(Mandate::FollowBadPatrolPath));
        assert_eq!(sim.mandate(ActorId(2)), Some(Mandate::FollowGoodPatrolPath));
        assert_eq!(sim.mandate(PLAYER), None);
        assert_eq!(sim.state(PLAYER).map(ActorState::name), Some("appear"));
    }

    #[test]
    fn agents_use_alignment_limits() {
        let tuning = Tuning::default();
        let actors = scene(&tuning, Vec2::new(500.0, 0.0), &[Vec2::new(0.0, 900.0)]);
        let sim = build(config(), tuning.clone(), level(300.0), actors);
        assert_eq!(sim.steer.agents[BAD.index()].max_speed, tuning.robot.max_speed_bad);
        assert_eq!(sim.steer.agents[2].max_speed, tuning.robot.max_speed_good);
    }

    #[test]
    fn player_agent_uses_player_mass() {
        let mut tuning = Tuning::default();
        tuning.player.agent_mass = 0.7;
        let actors = scene(&tuning, Vec2::new(500.0, 0.0), &[]);
        let sim = build(config(), tuning.clone(), level(300.0), actors);
        assert_eq!(sim.steer.agents[PLAYER.index()].mass, 0.7);
        assert_eq!(sim.steer.agents[BAD.index()].mass, tuning.robot.agent_mass);
    }

    #[test]
    fn zero_rule_interval_rejected() {
        let tuning = Tuning::default();
        let actors = scene(&tuning, Vec2::ZERO, &[]);
        let cfg = SimConfig { rules_update_interval_ticks: 0, ..config() };
        let err = SimBuilder::new(cfg, tuning, level(300.0), actors).build().err();
        assert!(matches!(err, Some(SimError::Config(_))));
    }

    #[test]
    fn zero_tick_duration_rejected() {
        let tuning = Tuning::default();
        let actors = scene(&tuning, Vec2::ZERO, &[]);
        let cfg = SimConfig { tick_duration_secs: 0.0, ..config() };
        let err = SimBuilder::new(cfg, tuning, level(300.0), actors).build().err();
        assert!(matches!(err, Some(SimError::Config(_))));
    }

    #[test]
    fn missing_charge_rejected() {
        let tuning = Tuning::default();
        let mut actors = scene(&tuning, Vec2::ZERO, &[]);
        actors.charge[BAD.index()] = None;
        let err = SimBuilder::new(config(), tuning, level(300.0), actors).build().err();
        assert!(matches!(
            err,
            Some(SimError::Core(RaError::MissingComponent { actor: BAD, component: "charge" }))
        ));
    }

    #[test]
    fn missing_patrol_rejected() {
        let tuning = Tuning::default();
        let mut actors = scene(&tuning, Vec2::ZERO, &[]);
        actors.patrol[BAD.index()] = None;
        let err = SimBuilder::new(config(), tuning, level(300.0), actors).build().err();
        assert!(matches!(
            err,
            Some(SimError::Core(RaError::MissingComponent { component: "patrol assignment", .. }))
        ));
    }

    #[test]
    fn unknown_patrol_path_rejected() {
        let tuning = Tuning::default();
        let mut actors = scene(&tuning, Vec2::ZERO, &[]);
        actors.patrol[BAD.index()] = Some(PatrolAssignment { good: GOOD_PATH, bad: PathId(7) });
        let err = SimBuilder::new(config(), tuning, level(300.0), actors).build().err();
        assert!(matches!(err, Some(SimError::Level(LevelError::PathNotFound(PathId(7))))));
    }

    #[test]
    fn empty_animation_registry_rejected() {
        let tuning = Tuning::default();
        let actors = scene(&tuning, Vec2::ZERO, &[]);
        let err = SimBuilder::new(config(), tuning, level(300.0), actors)
            .animations(AnimationRegistry::new())
            .build()
            .err();
        assert!(matches!(
            err,
            Some(SimError::Core(RaError::MissingComponent { component: "animation set", .. }))
        ));
    }
}

#[cfg(test)]
mod rules {
    use ra_fsm::PlayerState;

    use super::*;
    use crate::ActorMind;

    /// Proximity factor 3000: player at 500 grades `PlayerNear = 0.5`, one
    /// bad robot in three puts the population at medium, and the nearest
    /// good robot at 1000 grades `GoodRobotNear = 0`.
    fn hunting_scene() -> Sim {
        let tuning = Tuning::default();
        let actors =
            scene(&tuning, Vec2::new(500.0, 0.0), &[Vec2::new(0.0, 2500.0), Vec2::new(-1000.0, 0.0)]);
        let mut sim = build(config(), tuning, level(3000.0), actors);
        assert!(sim.request_player_state(PLAYER, PlayerState::PlayerControlled));
        sim
    }

    #[test]
    fn bad_robot_hunts_near_player() {
        let mut sim = hunting_scene();
        let mut rec = Recorder::default();
        let summary = sim.step(&mut rec).unwrap();

        assert!(summary.evaluated);
        assert_eq!(summary.hunting, 1);
        assert_eq!(sim.mandate(BAD), Some(Mandate::HuntAgent(PLAYER)));
        assert_eq!(rec.mandates, vec![(BAD, Mandate::FollowBadPatrolPath, Mandate::HuntAgent(PLAYER))]);
    }

    #[test]
    fn good_robots_are_not_evaluated() {
        let mut sim = hunting_scene();
        sim.step(&mut Recorder::default()).unwrap();
        assert_eq!(sim.mandate(ActorId(2)), Some(Mandate::FollowGoodPatrolPath));
        assert_eq!(sim.mandate(ActorId(3)), Some(Mandate::FollowGoodPatrolPath));
    }

    #[test]
    fn appearing_player_is_not_hunted() {
        let tuning = Tuning::default();
        let actors =
            scene(&tuning, Vec2::new(500.0, 0.0), &[Vec2::new(0.0, 2500.0), Vec2::new(-1000.0, 0.0)]);
        let mut sim = build(config(), tuning, level(3000.0), actors);
        sim.step(&mut Recorder::default()).unwrap();

        let snapshot = sim.last_snapshot().unwrap();
        assert!(snapshot.get(BAD).unwrap().player_target.is_none());
        assert!(!matches!(sim.mandate(BAD), Some(Mandate::HuntAgent(PLAYER))));
    }

    #[test]
    fn recharging_player_is_dropped_as_target() {
        let mut sim = hunting_scene();
        sim.step(&mut Recorder::default()).unwrap();
        assert_eq!(sim.mandate(BAD), Some(Mandate::HuntAgent(PLAYER)));

        let i = PLAYER.index();
        let charge = sim.actors.charge[i].as_mut().unwrap();
        charge.lose(charge.current());
        let ActorMind::Player(machine) = &mut sim.minds[i] else { panic!("expected a player mind") };
        let charge = sim.actors.charge[i].as_ref().unwrap();
        assert!(machine.on_charge_lost(charge, &mut sim.actors.input[i]).is_some());
        assert_eq!(sim.state(PLAYER), Some(ActorState::Player(PlayerState::Recharging)));

        let mut rec = Recorder::default();
        assert!(sim.step(&mut rec).unwrap().evaluated);
        assert!(sim.last_snapshot().unwrap().get(BAD).unwrap().player_target.is_none());
        assert_ne!(sim.mandate(BAD), Some(Mandate::HuntAgent(PLAYER)));
        assert!(matches!(rec.mandates.as_slice(), [(BAD, Mandate::HuntAgent(PLAYER), _)]));
    }

    #[test]
    fn snapshot_sees_pose_before_input() {
        let mut sim = hunting_scene();
        sim.set_input(PLAYER, PlayerInput { enabled: true, movement: Vec2::X, beam_target: None })
            .unwrap();
        sim.step(&mut Recorder::default()).unwrap();

        let seen = sim.last_snapshot().unwrap().get(BAD).unwrap().player_target.unwrap();
        assert_eq!(seen.distance, 500.0);
        assert!(sim.actors.position[PLAYER.index()].x > 500.0);
    }

    #[test]
    fn return_point_drift_keeps_mandate() {
        let tuning = Tuning::default();
        let actors = scene(&tuning, Vec2::new(0.0, -9000.0), &[]);
        let mut sim = build(config(), tuning, level(300.0), actors);
        let drift = Vec2::new(sim.tuning.robot.return_arrival_threshold * 0.5, 0.0);
        let pending = Mandate::ReturnToPositionOnPath(Vec2::new(0.0, 3900.0) + drift);
        if let ActorMind::Robot(mind) = &mut sim.minds[BAD.index()] {
            mind.mandate = pending;
        }

        let mut rec = Recorder::default();
        sim.run_ticks(5, &mut rec).unwrap();
        assert_eq!(sim.mandate(BAD), Some(pending));
        assert!(rec.mandates.is_empty());
    }

    #[test]
    fn distant_return_point_is_replaced() {
        let tuning = Tuning::default();
        let actors = scene(&tuning, Vec2::new(0.0, -9000.0), &[]);
        let mut sim = build(config(), tuning, level(300.0), actors);
        let stale = Mandate::ReturnToPositionOnPath(Vec2::new(400.0, 3900.0));
        if let ActorMind::Robot(mind) = &mut sim.minds[BAD.index()] {
            mind.mandate = stale;
        }

        let mut rec = Recorder::default();
        sim.step(&mut rec).unwrap();
        let fresh = Mandate::ReturnToPositionOnPath(Vec2::new(0.0, 3900.0));
        assert_eq!(sim.mandate(BAD), Some(fresh));
        assert_eq!(rec.mandates, vec![(BAD, stale, fresh)]);
    }

    #[test]
    fn no_motivation_keeps_bad_patrol() {
        let tuning = Tuning::default();
        // Player far and no good robot to chase.
        let actors = scene(&tuning, Vec2::new(5000.0, 0.0), &[]);
        let mut sim = build(config(), tuning, level(300.0), actors);
        sim.request_player_state(PLAYER, PlayerState::PlayerControlled);
        sim.step(&mut Recorder::default()).unwrap();
        assert_eq!(sim.mandate(BAD), Some(Mandate::FollowBadPatrolPath));
    }

    #[test]
    fn rules_run_on_their_interval() {
        let tuning = Tuning::default();
        let actors = scene(&tuning, Vec2::new(500.0, 0.0), &[Vec2::new(0.0, 2500.0)]);
        let cfg = SimConfig { rules_update_interval_ticks: 3, ..config() };
        let mut sim = build(cfg, tuning, level(3000.0), actors);

        let evaluated: Vec<bool> =
            (0..7).map(|_| sim.step(&mut Recorder::default()).unwrap().evaluated).collect();
        assert_eq!(evaluated, vec![true, false, false, true, false, false, true]);
    }

    #[test]
    fn mandate_persists_between_evaluations() {
        let tuning = Tuning::default();
        let actors =
            scene(&tuning, Vec2::new(500.0, 0.0), &[Vec2::new(0.0, 2500.0), Vec2::new(-1000.0, 0.0)]);
        let cfg = SimConfig { rules_update_interval_ticks: 10, ..config() };
        let mut sim = build(cfg, tuning, level(3000.0), actors);
        sim.request_player_state(PLAYER, PlayerState::PlayerControlled);
        sim.step(&mut Recorder::default()).unwrap();

        // Move the player out of reach; the mandate holds until tick 10.
        sim.actors.position[PLAYER.index()] = Vec2::new(0.0, -9000.0);
        for _ in 1..10 {
            sim.step(&mut Recorder::default()).unwrap();
            assert_eq!(sim.mandate(BAD), Some(Mandate::HuntAgent(PLAYER)));
        }
        sim.step(&mut Recorder::default()).unwrap();
        assert_ne!(sim.mandate(BAD), Some(Mandate::HuntAgent(PLAYER)));
    }

    #[test]
    fn hunting_robot_closes_in() {
        let mut sim = hunting_scene();
        let before = sim.actors.distance(BAD, PLAYER);
        sim.run_ticks(30, &mut Recorder::default()).unwrap();
        assert!(sim.actors.distance(BAD, PLAYER) < before);
    }
}

#[cfg(test)]
mod combat {
    use approx::assert_relative_eq;
    use ra_fsm::{PlayerState, RobotState};

    use super::*;

    /// Player touching the bad robot, population one bad in three.
    fn contact_scene() -> Sim {
        let tuning = Tuning::default();
        let actors =
            scene(&tuning, Vec2::new(50.0, 0.0), &[Vec2::new(0.0, 250.0), Vec2::new(-100.0, 0.0)]);
        let mut sim = build(config(), tuning, level(300.0), actors);
        sim.request_player_state(PLAYER, PlayerState::PlayerControlled);
        sim
    }

    #[test]
    fn contact_hits_controlled_player() {
        let mut sim = contact_scene();
        let mut rec = Recorder::default();
        let summary = sim.step(&mut rec).unwrap();

        assert_eq!(summary.hits, 1);
        assert_eq!(sim.state(PLAYER), Some(ActorState::Player(PlayerState::Hit)));
        let charge = sim.actors.charge[PLAYER.index()].unwrap();
        assert_relative_eq!(charge.current(), 75.0);
        assert!(!sim.actors.input[PLAYER.index()].enabled);
        assert!(rec.states.contains(&(
            PLAYER,
            ActorState::Player(PlayerState::PlayerControlled),
            ActorState::Player(PlayerState::Hit)
        )));
    }

    #[test]
    fn cooldown_spaces_out_hits() {
        let mut sim = contact_scene();
        let first = sim.step(&mut Recorder::default()).unwrap();
        assert_eq!(first.hits, 1);
        // Back in control right away; the cooldown still blocks a second hit.
        sim.minds[PLAYER.index()] = crate::ActorMind::Player(ra_fsm::PlayerMachine::new());
        sim.request_player_state(PLAYER, PlayerState::PlayerControlled);
        let second = sim.step(&mut Recorder::default()).unwrap();
        assert_eq!(second.hits, 0);
    }

    #[test]
    fn contact_converts_good_robot() {
        let tuning = Tuning::default();
        // A good robot next to the bad one: population medium, robot near.
        let actors = ActorStoreBuilder::new(&tuning)
            .player(Vec2::new(0.0, -9000.0))
            .robot(ActorKind::GroundBot, Alignment::Bad, Vec2::ZERO, PATHS)
            .robot(ActorKind::GroundBot, Alignment::Good, Vec2::new(60.0, 0.0), PATHS)
            .robot(ActorKind::GroundBot, Alignment::Good, Vec2::new(0.0, 9000.0), PATHS)
            .build();
        let mut sim = build(config(), tuning, level(300.0), actors);
        let mut rec = Recorder::default();
        let summary = sim.step(&mut rec).unwrap();

        let victim = ActorId(2);
        assert_eq!(summary.flips, 1);
        assert_eq!(sim.actors.alignment[victim.index()], Some(Alignment::Bad));
        assert_eq!(sim.state(victim), Some(ActorState::Robot(RobotState::Zapped)));
        assert!(sim.actors.charge[victim.index()].unwrap().is_fully_charged());
        assert_eq!(rec.flips, vec![(victim, Alignment::Bad)]);
    }

    #[test]
    fn beam_flips_drained_robot() {
        let mut tuning = Tuning::default();
        tuning.player.beam_drain_per_second = 1.0e6;
        let actors = ActorStoreBuilder::new(&tuning)
            .player(Vec2::new(200.0, 0.0))
            .robot(ActorKind::FlyingBot, Alignment::Bad, Vec2::ZERO, PATHS)
            .build();
        let mut sim = build(config(), tuning, level(300.0), actors);
        sim.request_player_state(PLAYER, PlayerState::PlayerControlled);
        sim.set_input(PLAYER, PlayerInput { enabled: true, movement: Vec2::ZERO, beam_target: Some(BAD) })
            .unwrap();

        let mut rec = Recorder::default();
        let summary = sim.step(&mut rec).unwrap();

        assert_eq!(summary.flips, 1);
        assert_eq!(sim.actors.alignment[BAD.index()], Some(Alignment::Good));
        assert_eq!(sim.state(BAD), Some(ActorState::Robot(RobotState::Blast)));
        assert!(!sim.actors.charge[BAD.index()].unwrap().has_charge());
        assert!(matches!(sim.mandate(BAD), Some(Mandate::ReturnToPositionOnPath(p)) if p.y < 0.0));
        assert_eq!(sim.steer.agents[BAD.index()].max_speed, sim.tuning.robot.max_speed_good);
    }

    #[test]
    fn beam_out_of_range_does_nothing() {
        let tuning = Tuning::default();
        let actors = ActorStoreBuilder::new(&tuning)
            .player(Vec2::new(2000.0, 0.0))
            .robot(ActorKind::GroundBot, Alignment::Bad, Vec2::ZERO, PATHS)
            .build();
        let mut sim = build(config(), tuning, level(300.0), actors);
        sim.request_player_state(PLAYER, PlayerState::PlayerControlled);
        sim.set_input(PLAYER, PlayerInput { enabled: true, movement: Vec2::ZERO, beam_target: Some(BAD) })
            .unwrap();
        sim.step(&mut Recorder::default()).unwrap();
        assert!(sim.actors.charge[BAD.index()].unwrap().is_fully_charged());
    }
}

#[cfg(test)]
mod flip {
    use ra_fsm::RobotState;

    use super::*;
    use crate::ActorMind;

    fn lone_robot(alignment: Alignment, kind: ActorKind) -> Sim {
        let tuning = Tuning::default();
        let actors = ActorStoreBuilder::new(&tuning)
            .player(Vec2::new(0.0, -9000.0))
            .robot(kind, alignment, Vec2::ZERO, PATHS)
            .build();
        build(config(), tuning, level(300.0), actors)
    }

    #[test]
    fn flip_discards_pending_return_point() {
        let mut sim = lone_robot(Alignment::Bad, ActorKind::GroundBot);
        let stale = Vec2::new(0.0, 3900.0);
        if let ActorMind::Robot(mind) = &mut sim.minds[BAD.index()] {
            mind.mandate = Mandate::ReturnToPositionOnPath(stale);
        }
        let to = sim.flip_alignment(BAD, Tick::ZERO, &mut Recorder::default()).unwrap();

        assert_eq!(to, Alignment::Good);
        let Some(Mandate::ReturnToPositionOnPath(point)) = sim.mandate(BAD) else {
            panic!("expected a return mandate");
        };
        assert_ne!(point, stale);
        assert_eq!(point, Vec2::new(0.0, -3900.0));
    }

    #[test]
    fn good_ground_robot_stays_agent_driven() {
        let mut sim = lone_robot(Alignment::Bad, ActorKind::GroundBot);
        sim.flip_alignment(BAD, Tick::ZERO, &mut Recorder::default()).unwrap();
        assert_eq!(sim.state(BAD), Some(ActorState::Robot(RobotState::AgentControlled)));
    }

    #[test]
    fn zapped_robot_recovers() {
        let mut sim = lone_robot(Alignment::Good, ActorKind::GroundBot);
        let mut rec = Recorder::default();
        sim.flip_alignment(BAD, Tick::ZERO, &mut rec).unwrap();
        assert_eq!(sim.state(BAD), Some(ActorState::Robot(RobotState::Zapped)));

        // 0.75 s at 60 Hz.
        sim.run_ticks(50, &mut rec).unwrap();
        assert_eq!(sim.state(BAD), Some(ActorState::Robot(RobotState::AgentControlled)));
    }

    #[test]
    fn zapped_robot_does_not_steer() {
        let mut sim = lone_robot(Alignment::Good, ActorKind::GroundBot);
        sim.flip_alignment(BAD, Tick::ZERO, &mut Recorder::default()).unwrap();
        let before = sim.actors.position[BAD.index()];
        sim.step(&mut Recorder::default()).unwrap();
        assert_eq!(sim.actors.position[BAD.index()], before);
        assert!(!sim.steer.is_active(BAD));
    }

    #[test]
    fn flip_reports_to_observer() {
        let mut sim = lone_robot(Alignment::Bad, ActorKind::FlyingBot);
        let mut rec = Recorder::default();
        sim.flip_alignment(BAD, Tick::ZERO, &mut rec).unwrap();
        assert_eq!(rec.flips, vec![(BAD, Alignment::Good)]);
        assert_eq!(rec.mandates.len(), 1);
        assert_eq!(
            rec.states,
            vec![(BAD, ActorState::Robot(RobotState::AgentControlled), ActorState::Robot(RobotState::Blast))]
        );
    }
}

#[cfg(test)]
mod machines {
    use super::*;
    use crate::ActorMind;

    #[test]
    fn return_arrival_switches_to_patrol() {
        let tuning = Tuning::default();
        let actors = ActorStoreBuilder::new(&tuning)
            .player(Vec2::new(0.0, 9000.0))
            .robot(ActorKind::GroundBot, Alignment::Good, Vec2::new(0.0, -3880.0), PATHS)
            .build();
        let mut sim = build(config(), tuning, level(300.0), actors);
        let robot = ActorId(1);
        if let ActorMind::Robot(mind) = &mut sim.minds[robot.index()] {
            mind.mandate = Mandate::ReturnToPositionOnPath(Vec2::new(0.0, -3900.0));
        }
        let mut rec = Recorder::default();
        sim.step(&mut rec).unwrap();

        assert_eq!(sim.mandate(robot), Some(Mandate::FollowGoodPatrolPath));
        assert_eq!(rec.mandates.len(), 1);
    }

    #[test]
    fn player_appears_then_takes_control() {
        let tuning = Tuning::default();
        let actors = scene(&tuning, Vec2::new(0.0, 9000.0), &[]);
        let mut sim = build(config(), tuning, level(300.0), actors);
        // 0.5 s at 60 Hz.
        sim.run_ticks(32, &mut Recorder::default()).unwrap();
        assert_eq!(sim.state(PLAYER).map(ActorState::name), Some("player_controlled"));
        assert!(sim.is_targetable(PLAYER));
    }

    #[test]
    fn reported_input_cannot_enable_appearing_player() {
        let tuning = Tuning::default();
        let actors = scene(&tuning, Vec2::new(0.0, 9000.0), &[]);
        let mut sim = build(config(), tuning, level(300.0), actors);
        sim.step(&mut Recorder::default()).unwrap();
        sim.set_input(PLAYER, PlayerInput { enabled: true, movement: Vec2::X, beam_target: None })
            .unwrap();

        let input = sim.actors.input[PLAYER.index()];
        assert!(!input.enabled);
        assert_eq!(input.movement, Vec2::X);
        assert_eq!(sim.state(PLAYER).map(ActorState::name), Some("appear"));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "patrols the wrong path")]
    fn good_robot_on_bad_path_is_caught() {
        let tuning = Tuning::default();
        let actors = scene(&tuning, Vec2::new(0.0, 9000.0), &[Vec2::new(0.0, -9000.0)]);
        let mut sim = build(config(), tuning, level(300.0), actors);
        if let ActorMind::Robot(mind) = &mut sim.minds[2] {
            mind.mandate = Mandate::FollowBadPatrolPath;
        }
        sim.step(&mut Recorder::default()).unwrap();
    }

    #[test]
    fn player_moves_by_input() {
        let tuning = Tuning::default();
        let actors = scene(&tuning, Vec2::new(0.0, 9000.0), &[]);
        let mut sim = build(config(), tuning, level(300.0), actors);
        sim.request_player_state(PLAYER, ra_fsm::PlayerState::PlayerControlled);
        sim.set_input(PLAYER, PlayerInput { enabled: true, movement: Vec2::X, beam_target: None })
            .unwrap();
        sim.step(&mut Recorder::default()).unwrap();
        assert!(sim.actors.position[PLAYER.index()].x > 0.0);
    }
}

#[cfg(test)]
mod presentation {
    use ra_core::RaError;

    use super::*;
    use crate::{NoopObserver, SimError};

    #[test]
    fn animations_only_on_change() {
        let tuning = Tuning::default();
        let actors = scene(&tuning, Vec2::new(0.0, 9000.0), &[]);
        let mut sim = build(config(), tuning, level(300.0), actors);
        let mut rec = Recorder::default();
        sim.step(&mut rec).unwrap();
        assert_eq!(rec.animations.len(), 2);

        // A player in `Appear` with no input shows the same clip next tick.
        let before = rec.animations.iter().filter(|(a, _)| *a == PLAYER).count();
        sim.step(&mut rec).unwrap();
        assert_eq!(rec.animations.iter().filter(|(a, _)| *a == PLAYER).count(), before);
    }

    #[test]
    fn debug_paths_need_debug_draw() {
        let tuning = Tuning::default();
        let actors = scene(&tuning, Vec2::new(0.0, 9000.0), &[Vec2::new(0.0, -9000.0)]);
        let mut sim = build(config(), tuning.clone(), level(300.0), actors.clone());
        let mut rec = Recorder::default();
        sim.step(&mut rec).unwrap();
        assert!(rec.debug.is_empty());

        let cfg = SimConfig { debug_draw: true, ..config() };
        let mut sim = build(cfg, tuning, level(300.0), actors);
        sim.step(&mut rec).unwrap();
        assert_eq!(rec.debug.len(), 2);
        assert!(rec.debug.iter().all(|(_, p)| p.cyclical));
    }

    #[test]
    fn purged_registry_fails_the_tick() {
        let tuning = Tuning::default();
        let actors = scene(&tuning, Vec2::ZERO, &[]);
        let mut sim = build(config(), tuning, level(300.0), actors);
        sim.animations.purge();
        let err = sim.step(&mut NoopObserver).err();
        assert!(matches!(
            err,
            Some(SimError::Core(RaError::MissingComponent { component: "animation set", .. }))
        ));
    }

    #[test]
    fn snapshots_follow_output_interval() {
        let tuning = Tuning::default();
        let actors = scene(&tuning, Vec2::new(0.0, 9000.0), &[]);
        let cfg = SimConfig { total_ticks: 20, output_interval_ticks: 5, ..config() };
        let mut sim = build(cfg, tuning, level(300.0), actors);
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();
        assert_eq!(rec.snapshots, 4);
        assert_eq!(rec.ended, Some(Tick(20)));
    }
}
