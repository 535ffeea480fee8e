//! Unit tests for ra-steer.

use ra_core::{ActorId, Vec2};

use crate::{SteerAgent, SteerStore, SteeringBehavior, SteeringEngine};

// ── Helpers ───────────────────────────────────────────────────────────────────

const DT: f32 = 1.0 / 60.0;

fn robot_at(position: Vec2) -> SteerAgent {
    SteerAgent::new(position, 35.0, 0.25).with_limits(150.0, 300.0)
}

fn run(engine: &SteeringEngine, store: &mut SteerStore, ticks: usize) {
    for _ in 0..ticks {
        engine.step(store, DT);
    }
}

#[cfg(test)]
mod agent {
    use super::*;

    #[test]
    fn speed_never_exceeds_limit() {
        let mut a = robot_at(Vec2::ZERO);
        for _ in 0..600 {
            a.integrate(Vec2::new(1_000.0, 0.0), DT);
            assert!(a.speed() <= 150.0 + 1e-3);
        }
    }

    #[test]
    fn rotation_tracks_heading() {
        let mut a = robot_at(Vec2::ZERO);
        a.integrate(Vec2::new(0.0, 100.0), DT);
        assert!((a.rotation - std::f32::consts::FRAC_PI_2).abs() < 1e-4);
    }

    #[test]
    fn lowering_limits_clamps_velocity() {
        let mut a = robot_at(Vec2::ZERO);
        a.velocity = Vec2::new(150.0, 0.0);
        a.set_limits(100.0, 50.0);
        assert!((a.speed() - 100.0).abs() < 1e-3);
    }
}

#[cfg(test)]
mod store {
    use super::*;
    use crate::SteerError;

    #[test]
    fn new_store_is_idle_and_inactive() {
        let store = SteerStore::new(vec![robot_at(Vec2::ZERO); 3]);
        assert_eq!(store.len(), 3);
        assert!(store.behaviors.iter().all(|b| *b == SteeringBehavior::Idle));
        assert!(!store.is_active(ActorId(0)));
    }

    #[test]
    fn unknown_actor_is_error() {
        let mut store = SteerStore::new(vec![robot_at(Vec2::ZERO)]);
        assert!(matches!(store.agent(ActorId(4)), Err(SteerError::AgentNotFound(_))));
        assert!(store.set_behavior(ActorId(4), SteeringBehavior::Idle).is_err());
        assert!(!store.is_active(ActorId(4)));
    }
}

#[cfg(test)]
mod engine {
    use super::*;

    #[test]
    fn inactive_agents_do_not_move() {
        let engine = SteeringEngine::new(1.0);
        let mut store = SteerStore::new(vec![robot_at(Vec2::ZERO)]);
        store
            .set_behavior(ActorId(0), SteeringBehavior::Seek { point: Vec2::new(500.0, 0.0), radius: 20.0 })
            .unwrap();
        run(&engine, &mut store, 60);
        assert_eq!(store.agents[0].position, Vec2::ZERO);
    }

    #[test]
    fn seek_arrives_and_stops() {
        let engine = SteeringEngine::new(1.0);
        let mut store = SteerStore::new(vec![robot_at(Vec2::ZERO)]);
        let point = Vec2::new(300.0, 0.0);
        store.set_behavior(ActorId(0), SteeringBehavior::Seek { point, radius: 20.0 }).unwrap();
        store.set_active(ActorId(0), true).unwrap();
        run(&engine, &mut store, 600);
        let a = &store.agents[0];
        assert!(a.position.distance(point) < 60.0, "ended at {:?}", a.position);
        assert!(a.speed() < 1.0);
    }

    #[test]
    fn follow_path_advances_and_wraps() {
        let engine = SteeringEngine::new(1.0);
        let points = vec![Vec2::new(100.0, 0.0), Vec2::new(100.0, 100.0)];
        let mut store = SteerStore::new(vec![robot_at(Vec2::ZERO)]);
        store.set_behavior(ActorId(0), SteeringBehavior::patrol(points, 10.0, 0)).unwrap();
        store.set_active(ActorId(0), true).unwrap();

        let mut visited = Vec::new();
        for _ in 0..1_200 {
            engine.step(&mut store, DT);
            if let SteeringBehavior::FollowPath { next_index, .. } = store.behaviors[0] {
                if visited.last() != Some(&next_index) {
                    visited.push(next_index);
                }
            }
        }
        assert!(visited.starts_with(&[0, 1, 0]), "visited {visited:?}");
    }

    #[test]
    fn patrol_start_index_wraps() {
        let b = SteeringBehavior::patrol(vec![Vec2::ZERO, Vec2::ONE], 10.0, 5);
        assert!(matches!(b, SteeringBehavior::FollowPath { next_index: 1, .. }));
    }

    #[test]
    fn pursue_leads_moving_target() {
        let engine = SteeringEngine::new(1.0);
        let chaser = robot_at(Vec2::ZERO);
        let mut target = robot_at(Vec2::new(150.0, 0.0));
        target.velocity = Vec2::new(0.0, 60.0);
        // Chaser reaches target in 1 s at 150 u/s, so it aims 60 u ahead.
        let p = engine.predict(&chaser, &target);
        assert!((p - Vec2::new(150.0, 60.0)).length() < 1e-3);
    }

    #[test]
    fn prediction_is_capped() {
        let engine = SteeringEngine::new(0.5);
        let chaser = robot_at(Vec2::ZERO);
        let mut target = robot_at(Vec2::new(1_500.0, 0.0));
        target.velocity = Vec2::new(0.0, 100.0);
        let p = engine.predict(&chaser, &target);
        assert!((p.y - 50.0).abs() < 1e-3);
    }

    #[test]
    fn pursue_closes_distance() {
        let engine = SteeringEngine::new(1.0);
        let mut store = SteerStore::new(vec![robot_at(Vec2::ZERO), robot_at(Vec2::new(400.0, 0.0))]);
        store
            .set_behavior(ActorId(0), SteeringBehavior::Pursue { target: ActorId(1), radius: 20.0 })
            .unwrap();
        store.set_active(ActorId(0), true).unwrap();
        let before = store.agents[0].position.distance(store.agents[1].position);
        run(&engine, &mut store, 60);
        let after = store.agents[0].position.distance(store.agents[1].position);
        assert!(after < before);
    }

    #[test]
    fn pursue_missing_target_falls_back_to_idle() {
        let engine = SteeringEngine::new(1.0);
        let mut store = SteerStore::new(vec![robot_at(Vec2::ZERO)]);
        store
            .set_behavior(ActorId(0), SteeringBehavior::Pursue { target: ActorId(9), radius: 20.0 })
            .unwrap();
        store.set_active(ActorId(0), true).unwrap();
        engine.step(&mut store, DT);
        assert_eq!(store.behaviors[0], SteeringBehavior::Idle);
    }
}
