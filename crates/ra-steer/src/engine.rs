//! `SteeringEngine` — turns behaviors into motion.

use ra_core::Vec2;
use tracing::warn;

use crate::{SteerAgent, SteerStore, SteeringBehavior};

/// Integrates every active agent in a [`SteerStore`] once per tick.
#[derive(Clone, Debug)]
pub struct SteeringEngine {
    /// Upper bound (seconds) on how far ahead `Pursue` leads its target.
    pub max_prediction_time: f32,
}

impl SteeringEngine {
    pub fn new(max_prediction_time: f32) -> Self {
        Self { max_prediction_time: max_prediction_time.max(0.0) }
    }

    /// Advance all active agents by `dt` seconds.
    ///
    /// Desired velocities are computed against the pre-tick positions of all
    /// agents, then applied, so the result does not depend on actor order.
    pub fn step(&self, store: &mut SteerStore, dt: f32) {
        let SteerStore { agents, behaviors, active } = store;

        let desired: Vec<Option<Vec2>> = {
            let view: &[SteerAgent] = agents;
            behaviors
                .iter_mut()
                .enumerate()
                .map(|(i, behavior)| {
                    active[i].then(|| self.desired_velocity(&view[i], behavior, view))
                })
                .collect()
        };

        for (agent, desired) in agents.iter_mut().zip(desired) {
            if let Some(v) = desired {
                agent.integrate(v, dt);
            }
        }
    }

    /// Where `target` is expected to be by the time `agent` could reach it.
    pub fn predict(&self, agent: &SteerAgent, target: &SteerAgent) -> Vec2 {
        let distance = agent.position.distance(target.position);
        let lookahead = if agent.max_speed > 0.0 {
            (distance / agent.max_speed).min(self.max_prediction_time)
        } else {
            0.0
        };
        target.position + target.velocity * lookahead
    }

    fn desired_velocity(
        &self,
        agent:    &SteerAgent,
        behavior: &mut SteeringBehavior,
        agents:   &[SteerAgent],
    ) -> Vec2 {
        match behavior {
            SteeringBehavior::Idle => Vec2::ZERO,

            SteeringBehavior::Seek { point, radius } => arrive(agent, *point, *radius),

            SteeringBehavior::Pursue { target, radius } => match agents.get(target.index()) {
                Some(t) => arrive(agent, self.predict(agent, t), *radius),
                None => {
                    warn!(target = %target, "pursue target has no steering agent, idling");
                    *behavior = SteeringBehavior::Idle;
                    Vec2::ZERO
                }
            },

            SteeringBehavior::FollowPath { points, cyclical, radius, next_index } => {
                if points.is_empty() {
                    return Vec2::ZERO;
                }
                let n = points.len();
                *next_index = (*next_index).min(n - 1);
                if agent.position.distance(points[*next_index]) <= *radius {
                    if *cyclical {
                        *next_index = (*next_index + 1) % n;
                    } else if *next_index + 1 < n {
                        *next_index += 1;
                    } else {
                        return arrive(agent, points[*next_index], *radius);
                    }
                }
                seek(agent, points[*next_index])
            }
        }
    }
}

/// Full speed toward `point`.
fn seek(agent: &SteerAgent, point: Vec2) -> Vec2 {
    (point - agent.position).normalize_or_zero() * agent.max_speed
}

/// Seek, but stop once within `radius`.
fn arrive(agent: &SteerAgent, point: Vec2, radius: f32) -> Vec2 {
    if agent.position.distance(point) <= radius {
        Vec2::ZERO
    } else {
        seek(agent, point)
    }
}
