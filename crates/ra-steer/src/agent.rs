//! Per-actor kinematic state.

use ra_core::Vec2;
use ra_core::geo::heading_of;

/// A point-mass steering agent.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SteerAgent {
    pub position:         Vec2,
    pub velocity:         Vec2,
    /// Radians, counter-clockwise from +x.
    pub rotation:         f32,
    pub max_speed:        f32,
    pub max_acceleration: f32,
    /// Body radius used for contact tests.
    pub radius:           f32,
    pub mass:             f32,
}

impl SteerAgent {
    /// A stationary agent at `position` with zero motion limits.
    pub fn new(position: Vec2, radius: f32, mass: f32) -> Self {
        Self {
            position,
            velocity:         Vec2::ZERO,
            rotation:         0.0,
            max_speed:        0.0,
            max_acceleration: 0.0,
            radius,
            mass,
        }
    }

    pub fn with_limits(mut self, max_speed: f32, max_acceleration: f32) -> Self {
        self.set_limits(max_speed, max_acceleration);
        self
    }

    pub fn set_limits(&mut self, max_speed: f32, max_acceleration: f32) {
        self.max_speed = max_speed.max(0.0);
        self.max_acceleration = max_acceleration.max(0.0);
        self.velocity = self.velocity.clamp_length_max(self.max_speed);
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Copy a pose moved by someone else, inferring velocity from the
    /// displacement over `dt`.
    pub fn follow_pose(&mut self, position: Vec2, rotation: f32, dt: f32) {
        self.velocity = if dt > 0.0 { (position - self.position) / dt } else { Vec2::ZERO };
        self.position = position;
        self.rotation = rotation;
    }

    /// Apply one integration step toward `desired` velocity.
    pub(crate) fn integrate(&mut self, desired: Vec2, dt: f32) {
        let force = (desired - self.velocity).clamp_length_max(self.max_acceleration);
        let accel = if self.mass > 0.0 { force / self.mass } else { force };
        self.velocity = (self.velocity + accel * dt).clamp_length_max(self.max_speed);
        self.position += self.velocity * dt;
        if let Some(heading) = heading_of(self.velocity) {
            self.rotation = heading;
        }
    }
}
