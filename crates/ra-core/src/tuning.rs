//! Gameplay tuning constants.
//!
//! Every number the AI core reads lives here so designers can override any
//! subset from JSON (with the `serde` feature) without touching code.  Missing
//! fields fall back to the `Default` values below.

/// All tuning, grouped by subject.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Tuning {
    pub robot:    RobotTuning,
    pub player:   PlayerTuning,
    pub steering: SteeringTuning,
}

/// Robot kinematics, charge and timers.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RobotTuning {
    pub max_speed_good:        f32,
    pub max_speed_bad:         f32,
    pub max_acceleration_good: f32,
    pub max_acceleration_bad:  f32,
    pub agent_mass:            f32,
    pub agent_radius:          f32,
    pub max_charge:            f32,
    /// Seconds a robot stays stunned after flipping bad.
    pub zapped_duration:       f32,
    /// Seconds a flying robot spends in its blast after flipping good.
    pub blast_duration:        f32,
    /// Distance at which a returning robot counts as back on its path.
    pub return_arrival_threshold: f32,
    /// Extra distance beyond touching radii at which a hit lands.
    pub attack_reach:          f32,
    /// Minimum seconds between two hits from the same robot.
    pub attack_cooldown:       f32,
    /// Charge a player loses per hit.
    pub charge_loss_per_contact: f32,
}

impl RobotTuning {
    /// `(max_speed, max_acceleration)` for a robot of `good` alignment.
    #[inline]
    pub fn limits(&self, good: bool) -> (f32, f32) {
        if good {
            (self.max_speed_good, self.max_acceleration_good)
        } else {
            (self.max_speed_bad, self.max_acceleration_bad)
        }
    }
}

impl Default for RobotTuning {
    fn default() -> Self {
        Self {
            max_speed_good:           100.0,
            max_speed_bad:            150.0,
            max_acceleration_good:    50.0,
            max_acceleration_bad:     300.0,
            agent_mass:               0.25,
            agent_radius:             35.0,
            max_charge:               100.0,
            zapped_duration:          0.75,
            blast_duration:           1.2,
            return_arrival_threshold: 50.0,
            attack_reach:             10.0,
            attack_cooldown:          2.0,
            charge_loss_per_contact:  25.0,
        }
    }
}

/// Player timers, charge and beam.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlayerTuning {
    pub appear_duration:       f32,
    pub hit_duration:          f32,
    /// Seconds of inactivity before recharging starts.
    pub recharge_delay:        f32,
    pub recharge_per_second:   f32,
    pub max_charge:            f32,
    pub movement_speed:        f32,
    pub agent_mass:            f32,
    pub agent_radius:          f32,
    pub beam_range:            f32,
    pub beam_drain_per_second: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            appear_duration:       0.5,
            hit_duration:          0.75,
            recharge_delay:        2.0,
            recharge_per_second:   10.0,
            max_charge:            100.0,
            movement_speed:        210.0,
            agent_mass:            0.2,
            agent_radius:          40.0,
            beam_range:            300.0,
            beam_drain_per_second: 90.0,
        }
    }
}

/// Steering radii keyed by mandate kind, plus pursuit look-ahead.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SteeringTuning {
    pub patrol_path_radius:  f32,
    pub hunt_path_radius:    f32,
    pub return_path_radius:  f32,
    /// Upper bound on how far ahead (seconds) pursuit predicts its target.
    pub max_prediction_time: f32,
}

impl Default for SteeringTuning {
    fn default() -> Self {
        Self {
            patrol_path_radius:  10.0,
            hunt_path_radius:    20.0,
            return_path_radius:  20.0,
            max_prediction_time: 1.0,
        }
    }
}
