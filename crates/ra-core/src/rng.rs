//! Deterministic simulation RNG.
//!
//! The AI pipeline itself is fully deterministic; randomness only enters
//! through collaborators driving the sim (scripted player input, spawn
//! jitter).  Those draw from a single seeded `SimRng` so a run is exactly
//! reproducible from `SimConfig::seed`.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Vec2;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Simulation-level RNG.
///
/// Used only in single-threaded contexts.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset, so each scripted
    /// collaborator gets its own stream.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    /// A uniformly distributed unit vector.
    pub fn unit_vector(&mut self) -> Vec2 {
        let angle = self.0.gen_range(0.0..std::f32::consts::TAU);
        Vec2::from_angle(angle)
    }
}
