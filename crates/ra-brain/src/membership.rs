//! Membership functions.
//!
//! Population grades are clamped to `[0, 1]`.  Proximity grades are not:
//! a player twice as far as the medium band grades `PlayerNear = -1`, and
//! inference takes minima and maxima over those raw values.  An absent
//! target grades 0 in every proximity band.

const THIRD: f32 = 1.0 / 3.0;

#[inline]
fn unit(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

pub fn population_low(p: f32) -> f32 {
    unit(1.0 - 3.0 * p)
}

pub fn population_medium(p: f32) -> f32 {
    if p <= THIRD {
        unit(3.0 * p)
    } else {
        unit(1.0 - (3.0 * p - 1.0))
    }
}

pub fn population_high(p: f32) -> f32 {
    unit(3.0 * p - 1.0)
}

/// `t` is the proximity factor; the medium band peaks at `t / 3`.
pub fn proximity_near(d: Option<f32>, t: f32) -> f32 {
    let band = t / 3.0;
    d.map_or(0.0, |d| (band - d) / band)
}

pub fn proximity_medium(d: Option<f32>, t: f32) -> f32 {
    let band = t / 3.0;
    d.map_or(0.0, |d| 1.0 - (d - band).abs() / band)
}

pub fn proximity_far(d: Option<f32>, t: f32) -> f32 {
    let band = t / 3.0;
    d.map_or(0.0, |d| (d - band) / band)
}
