//! 2-D world geometry.
//!
//! World coordinates are single-precision `glam::Vec2` in scene points.  The
//! arena is small (a few thousand points across) so `f32` is ample, and it
//! matches what the render collaborator hands us.

pub use glam::Vec2;

/// Rotation (radians, counter-clockwise from +x) that faces along `v`.
///
/// Returns `None` for a zero-length vector, which has no heading.
#[inline]
pub fn heading_of(v: Vec2) -> Option<f32> {
    if v.length_squared() <= f32::EPSILON {
        None
    } else {
        Some(v.y.atan2(v.x))
    }
}

/// The point on segment `a → b` closest to `p`.
pub fn closest_point_on_segment(a: Vec2, b: Vec2, p: Vec2) -> Vec2 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return a;
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    a + ab * t
}
