//! Patrol paths.

use ra_core::Vec2;
use ra_core::geo::closest_point_on_segment;

/// An ordered, cyclic list of waypoints a robot loops while patrolling.
///
/// The last waypoint connects back to the first, so a path of `n` points has
/// `n` segments (a single-point path has one degenerate segment).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatrolPath {
    pub points: Vec<Vec2>,
}

impl PatrolPath {
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterator over `(segment_index, start, end)` including the closing
    /// segment from the last waypoint back to the first.
    pub fn segments(&self) -> impl Iterator<Item = (usize, Vec2, Vec2)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (i, self.points[i], self.points[(i + 1) % n]))
    }

    /// The closest point on the path to `p`, with the index of the waypoint
    /// that ends the segment it lies on.
    ///
    /// Following the path from that waypoint continues in patrol order.  On
    /// equal distances the earlier segment wins.  Returns `None` for an
    /// empty path.
    pub fn closest_point(&self, p: Vec2) -> Option<(Vec2, usize)> {
        let n = self.points.len();
        let mut best: Option<(Vec2, usize, f32)> = None;
        for (i, a, b) in self.segments() {
            let q = closest_point_on_segment(a, b, p);
            let d = q.distance_squared(p);
            if best.is_none_or(|(_, _, bd)| d < bd) {
                best = Some((q, (i + 1) % n, d));
            }
        }
        best.map(|(q, next, _)| (q, next))
    }
}
