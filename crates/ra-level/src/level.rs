//! `Level` — per-level static data the AI core reads every tick.

use ra_core::{PathId, Vec2};

use crate::path::PatrolPath;
use crate::{LevelError, LevelResult};

/// The proximity factor plus every patrol path of one level.
///
/// Paths are indexed by `PathId`.  Construction validates that the factor is
/// positive and every path has at least one waypoint, so lookups after that
/// only fail for ids that were never registered.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Level {
    proximity_factor: f32,
    paths:            Vec<PatrolPath>,
}

impl Level {
    pub fn new(proximity_factor: f32, paths: Vec<PatrolPath>) -> LevelResult<Self> {
        if !(proximity_factor.is_finite() && proximity_factor > 0.0) {
            return Err(LevelError::InvalidProximityFactor(proximity_factor));
        }
        if let Some(i) = paths.iter().position(PatrolPath::is_empty) {
            return Err(LevelError::EmptyPath(PathId(i as u16)));
        }
        Ok(Self { proximity_factor, paths })
    }

    #[inline]
    pub fn proximity_factor(&self) -> f32 {
        self.proximity_factor
    }

    #[inline]
    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    #[inline]
    pub fn contains(&self, id: PathId) -> bool {
        id.index() < self.paths.len()
    }

    pub fn path(&self, id: PathId) -> LevelResult<&PatrolPath> {
        self.paths.get(id.index()).ok_or(LevelError::PathNotFound(id))
    }

    /// Closest point on path `id` to `p`, and the waypoint index to continue
    /// patrolling from.
    pub fn closest_point_on_path(&self, id: PathId, p: Vec2) -> LevelResult<(Vec2, usize)> {
        self.path(id)?.closest_point(p).ok_or(LevelError::EmptyPath(id))
    }
}
