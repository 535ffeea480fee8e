//! CSV patrol-path loader.
//!
//! # CSV format
//!
//! One row per waypoint.  Rows may appear in any order; each path's
//! waypoints are sorted by `seq` before the path is built.
//!
//! ```csv
//! path_id,seq,x,y
//! 0,0,100.0,100.0
//! 0,1,500.0,100.0
//! 0,2,500.0,400.0
//! 1,0,250.0,250.0
//! 1,1,750.0,250.0
//! ```
//!
//! Path ids must be dense: a file that mentions path 3 must also mention
//! paths 0, 1 and 2.  The returned `Vec` is indexed by `PathId`.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use ra_core::{PathId, Vec2};

use crate::path::PatrolPath;
use crate::{LevelError, LevelResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct WaypointRecord {
    path_id: u16,
    seq:     u32,
    x:       f32,
    y:       f32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load patrol paths from a CSV file.
pub fn load_paths_csv(path: &Path) -> LevelResult<Vec<PatrolPath>> {
    let file = std::fs::File::open(path).map_err(LevelError::Io)?;
    load_paths_reader(file)
}

/// Like [`load_paths_csv`] but accepts any `Read` source.
///
/// Useful for tests (pass a `std::io::Cursor`) or for waypoint tables
/// embedded in the binary with `include_str!`.
pub fn load_paths_reader<R: Read>(reader: R) -> LevelResult<Vec<PatrolPath>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut by_path: BTreeMap<u16, Vec<WaypointRecord>> = BTreeMap::new();

    for result in csv_reader.deserialize::<WaypointRecord>() {
        let row = result.map_err(|e| LevelError::Parse(e.to_string()))?;
        if !row.x.is_finite() || !row.y.is_finite() {
            return Err(LevelError::Parse(format!(
                "path {} waypoint {} has a non-finite coordinate",
                row.path_id, row.seq
            )));
        }
        by_path.entry(row.path_id).or_default().push(row);
    }

    let mut paths = Vec::with_capacity(by_path.len());
    for (expected, (id, mut rows)) in by_path.into_iter().enumerate() {
        if usize::from(id) != expected {
            return Err(LevelError::PathNotFound(PathId(expected as u16)));
        }
        rows.sort_by_key(|r| r.seq);
        paths.push(PatrolPath::new(
            rows.into_iter().map(|r| Vec2::new(r.x, r.y)).collect(),
        ));
    }

    Ok(paths)
}
