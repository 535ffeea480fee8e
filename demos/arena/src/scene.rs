//! The demo arena: two patrol loops and a handful of robots.

use std::io::Cursor;

use anyhow::Result;
use ra_actor::{ActorStore, ActorStoreBuilder, PatrolAssignment};
use ra_core::{ActorKind, Alignment, PathId, Tuning, Vec2};
use ra_level::{Level, load_paths_reader};

pub const PROXIMITY_FACTOR: f32 = 900.0;

// path 0: good loop around the north yard.
// path 1: bad loop around the south pit.
const PATHS_CSV: &str = "\
path_id,seq,x,y\n\
0,0,-400,300\n\
0,1,400,300\n\
0,2,400,700\n\
0,3,-400,700\n\
1,0,-300,-600\n\
1,1,300,-600\n\
1,2,300,-250\n\
1,3,-300,-250\n\
";

pub fn build_level() -> Result<Level> {
    let paths = load_paths_reader(Cursor::new(PATHS_CSV))?;
    Ok(Level::new(PROXIMITY_FACTOR, paths)?)
}

/// One player in the middle, two bad robots in the pit, three good robots in
/// the yard.
pub fn build_actors(tuning: &Tuning) -> ActorStore {
    let paths = PatrolAssignment { good: PathId(0), bad: PathId(1) };
    ActorStoreBuilder::new(tuning)
        .player(Vec2::new(0.0, 0.0))
        .robot(ActorKind::GroundBot, Alignment::Bad, Vec2::new(-300.0, -600.0), paths)
        .robot(ActorKind::FlyingBot, Alignment::Bad, Vec2::new(300.0, -250.0), paths)
        .robot(ActorKind::GroundBot, Alignment::Good, Vec2::new(-400.0, 300.0), paths)
        .robot(ActorKind::GroundBot, Alignment::Good, Vec2::new(400.0, 700.0), paths)
        .robot(ActorKind::FlyingBot, Alignment::Good, Vec2::new(0.0, 700.0), paths)
        .build()
}
