//! Plain data row types written by output backends.

use serde::Serialize;

/// One actor's pose, charge and decision state at a given tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActorSnapshotRow {
    pub actor_id:  u32,
    pub tick:      u64,
    pub kind:      &'static str,
    /// Empty for players.
    pub alignment: &'static str,
    pub x:         f32,
    pub y:         f32,
    pub rotation:  f32,
    pub charge:    f32,
    pub state:     &'static str,
    /// Display form of the robot's mandate; empty for players.
    pub mandate:   String,
}

/// Counters for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TickSummaryRow {
    pub tick:               u64,
    pub elapsed_secs:       f64,
    /// `1` if rules were evaluated this tick.
    pub evaluated:          u8,
    pub bad_bot_percentage: f32,
    pub hunting:            u64,
    pub hits:               u64,
    pub flips:              u64,
}

/// A robot's mandate being replaced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MandateEventRow {
    pub tick:     u64,
    pub actor_id: u32,
    pub from:     String,
    pub to:       String,
}
