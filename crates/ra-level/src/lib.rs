//! `ra-level` — the scene collaborator's static data.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`path`]    | `PatrolPath` — ordered cyclic waypoint list               |
//! | [`level`]   | `Level` — proximity factor plus all patrol paths          |
//! | [`loader`]  | `load_paths_csv`, `load_paths_reader`                     |
//! | [`error`]   | `LevelError`, `LevelResult<T>`                            |
//!
//! # Proximity factor
//!
//! `proximity_factor` (`T`) is the world-scale distance that normalizes raw
//! distances into fuzzy bands: near peaks at 0, medium at `T/3`, far grows
//! beyond `T/3`.  It is a per-level constant.

pub mod error;
pub mod level;
pub mod loader;
pub mod path;


pub use error::{LevelError, LevelResult};
pub use level::Level;
pub use loader::{load_paths_csv, load_paths_reader};
pub use path::PatrolPath;
