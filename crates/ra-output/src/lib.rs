//! `ra-output` — simulation output writers for robo-arena runs.
//!
//! | Writer        | Files created                                                       |
//! |---------------|---------------------------------------------------------------------|
//! | [`CsvWriter`] | `actor_snapshots.csv`, `tick_summaries.csv`, `mandate_events.csv`   |
//!
//! Writers implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `ra_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ra_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer, &config);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{ActorSnapshotRow, MandateEventRow, TickSummaryRow};
pub use writer::OutputWriter;
