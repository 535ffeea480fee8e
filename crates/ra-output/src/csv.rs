//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `actor_snapshots.csv`
//! - `tick_summaries.csv`
//! - `mandate_events.csv`

use std::fs::File;
use std::path::Path;

use csv::{Writer, WriterBuilder};

use crate::writer::OutputWriter;
use crate::{ActorSnapshotRow, MandateEventRow, OutputResult, TickSummaryRow};

pub const SNAPSHOT_HEADERS: [&str; 10] =
    ["actor_id", "tick", "kind", "alignment", "x", "y", "rotation", "charge", "state", "mandate"];
pub const SUMMARY_HEADERS: [&str; 7] =
    ["tick", "elapsed_secs", "evaluated", "bad_bot_percentage", "hunting", "hits", "flips"];
pub const EVENT_HEADERS: [&str; 4] = ["tick", "actor_id", "from", "to"];

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    events:    Writer<File>,
    finished:  bool,
}

/// Open `dir/name` and write `headers` up front so empty runs still get
/// a well-formed file.
fn open(dir: &Path, name: &str, headers: &[&str]) -> OutputResult<Writer<File>> {
    let mut w = WriterBuilder::new().has_headers(false).from_path(dir.join(name))?;
    w.write_record(headers)?;
    Ok(w)
}

impl CsvWriter {
    /// Open (or create) the CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        Ok(Self {
            snapshots: open(dir, "actor_snapshots.csv", &SNAPSHOT_HEADERS)?,
            summaries: open(dir, "tick_summaries.csv", &SUMMARY_HEADERS)?,
            events:    open(dir, "mandate_events.csv", &EVENT_HEADERS)?,
            finished:  false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[ActorSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.serialize(row)?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.serialize(row)?;
        Ok(())
    }

    fn write_mandate_event(&mut self, row: &MandateEventRow) -> OutputResult<()> {
        self.events.serialize(row)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        self.events.flush()?;
        Ok(())
    }
}
