//! The `OutputWriter` trait implemented by backend writers.

use crate::{ActorSnapshotRow, MandateEventRow, OutputResult, TickSummaryRow};

/// A sink for simulation output rows.
///
/// Errors surface through [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error]
/// once the run is over.
pub trait OutputWriter {
    fn write_snapshots(&mut self, rows: &[ActorSnapshotRow]) -> OutputResult<()>;

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    fn write_mandate_event(&mut self, row: &MandateEventRow) -> OutputResult<()>;

    /// Flush all underlying handles.  Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
