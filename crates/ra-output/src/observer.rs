//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use ra_actor::ActorStore;
use ra_brain::Mandate;
use ra_core::{ActorId, SimConfig, Tick};
use ra_sim::{ActorMind, SimObserver, TickSummary};
use tracing::warn;

use crate::row::{ActorSnapshotRow, MandateEventRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes actor snapshots, tick summaries and mandate
/// changes to any [`OutputWriter`].
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:             W,
    tick_duration_secs: f32,
    last_error:         Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self { writer, tick_duration_secs: config.tick_duration_secs, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "output write failed; further errors suppressed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
        let row = TickSummaryRow {
            tick:               tick.0,
            elapsed_secs:       tick.0 as f64 * self.tick_duration_secs as f64,
            evaluated:          summary.evaluated as u8,
            bad_bot_percentage: summary.bad_bot_percentage,
            hunting:            summary.hunting as u64,
            hits:               summary.hits as u64,
            flips:              summary.flips as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_mandate_changed(&mut self, tick: Tick, actor: ActorId, from: Mandate, to: Mandate) {
        let row = MandateEventRow {
            tick:     tick.0,
            actor_id: actor.0,
            from:     from.to_string(),
            to:       to.to_string(),
        };
        let result = self.writer.write_mandate_event(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, actors: &ActorStore, minds: &[ActorMind]) {
        let rows: Vec<ActorSnapshotRow> = actors
            .actor_ids()
            .zip(minds)
            .map(|(actor, mind)| {
                let i = actor.index();
                ActorSnapshotRow {
                    actor_id:  actor.0,
                    tick:      tick.0,
                    kind:      actors.kind[i].as_str(),
                    alignment: actors.alignment[i].map_or("", |a| a.as_str()),
                    x:         actors.position[i].x,
                    y:         actors.position[i].y,
                    rotation:  actors.rotation[i],
                    charge:    actors.charge[i].map_or(0.0, |c| c.current()),
                    state:     mind.state().name(),
                    mandate:   mind.mandate().map(|m| m.to_string()).unwrap_or_default(),
                }
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
