//! Tests for ra-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::{CsvWriter, EVENT_HEADERS, SNAPSHOT_HEADERS, SUMMARY_HEADERS};
    use crate::row::{ActorSnapshotRow, MandateEventRow, TickSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(actor_id: u32, tick: u64) -> ActorSnapshotRow {
        ActorSnapshotRow {
            actor_id,
            tick,
            kind:      "ground_bot",
            alignment: "bad",
            x:         actor_id as f32 * 10.0,
            y:         0.0,
            rotation:  0.0,
            charge:    100.0,
            state:     "agent_controlled",
            mandate:   "bad_patrol".into(),
        }
    }

    fn headers(dir: &TempDir, name: &str) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(dir.path().join(name)).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    fn records(dir: &TempDir, name: &str) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(dir.path().join(name)).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("actor_snapshots.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
        assert!(dir.path().join("mandate_events.csv").exists());
    }

    #[test]
    fn headers_written_without_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        assert_eq!(headers(&dir, "actor_snapshots.csv"), SNAPSHOT_HEADERS);
        assert_eq!(headers(&dir, "tick_summaries.csv"), SUMMARY_HEADERS);
        assert_eq!(headers(&dir, "mandate_events.csv"), EVENT_HEADERS);
        assert!(records(&dir, "actor_snapshots.csv").is_empty());
    }

    #[test]
    fn snapshot_rows_written_in_order() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(0, 5), snap_row(1, 5), snap_row(2, 5)]).unwrap();
        w.finish().unwrap();

        let rows = records(&dir, "actor_snapshots.csv");
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "0");
        assert_eq!(&rows[0][1], "5");
        assert_eq!(&rows[2][0], "2");
        assert_eq!(&rows[2][4], "20.0");
        assert_eq!(&rows[1][9], "bad_patrol");
    }

    #[test]
    fn summary_and_event_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&TickSummaryRow {
            tick:               3,
            elapsed_secs:       0.05,
            evaluated:          1,
            bad_bot_percentage: 0.5,
            hunting:            2,
            hits:               1,
            flips:              0,
        })
        .unwrap();
        w.write_mandate_event(&MandateEventRow {
            tick:     3,
            actor_id: 4,
            from:     "bad_patrol".into(),
            to:       "return(1.0, 2.0)".into(),
        })
        .unwrap();
        w.finish().unwrap();

        let summaries = records(&dir, "tick_summaries.csv");
        assert_eq!(summaries.len(), 1);
        assert_eq!(&summaries[0][0], "3");
        assert_eq!(&summaries[0][3], "0.5");
        assert_eq!(&summaries[0][4], "2");

        let events = records(&dir, "mandate_events.csv");
        assert_eq!(&events[0][1], "4");
        assert_eq!(&events[0][3], "return(1.0, 2.0)");
    }

    #[test]
    fn finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("nope")).is_err());
    }
}

#[cfg(test)]
mod observer_tests {
    use ra_actor::{ActorStoreBuilder, PatrolAssignment};
    use ra_core::{ActorKind, Alignment, PathId, SimConfig, Tuning, Vec2};
    use ra_level::{Level, PatrolPath};
    use ra_sim::SimBuilder;

    use crate::csv::CsvWriter;
    use crate::observer::SimOutputObserver;
    use crate::row::{ActorSnapshotRow, MandateEventRow, TickSummaryRow};
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult};

    /// Collects rows in memory.
    #[derive(Default)]
    struct MemWriter {
        snapshots: Vec<ActorSnapshotRow>,
        summaries: Vec<TickSummaryRow>,
        events:    Vec<MandateEventRow>,
        finished:  usize,
    }

    impl OutputWriter for MemWriter {
        fn write_snapshots(&mut self, rows: &[ActorSnapshotRow]) -> OutputResult<()> {
            self.snapshots.extend_from_slice(rows);
            Ok(())
        }
        fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
            self.summaries.push(*row);
            Ok(())
        }
        fn write_mandate_event(&mut self, row: &MandateEventRow) -> OutputResult<()> {
            self.events.push(row.clone());
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    /// Fails every write.
    struct BrokenWriter;

    impl OutputWriter for BrokenWriter {
        fn write_snapshots(&mut self, _: &[ActorSnapshotRow]) -> OutputResult<()> {
            Err(OutputError::Io(std::io::Error::other("disk full")))
        }
        fn write_tick_summary(&mut self, _: &TickSummaryRow) -> OutputResult<()> {
            Err(OutputError::Io(std::io::Error::other("disk full")))
        }
        fn write_mandate_event(&mut self, _: &MandateEventRow) -> OutputResult<()> {
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    fn config() -> SimConfig {
        SimConfig { total_ticks: 6, output_interval_ticks: 2, ..SimConfig::default() }
    }

    fn sim(config: SimConfig) -> ra_sim::Sim {
        let tuning = Tuning::default();
        let paths = PatrolAssignment { good: PathId(0), bad: PathId(1) };
        let actors = ActorStoreBuilder::new(&tuning)
            .player(Vec2::new(0.0, -500.0))
            .robot(ActorKind::GroundBot, Alignment::Bad, Vec2::ZERO, paths)
            .robot(ActorKind::FlyingBot, Alignment::Good, Vec2::new(0.0, 500.0), paths)
            .build();
        let square = |c: Vec2| {
            PatrolPath::new(vec![
                c + Vec2::new(-50.0, -50.0),
                c + Vec2::new(50.0, -50.0),
                c + Vec2::new(50.0, 50.0),
            ])
        };
        let level =
            Level::new(300.0, vec![square(Vec2::new(0.0, 600.0)), square(Vec2::new(0.0, -100.0))])
                .unwrap();
        SimBuilder::new(config, tuning, level, actors).build().unwrap()
    }

    #[test]
    fn observer_writes_every_tick_and_snapshot() {
        let mut obs = SimOutputObserver::new(MemWriter::default(), &config());
        sim(config()).run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let w = obs.into_writer();
        assert_eq!(w.summaries.len(), 6);
        assert_eq!(w.summaries[0].evaluated, 1);
        // Ticks 0, 2 and 4, three actors each.
        assert_eq!(w.snapshots.len(), 9);
        assert_eq!(w.snapshots[0].kind, "player");
        assert_eq!(w.snapshots[0].alignment, "");
        assert_eq!(w.snapshots[0].mandate, "");
        assert_eq!(w.snapshots[2].alignment, "good");
        assert_eq!(w.finished, 1);
    }

    #[test]
    fn first_error_is_kept() {
        let mut obs = SimOutputObserver::new(BrokenWriter, &config());
        sim(config()).run(&mut obs).unwrap();
        assert!(matches!(obs.take_error(), Some(OutputError::Io(_))));
        assert!(obs.take_error().is_none());
    }

    #[test]
    fn integration_csv() {
        let dir = tempfile::tempdir().unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer, &config());
        sim(config()).run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        assert_eq!(rdr.records().count(), 6);
        let mut rdr = csv::Reader::from_path(dir.path().join("actor_snapshots.csv")).unwrap();
        assert_eq!(rdr.records().count(), 9);
    }
}
