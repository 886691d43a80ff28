//! Integration tests for cc-output.

#[cfg(test)]
mod csv_tests {
    use cc_agent::{Condition, ImpactTier};
    use cc_core::{Cycle, Step};
    use tempfile::TempDir;

    use crate::csv::{CsvWriter, HISTOGRAMS_FILE, NODE_SNAPSHOTS_FILE};
    use crate::row::{ConsolidatedRow, Domain, HistogramRow, NodeRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn node_row(agent_id: u32, step: Step) -> NodeRow {
        NodeRow {
            step,
            domain:              Domain::Financial,
            agent_id,
            degree:              2,
            condition:           Condition::Infectious,
            time_exposed:        3,
            initial_asset_value: 100.0,
            current_asset_value: 62.5,
            financial_impact:    ImpactTier::Intermediate,
        }
    }

    fn records(path: std::path::PathBuf) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn csv_files_created_in_missing_dir() {
        let dir = tmp();
        let out = dir.path().join("nested").join("run");
        let w = CsvWriter::new(&out).unwrap();
        assert!(out.join(NODE_SNAPSHOTS_FILE).exists());
        assert!(out.join(HISTOGRAMS_FILE).exists());
        // The consolidated table only appears at the end of a run.
        assert!(!w.consolidated_path().exists());
        assert_eq!(w.consolidated_path(), out.join("graph_data.csv"));
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(HISTOGRAMS_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["cycle", "phase", "iteration", "histogram", "category", "count"]);

        let mut rdr = csv::Reader::from_path(dir.path().join(NODE_SNAPSHOTS_FILE)).unwrap();
        assert_eq!(rdr.headers().unwrap().len(), 11);
    }

    #[test]
    fn node_rows_use_step_labels_and_money_format() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_nodes(&[node_row(0, Step::INITIAL), node_row(1, Step::financial(Cycle(1), 3))])
            .unwrap();
        w.finish().unwrap();

        let rows = records(dir.path().join(NODE_SNAPSHOTS_FILE));
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "0");
        assert_eq!(&rows[0][1], "initial");
        assert_eq!(&rows[0][2], "0");
        assert_eq!(&rows[1][0], "2"); // one-based cycle
        assert_eq!(&rows[1][1], "financial");
        assert_eq!(&rows[1][2], "3");
        assert_eq!(&rows[1][3], "financial");
        assert_eq!(&rows[1][6], "infectious");
        assert_eq!(&rows[1][8], "100.00");
        assert_eq!(&rows[1][9], "62.50");
        assert_eq!(&rows[1][10], "intermediate");
    }

    #[test]
    fn histogram_rows_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let step = Step::pandemic(Cycle(0), 1);
        w.write_histogram(&[
            HistogramRow { step, histogram: "condition", category: "susceptible", count: 7 },
            HistogramRow { step, histogram: "condition", category: "infectious", count: 3 },
        ])
        .unwrap();
        w.finish().unwrap();

        let rows = records(dir.path().join(HISTOGRAMS_FILE));
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][4], "infectious");
        assert_eq!(&rows[1][5], "3");
    }

    #[test]
    fn consolidated_written_on_demand() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let row = ConsolidatedRow {
            agent_id:            4,
            label:               "Bank4".into(),
            pandemic_degree:     0,
            financial_degree:    5,
            node_size:           3.5,
            condition:           Condition::Removed,
            time_exposed:        9,
            initial_asset_value: 10.0,
            current_asset_value: -1.0,
            financial_impact:    ImpactTier::Bust,
        };
        w.write_consolidated(&[row]).unwrap();
        w.finish().unwrap();

        let rows = records(w.consolidated_path().to_path_buf());
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][1], "Bank4");
        assert_eq!(&rows[0][4], "3.500");
        assert_eq!(&rows[0][8], "-1.00");
        assert_eq!(&rows[0][9], "bust");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use std::io;

    use cc_core::Settings;
    use cc_sim::SimBuilder;
    use tempfile::TempDir;

    use crate::csv::{CsvWriter, HISTOGRAMS_FILE, NODE_SNAPSHOTS_FILE};
    use crate::observer::SimOutputObserver;
    use crate::row::{ConsolidatedRow, HistogramRow, NodeRow};
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult};

    fn settings() -> Settings {
        let mut s = Settings::default();
        s.general.agent_count = 8;
        s.general.cycles = 2;
        s.pandemic.edge_probability = 0.4;
        s.pandemic.iterations_per_cycle = 2;
        s.financial.edge_probability = 0.4;
        s.financial.iterations_per_cycle = 1;
        s
    }

    fn count_rows(path: std::path::PathBuf) -> usize {
        csv::Reader::from_path(path).unwrap().records().count()
    }

    #[test]
    fn full_run_writes_every_step() {
        let dir: TempDir = tempfile::tempdir().unwrap();
        let mut sim = SimBuilder::new(settings()).build().unwrap();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        sim.run(&mut obs);
        assert!(obs.take_error().is_none());

        // initial + 2 cycles × (2 pandemic + 1 financial), both topologies.
        let steps = 1 + 2 * 3;
        assert_eq!(count_rows(dir.path().join(NODE_SNAPSHOTS_FILE)), steps * 2 * 8);

        // Initial: 3 conditions + 6 tiers; then 3 per pandemic and 6 per
        // financial iteration.
        let hist = 9 + 2 * (2 * 3 + 6);
        assert_eq!(count_rows(dir.path().join(HISTOGRAMS_FILE)), hist);

        let path = obs.writer().consolidated_path().to_path_buf();
        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 8);
        assert_eq!(&rows[0][1], "Bank0");
        assert_eq!(&rows[7][1], "Bank7");
    }

    #[test]
    fn stepped_run_writes_consolidated_on_finish() {
        let dir = tempfile::tempdir().unwrap();
        let mut sim = SimBuilder::new(settings()).build().unwrap();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        sim.run_cycles(1, &mut obs);
        let path = obs.writer().consolidated_path().to_path_buf();
        assert!(!path.exists());

        sim.finish(&mut obs);
        assert!(obs.take_error().is_none());
        assert_eq!(count_rows(path), 8);
    }

    #[test]
    fn histogram_totals_match_agent_count() {
        let dir = tempfile::tempdir().unwrap();
        let mut sim = SimBuilder::new(settings()).build().unwrap();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        sim.run(&mut obs);

        let mut rdr = csv::Reader::from_path(dir.path().join(HISTOGRAMS_FILE)).unwrap();
        let mut condition_total = 0usize;
        let mut impact_total = 0usize;
        for r in rdr.records() {
            let r = r.unwrap();
            let n: usize = r[5].parse().unwrap();
            match &r[3] {
                "condition" => condition_total += n,
                "impact" => impact_total += n,
                other => panic!("unexpected histogram {other}"),
            }
        }
        assert_eq!(condition_total, 8 * (1 + 2 * 2));
        assert_eq!(impact_total, 8 * (1 + 2));
    }

    /// Fails every write after the first `ok` calls.
    struct Flaky {
        ok:       usize,
        calls:    usize,
        finished: usize,
    }

    impl Flaky {
        fn tick(&mut self) -> OutputResult<()> {
            self.calls += 1;
            if self.calls > self.ok {
                return Err(OutputError::Io(io::Error::other(format!("write #{}", self.calls))));
            }
            Ok(())
        }
    }

    impl OutputWriter for Flaky {
        fn write_nodes(&mut self, _rows: &[NodeRow]) -> OutputResult<()> {
            self.tick()
        }
        fn write_histogram(&mut self, _rows: &[HistogramRow]) -> OutputResult<()> {
            self.tick()
        }
        fn write_consolidated(&mut self, _rows: &[ConsolidatedRow]) -> OutputResult<()> {
            self.tick()
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    #[test]
    fn writer_errors_never_stop_the_run() {
        let mut sim = SimBuilder::new(settings()).build().unwrap();
        let mut obs = SimOutputObserver::new(Flaky { ok: 2, calls: 0, finished: 0 });
        sim.run(&mut obs);

        assert_eq!(sim.condition_history().len(), 1 + 2 * 2);
        let err = obs.take_error().expect("error stored");
        // Only the first failure is kept.
        assert!(err.to_string().contains("write #3"), "{err}");
        assert!(obs.take_error().is_none());

        let writer = obs.into_writer();
        assert_eq!(writer.finished, 1);
        assert!(writer.calls > 3);
    }
}
