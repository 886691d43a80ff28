//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `node_snapshots.csv`
//! - `histograms.csv`
//! - `graph_data.csv` (written by [`OutputWriter::write_consolidated`])

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use cc_core::{Phase, Step};
use csv::Writer;

use crate::writer::OutputWriter;
use crate::{ConsolidatedRow, HistogramRow, NodeRow, OutputResult};

pub const NODE_SNAPSHOTS_FILE: &str = "node_snapshots.csv";
pub const HISTOGRAMS_FILE: &str = "histograms.csv";
pub const CONSOLIDATED_FILE: &str = "graph_data.csv";

/// Writes simulation output to CSV files.
pub struct CsvWriter {
    nodes:        Writer<File>,
    histograms:   Writer<File>,
    consolidated: PathBuf,
    finished:     bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the per-step CSV files there and write
    /// their header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;

        let mut nodes = Writer::from_path(dir.join(NODE_SNAPSHOTS_FILE))?;
        nodes.write_record([
            "cycle",
            "phase",
            "iteration",
            "topology",
            "agent_id",
            "degree",
            "condition",
            "time_exposed",
            "initial_asset_value",
            "current_asset_value",
            "financial_impact",
        ])?;

        let mut histograms = Writer::from_path(dir.join(HISTOGRAMS_FILE))?;
        histograms.write_record(["cycle", "phase", "iteration", "histogram", "category", "count"])?;

        Ok(Self {
            nodes,
            histograms,
            consolidated: dir.join(CONSOLIDATED_FILE),
            finished: false,
        })
    }

    /// Where the run-level consolidated table is (or will be) written.
    pub fn consolidated_path(&self) -> &Path {
        &self.consolidated
    }
}

/// `cycle`, `phase`, `iteration` columns.  Cycles are one-based so that rows
/// line up with the `cycle.iteration` step labels; the initial step is `0.0`.
fn step_fields(step: Step) -> [String; 3] {
    let cycle = match step.phase {
        Phase::Initial => 0,
        _ => step.cycle.ordinal(),
    };
    [cycle.to_string(), step.phase.as_str().to_owned(), step.iteration.to_string()]
}

/// Fixed two-decimal money formatting.
fn money(value: f64) -> String {
    format!("{value:.2}")
}

impl OutputWriter for CsvWriter {
    fn write_nodes(&mut self, rows: &[NodeRow]) -> OutputResult<()> {
        for row in rows {
            let [cycle, phase, iteration] = step_fields(row.step);
            self.nodes.write_record(&[
                cycle,
                phase,
                iteration,
                row.domain.as_str().to_owned(),
                row.agent_id.to_string(),
                row.degree.to_string(),
                row.condition.to_string(),
                row.time_exposed.to_string(),
                money(row.initial_asset_value),
                money(row.current_asset_value),
                row.financial_impact.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_histogram(&mut self, rows: &[HistogramRow]) -> OutputResult<()> {
        for row in rows {
            let [cycle, phase, iteration] = step_fields(row.step);
            self.histograms.write_record(&[
                cycle,
                phase,
                iteration,
                row.histogram.to_owned(),
                row.category.to_owned(),
                row.count.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_consolidated(&mut self, rows: &[ConsolidatedRow]) -> OutputResult<()> {
        let mut out = Writer::from_path(&self.consolidated)?;
        out.write_record([
            "agent_id",
            "label",
            "pandemic_degree",
            "financial_degree",
            "node_size",
            "condition",
            "time_exposed",
            "initial_asset_value",
            "current_asset_value",
            "financial_impact",
        ])?;
        for row in rows {
            out.write_record(&[
                row.agent_id.to_string(),
                row.label.clone(),
                row.pandemic_degree.to_string(),
                row.financial_degree.to_string(),
                format!("{:.3}", row.node_size),
                row.condition.to_string(),
                row.time_exposed.to_string(),
                money(row.initial_asset_value),
                money(row.current_asset_value),
                row.financial_impact.to_string(),
            ])?;
        }
        out.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.nodes.flush()?;
        self.histograms.flush()?;
        Ok(())
    }
}
