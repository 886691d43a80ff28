//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use cc_agent::Category;
use cc_core::{Phase, Step};
use cc_sim::{HistoryEntry, SimObserver, SimView};
use cc_topology::Topology;

use crate::row::{ConsolidatedRow, Domain, HistogramRow, NodeRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes node tables and histograms to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            log::warn!("output write failed: {e}");
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }

    fn write_topologies(&mut self, step: Step, view: &SimView<'_>) {
        for (domain, topology) in [(Domain::Pandemic, view.pandemic), (Domain::Financial, view.financial)] {
            let rows = node_rows(step, domain, topology);
            if !rows.is_empty() {
                let result = self.writer.write_nodes(&rows);
                self.store_err(result);
            }
        }
    }

    fn write_latest<K: Category>(&mut self, name: &'static str, history: &[HistoryEntry<K>]) {
        if let Some(entry) = history.last() {
            let rows = histogram_rows(name, entry);
            let result = self.writer.write_histogram(&rows);
            self.store_err(result);
        }
    }
}

fn node_rows(step: Step, domain: Domain, topology: &Topology) -> Vec<NodeRow> {
    topology
        .agent_ids()
        .map(|id| {
            let s = topology.state(id);
            NodeRow {
                step,
                domain,
                agent_id:            id.0,
                degree:              topology.degree(id),
                condition:           s.condition,
                time_exposed:        s.time_exposed,
                initial_asset_value: s.initial_asset_value,
                current_asset_value: s.current_asset_value,
                financial_impact:    s.financial_impact,
            }
        })
        .collect()
}

fn histogram_rows<K: Category>(name: &'static str, entry: &HistoryEntry<K>) -> Vec<HistogramRow> {
    entry
        .counts
        .iter()
        .map(|(k, count)| HistogramRow {
            step: entry.step,
            histogram: name,
            category: k.as_str(),
            count,
        })
        .collect()
}

fn consolidated_rows(view: &SimView<'_>) -> Vec<ConsolidatedRow> {
    let sizes = view.pandemic.degree_stats();
    view.financial
        .agent_ids()
        .map(|id| {
            let s = view.financial.state(id);
            let pandemic_degree = view.pandemic.degree(id);
            ConsolidatedRow {
                agent_id: id.0,
                label: view
                    .population
                    .profile(id)
                    .map(|p| p.label.clone())
                    .unwrap_or_default(),
                pandemic_degree,
                financial_degree:    view.financial.degree(id),
                node_size:           sizes.scaled_size(pandemic_degree),
                condition:           s.condition,
                time_exposed:        s.time_exposed,
                initial_asset_value: s.initial_asset_value,
                current_asset_value: s.current_asset_value,
                financial_impact:    s.financial_impact,
            }
        })
        .collect()
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_sim_start(&mut self, view: &SimView<'_>) {
        self.write_topologies(Step::INITIAL, view);
        self.write_latest("condition", view.conditions);
        self.write_latest("impact", view.impacts);
    }

    fn on_iteration_end(&mut self, step: Step, view: &SimView<'_>) {
        self.write_topologies(step, view);
        match step.phase {
            Phase::Pandemic => self.write_latest("condition", view.conditions),
            Phase::Financial => self.write_latest("impact", view.impacts),
            Phase::Initial => {}
        }
    }

    fn on_sim_end(&mut self, view: &SimView<'_>) {
        let rows = consolidated_rows(view);
        let result = self.writer.write_consolidated(&rows);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
