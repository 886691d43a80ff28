//! The `OutputWriter` trait implemented by backend writers.

use crate::{ConsolidatedRow, HistogramRow, NodeRow, OutputResult};

/// A sink for the three row streams of a run.
///
/// Errors are returned to the caller; [`SimOutputObserver`][crate::SimOutputObserver]
/// stores them so the simulation itself never fails on output.
pub trait OutputWriter {
    /// Write one topology's node table for one step.
    fn write_nodes(&mut self, rows: &[NodeRow]) -> OutputResult<()>;

    fn write_histogram(&mut self, rows: &[HistogramRow]) -> OutputResult<()>;

    /// Write the run-level per-agent table.  Called once, before `finish`.
    fn write_consolidated(&mut self, rows: &[ConsolidatedRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
