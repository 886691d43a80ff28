//! `cc-output` — write-only export of a co-contagion run.
//!
//! | File                  | Rows                                                     |
//! |-----------------------|----------------------------------------------------------|
//! | `node_snapshots.csv`  | both topologies' node tables, initial step + every iteration |
//! | `histograms.csv`      | condition and impact-tier counts per step, sorted by category |
//! | `graph_data.csv`      | consolidated per-agent table, written once at the end    |
//!
//! The writer is driven by [`SimOutputObserver`], which implements
//! `cc_sim::SimObserver`.  The simulation never sees writer errors; they are
//! stored and handed back by [`SimOutputObserver::take_error`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use cc_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs);
//! if let Some(e) = obs.take_error() {
//!     log::error!("output error: {e}");
//! }
//! println!("{}", obs.writer().consolidated_path().display());
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
pub use row::{ConsolidatedRow, Domain, HistogramRow, NodeRow};
pub use writer::OutputWriter;
