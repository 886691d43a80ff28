//! Simulation observer trait for progress reporting and data export.

use cc_agent::{Condition, ImpactTier, Population};
use cc_core::{Cycle, Step};
use cc_topology::Topology;

use crate::HistoryEntry;

/// Read-only view of the run handed to observers.
///
/// Everything is a shared borrow, so an observer can copy or export state but
/// never change what the next iteration sees.
pub struct SimView<'a> {
    pub population: &'a Population,
    pub pandemic:   &'a Topology,
    pub financial:  &'a Topology,
    /// Condition counts so far: the initial entry, then one per pandemic
    /// iteration.
    pub conditions: &'a [HistoryEntry<Condition>],
    /// Impact-tier counts so far: the initial entry, then one per financial
    /// iteration.
    pub impacts:    &'a [HistoryEntry<ImpactTier>],
}

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at iteration and cycle
/// boundaries.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct Progress;
///
/// impl SimObserver for Progress {
///     fn on_iteration_end(&mut self, step: Step, _view: &SimView<'_>) {
///         println!("  {step}");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once before the first cycle with the initial state.
    fn on_sim_start(&mut self, _view: &SimView<'_>) {}

    fn on_cycle_start(&mut self, _cycle: Cycle) {}

    /// Called after every pandemic and financial iteration.
    fn on_iteration_end(&mut self, _step: Step, _view: &SimView<'_>) {}

    fn on_cycle_end(&mut self, _cycle: Cycle, _view: &SimView<'_>) {}

    /// Called once after the final cycle completes.
    fn on_sim_end(&mut self, _view: &SimView<'_>) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
