//! The `Sim` struct and its cycle loop.

use cc_agent::{Condition, ImpactTier, Population};
use cc_contagion::{FinancialEngine, PandemicEngine};
use cc_core::{Cycle, Settings, Step};
use cc_topology::{Topology, sync};

use crate::{ConditionCounts, HistoryEntry, ImpactCounts, SimObserver, SimView};

/// The co-simulation runner.
///
/// Owns the population, both topologies, both engines, and the cycle counter
/// that keys pandemic transmission draws.  A `Sim` shares no mutable state
/// with any other instance.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    pub settings: Settings,

    /// Agent identities and creation-time state.
    pub population: Population,

    /// Disease-transmission graph.
    pub pandemic: Topology,

    /// Inter-bank lending graph.
    pub financial: Topology,

    pub pandemic_engine:  PandemicEngine,
    pub financial_engine: FinancialEngine,

    /// The next cycle to run.
    cycle:   Cycle,
    started: bool,

    conditions: Vec<HistoryEntry<Condition>>,
    impacts:    Vec<HistoryEntry<ImpactTier>>,
}

impl Sim {
    pub(crate) fn new(
        settings:         Settings,
        population:       Population,
        pandemic:         Topology,
        financial:        Topology,
        pandemic_engine:  PandemicEngine,
        financial_engine: FinancialEngine,
    ) -> Self {
        let conditions = vec![HistoryEntry {
            step:   Step::INITIAL,
            counts: condition_counts(&pandemic),
        }];
        let impacts = vec![HistoryEntry {
            step:   Step::INITIAL,
            counts: impact_counts(&financial),
        }];
        Self {
            settings,
            population,
            pandemic,
            financial,
            pandemic_engine,
            financial_engine,
            cycle: Cycle::ZERO,
            started: false,
            conditions,
            impacts,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current cycle to `settings.general.cycles`, then
    /// [`finish`](Self::finish).
    ///
    /// Calls observer hooks at every iteration and cycle boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        self.start(observer);
        while self.cycle.0 < self.settings.general.cycles {
            self.process_cycle(observer);
        }
        self.finish(observer);
    }

    /// Run exactly `n` cycles from the current position (ignores
    /// `settings.general.cycles`).
    ///
    /// Does not fire `on_sim_end`; call [`finish`](Self::finish) once
    /// stepping is done.
    pub fn run_cycles<O: SimObserver>(&mut self, n: u32, observer: &mut O) {
        self.start(observer);
        for _ in 0..n {
            self.process_cycle(observer);
        }
    }

    /// Fire `on_sim_end` with the current state.
    pub fn finish<O: SimObserver>(&mut self, observer: &mut O) {
        self.start(observer);
        observer.on_sim_end(&self.view());
    }

    /// The next cycle to run.
    pub fn cycle(&self) -> Cycle {
        self.cycle
    }

    /// Condition counts: the initial entry, then one per pandemic iteration.
    pub fn condition_history(&self) -> &[HistoryEntry<Condition>] {
        &self.conditions
    }

    /// Impact-tier counts: the initial entry, then one per financial iteration.
    pub fn impact_history(&self) -> &[HistoryEntry<ImpactTier>] {
        &self.impacts
    }

    pub fn view(&self) -> SimView<'_> {
        SimView {
            population: &self.population,
            pandemic:   &self.pandemic,
            financial:  &self.financial,
            conditions: &self.conditions,
            impacts:    &self.impacts,
        }
    }

    // ── Cycle processing ──────────────────────────────────────────────────

    fn start<O: SimObserver>(&mut self, observer: &mut O) {
        if !self.started {
            self.started = true;
            observer.on_sim_start(&self.view());
        }
    }

    /// Each step is bracketed by syncs: the incoming one pulls the other
    /// domain's state in, the outgoing one mirrors the result back so that a
    /// second iteration of the same phase never resyncs from a stale copy.
    fn process_cycle<O: SimObserver>(&mut self, observer: &mut O) {
        let cycle = self.cycle;
        log::info!("Cycle #{}", cycle.ordinal());
        observer.on_cycle_start(cycle);

        for iteration in 1..=self.settings.pandemic.iterations_per_cycle {
            let step = Step::pandemic(cycle, iteration);
            sync(&self.financial, &mut self.pandemic);
            let report = self.pandemic_engine.step(&mut self.pandemic, cycle);
            sync(&self.pandemic, &mut self.financial);
            self.conditions.push(HistoryEntry { step, counts: condition_counts(&self.pandemic) });
            log::debug!(
                "{step}: +{} infected, +{} removed",
                report.newly_infected,
                report.newly_removed
            );
            observer.on_iteration_end(step, &self.view());
        }

        for iteration in 1..=self.settings.financial.iterations_per_cycle {
            let step = Step::financial(cycle, iteration);
            sync(&self.pandemic, &mut self.financial);
            let report = self.financial_engine.step(&mut self.financial);
            sync(&self.financial, &mut self.pandemic);
            self.impacts.push(HistoryEntry { step, counts: impact_counts(&self.financial) });
            log::debug!(
                "{step}: {} shocked, {} bailouts ({:.2} transferred), +{} bust",
                report.shocked,
                report.bailouts,
                report.transferred,
                report.newly_bust
            );
            observer.on_iteration_end(step, &self.view());
        }

        observer.on_cycle_end(cycle, &self.view());
        self.cycle = cycle.next();
    }
}

fn condition_counts(topology: &Topology) -> ConditionCounts {
    ConditionCounts::count_from(topology.states().iter().map(|s| s.condition))
}

fn impact_counts(topology: &Topology) -> ImpactCounts {
    ImpactCounts::count_from(topology.states().iter().map(|s| s.financial_impact))
}
