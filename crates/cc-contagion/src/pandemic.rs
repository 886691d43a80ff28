//! SIR-style transmission and recovery.
//!
//! # Rules
//!
//! Every agent `a` is visited in ascending order, and for each incident edge
//! `a — b` the following are evaluated with `a` as the source:
//!
//! 1. **Removal**: `a.time_exposed > time_to_recover` → `a` becomes removed.
//! 2. **Transmission**: `a` infectious, `a.time_exposed > contagious_onset`,
//!    `b` susceptible, and `transmission_rate - draw(cycle, b) >= 0` →
//!    `b` becomes infectious.
//! 3. **Clock**: `a` infectious and `a.able_to_recover` → advance
//!    `a.time_exposed` by one and clear the flag.
//!
//! `able_to_recover` is set on every agent at the start of the iteration, so
//! rule 3 fires at most once per agent however many edges it has.  Agents
//! without edges are never evaluated.
//!
//! The draw is keyed by `(seed, cycle, b)` only: every exposure of `b` within
//! one cycle sees the same value.

use cc_agent::Condition;
use cc_core::{AgentId, ContactRng, Cycle, PandemicSettings};
use cc_topology::Topology;

use crate::{ContagionError, ContagionResult};

/// Tunables for [`PandemicEngine`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PandemicParams {
    /// Probability-like threshold in [0, 1].
    pub transmission_rate: f64,
    /// Iterations infectious before removal.
    pub time_to_recover: u32,
    /// `time_exposed` a source must exceed before it can transmit.
    pub contagious_onset: u32,
}

impl PandemicParams {
    pub fn from_settings(settings: &PandemicSettings) -> Self {
        Self {
            transmission_rate: settings.transmission_rate,
            time_to_recover:   settings.time_to_recover,
            contagious_onset:  settings.contagious_onset_threshold(),
        }
    }
}

/// What one pandemic iteration changed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PandemicReport {
    pub newly_infected: usize,
    pub newly_removed:  usize,
}

/// Advances the health state machine of a topology one iteration at a time.
pub struct PandemicEngine {
    params: PandemicParams,
    seed:   u64,
}

impl PandemicEngine {
    /// `seed` keys the transmission draws together with the cycle index.
    pub fn new(params: PandemicParams, seed: u64) -> ContagionResult<Self> {
        let rate = params.transmission_rate;
        if !(0.0..=1.0).contains(&rate) {
            return Err(ContagionError::InvalidParameter { name: "transmission_rate", value: rate });
        }
        if params.time_to_recover == 0 {
            return Err(ContagionError::InvalidParameter { name: "time_to_recover", value: 0.0 });
        }
        Ok(Self { params, seed })
    }

    /// Whether `agent` would be infected by an exposure during `cycle`.
    pub fn transmits(&self, cycle: Cycle, agent: AgentId) -> bool {
        let draw = ContactRng::draw(self.seed, cycle, agent);
        self.params.transmission_rate - draw >= 0.0
    }

    /// Apply one iteration to `topology`.
    pub fn step(&self, topology: &mut Topology, cycle: Cycle) -> PandemicReport {
        let p = &self.params;
        let mut report = PandemicReport::default();
        let (neighbors, states) = topology.parts_mut();

        for s in states.iter_mut() {
            s.able_to_recover = true;
        }

        for (i, edges) in neighbors.iter().enumerate() {
            for &target in edges {
                // ① Removal
                let source = &mut states[i];
                if source.time_exposed > p.time_to_recover && !source.is_removed() {
                    source.condition = Condition::Removed;
                    source.able_to_recover = false;
                    report.newly_removed += 1;
                }
                debug_assert!(source.is_removed() || source.time_exposed <= p.time_to_recover);
                if !source.is_infectious() {
                    continue;
                }
                let contagious = source.time_exposed > p.contagious_onset;

                // ② Transmission
                if contagious
                    && states[target.index()].is_susceptible()
                    && self.transmits(cycle, target)
                {
                    states[target.index()].infect();
                    report.newly_infected += 1;
                }

                // ③ Recovery clock, once per agent per iteration
                let source = &mut states[i];
                if source.able_to_recover {
                    source.time_exposed += 1;
                    source.able_to_recover = false;
                }
            }
        }

        log::trace!(
            "pandemic step {cycle}: +{} infected, +{} removed",
            report.newly_infected,
            report.newly_removed
        );
        report
    }
}
