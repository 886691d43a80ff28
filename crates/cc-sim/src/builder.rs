//! Fluent builder for constructing a [`Sim`].

use cc_agent::{Population, PopulationBuilder};
use cc_contagion::{FinancialEngine, FinancialParams, PandemicEngine, PandemicParams};
use cc_core::Settings;
use cc_topology::{Topology, generator_for};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`Settings`] — validated in [`build`](Self::build) before anything else.
///
/// # Optional inputs (have defaults)
///
/// | Method                    | Default                                              |
/// |---------------------------|------------------------------------------------------|
/// | `.population(p)`          | `PopulationBuilder` from `general` + `financial`     |
/// | `.pandemic_topology(t)`   | generated with `pandemic.edge_probability`, `seed`   |
/// | `.financial_topology(t)`  | generated with `financial.edge_probability`, `seed + 1` |
///
/// Supplied topologies keep their own node states; they must have exactly
/// `agent_count` nodes.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(settings)
///     .population(population)
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder {
    settings:           Settings,
    population:         Option<Population>,
    pandemic_topology:  Option<Topology>,
    financial_topology: Option<Topology>,
}

impl SimBuilder {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            population:         None,
            pandemic_topology:  None,
            financial_topology: None,
        }
    }

    /// Supply a pre-built population (must be length `agent_count`).
    pub fn population(mut self, population: Population) -> Self {
        self.population = Some(population);
        self
    }

    pub fn pandemic_topology(mut self, topology: Topology) -> Self {
        self.pandemic_topology = Some(topology);
        self
    }

    pub fn financial_topology(mut self, topology: Topology) -> Self {
        self.financial_topology = Some(topology);
        self
    }

    /// Validate settings, create the population and both topologies, and
    /// return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.settings.validate()?;
        let general = &self.settings.general;
        let agent_count = general.agent_count;

        // ── Population ────────────────────────────────────────────────────
        let population = match self.population {
            Some(p) => check_len(p, Population::len, agent_count, "population")?,
            None => PopulationBuilder::new(agent_count, general.seed)
                .initially_infectious(general.initially_infectious)
                .initial_asset_value(self.settings.financial.initial_asset_value)
                .build()?,
        };

        // ── Topologies ────────────────────────────────────────────────────
        let pandemic = match self.pandemic_topology {
            Some(t) => check_len(t, Topology::len, agent_count, "pandemic topology")?,
            None => generator_for(general.topology_kind, self.settings.pandemic.edge_probability)?
                .generate(population.initial_states(), general.seed)?,
        };
        let financial = match self.financial_topology {
            Some(t) => check_len(t, Topology::len, agent_count, "financial topology")?,
            None => generator_for(general.topology_kind, self.settings.financial.edge_probability)?
                .generate(population.initial_states(), general.seed.wrapping_add(1))?,
        };

        for (name, t) in [("pandemic", &pandemic), ("financial", &financial)] {
            let d = t.degree_stats();
            log::info!(
                "{name} topology: {} nodes, {} edges, degree {}..{} (mean {:.2}), {} isolated",
                t.len(),
                t.edge_count(),
                d.min,
                d.max,
                d.mean,
                d.isolated
            );
        }

        // ── Engines ───────────────────────────────────────────────────────
        let pandemic_engine = PandemicEngine::new(
            PandemicParams::from_settings(&self.settings.pandemic),
            general.seed,
        )?;
        let financial_engine =
            FinancialEngine::new(FinancialParams::from_settings(&self.settings.financial))?;

        Ok(Sim::new(
            self.settings,
            population,
            pandemic,
            financial,
            pandemic_engine,
            financial_engine,
        ))
    }
}

fn check_len<T>(value: T, len: fn(&T) -> usize, expected: usize, what: &'static str) -> SimResult<T> {
    let got = len(&value);
    if got != expected {
        return Err(SimError::AgentCountMismatch { expected, got, what });
    }
    Ok(value)
}
