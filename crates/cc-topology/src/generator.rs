//! Random-graph generation.
//!
//! [`TopologyGenerator`] is the extension point; [`ErdosRenyi`] is the only
//! strategy shipped.  Generation is a pure function of the agent count, the
//! generator's parameters, and the seed: the same inputs always produce the
//! same edge set.

use cc_agent::AgentState;
use cc_core::{AgentId, SimRng, TopologyKind};

use crate::{Topology, TopologyBuilder, TopologyError, TopologyResult};

/// Pluggable graph-construction strategy.
pub trait TopologyGenerator {
    /// Build a graph with one node per entry of `states`, initialising node
    /// attributes from them.
    fn generate(&self, states: &[AgentState], seed: u64) -> TopologyResult<Topology>;
}

// ── ErdosRenyi ────────────────────────────────────────────────────────────────

/// G(n, p): each unordered pair is connected independently with probability
/// `edge_probability`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ErdosRenyi {
    edge_probability: f64,
}

impl ErdosRenyi {
    /// Rejects probabilities outside `[0, 1]` (including NaN).
    pub fn new(edge_probability: f64) -> TopologyResult<Self> {
        if !(0.0..=1.0).contains(&edge_probability) {
            return Err(TopologyError::InvalidProbability(edge_probability));
        }
        Ok(Self { edge_probability })
    }
}

impl TopologyGenerator for ErdosRenyi {
    fn generate(&self, states: &[AgentState], seed: u64) -> TopologyResult<Topology> {
        let n = u32::try_from(states.len()).map_err(|_| TopologyError::TooManyNodes(states.len()))?;
        let mut rng = SimRng::new(seed);
        let mut builder = TopologyBuilder::new(states);

        // Pairs are visited in a fixed (i, j) order so the draw sequence, and
        // therefore the edge set, depends only on n, p and seed.
        for i in 0..n {
            for j in (i + 1)..n {
                if rng.gen_bool(self.edge_probability) {
                    builder.add_edge(AgentId(i), AgentId(j))?;
                }
            }
        }
        Ok(builder.build())
    }
}

// ── Convenience ───────────────────────────────────────────────────────────────

/// The generator configured by a settings `TopologyKind`.
pub fn generator_for(kind: TopologyKind, edge_probability: f64) -> TopologyResult<Box<dyn TopologyGenerator>> {
    match kind {
        TopologyKind::ErdosRenyi => Ok(Box::new(ErdosRenyi::new(edge_probability)?)),
    }
}

/// Build an Erdős–Rényi topology over `states`.
///
/// ```rust
/// use cc_agent::create_population;
/// use cc_topology::generate_topology;
///
/// let pop = create_population(10, 1, 0).unwrap();
/// let complete = generate_topology(pop.initial_states(), 1.0, 7).unwrap();
/// assert_eq!(complete.edge_count(), 45);
/// assert!(generate_topology(pop.initial_states(), 1.1, 7).is_err());
/// ```
pub fn generate_topology(states: &[AgentState], edge_probability: f64, seed: u64) -> TopologyResult<Topology> {
    ErdosRenyi::new(edge_probability)?.generate(states, seed)
}
