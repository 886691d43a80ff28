//! The agent set: fixed identities plus the initial dynamic state.
//!
//! No agent is ever added or removed after construction.  "Removed" is a
//! health state, not a deletion.

use cc_core::AgentId;

use crate::{AgentResult, AgentState, PopulationBuilder};

/// Static identity of one agent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AgentProfile {
    /// Human-readable label, `Bank{i}`.
    pub label: String,
}

/// Every agent's identity and its state at creation time.
///
/// Both topologies are generated from `initial_states`; from then on each
/// topology carries its own synchronized copy.
pub struct Population {
    profiles:       Vec<AgentProfile>,
    initial_states: Vec<AgentState>,
}

impl Population {
    pub(crate) fn new(profiles: Vec<AgentProfile>, initial_states: Vec<AgentState>) -> Self {
        debug_assert_eq!(profiles.len(), initial_states.len());
        Self { profiles, initial_states }
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> {
        AgentId::range(self.len())
    }

    pub fn profile(&self, agent: AgentId) -> Option<&AgentProfile> {
        self.profiles.get(agent.index())
    }

    /// State of every agent at creation, indexed by `AgentId`.
    pub fn initial_states(&self) -> &[AgentState] {
        &self.initial_states
    }

    /// Ids of agents that start infectious, ascending.
    pub fn initially_infectious(&self) -> Vec<AgentId> {
        AgentId::range(self.initial_states.len())
            .zip(&self.initial_states)
            .filter(|(_, s)| s.is_infectious())
            .map(|(id, _)| id)
            .collect()
    }
}

/// Allocate `count` default agents and infect `initially_infectious` of them.
///
/// The infected agents are chosen without replacement from a [`cc_core::SimRng`]
/// seeded with `seed`, so the selection is stable for a fixed seed.
///
/// ```rust
/// use cc_agent::create_population;
///
/// let pop = create_population(10, 1, 42).unwrap();
/// assert_eq!(pop.len(), 10);
/// assert_eq!(pop.initially_infectious().len(), 1);
/// assert!(create_population(3, 4, 42).is_err());
/// ```
pub fn create_population(count: usize, initially_infectious: usize, seed: u64) -> AgentResult<Population> {
    PopulationBuilder::new(count, seed)
        .initially_infectious(initially_infectious)
        .build()
}
