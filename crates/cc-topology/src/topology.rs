//! Graph representation and builder.
//!
//! # Data layout
//!
//! A simple undirected graph stored as one sorted neighbour list per node:
//!
//! ```text
//! neighbors[a] = [b, c, …]      (ascending AgentId, no duplicates, no a)
//! ```
//!
//! Each undirected edge appears in both endpoints' lists.  Next to the
//! adjacency the topology owns its own copy of every agent's dynamic
//! [`AgentState`], indexed by the same `AgentId`.  The copy is what the
//! engines mutate and what [`sync`](crate::sync) overwrites.

use cc_agent::AgentState;
use cc_core::AgentId;

use crate::{DegreeStats, TopologyError, TopologyResult};

// ── Topology ──────────────────────────────────────────────────────────────────

pub struct Topology {
    neighbors:  Vec<Vec<AgentId>>,
    states:     Vec<AgentState>,
    edge_count: usize,
}

impl Topology {
    /// Number of nodes (always the population size).
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Iterator over all node ids in ascending order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> {
        AgentId::range(self.len())
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Neighbours of `agent`, ascending.
    #[inline]
    pub fn neighbors(&self, agent: AgentId) -> &[AgentId] {
        &self.neighbors[agent.index()]
    }

    #[inline]
    pub fn degree(&self, agent: AgentId) -> usize {
        self.neighbors[agent.index()].len()
    }

    pub fn has_edge(&self, a: AgentId, b: AgentId) -> bool {
        self.neighbors
            .get(a.index())
            .is_some_and(|n| n.binary_search(&b).is_ok())
    }

    /// Every undirected edge once, as `(low, high)`, in ascending order.
    pub fn edges(&self) -> impl Iterator<Item = (AgentId, AgentId)> + '_ {
        AgentId::range(self.neighbors.len())
            .zip(&self.neighbors)
            .flat_map(|(a, ns)| ns.iter().filter(move |&&b| b > a).map(move |&b| (a, b)))
    }

    pub fn degree_stats(&self) -> DegreeStats {
        DegreeStats::from_degrees(self.neighbors.iter().map(Vec::len))
    }

    // ── State access ──────────────────────────────────────────────────────

    #[inline]
    pub fn state(&self, agent: AgentId) -> &AgentState {
        &self.states[agent.index()]
    }

    #[inline]
    pub fn state_mut(&mut self, agent: AgentId) -> &mut AgentState {
        &mut self.states[agent.index()]
    }

    pub fn states(&self) -> &[AgentState] {
        &self.states
    }

    pub fn states_mut(&mut self) -> &mut [AgentState] {
        &mut self.states
    }

    /// Shared adjacency plus mutable states in one borrow, for engines that
    /// walk edges while writing node attributes.
    pub fn parts_mut(&mut self) -> (&[Vec<AgentId>], &mut [AgentState]) {
        (&self.neighbors, &mut self.states)
    }
}

// ── TopologyBuilder ───────────────────────────────────────────────────────────

/// Incremental builder for [`Topology`].
///
/// Node attributes are initialised from the `AgentState` slice passed to
/// [`new`](Self::new).  Duplicate edges are collapsed on [`build`](Self::build).
pub struct TopologyBuilder {
    neighbors: Vec<Vec<AgentId>>,
    states:    Vec<AgentState>,
}

impl TopologyBuilder {
    pub fn new(states: &[AgentState]) -> Self {
        Self {
            neighbors: vec![Vec::new(); states.len()],
            states:    states.to_vec(),
        }
    }

    /// Add the undirected edge `a — b`.
    pub fn add_edge(&mut self, a: AgentId, b: AgentId) -> TopologyResult<()> {
        let len = self.states.len();
        for agent in [a, b] {
            if agent.index() >= len {
                return Err(TopologyError::NodeOutOfRange { agent, len });
            }
        }
        if a == b {
            return Err(TopologyError::SelfLoop(a));
        }
        self.neighbors[a.index()].push(b);
        self.neighbors[b.index()].push(a);
        Ok(())
    }

    /// Sort and de-duplicate neighbour lists and return the topology.
    pub fn build(mut self) -> Topology {
        let mut ends = 0;
        for ns in &mut self.neighbors {
            ns.sort_unstable();
            ns.dedup();
            ends += ns.len();
        }
        Topology {
            neighbors:  self.neighbors,
            states:     self.states,
            edge_count: ends / 2,
        }
    }
}
