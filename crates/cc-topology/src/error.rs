//! Topology error type.

use thiserror::Error;

use cc_core::AgentId;

/// Errors produced by `cc-topology`.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("edge probability must be in [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error("{agent} is outside a topology of {len} nodes")]
    NodeOutOfRange { agent: AgentId, len: usize },

    #[error("self-loop on {0} is not allowed in a simple graph")]
    SelfLoop(AgentId),

    #[error("{0} nodes exceed the agent id range")]
    TooManyNodes(usize),
}

pub type TopologyResult<T> = Result<T, TopologyError>;
