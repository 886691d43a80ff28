use cc_agent::AgentError;
use cc_contagion::ContagionError;
use cc_core::CcError;
use cc_topology::TopologyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] CcError),

    #[error("population error: {0}")]
    Population(#[from] AgentError),

    #[error("topology error: {0}")]
    Topology(#[from] TopologyError),

    #[error("engine error: {0}")]
    Engine(#[from] ContagionError),

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },
}

pub type SimResult<T> = Result<T, SimError>;
