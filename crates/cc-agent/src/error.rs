use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("cannot seed {requested} infectious agents in a population of {count}")]
    TooManyInfectious { requested: usize, count: usize },

    #[error("initial asset value must be finite and > 0, got {0}")]
    InvalidAssetValue(f64),
}

pub type AgentResult<T> = Result<T, AgentError>;
