use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContagionError {
    #[error("invalid engine parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

pub type ContagionResult<T> = Result<T, ContagionError>;
