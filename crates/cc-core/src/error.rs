//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `CcError` as one variant
//! via `#[from]`, so configuration failures propagate with `?`.

use thiserror::Error;

/// The top-level error type for `cc-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CcError {
    /// Invalid or missing settings value.  Raised before anything runs.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `cc-*` crates.
pub type CcResult<T> = Result<T, CcError>;
