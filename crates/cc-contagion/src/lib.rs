//! `cc-contagion` — the two per-iteration update rules.
//!
//! | Engine              | Mutates                                          |
//! |---------------------|--------------------------------------------------|
//! | [`PandemicEngine`]  | `condition`, `time_exposed`, `able_to_recover`   |
//! | [`FinancialEngine`] | `current_asset_value`, `financial_impact`        |
//!
//! Both engines walk agents in ascending `AgentId` order and read state that
//! earlier agents in the same iteration have already written.  That ordering
//! is part of the semantics; neither engine may be parallelised.

pub mod error;
pub mod financial;
pub mod pandemic;


pub use error::{ContagionError, ContagionResult};
pub use financial::{FinancialEngine, FinancialParams, FinancialReport};
pub use pandemic::{PandemicEngine, PandemicParams, PandemicReport};
