//! `cc-core` — foundational types for the co-contagion simulator.
//!
//! This crate is a dependency of every other `cc-*` crate.  It has no `cc-*`
//! dependencies and only a few external ones (`rand`, `thiserror`, `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`step`]        | `Cycle`, `Phase`, `Step`                              |
//! | [`rng`]         | `SimRng` (sequential), `ContactRng` (keyed draws)     |
//! | [`settings`]    | `Settings` and its three groups, `TopologyKind`       |
//! | [`error`]       | `CcError`, `CcResult`                                 |

pub mod error;
pub mod ids;
pub mod rng;
pub mod settings;
pub mod step;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CcError, CcResult};
pub use ids::AgentId;
pub use rng::{ContactRng, SimRng};
pub use settings::{FinancialSettings, GeneralSettings, PandemicSettings, Settings, TopologyKind};
pub use step::{Cycle, Phase, Step};
