//! `cc-agent` — agent records and population setup.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                      |
//! |-----------------|---------------------------------------------------------------|
//! | [`state`]       | `Condition`, `ImpactTier`, `AgentState`, `Category`           |
//! | [`population`]  | `Population`, `AgentProfile`, `create_population`             |
//! | [`builder`]     | `PopulationBuilder` (fluent construction)                     |
//! | [`error`]       | `AgentError`                                                  |
//!
//! An agent's identity (`AgentId` + `AgentProfile`) lives once, in the
//! `Population`.  Topologies only carry copies of the dynamic
//! [`AgentState`], indexed by the same `AgentId`.

pub mod builder;
pub mod error;
pub mod population;
pub mod state;

#[cfg(test)]
mod tests;

pub use builder::PopulationBuilder;
pub use error::{AgentError, AgentResult};
pub use population::{AgentProfile, Population, create_population};
pub use state::{AgentState, Category, Condition, ImpactTier};
