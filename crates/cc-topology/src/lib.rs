//! `cc-topology` — interaction graphs over the shared agent set.
//!
//! Two independent topologies exist per run: one for disease transmission,
//! one for inter-bank lending.  Both share the node set (`AgentId`s) but not
//! their edges.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`topology`]    | `Topology`, `TopologyBuilder`                             |
//! | [`generator`]   | `TopologyGenerator` trait, `ErdosRenyi`, `generate_topology` |
//! | [`degree`]      | `DegreeStats`, guarded node-size scaling                  |
//! | [`sync`]        | `sync` — copy dynamic state between topologies            |
//! | [`error`]       | `TopologyError`                                           |

pub mod degree;
pub mod error;
pub mod generator;
pub mod sync;
pub mod topology;


pub use degree::DegreeStats;
pub use error::{TopologyError, TopologyResult};
pub use generator::{ErdosRenyi, TopologyGenerator, generate_topology, generator_for};
pub use sync::sync;
pub use topology::{Topology, TopologyBuilder};
