//! `cc-sim` — cycle scheduler for the co-contagion simulator.
//!
//! # Cycle loop
//!
//! ```text
//! for cycle in 0..settings.general.cycles:
//!   repeat pandemic.iterations_per_cycle times:
//!     ① sync    financial ──▶ pandemic
//!     ② step    PandemicEngine (keyed by cycle)
//!     ③ mirror  pandemic ──▶ financial
//!     ④ record  condition histogram
//!     ⑤ notify  observer.on_iteration_end
//!   repeat financial.iterations_per_cycle times:
//!     ① sync    pandemic ──▶ financial
//!     ② step    FinancialEngine
//!     ③ mirror  financial ──▶ pandemic
//!     ④ record  impact-tier histogram
//!     ⑤ notify  observer.on_iteration_end
//! ```
//!
//! # Quick-start
//!
//! ```rust
//! use cc_core::Settings;
//! use cc_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(Settings::default()).build().unwrap();
//! sim.run(&mut NoopObserver);
//! assert_eq!(sim.condition_history().len(), 1 + 5);
//! ```

pub mod builder;
pub mod error;
pub mod histogram;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use histogram::{ConditionCounts, Histogram, HistoryEntry, ImpactCounts};
pub use observer::{NoopObserver, SimObserver, SimView};
pub use sim::Sim;
