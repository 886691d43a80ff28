//! Fluent builder for [`Population`].
//!
//! # Usage
//!
//! ```rust
//! use cc_agent::PopulationBuilder;
//!
//! let pop = PopulationBuilder::new(50, /*seed=*/ 5)
//!     .initially_infectious(2)
//!     .initial_asset_value(1_000.0)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(pop.len(), 50);
//! assert_eq!(pop.initially_infectious().len(), 2);
//! assert_eq!(pop.initial_states()[0].initial_asset_value, 1_000.0);
//! ```

use cc_core::SimRng;
use cc_core::settings::DEFAULT_INITIAL_ASSET_VALUE;

use crate::{AgentError, AgentProfile, AgentResult, AgentState, Population};

/// Fluent builder for [`Population`].
pub struct PopulationBuilder {
    count:                usize,
    seed:                 u64,
    initially_infectious: usize,
    initial_asset_value:  f64,
}

impl PopulationBuilder {
    /// Builder for `count` agents; `seed` drives seed-infection selection.
    ///
    /// Defaults: one initially infectious agent, 100,000,000.00 in assets.
    pub fn new(count: usize, seed: u64) -> Self {
        Self {
            count,
            seed,
            initially_infectious: 1,
            initial_asset_value:  DEFAULT_INITIAL_ASSET_VALUE,
        }
    }

    pub fn initially_infectious(mut self, n: usize) -> Self {
        self.initially_infectious = n;
        self
    }

    pub fn initial_asset_value(mut self, value: f64) -> Self {
        self.initial_asset_value = value;
        self
    }

    /// Validate and construct.
    pub fn build(self) -> AgentResult<Population> {
        if self.initially_infectious > self.count {
            return Err(AgentError::TooManyInfectious {
                requested: self.initially_infectious,
                count:     self.count,
            });
        }
        if !(self.initial_asset_value.is_finite() && self.initial_asset_value > 0.0) {
            return Err(AgentError::InvalidAssetValue(self.initial_asset_value));
        }

        let profiles = (0..self.count)
            .map(|i| AgentProfile { label: format!("Bank{i}") })
            .collect();

        let mut states = vec![AgentState::new(self.initial_asset_value); self.count];
        let mut rng = SimRng::new(self.seed);
        for i in rng.sample_indices(self.count, self.initially_infectious) {
            states[i].infect();
        }

        Ok(Population::new(profiles, states))
    }
}
