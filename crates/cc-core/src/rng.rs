//! Deterministic RNG wrappers.
//!
//! # Determinism strategy
//!
//! Two kinds of randomness exist in a run:
//!
//! - **Sequential** draws during setup (topology edges, seed-infection
//!   selection) use a [`SimRng`] seeded directly from the run seed.  They are
//!   consumed in a fixed order, so the same seed yields the same graph.
//! - **Keyed** transmission draws use a [`ContactRng`] built fresh from
//!   `(seed, cycle, agent)`:
//!
//!   seed' = seed XOR (cycle * CYCLE_MIX) XOR (agent * AGENT_MIX)
//!
//!   A keyed draw never depends on how many draws came before it, so the
//!   transmission decision for a given neighbour in a given cycle is the same
//!   on every run regardless of iteration order.
//!
//! The mixing constants are the 64-bit fractional parts of the golden ratio
//! and of sqrt(2), which spread consecutive ids uniformly across the seed
//! space.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{AgentId, Cycle};

/// 64-bit fractional golden-ratio constant for agent seed mixing.
const AGENT_MIX: u64 = 0x9e37_79b9_7f4a_7c15;

/// 64-bit fractional sqrt(2) constant for cycle seed mixing.
const CYCLE_MIX: u64 = 0x6a09_e667_f3bc_c909;

// ── ContactRng ────────────────────────────────────────────────────────────────

/// RNG keyed by `(seed, cycle, agent)` for reproducible transmission draws.
pub struct ContactRng(SmallRng);

impl ContactRng {
    pub fn new(seed: u64, cycle: Cycle, agent: AgentId) -> Self {
        let key = seed
            ^ (cycle.0 as u64).wrapping_mul(CYCLE_MIX)
            ^ (agent.0 as u64).wrapping_mul(AGENT_MIX);
        ContactRng(SmallRng::seed_from_u64(key))
    }

    /// First draw for `(seed, cycle, agent)`, rounded up to hundredths.
    ///
    /// The result lies in `[0.01, 1.00]`, so a rate of `0.0` never passes
    /// `rate - draw >= 0` and a rate of `1.0` always does.
    pub fn draw(seed: u64, cycle: Cycle, agent: AgentId) -> f64 {
        ContactRng::new(seed, cycle, agent).hundredths()
    }

    /// Uniform value in `(0, 1]` rounded up to the next hundredth.
    pub fn hundredths(&mut self) -> f64 {
        // gen::<f64>() is in [0, 1); flip it into (0, 1].
        let u = 1.0 - self.0.r#gen::<f64>();
        ((u * 100.0).ceil() / 100.0).clamp(0.01, 1.0)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG for sequential setup work (graph generation,
/// seed-infection selection).
///
/// Used only in single-threaded contexts.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// `amount` distinct indices from `0..length`, in draw order.
    ///
    /// Caller guarantees `amount <= length`.
    pub fn sample_indices(&mut self, length: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.0, length, amount).into_vec()
    }
}
