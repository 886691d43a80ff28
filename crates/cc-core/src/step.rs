//! Scheduling counters.
//!
//! # Design
//!
//! A run is a sequence of cycles.  Each cycle is a batch of pandemic
//! iterations followed by a batch of financial iterations:
//!
//! ```text
//! cycle 0: P1 P2 … Pn  F1 F2 … Fm
//! cycle 1: P1 P2 … Pn  F1 F2 … Fm
//! ```
//!
//! `Cycle` is the monotonically advancing counter owned by the scheduler; the
//! pandemic engine reads it to key its transmission draws.  Iterations are
//! numbered from 1 within their phase, matching the `cycle.iteration` labels
//! used by external plot collaborators.

use std::fmt;

// ── Cycle ─────────────────────────────────────────────────────────────────────

/// Zero-based index of the current scheduling cycle.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Cycle(pub u32);

impl Cycle {
    pub const ZERO: Cycle = Cycle(0);

    /// The cycle after `self`.
    #[inline]
    pub fn next(self) -> Cycle {
        Cycle(self.0 + 1)
    }

    /// One-based label used in progress output (`Cycle #1` for `Cycle(0)`).
    #[inline]
    pub fn ordinal(self) -> u32 {
        self.0 + 1
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C{}", self.0)
    }
}

// ── Phase ─────────────────────────────────────────────────────────────────────

/// Which domain an iteration belongs to.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Phase {
    /// State before the first cycle.
    Initial,
    Pandemic,
    Financial,
}

impl Phase {
    /// Label used for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Initial   => "initial",
            Phase::Pandemic  => "pandemic",
            Phase::Financial => "financial",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Step ──────────────────────────────────────────────────────────────────────

/// Position of one iteration in the run.
///
/// `iteration` is one-based within `phase`; the initial step uses 0.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Step {
    pub cycle:     Cycle,
    pub phase:     Phase,
    pub iteration: u32,
}

impl Step {
    pub const INITIAL: Step = Step {
        cycle:     Cycle::ZERO,
        phase:     Phase::Initial,
        iteration: 0,
    };

    pub fn pandemic(cycle: Cycle, iteration: u32) -> Self {
        Self { cycle, phase: Phase::Pandemic, iteration }
    }

    pub fn financial(cycle: Cycle, iteration: u32) -> Self {
        Self { cycle, phase: Phase::Financial, iteration }
    }
}

impl fmt::Display for Step {
    /// `pandemic 2.3` — one-based cycle, one-based iteration.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.phase {
            Phase::Initial => f.write_str("initial 0.0"),
            _ => write!(f, "{} {}.{}", self.phase, self.cycle.ordinal(), self.iteration),
        }
    }
}
