//! Per-agent dynamic state and the two reporting categories.

use std::fmt;

// ── Category ──────────────────────────────────────────────────────────────────

/// A closed set of labels that per-iteration histograms count over.
///
/// `ALL` lists every variant in key order, so histograms can report zero
/// counts and stay sorted by category.
pub trait Category: Copy + Ord + fmt::Debug + 'static {
    const ALL: &'static [Self];

    /// Label used for CSV column values.
    fn as_str(self) -> &'static str;
}

// ── Condition ─────────────────────────────────────────────────────────────────

/// Health state.  `Removed` is terminal.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub enum Condition {
    #[default]
    Susceptible,
    Infectious,
    Removed,
}

impl Category for Condition {
    const ALL: &'static [Condition] = &[
        Condition::Susceptible,
        Condition::Infectious,
        Condition::Removed,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Condition::Susceptible => "susceptible",
            Condition::Infectious  => "infectious",
            Condition::Removed     => "removed",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ImpactTier ────────────────────────────────────────────────────────────────

/// Discretized `current_asset_value / initial_asset_value`, ordered from
/// least to most severe.  `Bust` is terminal.
///
/// | Tier           | Ratio            |
/// |----------------|------------------|
/// | `None`         | `>= 1.0`         |
/// | `Minor`        | `[0.75, 1.0)`    |
/// | `Intermediate` | `[0.5, 0.75)`    |
/// | `Major`        | `[0.25, 0.5)`    |
/// | `Critical`     | `[0.0, 0.25)`    |
/// | `Bust`         | `< 0.0`          |
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub enum ImpactTier {
    #[default]
    None,
    Minor,
    Intermediate,
    Major,
    Critical,
    Bust,
}

impl ImpactTier {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= 1.0 {
            ImpactTier::None
        } else if ratio >= 0.75 {
            ImpactTier::Minor
        } else if ratio >= 0.5 {
            ImpactTier::Intermediate
        } else if ratio >= 0.25 {
            ImpactTier::Major
        } else if ratio >= 0.0 {
            ImpactTier::Critical
        } else {
            ImpactTier::Bust
        }
    }

    /// Lower ratio bound of this tier (`-inf` for `Bust`).
    pub fn ratio_floor(self) -> f64 {
        match self {
            ImpactTier::None         => 1.0,
            ImpactTier::Minor        => 0.75,
            ImpactTier::Intermediate => 0.5,
            ImpactTier::Major        => 0.25,
            ImpactTier::Critical     => 0.0,
            ImpactTier::Bust         => f64::NEG_INFINITY,
        }
    }

    /// Tiers that may still lend in a bailout.
    #[inline]
    pub fn can_lend(self) -> bool {
        self < ImpactTier::Critical
    }
}

impl Category for ImpactTier {
    const ALL: &'static [ImpactTier] = &[
        ImpactTier::None,
        ImpactTier::Minor,
        ImpactTier::Intermediate,
        ImpactTier::Major,
        ImpactTier::Critical,
        ImpactTier::Bust,
    ];

    fn as_str(self) -> &'static str {
        match self {
            ImpactTier::None         => "none",
            ImpactTier::Minor        => "minor",
            ImpactTier::Intermediate => "intermediate",
            ImpactTier::Major        => "major",
            ImpactTier::Critical     => "critical",
            ImpactTier::Bust         => "bust",
        }
    }
}

impl fmt::Display for ImpactTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── AgentState ────────────────────────────────────────────────────────────────

/// The dynamic attributes of one agent, as held by a topology.
///
/// This is the unit the synchronizer copies between topologies.
#[derive(Clone, Debug, PartialEq)]
pub struct AgentState {
    pub condition: Condition,

    /// Iterations spent infectious.  Set to 1 on infection, advanced at most
    /// once per pandemic iteration.
    pub time_exposed: u32,

    /// Reset to `true` at the start of every pandemic iteration and cleared
    /// the first time it gates a `time_exposed` increment.
    pub able_to_recover: bool,

    /// Fixed at creation.
    pub initial_asset_value: f64,

    pub current_asset_value: f64,

    pub financial_impact: ImpactTier,
}

impl AgentState {
    /// A healthy, unimpacted agent holding `initial_asset_value`.
    pub fn new(initial_asset_value: f64) -> Self {
        Self {
            condition:           Condition::Susceptible,
            time_exposed:        0,
            able_to_recover:     false,
            initial_asset_value,
            current_asset_value: initial_asset_value,
            financial_impact:    ImpactTier::None,
        }
    }

    /// Mark infectious with a fresh exposure clock.
    ///
    /// `able_to_recover` is cleared so the clock does not also advance in
    /// the iteration the infection happened.
    pub fn infect(&mut self) {
        self.condition = Condition::Infectious;
        self.time_exposed = 1;
        self.able_to_recover = false;
    }

    #[inline]
    pub fn is_susceptible(&self) -> bool {
        self.condition == Condition::Susceptible
    }

    #[inline]
    pub fn is_infectious(&self) -> bool {
        self.condition == Condition::Infectious
    }

    #[inline]
    pub fn is_removed(&self) -> bool {
        self.condition == Condition::Removed
    }

    #[inline]
    pub fn is_bust(&self) -> bool {
        self.financial_impact == ImpactTier::Bust
    }

    /// Continuous `current / initial` ratio.
    #[inline]
    pub fn impact_ratio(&self) -> f64 {
        self.current_asset_value / self.initial_asset_value
    }

    /// Minimum balance this agent must hold to lend, and the most it lends.
    #[inline]
    pub fn loan_threshold(&self, divisor: f64) -> f64 {
        self.initial_asset_value / divisor
    }
}
