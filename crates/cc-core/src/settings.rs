//! Run settings.
//!
//! Three labelled groups of scalar options, loaded by the application (the
//! demo reads JSON) and validated before anything runs:
//!
//! ```json
//! {
//!   "general":   { "agent_count": 50, "cycles": 5, "topology_kind": "erdos_renyi", "seed": 5 },
//!   "pandemic":  { "edge_probability": 0.05, "iterations_per_cycle": 1,
//!                  "transmission_rate": 0.5, "time_to_recover": 5 },
//!   "financial": { "edge_probability": 0.05, "iterations_per_cycle": 1,
//!                  "lockdown_severity": 0.1, "loan_threshold_divisor": 5.0 }
//! }
//! ```
//!
//! Fields with a serde default (`initially_infectious`, `contagious_onset`,
//! `initial_asset_value`) may be omitted.
//!
//! Text input (e.g. a form field or a `--set` flag) goes through
//! [`Settings::set_field`], which coerces the raw string into the typed field
//! and reports a descriptive [`CcError::Config`] on failure.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{CcError, CcResult};

/// Starting balance of every agent unless overridden.
pub const DEFAULT_INITIAL_ASSET_VALUE: f64 = 100_000_000.00;

// ── TopologyKind ──────────────────────────────────────────────────────────────

/// Random-graph strategy used for both topologies.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopologyKind {
    /// G(n, p): every unordered pair connected independently with probability p.
    #[default]
    ErdosRenyi,
}

impl TopologyKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TopologyKind::ErdosRenyi => "erdos_renyi",
        }
    }
}

impl fmt::Display for TopologyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TopologyKind {
    type Err = CcError;

    fn from_str(s: &str) -> CcResult<Self> {
        match s.trim() {
            "erdos_renyi" => Ok(TopologyKind::ErdosRenyi),
            other => Err(CcError::Config(format!(
                "unknown topology kind {other:?}: expected \"erdos_renyi\""
            ))),
        }
    }
}

// ── Groups ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneralSettings {
    /// Number of agents (banks).  Must be > 0.
    pub agent_count: usize,
    /// Number of scheduling cycles to run.
    pub cycles: u32,
    /// Random-graph model used for both topologies.
    #[serde(alias = "topology")]
    pub topology_kind: TopologyKind,
    /// Master seed.  The same seed always produces identical results.
    pub seed: u64,
    /// Agents infectious at the start.  Must not exceed `agent_count`.
    #[serde(default = "default_initially_infectious")]
    pub initially_infectious: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PandemicSettings {
    /// Edge density of the pandemic topology, in [0, 1].
    pub edge_probability: f64,
    pub iterations_per_cycle: u32,
    /// In [0, 1].
    pub transmission_rate: f64,
    /// Iterations an agent stays infectious before removal.  Must be > 0.
    pub time_to_recover: u32,
    /// Overrides the derived onset threshold (see
    /// [`contagious_onset_threshold`](Self::contagious_onset_threshold)).
    #[serde(default)]
    pub contagious_onset: Option<u32>,
}

impl PandemicSettings {
    /// `time_exposed` an infectious agent must exceed before it can transmit.
    ///
    /// Defaults to `ceil(time_to_recover / 5)`.
    pub fn contagious_onset_threshold(&self) -> u32 {
        self.contagious_onset
            .unwrap_or_else(|| self.time_to_recover.div_ceil(5))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FinancialSettings {
    /// Edge density of the financial topology, in [0, 1].
    pub edge_probability: f64,
    pub iterations_per_cycle: u32,
    /// Fraction of the initial asset value lost per iteration while
    /// infectious, in [0, 1].
    pub lockdown_severity: f64,
    /// A lender's threshold is `initial_asset_value / loan_threshold_divisor`.
    /// Must be > 0.
    pub loan_threshold_divisor: f64,
    #[serde(default = "default_initial_asset_value")]
    pub initial_asset_value: f64,
}

fn default_initially_infectious() -> usize {
    1
}

fn default_initial_asset_value() -> f64 {
    DEFAULT_INITIAL_ASSET_VALUE
}

// ── Settings ──────────────────────────────────────────────────────────────────

/// Complete, typed run configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub general:   GeneralSettings,
    pub pandemic:  PandemicSettings,
    pub financial: FinancialSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            general: GeneralSettings {
                agent_count:          50,
                cycles:               5,
                topology_kind:        TopologyKind::ErdosRenyi,
                seed:                 5,
                initially_infectious: 1,
            },
            pandemic: PandemicSettings {
                edge_probability:     0.05,
                iterations_per_cycle: 1,
                transmission_rate:    0.5,
                time_to_recover:      5,
                contagious_onset:     None,
            },
            financial: FinancialSettings {
                edge_probability:       0.05,
                iterations_per_cycle:   1,
                lockdown_severity:      0.1,
                loan_threshold_divisor: 5.0,
                initial_asset_value:    DEFAULT_INITIAL_ASSET_VALUE,
            },
        }
    }
}

impl Settings {
    /// Check every range constraint.  Returns the first violation found.
    pub fn validate(&self) -> CcResult<()> {
        let g = &self.general;
        if g.agent_count == 0 {
            return Err(CcError::Config("general.agent_count must be > 0".into()));
        }
        if u32::try_from(g.agent_count).is_err() {
            return Err(CcError::Config(format!(
                "general.agent_count ({}) exceeds the maximum of {}",
                g.agent_count,
                u32::MAX
            )));
        }
        if g.initially_infectious > g.agent_count {
            return Err(CcError::Config(format!(
                "general.initially_infectious ({}) exceeds general.agent_count ({})",
                g.initially_infectious, g.agent_count
            )));
        }

        let p = &self.pandemic;
        check_unit("pandemic.edge_probability", p.edge_probability)?;
        check_unit("pandemic.transmission_rate", p.transmission_rate)?;
        if p.time_to_recover == 0 {
            return Err(CcError::Config("pandemic.time_to_recover must be > 0".into()));
        }

        let f = &self.financial;
        check_unit("financial.edge_probability", f.edge_probability)?;
        check_unit("financial.lockdown_severity", f.lockdown_severity)?;
        check_positive("financial.loan_threshold_divisor", f.loan_threshold_divisor)?;
        check_positive("financial.initial_asset_value", f.initial_asset_value)?;
        Ok(())
    }

    /// Coerce `raw` into the field named by `key` (`"group.field"`).
    ///
    /// Only parses; call [`validate`](Self::validate) once all fields are set.
    ///
    /// ```rust
    /// use cc_core::Settings;
    ///
    /// let mut s = Settings::default();
    /// s.set_field("pandemic.transmission_rate", "0.25").unwrap();
    /// assert_eq!(s.pandemic.transmission_rate, 0.25);
    /// assert!(s.set_field("pandemic.transmission_rate", "high").is_err());
    /// ```
    pub fn set_field(&mut self, key: &str, raw: &str) -> CcResult<()> {
        let (group, field) = key.split_once('.').ok_or_else(|| {
            CcError::Config(format!("setting key {key:?} must have the form group.field"))
        })?;

        match (group, field) {
            ("general", "agent_count")          => self.general.agent_count = parse(key, raw)?,
            ("general", "cycles")               => self.general.cycles = parse(key, raw)?,
            ("general", "topology_kind" | "topology") => self.general.topology_kind = raw.parse()?,
            ("general", "seed")                 => self.general.seed = parse(key, raw)?,
            ("general", "initially_infectious") => self.general.initially_infectious = parse(key, raw)?,

            ("pandemic", "edge_probability")     => self.pandemic.edge_probability = parse(key, raw)?,
            ("pandemic", "iterations_per_cycle") => self.pandemic.iterations_per_cycle = parse(key, raw)?,
            ("pandemic", "transmission_rate")    => self.pandemic.transmission_rate = parse(key, raw)?,
            ("pandemic", "time_to_recover")      => self.pandemic.time_to_recover = parse(key, raw)?,
            ("pandemic", "contagious_onset")     => {
                self.pandemic.contagious_onset = match raw.trim() {
                    "" | "auto" => None,
                    _ => Some(parse(key, raw)?),
                }
            }

            ("financial", "edge_probability")       => self.financial.edge_probability = parse(key, raw)?,
            ("financial", "iterations_per_cycle")   => self.financial.iterations_per_cycle = parse(key, raw)?,
            ("financial", "lockdown_severity")      => self.financial.lockdown_severity = parse(key, raw)?,
            ("financial", "loan_threshold_divisor") => self.financial.loan_threshold_divisor = parse(key, raw)?,
            ("financial", "initial_asset_value")    => self.financial.initial_asset_value = parse(key, raw)?,

            _ => return Err(CcError::Config(format!("unknown setting {key:?}"))),
        }
        Ok(())
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse<T>(key: &str, raw: &str) -> CcResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    raw.trim().parse::<T>().map_err(|e| {
        CcError::Config(format!(
            "invalid value {raw:?} for {key}: {e} (expected {})",
            std::any::type_name::<T>()
        ))
    })
}

fn check_unit(key: &str, v: f64) -> CcResult<()> {
    if v.is_finite() && (0.0..=1.0).contains(&v) {
        Ok(())
    } else {
        Err(CcError::Config(format!("{key} must be in [0, 1], got {v}")))
    }
}

fn check_positive(key: &str, v: f64) -> CcResult<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(CcError::Config(format!("{key} must be > 0, got {v}")))
    }
}
