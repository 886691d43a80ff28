//! Plain data row types written by output backends.

use cc_agent::{Condition, ImpactTier};
use cc_core::Step;

/// Which of the two graphs a node row was read from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Domain {
    Pandemic,
    Financial,
}

impl Domain {
    pub fn as_str(self) -> &'static str {
        match self {
            Domain::Pandemic  => "pandemic",
            Domain::Financial => "financial",
        }
    }
}

/// One node of one topology after one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeRow {
    pub step:                Step,
    pub domain:              Domain,
    pub agent_id:            u32,
    pub degree:              usize,
    pub condition:           Condition,
    pub time_exposed:        u32,
    pub initial_asset_value: f64,
    pub current_asset_value: f64,
    pub financial_impact:    ImpactTier,
}

/// One category count of one histogram.
///
/// `histogram` is `"condition"` or `"impact"`; `category` is the matching
/// `Condition` or `ImpactTier` label.  Rows of a histogram are emitted in
/// category order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistogramRow {
    pub step:      Step,
    pub histogram: &'static str,
    pub category:  &'static str,
    pub count:     usize,
}

/// Final per-agent record joining both topologies, for downstream plotting.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsolidatedRow {
    pub agent_id:            u32,
    pub label:               String,
    pub pandemic_degree:     usize,
    pub financial_degree:    usize,
    /// Visual node size scaled from the pandemic degree.
    pub node_size:           f64,
    pub condition:           Condition,
    pub time_exposed:        u32,
    pub initial_asset_value: f64,
    pub current_asset_value: f64,
    pub financial_impact:    ImpactTier,
}
