//! Lockdown losses, neighbour bailouts, and impact-tier recomputation.
//!
//! # Rules
//!
//! Agents are visited in ascending order.  Agents already in
//! [`ImpactTier::Bust`] are skipped entirely: their balance is frozen and they
//! neither borrow nor lend.  For every other agent `a`:
//!
//! 1. **Lockdown shock**: `a` infectious with `time_exposed > 1` →
//!    `a.current -= a.initial * lockdown_severity`.
//! 2. **Bailout**: for each neighbour `b` while `a.current < 0`: if
//!    `b.current >= b.threshold` and `b` is healthier than `Critical`,
//!    `a.current += min(-a.current, b.threshold)` where
//!    `b.threshold = b.initial / loan_threshold_divisor`.  The lender's
//!    balance is not debited.
//! 3. **Tier**: `a.financial_impact = ImpactTier::from_ratio(a.current / a.initial)`;
//!    a balance still below zero makes `a` bust.

use cc_agent::ImpactTier;
use cc_core::FinancialSettings;
use cc_topology::Topology;

use crate::{ContagionError, ContagionResult};

/// Tunables for [`FinancialEngine`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FinancialParams {
    /// Fraction of initial assets lost per iteration while infectious.
    pub lockdown_severity: f64,
    pub loan_threshold_divisor: f64,
}

impl FinancialParams {
    pub fn from_settings(settings: &FinancialSettings) -> Self {
        Self {
            lockdown_severity:      settings.lockdown_severity,
            loan_threshold_divisor: settings.loan_threshold_divisor,
        }
    }
}

/// What one financial iteration changed.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FinancialReport {
    /// Agents that took a lockdown loss.
    pub shocked:     usize,
    /// Individual neighbour transfers.
    pub bailouts:    usize,
    pub transferred: f64,
    pub newly_bust:  usize,
}

/// Advances the financial state of a topology one iteration at a time.
pub struct FinancialEngine {
    params: FinancialParams,
}

impl FinancialEngine {
    pub fn new(params: FinancialParams) -> ContagionResult<Self> {
        let severity = params.lockdown_severity;
        if !(0.0..=1.0).contains(&severity) {
            return Err(ContagionError::InvalidParameter { name: "lockdown_severity", value: severity });
        }
        let divisor = params.loan_threshold_divisor;
        if !(divisor.is_finite() && divisor > 0.0) {
            return Err(ContagionError::InvalidParameter { name: "loan_threshold_divisor", value: divisor });
        }
        Ok(Self { params })
    }

    /// Apply one iteration to `topology`.
    pub fn step(&self, topology: &mut Topology) -> FinancialReport {
        let p = &self.params;
        let mut report = FinancialReport::default();
        let (neighbors, states) = topology.parts_mut();

        for (i, edges) in neighbors.iter().enumerate() {
            if states[i].is_bust() {
                continue;
            }

            // ① Lockdown shock
            let agent = &mut states[i];
            if agent.is_infectious() && agent.time_exposed > 1 && p.lockdown_severity > 0.0 {
                agent.current_asset_value -= agent.initial_asset_value * p.lockdown_severity;
                report.shocked += 1;
            }

            // ② Bailout
            for &lender in edges {
                let deficit = -states[i].current_asset_value;
                if deficit <= 0.0 {
                    break;
                }
                let l = &states[lender.index()];
                let threshold = l.loan_threshold(p.loan_threshold_divisor);
                if l.current_asset_value >= threshold && l.financial_impact.can_lend() {
                    let transfer = deficit.min(threshold);
                    states[i].current_asset_value += transfer;
                    report.bailouts += 1;
                    report.transferred += transfer;
                }
            }

            // ③ Tier
            let agent = &mut states[i];
            agent.financial_impact = ImpactTier::from_ratio(agent.impact_ratio());
            debug_assert!(agent.is_bust() || agent.current_asset_value >= 0.0);
            if agent.is_bust() {
                report.newly_bust += 1;
                log::debug!(
                    "agent {i} went bust at {:.2} of {:.2}",
                    agent.current_asset_value,
                    agent.initial_asset_value
                );
            }
        }

        report
    }
}
