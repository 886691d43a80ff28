//! Per-iteration category counts.

use std::collections::BTreeMap;

use cc_agent::{Category, Condition, ImpactTier};
use cc_core::Step;

/// Count of agents per category, sorted by category key.
///
/// Every category in `K::ALL` is present, including those with a zero count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Histogram<K: Category> {
    counts: BTreeMap<K, usize>,
}

pub type ConditionCounts = Histogram<Condition>;
pub type ImpactCounts = Histogram<ImpactTier>;

impl<K: Category> Histogram<K> {
    pub fn count_from(values: impl IntoIterator<Item = K>) -> Self {
        let mut counts: BTreeMap<K, usize> = K::ALL.iter().map(|&k| (k, 0)).collect();
        for v in values {
            *counts.entry(v).or_default() += 1;
        }
        Self { counts }
    }

    pub fn get(&self, key: K) -> usize {
        self.counts.get(&key).copied().unwrap_or(0)
    }

    /// `(category, count)` pairs in ascending category order.
    pub fn iter(&self) -> impl Iterator<Item = (K, usize)> + '_ {
        self.counts.iter().map(|(&k, &n)| (k, n))
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

/// One recorded histogram and the step it was taken after.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry<K: Category> {
    pub step:   Step,
    pub counts: Histogram<K>,
}
