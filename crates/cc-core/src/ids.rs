//! Strongly typed agent identifier.
//!
//! The same `AgentId` names the same agent in both topologies.  The inner
//! integer is `pub` to allow direct indexing into per-agent `Vec`s, but
//! callers should prefer [`AgentId::index`] for clarity.

use std::fmt;

/// Index of an agent in every per-agent array.  Max ~4.3 billion agents.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, serde::Serialize, serde::Deserialize)]
pub struct AgentId(pub u32);

impl AgentId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterator over the first `count` ids in ascending order.
    ///
    /// Counts beyond `u32::MAX` saturate; validated settings never get there.
    pub fn range(count: usize) -> impl Iterator<Item = AgentId> {
        (0..u32::try_from(count).unwrap_or(u32::MAX)).map(AgentId)
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AgentId({})", self.0)
    }
}

impl From<AgentId> for usize {
    #[inline(always)]
    fn from(id: AgentId) -> usize {
        id.0 as usize
    }
}
