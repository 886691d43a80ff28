//! Cross-topology state synchronization.
//!
//! The scheduler calls [`sync`] before every iteration, alternating the
//! direction:
//!
//! ```text
//! before a pandemic iteration:   financial ──sync──▶ pandemic
//! before a financial iteration:  pandemic  ──sync──▶ financial
//! ```
//!
//! After a pass every dynamic attribute of every shared node is identical in
//! both topologies; only the edge sets differ.

use crate::Topology;

/// Overwrite `target`'s dynamic node attributes with `source`'s.
///
/// Covers every node id present in both topologies and returns how many
/// nodes were copied.  Adjacency is never touched.
pub fn sync(source: &Topology, target: &mut Topology) -> usize {
    let shared = source.len().min(target.len());
    let from = &source.states()[..shared];
    let to = &mut target.states_mut()[..shared];
    to.clone_from_slice(from);
    shared
}
