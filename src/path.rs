//! Shared path reconstruction
//!
//! Both single-source trees and the all-pairs matrix answer path queries
//! through the walkers in this module, under one contract: produce the
//! ordered vertex sequence realizing a shortest path, or `None` when no
//! valid sequence exists. The walkers operate on plain lookup structures;
//! predecessor and next-hop entries are back-references only and never own
//! the vertices they name.

use log::warn;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Walks predecessor links backward from `target`, collecting vertices until
/// a vertex with no predecessor is reached, then returns the walk in
/// source-to-target order.
///
/// An absent predecessor marks either the source or a vertex the search
/// never reached; the two are indistinguishable here, so callers must check
/// reachability against the distance table before trusting the walk. The
/// walk is bounded by the map size: a longer chain means the map contains a
/// cycle and no valid path can be reported.
pub fn from_predecessors<V>(predecessors: &HashMap<V, V>, target: &V) -> Option<Vec<V>>
where
    V: Clone + Eq + Hash + Debug,
{
    let mut path = vec![target.clone()];
    let mut current = target;

    while let Some(previous) = predecessors.get(current) {
        if path.len() > predecessors.len() {
            warn!("predecessor chain from {:?} exceeds map size, cycle suspected", target);
            return None;
        }
        path.push(previous.clone());
        current = previous;
    }

    path.reverse();
    Some(path)
}

/// Walks forward from `start`, repeatedly asking `next_hop` for the
/// successor toward the fixed destination, until `end` is reached.
///
/// A cycle-free shortest path visits at most `vertex_count` vertices; the
/// walk aborts past that bound so a corrupt next-hop table cannot loop
/// forever. Returns `None` if the table runs out of hops or the bound is
/// exceeded.
pub fn from_next_hops<V, F>(start: &V, end: &V, vertex_count: usize, mut next_hop: F) -> Option<Vec<V>>
where
    V: Clone + Eq + Debug,
    F: FnMut(&V) -> Option<V>,
{
    let mut path = vec![start.clone()];
    let mut current = start.clone();

    while current != *end {
        if path.len() >= vertex_count {
            warn!(
                "next-hop walk from {:?} to {:?} exceeds {} vertices, table corrupt",
                start, end, vertex_count
            );
            return None;
        }
        match next_hop(&current) {
            Some(hop) => {
                path.push(hop.clone());
                current = hop;
            }
            None => return None,
        }
    }

    Some(path)
}
