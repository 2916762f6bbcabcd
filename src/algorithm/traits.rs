use num_traits::Zero;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::Graph;
use crate::path;
use crate::{Error, Result};

/// Result of a single-source shortest path computation
///
/// Bundles the distance table and the predecessor map produced by one
/// algorithm run. A vertex absent from the distance table is unreachable
/// from the source; a vertex absent from the predecessor map is the source
/// itself or was never reached. The tree is owned by the caller and never
/// shared with later runs.
#[derive(Debug, Clone)]
pub struct ShortestPathTree<V, W>
where
    V: Clone + Eq + Hash + Ord + Debug,
    W: Copy + Ord + Zero + Debug,
{
    source: V,
    vertices: Vec<V>,
    distances: HashMap<V, W>,
    predecessors: HashMap<V, V>,
}

impl<V, W> ShortestPathTree<V, W>
where
    V: Clone + Eq + Hash + Ord + Debug,
    W: Copy + Ord + Zero + Debug,
{
    pub(crate) fn new(
        source: V,
        vertices: Vec<V>,
        distances: HashMap<V, W>,
        predecessors: HashMap<V, V>,
    ) -> Self {
        ShortestPathTree {
            source,
            vertices,
            distances,
            predecessors,
        }
    }

    /// The source vertex this tree was computed from
    pub fn source(&self) -> &V {
        &self.source
    }

    /// All vertices of the underlying graph, in its enumeration order
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Shortest distance from the source, or `None` if unreachable
    pub fn distance(&self, vertex: &V) -> Option<W> {
        self.distances.get(vertex).copied()
    }

    /// Predecessor of a vertex on its shortest path, or `None` for the
    /// source and for unreached vertices
    pub fn predecessor(&self, vertex: &V) -> Option<&V> {
        self.predecessors.get(vertex)
    }

    /// Reconstructs the shortest path from the source to `target`.
    ///
    /// Returns `Ok(None)` if the target is unreachable, and
    /// [`Error::UnknownVertex`] if it is not a vertex of the graph at all.
    /// A reachable target always yields a sequence starting at the source
    /// and ending at the target.
    pub fn path_to(&self, target: &V) -> Result<Option<Vec<V>>> {
        if !self.vertices.iter().any(|v| v == target) {
            return Err(Error::UnknownVertex(format!("{:?}", target)));
        }
        if !self.distances.contains_key(target) {
            return Ok(None);
        }
        Ok(path::from_predecessors(&self.predecessors, target))
    }
}

/// Trait for single-source shortest path algorithms
pub trait SingleSourceAlgorithm<V, W, G>
where
    V: Clone + Eq + Hash + Ord + Debug,
    W: Copy + Ord + Zero + Debug,
    G: Graph<V, W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn shortest_paths(&self, graph: &G, source: &V) -> Result<ShortestPathTree<V, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
