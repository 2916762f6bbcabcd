use num_traits::Zero;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::Graph;
use crate::path;
use crate::{Error, Result};

/// Floyd-Warshall all-pairs shortest paths
///
/// Dense dynamic-programming closure over every vertex pair; cubic in the
/// vertex count by design. No source parameter: one run answers all
/// (origin, destination) queries through the returned [`AllPairsPaths`].
///
/// Negative cycles are not detected during the run; on a graph containing
/// one, the matrix entries touching the cycle are meaningless. Callers who
/// cannot rule cycles out should run
/// [`AllPairsPaths::has_negative_cycle`] before trusting the result.
#[derive(Debug, Default)]
pub struct FloydWarshall;

impl FloydWarshall {
    /// Creates a new Floyd-Warshall algorithm instance
    pub fn new() -> Self {
        FloydWarshall
    }

    /// Computes shortest distances and next hops between all vertex pairs.
    ///
    /// Fails with [`Error::EmptyGraph`] when the graph has no vertices.
    /// Where parallel edges join one ordered pair, the cheapest seeds the
    /// matrix.
    pub fn all_pairs<V, W, G>(&self, graph: &G) -> Result<AllPairsPaths<V, W>>
    where
        V: Clone + Eq + Hash + Ord + Debug,
        W: Copy + Ord + Zero + Debug,
        G: Graph<V, W>,
    {
        let vertices: Vec<V> = graph.vertices().cloned().collect();
        if vertices.is_empty() {
            return Err(Error::EmptyGraph);
        }

        let n = vertices.len();
        let index: HashMap<V, usize> = vertices
            .iter()
            .cloned()
            .enumerate()
            .map(|(i, v)| (v, i))
            .collect();

        let mut distances: Vec<Vec<Option<W>>> = vec![vec![None; n]; n];
        let mut next_hops: Vec<Vec<Option<usize>>> = vec![vec![None; n]; n];

        for i in 0..n {
            distances[i][i] = Some(W::zero());
        }

        // Seed with direct edges; keep the cheaper entry on a tie of
        // parallel edges, and let the zero diagonal stand unless a
        // negative self-loop undercuts it.
        for (origin, destination, weight) in graph.edges() {
            let (i, j) = (index[origin], index[destination]);
            let cheaper = match distances[i][j] {
                None => true,
                Some(current) => weight < current,
            };
            if cheaper {
                distances[i][j] = Some(weight);
                next_hops[i][j] = Some(j);
            }
        }

        for k in 0..n {
            for i in 0..n {
                let dist_ik = match distances[i][k] {
                    Some(d) => d,
                    None => continue,
                };
                for j in 0..n {
                    if let Some(dist_kj) = distances[k][j] {
                        let candidate = dist_ik + dist_kj;
                        let improves = match distances[i][j] {
                            None => true,
                            Some(current) => candidate < current,
                        };
                        if improves {
                            distances[i][j] = Some(candidate);
                            // First hop toward k, not toward j.
                            next_hops[i][j] = next_hops[i][k];
                        }
                    }
                }
            }
        }

        Ok(AllPairsPaths {
            vertices,
            index,
            distances,
            next_hops,
        })
    }
}

/// Result of an all-pairs shortest path computation
///
/// Distance and next-hop matrices keyed by the vertex order in
/// [`vertices`](AllPairsPaths::vertices). Next-hop entries are plain index
/// back-references into that order.
#[derive(Debug, Clone)]
pub struct AllPairsPaths<V, W>
where
    V: Clone + Eq + Hash + Ord + Debug,
    W: Copy + Ord + Zero + Debug,
{
    vertices: Vec<V>,
    index: HashMap<V, usize>,
    distances: Vec<Vec<Option<W>>>,
    next_hops: Vec<Vec<Option<usize>>>,
}

impl<V, W> AllPairsPaths<V, W>
where
    V: Clone + Eq + Hash + Ord + Debug,
    W: Copy + Ord + Zero + Debug,
{
    fn index_of(&self, vertex: &V) -> Result<usize> {
        self.index
            .get(vertex)
            .copied()
            .ok_or_else(|| Error::UnknownVertex(format!("{:?}", vertex)))
    }

    /// The vertex order the matrices are keyed by
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Shortest distance from `origin` to `destination`, or `None` if no
    /// path exists
    pub fn distance_between(&self, origin: &V, destination: &V) -> Result<Option<W>> {
        let i = self.index_of(origin)?;
        let j = self.index_of(destination)?;
        Ok(self.distances[i][j])
    }

    /// Next vertex to visit en route from `origin` to `destination`, or
    /// `None` if no path exists
    pub fn next_hop(&self, origin: &V, destination: &V) -> Result<Option<&V>> {
        let i = self.index_of(origin)?;
        let j = self.index_of(destination)?;
        Ok(self.next_hops[i][j].map(|hop| &self.vertices[hop]))
    }

    /// Reconstructs the shortest path from `start` to `end` by following
    /// next hops forward.
    ///
    /// Returns `Ok(None)` when no path exists; that includes the
    /// degenerate `start == end` query, which has no hops to follow.
    pub fn path(&self, start: &V, end: &V) -> Result<Option<Vec<V>>> {
        let i = self.index_of(start)?;
        let j = self.index_of(end)?;

        if self.next_hops[i][j].is_none() {
            return Ok(None);
        }

        Ok(path::from_next_hops(start, end, self.vertices.len(), |current| {
            let c = self.index[current];
            self.next_hops[c][j].map(|hop| self.vertices[hop].clone())
        }))
    }

    /// Post-check for negative cycles: a vertex whose distance to itself
    /// went below zero sits on one, and every entry involving that cycle
    /// is unreliable.
    pub fn has_negative_cycle(&self) -> bool {
        (0..self.vertices.len()).any(|i| matches!(self.distances[i][i], Some(d) if d < W::zero()))
    }
}
