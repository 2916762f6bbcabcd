use num_traits::Zero;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::algorithm::{ShortestPathTree, SingleSourceAlgorithm};
use crate::data_structures::LazyMinHeap;
use crate::graph::Graph;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm with a lazy-deletion binary heap
///
/// Precondition: every edge weight is non-negative. This is a contract on
/// the caller, not a runtime check; on a graph with negative weights the
/// returned distances may silently be wrong. Use [`BellmanFord`] when
/// weights can be negative.
///
/// [`BellmanFord`]: crate::BellmanFord
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<V, W, G> SingleSourceAlgorithm<V, W, G> for Dijkstra
where
    V: Clone + Eq + Hash + Ord + Debug,
    W: Copy + Ord + Zero + Debug,
    G: Graph<V, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn shortest_paths(&self, graph: &G, source: &V) -> Result<ShortestPathTree<V, W>> {
        if !graph.has_vertex(source) {
            return Err(Error::UnknownVertex(format!("{:?}", source)));
        }

        let mut distances: HashMap<V, W> = HashMap::new();
        let mut predecessors: HashMap<V, V> = HashMap::new();

        distances.insert(source.clone(), W::zero());

        // Improving a vertex re-inserts it instead of decreasing its key,
        // so the heap may hold several entries per vertex at once.
        let mut queue = LazyMinHeap::new();
        queue.push(source.clone(), W::zero());

        while let Some((u, dist_u)) = queue.pop() {
            // Stale entry: a better distance was recorded after this one
            // was pushed.
            if let Some(&best) = distances.get(&u) {
                if dist_u > best {
                    continue;
                }
            }

            // Once extracted fresh, dist_u is final for u; relax all
            // outgoing edges.
            for (v, weight) in graph.outgoing_edges(&u) {
                let candidate = dist_u + weight;

                let improves = match distances.get(v) {
                    None => true,
                    Some(&current) => candidate < current,
                };

                if improves {
                    distances.insert(v.clone(), candidate);
                    predecessors.insert(v.clone(), u.clone());
                    queue.push(v.clone(), candidate);
                }
            }
        }

        Ok(ShortestPathTree::new(
            source.clone(),
            graph.vertices().cloned().collect(),
            distances,
            predecessors,
        ))
    }
}
