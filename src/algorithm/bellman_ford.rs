use log::debug;
use num_traits::Zero;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::algorithm::{ShortestPathTree, SingleSourceAlgorithm};
use crate::graph::Graph;
use crate::{Error, Result};

/// Bellman-Ford single-source shortest paths for arbitrary signed weights
///
/// Runs up to |V|-1 full relaxation passes over the edge list, then one
/// detection pass: if any edge still relaxes, a negative-weight cycle is
/// reachable from the source and the whole computation fails with
/// [`Error::NegativeCycle`] instead of returning a misleading table.
#[derive(Debug, Default)]
pub struct BellmanFord;

impl BellmanFord {
    /// Creates a new Bellman-Ford algorithm instance
    pub fn new() -> Self {
        BellmanFord
    }
}

impl<V, W, G> SingleSourceAlgorithm<V, W, G> for BellmanFord
where
    V: Clone + Eq + Hash + Ord + Debug,
    W: Copy + Ord + Zero + Debug,
    G: Graph<V, W>,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn shortest_paths(&self, graph: &G, source: &V) -> Result<ShortestPathTree<V, W>> {
        if !graph.has_vertex(source) {
            return Err(Error::UnknownVertex(format!("{:?}", source)));
        }

        let mut distances: HashMap<V, W> = HashMap::new();
        let mut predecessors: HashMap<V, V> = HashMap::new();

        distances.insert(source.clone(), W::zero());

        // One shared edge list for every pass.
        let edges: Vec<(&V, &V, W)> = graph.edges().collect();
        let passes = graph.vertex_count().saturating_sub(1);

        for pass in 0..passes {
            let mut updated = false;

            for &(u, v, weight) in &edges {
                // An unreached origin cannot relax anything yet.
                let dist_u = match distances.get(u) {
                    Some(&d) => d,
                    None => continue,
                };

                let candidate = dist_u + weight;
                let improves = match distances.get(v) {
                    None => true,
                    Some(&current) => candidate < current,
                };

                if improves {
                    distances.insert(v.clone(), candidate);
                    predecessors.insert(v.clone(), u.clone());
                    updated = true;
                }
            }

            if !updated {
                debug!("bellman-ford converged after {} of {} passes", pass + 1, passes);
                break;
            }
        }

        // Detection pass: any remaining relaxation means a negative cycle.
        for &(u, v, weight) in &edges {
            if let Some(&dist_u) = distances.get(u) {
                let candidate = dist_u + weight;
                let still_relaxes = match distances.get(v) {
                    None => true,
                    Some(&current) => candidate < current,
                };
                if still_relaxes {
                    debug!("edge {:?} -> {:?} still relaxes after convergence", u, v);
                    return Err(Error::NegativeCycle);
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
