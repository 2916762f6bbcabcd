use crate::graph::traits::Graph;
use crate::{Error, Result};
use num_traits::Zero;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// An immutable directed graph backed by adjacency lists
///
/// Constructed once from a vertex-to-neighbours mapping and treated as
/// read-only input afterwards, so one graph can serve any number of
/// shortest-path queries, including from multiple threads. Vertices are
/// kept in sorted order so enumeration is deterministic within a run.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<V, W>
where
    V: Clone + Eq + Hash + Ord + Debug,
    W: Copy + Ord + Zero + Debug,
{
    /// All vertices, sorted
    vertices: Vec<V>,

    /// Outgoing edges for each vertex: origin -> [(destination, weight)]
    outgoing: HashMap<V, Vec<(V, W)>>,

    /// Total number of edges
    edge_count: usize,
}

impl<V, W> AdjacencyGraph<V, W>
where
    V: Clone + Eq + Hash + Ord + Debug,
    W: Copy + Ord + Zero + Debug,
{
    /// Builds a graph from a mapping of vertex to outgoing
    /// (destination, weight) pairs.
    ///
    /// Every destination must appear as a key of the mapping (closed vertex
    /// set); a vertex with no outgoing edges is declared with an empty list.
    /// Parallel edges between the same ordered pair are kept as given; the
    /// algorithms decide which one is authoritative (the cheapest always
    /// wins during relaxation). Fails with [`Error::UnknownVertex`] if an
    /// edge references a vertex that is not a key.
    pub fn from_adjacency<I>(adjacency: I) -> Result<Self>
    where
        I: IntoIterator<Item = (V, Vec<(V, W)>)>,
    {
        let outgoing: HashMap<V, Vec<(V, W)>> = adjacency.into_iter().collect();

        let mut vertices: Vec<V> = outgoing.keys().cloned().collect();
        vertices.sort();

        let mut edge_count = 0;
        for edges in outgoing.values() {
            for (destination, _) in edges {
                if !outgoing.contains_key(destination) {
                    return Err(Error::UnknownVertex(format!("{:?}", destination)));
                }
            }
            edge_count += edges.len();
        }

        Ok(AdjacencyGraph {
            vertices,
            outgoing,
            edge_count,
        })
    }
}

impl<V, W> Graph<V, W> for AdjacencyGraph<V, W>
where
    V: Clone + Eq + Hash + Ord + Debug,
    W: Copy + Ord + Zero + Debug,
{
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.vertices.iter())
    }

    fn outgoing_edges(&self, vertex: &V) -> Box<dyn Iterator<Item = (&V, W)> + '_> {
        if let Some(edges) = self.outgoing.get(vertex) {
            Box::new(edges.iter().map(|(destination, weight)| (destination, *weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn edges(&self) -> Box<dyn Iterator<Item = (&V, &V, W)> + '_> {
        // Iterate origins through the sorted vertex list so the edge order
        // is stable across repeated enumerations.
        Box::new(self.vertices.iter().flat_map(move |origin| {
            self.outgoing[origin]
                .iter()
                .map(move |(destination, weight)| (origin, destination, *weight))
        }))
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.outgoing.contains_key(vertex)
    }
}
