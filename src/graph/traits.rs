use num_traits::Zero;
use std::fmt::Debug;
use std::hash::Hash;

/// Trait representing a weighted directed graph with labelled vertices
///
/// Vertices are opaque labels (`V`) rather than dense indices; weights are
/// any ordered numeric type (`W`), so both signed integers and
/// `ordered_float::OrderedFloat` values qualify. Implementations are
/// read-only: the vertex set is fixed at construction time and every edge
/// destination must itself be a vertex of the graph.
pub trait Graph<V, W>: Debug
where
    V: Clone + Eq + Hash + Ord + Debug,
    W: Copy + Ord + Zero + Debug,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over all vertices, in a deterministic order
    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_>;

    /// Returns an iterator over the outgoing edges from a vertex as
    /// (destination, weight) pairs; empty if the vertex has no outgoing
    /// edges or is not in the graph
    fn outgoing_edges(&self, vertex: &V) -> Box<dyn Iterator<Item = (&V, W)> + '_>;

    /// Returns an iterator over every edge as an
    /// (origin, destination, weight) triple, in a deterministic order
    fn edges(&self) -> Box<dyn Iterator<Item = (&V, &V, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: &V) -> bool;
}
