//! Trait definition for the graph capability.
//!
//! Every algorithm in [`algorithms`](crate::graph::algorithms) is written against the
//! [`Graph`] trait and never against a concrete representation. Algorithms are generic
//! over `G: Graph`, so dispatch is static and a new representation only has to implement
//! the four required methods to be searchable.

use crate::{graph::VertexId, Error, Result};

/// The capability shared by every graph representation.
///
/// # Required Methods
///
/// - [`vertex_count`](Graph::vertex_count) - Number of vertices, fixed at construction
/// - [`edge_count`](Graph::edge_count) - Number of distinct edges
/// - [`adjacent`](Graph::adjacent) - Neighbours of a vertex in insertion order
/// - [`transpose`](Graph::transpose) - A new graph with every edge reversed
/// - [`is_directed`](Graph::is_directed) - Whether edges have a direction
///
/// # Examples
///
/// ```rust
/// use graphical::{Digraph, Graph, VertexId};
///
/// fn leaves<G: Graph>(graph: &G) -> graphical::Result<Vec<VertexId>> {
///     let mut leaves = Vec::new();
///     for vertex in graph.vertices() {
///         if graph.adjacent(vertex)?.is_empty() {
///             leaves.push(vertex);
///         }
///     }
///     Ok(leaves)
/// }
///
/// let mut graph = Digraph::new(3)?;
/// graph.add_edge(VertexId::new(0), VertexId::new(1))?;
/// assert_eq!(leaves(&graph)?, vec![VertexId::new(1), VertexId::new(2)]);
/// # Ok::<(), graphical::Error>(())
/// ```
pub trait Graph {
    /// Returns the number of vertices in the graph.
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph.
    ///
    /// Duplicate insertions are not counted, and an undirected edge counts once.
    fn edge_count(&self) -> usize;

    /// Returns the vertices adjacent to `vertex`, in the order the edges were added.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `vertex` is not a vertex of this graph.
    fn adjacent(&self, vertex: VertexId) -> Result<&[VertexId]>;

    /// Returns a new graph with every edge reversed.
    ///
    /// The receiver is left untouched. Undirected graphs are their own transpose.
    #[must_use]
    fn transpose(&self) -> Self
    where
        Self: Sized;

    /// Returns `true` if edges of this graph have a direction.
    fn is_directed(&self) -> bool;

    /// Returns an iterator over all vertices, in ascending index order.
    fn vertices(&self) -> impl Iterator<Item = VertexId> {
        (0..self.vertex_count()).map(VertexId::new)
    }

    /// Returns `true` if `vertex` belongs to this graph.
    fn contains_vertex(&self, vertex: VertexId) -> bool {
        vertex.index() < self.vertex_count()
    }

    /// Checks that `vertex` belongs to this graph.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if it does not.
    fn check_vertex(&self, vertex: VertexId) -> Result<()> {
        if self.contains_vertex(vertex) {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                vertex: vertex.index(),
                vertex_count: self.vertex_count(),
            })
        }
    }
}
