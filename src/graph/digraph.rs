//! Directed graph implementation.
//!
//! This module provides [`Digraph`], an adjacency-list directed graph with a vertex count
//! fixed at construction. Each vertex owns the ordered list of its successors; the list
//! never contains the same vertex twice, so inserting an existing edge is a no-op.

use tracing::trace;

use crate::{
    graph::{Edge, Graph, VertexId},
    Result,
};

/// A directed graph over the vertices `0..vertex_count`.
///
/// # Performance Characteristics
///
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `new` | O(V) | Allocates one empty list per vertex |
/// | `add_edge` | O(out-degree) | Scans the source list for duplicates |
/// | `adjacent` | O(1) | Borrows the adjacency list |
/// | `transpose` | O(V + E) | Builds a new graph |
///
/// # Thread Safety
///
/// `Digraph` is [`Send`] and [`Sync`]. Searches borrow it immutably, so it cannot be
/// modified while a search over it is running.
///
/// # Examples
///
/// ```rust
/// use graphical::{Digraph, Graph, VertexId};
///
/// let mut graph = Digraph::new(3)?;
/// assert!(graph.add_edge(VertexId::new(0), VertexId::new(1))?);
/// assert!(!graph.add_edge(VertexId::new(0), VertexId::new(1))?); // already present
/// graph.add_edge(VertexId::new(1), VertexId::new(2))?;
///
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.adjacent(VertexId::new(0))?, &[VertexId::new(1)]);
///
/// let reversed = graph.transpose();
/// assert_eq!(reversed.adjacent(VertexId::new(2))?, &[VertexId::new(1)]);
/// # Ok::<(), graphical::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digraph {
    /// Successor lists, one per vertex, in insertion order
    adjacency: Vec<Vec<VertexId>>,
    /// Number of distinct edges
    edge_count: usize,
}

impl Digraph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if `vertex_count`
    /// is zero.
    pub fn new(vertex_count: usize) -> Result<Self> {
        if vertex_count == 0 {
            return Err(invalid_argument!(
                "a digraph needs at least one vertex, got {}",
                vertex_count
            ));
        }

        Ok(Digraph {
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
        })
    }

    /// Creates a graph with `vertex_count` vertices and the given edges.
    ///
    /// Edges are inserted in iteration order, so adjacency lists follow that order and
    /// duplicates are dropped.
    ///
    /// # Errors
    ///
    /// Fails like [`new`](Self::new) and [`add_edge`](Self::add_edge).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use graphical::{Digraph, Graph};
    ///
    /// let graph = Digraph::from_edges(3, [(0, 1), (1, 2), (0, 1)])?;
    /// assert_eq!(graph.edge_count(), 2);
    /// # Ok::<(), graphical::Error>(())
    /// ```
    pub fn from_edges<I, E>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        let mut graph = Digraph::new(vertex_count)?;
        for edge in edges {
            let edge = edge.into();
            graph.add_edge(edge.source, edge.target)?;
        }
        Ok(graph)
    }

    /// Adds the directed edge `source -> target`.
    ///
    /// Self-loops are allowed. Adding an edge that already exists leaves the graph
    /// unchanged.
    ///
    /// # Returns
    ///
    /// `true` if the edge was inserted, `false` if it was already present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`](crate::Error::OutOfRange) if either endpoint is not
    /// a vertex of this graph. The graph is not modified in that case.
    pub fn add_edge(&mut self, source: VertexId, target: VertexId) -> Result<bool> {
        self.check_vertex(source)?;
        self.check_vertex(target)?;

        let successors = &mut self.adjacency[source.index()];
        if successors.contains(&target) {
            trace!(%source, %target, "duplicate edge ignored");
            return Ok(false);
        }

        successors.push(target);
        self.edge_count += 1;
        Ok(true)
    }

    /// Returns `true` if the edge `source -> target` exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`](crate::Error::OutOfRange) for an unknown endpoint.
    pub fn has_edge(&self, source: VertexId, target: VertexId) -> Result<bool> {
        self.check_vertex(target)?;
        Ok(self.adjacent(source)?.contains(&target))
    }

    /// Returns the number of edges leaving `vertex`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`](crate::Error::OutOfRange) for an unknown vertex.
    pub fn out_degree(&self, vertex: VertexId) -> Result<usize> {
        Ok(self.adjacent(vertex)?.len())
    }

    /// Returns an iterator over all edges.
    ///
    /// Edges are grouped by ascending source vertex; within one source they appear in
    /// insertion order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(source, targets)| {
                targets
                    .iter()
                    .map(move |&target| Edge::new(VertexId::new(source), target))
            })
    }
}

impl Graph for Digraph {
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn adjacent(&self, vertex: VertexId) -> Result<&[VertexId]> {
        self.check_vertex(vertex)?;
        Ok(&self.adjacency[vertex.index()])
    }

    fn transpose(&self) -> Self {
        let mut adjacency = vec![Vec::new(); self.adjacency.len()];
        for edge in self.edges() {
            // The receiver holds no duplicates, so neither can the reversed lists.
            adjacency[edge.target.index()].push(edge.source);
        }

        Digraph {
            adjacency,
            edge_count: self.edge_count,
        }
    }

    fn is_directed(&self) -> bool {
        true
    }
}
