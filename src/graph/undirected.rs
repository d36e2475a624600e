//! Undirected graph implementation.
//!
//! [`UndirectedGraph`] shares the construction and edge-count contract of
//! [`Digraph`](crate::Digraph), but every edge is stored in the adjacency lists of both
//! endpoints. A self-loop is stored once, in the list of its only endpoint.

use tracing::trace;

use crate::{
    graph::{Edge, Graph, VertexId},
    Result,
};

/// An undirected graph over the vertices `0..vertex_count`.
///
/// Each undirected edge counts once towards [`edge_count`](Graph::edge_count) even though
/// it appears in two adjacency lists.
///
/// # Examples
///
/// ```rust
/// use graphical::{Graph, UndirectedGraph, VertexId};
///
/// let mut graph = UndirectedGraph::new(3)?;
/// graph.add_edge(VertexId::new(0), VertexId::new(1))?;
/// graph.add_edge(VertexId::new(2), VertexId::new(2))?; // self-loop
///
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.adjacent(VertexId::new(1))?, &[VertexId::new(0)]);
/// assert_eq!(graph.adjacent(VertexId::new(2))?, &[VertexId::new(2)]);
/// # Ok::<(), graphical::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndirectedGraph {
    /// Neighbour lists, one per vertex, in insertion order
    adjacency: Vec<Vec<VertexId>>,
    /// Number of distinct undirected edges
    edge_count: usize,
}

impl UndirectedGraph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if `vertex_count`
    /// is zero.
    pub fn new(vertex_count: usize) -> Result<Self> {
        if vertex_count == 0 {
            return Err(invalid_argument!(
                "an undirected graph needs at least one vertex, got {}",
                vertex_count
            ));
        }

        Ok(UndirectedGraph {
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
        })
    }

    /// Creates a graph with `vertex_count` vertices and the given edges.
    ///
    /// # Errors
    ///
    /// Fails like [`new`](Self::new) and [`add_edge`](Self::add_edge).
    pub fn from_edges<I, E>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        let mut graph = UndirectedGraph::new(vertex_count)?;
        for edge in edges {
            let edge = edge.into();
            graph.add_edge(edge.source, edge.target)?;
        }
        Ok(graph)
    }

    /// Adds the undirected edge `{u, v}`.
    ///
    /// For `u != v` both endpoints gain the other as a neighbour. For `u == v` the vertex
    /// gains itself as a neighbour exactly once. Adding an edge that already exists, in
    /// either orientation, leaves the graph unchanged.
    ///
    /// # Returns
    ///
    /// `true` if the edge was inserted, `false` if it was already present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`](crate::Error::OutOfRange) if either endpoint is not
    /// a vertex of this graph. The graph is not modified in that case.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> Result<bool> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;

        // Insertion is always symmetric, so one side is enough to detect a duplicate.
        if self.adjacency[u.index()].contains(&v) {
            trace!(%u, %v, "duplicate edge ignored");
            return Ok(false);
        }

        self.adjacency[u.index()].push(v);
        if u != v {
            self.adjacency[v.index()].push(u);
        }
        self.edge_count += 1;
        Ok(true)
    }

    /// Returns `true` if `u` and `v` are joined by an edge.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`](crate::Error::OutOfRange) for an unknown endpoint.
    pub fn has_edge(&self, u: VertexId, v: VertexId) -> Result<bool> {
        self.check_vertex(v)?;
        Ok(self.adjacent(u)?.contains(&v))
    }

    /// Returns the number of neighbours of `vertex`.
    ///
    /// A self-loop contributes one neighbour.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`](crate::Error::OutOfRange) for an unknown vertex.
    pub fn degree(&self, vertex: VertexId) -> Result<usize> {
        Ok(self.adjacent(vertex)?.len())
    }

    /// Returns an iterator over all edges, each reported once with `source <= target`.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(source, neighbours)| {
                let source = VertexId::new(source);
                neighbours
                    .iter()
                    .filter(move |&&target| source <= target)
                    .map(move |&target| Edge::new(source, target))
            })
    }
}

impl Graph for UndirectedGraph {
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
        self.clone()
    }

    fn is_directed(&self) -> bool {
        false
    }
}
