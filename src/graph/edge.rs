//! Edge representation.
//!
//! Graphs in this crate store edges implicitly in their adjacency lists. [`Edge`] is the
//! value type used whenever an edge has to be named explicitly: when iterating the edges
//! of a graph, or when a depth-first search reports its tree edges.

use std::fmt;

use crate::graph::VertexId;

/// A directed pair of vertices.
///
/// For an [`UndirectedGraph`](crate::UndirectedGraph) the direction carries no meaning;
/// its edge iterator reports every edge once with `source <= target`.
///
/// # Examples
///
/// ```rust
/// use graphical::{Edge, VertexId};
///
/// let edge = Edge::new(VertexId::new(0), VertexId::new(1));
/// assert_eq!(edge.reversed(), Edge::new(VertexId::new(1), VertexId::new(0)));
/// assert_eq!(edge.to_string(), "v0 -> v1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    /// The vertex the edge leaves
    pub source: VertexId,
    /// The vertex the edge enters
    pub target: VertexId,
}

impl Edge {
    /// Creates an edge from `source` to `target`.
    #[must_use]
    #[inline]
    pub const fn new(source: VertexId, target: VertexId) -> Self {
        Edge { source, target }
    }

    /// Returns the same edge pointing the other way.
    #[must_use]
    #[inline]
    pub const fn reversed(self) -> Self {
        Edge {
            source: self.target,
            target: self.source,
        }
    }

    /// Returns `true` if both endpoints are the same vertex.
    #[must_use]
    #[inline]
    pub fn is_self_loop(self) -> bool {
        self.source == self.target
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

impl From<(VertexId, VertexId)> for Edge {
    #[inline]
    fn from((source, target): (VertexId, VertexId)) -> Self {
        Edge { source, target }
    }
}

impl From<(usize, usize)> for Edge {
    #[inline]
    fn from((source, target): (usize, usize)) -> Self {
        Edge {
            source: VertexId::new(source),
            target: VertexId::new(target),
        }
    }
}
