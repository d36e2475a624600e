//! Vertex identifier implementation.
//!
//! This module provides the [`VertexId`] type, a strongly-typed index for the vertices
//! of a [`Digraph`](crate::Digraph) or [`UndirectedGraph`](crate::UndirectedGraph). The
//! newtype wrapper keeps vertex indices from being confused with distances, timestamps or
//! positions in a traversal order, all of which are plain `usize` values as well.

use std::fmt;

/// A strongly-typed identifier for a vertex.
///
/// Vertices are the integers `0..vertex_count` of the graph they belong to. A graph never
/// creates or destroys individual vertices, so any `VertexId` below the graph's vertex
/// count is valid for the whole lifetime of the graph.
///
/// # Examples
///
/// ```rust
/// use graphical::VertexId;
///
/// let v = VertexId::new(3);
/// assert_eq!(v.index(), 3);
/// assert_eq!(v.to_string(), "v3");
///
/// let w: VertexId = 5usize.into();
/// assert!(v < w);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    /// Creates a new `VertexId` from a raw index value.
    ///
    /// The index is not validated here; graphs check it against their vertex count
    /// whenever it is used.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        VertexId(index)
    }

    /// Returns the raw index value of this vertex.
    ///
    /// The index can be used directly to address per-vertex storage.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.0)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl From<usize> for VertexId {
    #[inline]
    fn from(index: usize) -> Self {
        VertexId(index)
    }
}

impl From<VertexId> for usize {
    #[inline]
    fn from(vertex: VertexId) -> Self {
        vertex.0
    }
}
