//! # graphical Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the graphical library. Import this module to get quick access to the graph
//! representations and every search built on them.
//!
//! ```rust
//! use graphical::prelude::*;
//!
//! let graph = Digraph::from_edges(3, [(0, 1), (1, 2)])?;
//! let bfs = BreadthFirstSearch::new(&graph, VertexId::new(0))?;
//! assert_eq!(bfs.len(), graph.vertex_count());
//! # Ok::<(), graphical::Error>(())
//! ```

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all graphical operations
pub use crate::Error;

/// The result type used throughout graphical
pub use crate::Result;

// ================================================================================================
// Graph Representations
// ================================================================================================

/// The capability every graph representation implements
pub use crate::graph::Graph;

/// Vertex and edge identifiers
pub use crate::graph::{Edge, VertexId};

/// Adjacency-list graphs
pub use crate::graph::{Digraph, UndirectedGraph};

// ================================================================================================
// Algorithms
// ================================================================================================

/// Breadth-first search and its per-vertex results
pub use crate::graph::algorithms::{BfsEntry, BreadthFirstSearch};

/// Depth-first search and its per-vertex results
pub use crate::graph::algorithms::{DepthFirstSearch, DfsEntry};

/// Algorithms derived from depth-first search
pub use crate::graph::algorithms::{connected_components, topological_sort};

// ================================================================================================
// Utilities
// ================================================================================================

/// FIFO queue and run partitioning
pub use crate::utils::{slice_by, Queue};
