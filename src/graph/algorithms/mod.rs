//! Traversal algorithms and the algorithms derived from them.
//!
//! # Available Algorithms
//!
//! ## Traversal
//!
//! - [`BreadthFirstSearch`] - Single-source search yielding distances and predecessors
//! - [`DepthFirstSearch`] - Whole-graph search yielding discovery/finish times, tree edges
//!   and a cycle flag
//!
//! ## Derived from Depth-First Search
//!
//! - [`topological_sort`] - Reverse finish order of an acyclic digraph
//! - [`connected_components`] - Strongly connected components (Kosaraju)
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Use Case |
//! |-----------|-----------------|----------|
//! | BFS | O(V + E) | Unweighted shortest paths, reachability |
//! | DFS | O(V + E) | Timestamps, cycle detection, forest structure |
//! | Topological Sort | O(V + E) | Dependency ordering |
//! | Components | O(V + E) | Strongly connected (directed) or connected (undirected) groups |
//!
//! # Vertex Colouring
//!
//! Both searches colour vertices white (undiscovered), gray (discovered, still being
//! explored) and black (fully explored). Colours only ever move from white to gray to
//! black.

mod bfs;
mod components;
mod dfs;
mod topological;

pub use bfs::{BfsEntry, BreadthFirstSearch};
pub use components::connected_components;
pub use dfs::{DepthFirstSearch, DfsEntry};
pub use topological::topological_sort;

/// Exploration state of a vertex during a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Color {
    /// Not yet discovered
    White,
    /// Discovered, adjacency not yet fully explored
    Gray,
    /// Fully explored
    Black,
}
