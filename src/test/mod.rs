//! Shared fixtures for unit tests
//!
//! Builders for the small graphs that the graph and algorithm tests run against. All
//! builders panic on invalid input, which is what a broken fixture should do.

use crate::graph::{Digraph, UndirectedGraph};

// Helper function to create a Digraph from index pairs
pub fn digraph(vertex_count: usize, edges: &[(usize, usize)]) -> Digraph {
    Digraph::from_edges(vertex_count, edges.iter().copied()).unwrap()
}

// Helper function to create an UndirectedGraph from index pairs
pub fn undirected(vertex_count: usize, edges: &[(usize, usize)]) -> UndirectedGraph {
    UndirectedGraph::from_edges(vertex_count, edges.iter().copied()).unwrap()
}

// 0 -> 1 -> 3 and 0 -> 2 -> 3
pub fn diamond() -> Digraph {
    digraph(4, &[(0, 1), (0, 2), (1, 3), (2, 3)])
}

// Binary tree rooted at 0 with leaves 3, 4 and 5
pub fn tree() -> Digraph {
    digraph(6, &[(0, 1), (0, 2), (1, 3), (1, 4), (2, 5)])
}
