//! Graph representations over integer-indexed vertices.
//!
//! This module provides two adjacency-list graphs and the trait through which every
//! algorithm in [`algorithms`] accesses them.
//!
//! # Architecture
//!
//! - **Core Types**: [`VertexId`] and [`Edge`] name vertices and edges
//! - **Capability**: [`Graph`] exposes vertex count, edge count, adjacency and transpose
//! - **Representations**: [`Digraph`] and [`UndirectedGraph`]
//! - **Algorithms**: breadth-first and depth-first search, topological sorting and
//!   strongly connected components
//!
//! # Design Principles
//!
//! ## Fixed Vertex Set
//!
//! The number of vertices is chosen when a graph is created and never changes. Only edges
//! are added afterwards, and edges are never removed.
//!
//! ## Deduplicated, Ordered Adjacency
//!
//! Adjacency lists hold each neighbour at most once and keep the order in which edges
//! were added. Traversals visit neighbours in that order, which makes their results
//! deterministic.
//!
//! ## Immutable During Search
//!
//! Searches borrow the graph immutably for the duration of their construction and copy
//! out everything they report, so a graph cannot change under a running search and the
//! results never alias graph storage.
//!
//! # Usage Examples
//!
//! ```rust
//! use graphical::graph::{algorithms, Digraph, Graph, VertexId};
//!
//! // 0 -> 1 -> 2, plus 2 -> 1
//! let graph = Digraph::from_edges(3, [(0, 1), (1, 2), (2, 1)])?;
//!
//! let dfs = algorithms::DepthFirstSearch::new(&graph)?;
//! assert!(dfs.has_cycle());
//!
//! let components = algorithms::connected_components(&graph)?;
//! assert_eq!(components.len(), 2);
//! # Ok::<(), graphical::Error>(())
//! ```

mod digraph;
mod edge;
mod traits;
mod undirected;
mod vertex;

pub mod algorithms;

pub use digraph::Digraph;
pub use edge::Edge;
pub use traits::Graph;
pub use undirected::UndirectedGraph;
pub use vertex::VertexId;
