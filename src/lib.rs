// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # graphical
//!
//! Directed and undirected graphs over integer-indexed vertices, together with the
//! classic traversal algorithms built on top of them.
//!
//! ## Features
//!
//! - **Adjacency-list graphs** - [`Digraph`] and [`UndirectedGraph`] with a fixed vertex
//!   count, deduplicated edges and insertion-ordered adjacency
//! - **Breadth-first search** - distances, predecessors and visitation order from a
//!   single source
//! - **Depth-first search** - discovery/finish timestamps, tree edges and cycle detection
//!   over the whole graph, without recursion
//! - **Derived algorithms** - topological sorting and strongly connected components
//!   (Kosaraju)
//!
//! ## Quick Start
//!
//! ```rust
//! use graphical::prelude::*;
//!
//! let mut graph = Digraph::new(3)?;
//! graph.add_edge(VertexId::new(0), VertexId::new(1))?;
//! graph.add_edge(VertexId::new(1), VertexId::new(2))?;
//!
//! let order = topological_sort(&graph)?;
//! assert_eq!(order, vec![VertexId::new(0), VertexId::new(1), VertexId::new(2)]);
//!
//! let bfs = BreadthFirstSearch::new(&graph, VertexId::new(0))?;
//! assert_eq!(bfs.distance_to(VertexId::new(2)), Some(2));
//! # Ok::<(), graphical::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`graph`] - the [`Graph`] capability trait and its two implementations
//! - [`graph::algorithms`] - BFS, DFS, topological sort and connected components
//! - [`utils`] - the FIFO [`utils::Queue`] and the [`utils::slice_by`] helper
//! - [`Error`] and [`Result`] - error handling
//!
//! All algorithms are written against the [`Graph`] trait and never against a concrete
//! graph type. Search results are computed eagerly when the search is constructed and
//! are immutable afterwards.
//!
//! ## Error Handling
//!
//! Every fallible operation returns [`Result<T, Error>`](Result). Errors are caller
//! mistakes (out-of-range vertices, a zero vertex count, a malformed visit order) and are
//! detected before any state is modified.
//!
//! ```rust
//! use graphical::{Digraph, Error, VertexId};
//!
//! let mut graph = Digraph::new(2)?;
//! match graph.add_edge(VertexId::new(0), VertexId::new(7)) {
//!     Err(Error::OutOfRange { vertex, vertex_count }) => {
//!         assert_eq!((vertex, vertex_count), (7, 2));
//!     }
//!     other => panic!("unexpected result: {other:?}"),
//! }
//! # Ok::<(), graphical::Error>(())
//! ```
//!
//! ## Logging
//!
//! Diagnostics are emitted through [`tracing`](https://docs.rs/tracing). The library
//! never installs a subscriber; attach one in the application to see search summaries.

#[macro_use]
pub(crate) mod error;

/// Shared functionality which is used in unit-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and functions.
///
/// # Example
///
/// ```rust
/// use graphical::prelude::*;
///
/// let graph = UndirectedGraph::new(4)?;
/// let components = connected_components(&graph)?;
/// assert_eq!(components.len(), 4);
/// # Ok::<(), graphical::Error>(())
/// ```
pub mod prelude;

/// Graph representations and traversal algorithms.
///
/// # Key Types
///
/// - [`graph::Graph`] - capability trait consumed by every algorithm
/// - [`graph::Digraph`] - directed adjacency-list graph
/// - [`graph::UndirectedGraph`] - undirected adjacency-list graph
/// - [`graph::VertexId`] / [`graph::Edge`] - strongly typed identifiers
pub mod graph;

/// Small, independently testable building blocks used by the algorithms.
pub mod utils;

/// `graphical` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `graphical` Error type
///
/// See [`error::Error`](Error) for the individual failure modes.
pub use error::Error;

pub use graph::{
    algorithms::{
        connected_components, topological_sort, BfsEntry, BreadthFirstSearch, DepthFirstSearch,
        DfsEntry,
    },
    Digraph, Edge, Graph, UndirectedGraph, VertexId,
};
