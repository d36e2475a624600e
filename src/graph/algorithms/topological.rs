//! Topological ordering of directed acyclic graphs.

use tracing::debug;

use crate::{
    graph::{algorithms::DepthFirstSearch, Digraph, Graph, VertexId},
    Result,
};

/// Orders the vertices of `graph` so that every edge points from an earlier vertex to a
/// later one.
///
/// The order is the reverse of the depth-first finish order with the default visit order.
/// If `graph` has a cycle no such order exists and the result is empty; an acyclic graph
/// always yields every vertex.
///
/// # Errors
///
/// Propagates failures from the underlying [`DepthFirstSearch`].
///
/// # Examples
///
/// ```rust
/// use graphical::{topological_sort, Digraph, VertexId};
///
/// let mut graph = Digraph::from_edges(3, [(0, 1), (1, 2)])?;
/// assert_eq!(
///     topological_sort(&graph)?,
///     vec![VertexId::new(0), VertexId::new(1), VertexId::new(2)]
/// );
///
/// graph.add_edge(VertexId::new(2), VertexId::new(0))?;
/// assert!(topological_sort(&graph)?.is_empty());
/// # Ok::<(), graphical::Error>(())
/// ```
pub fn topological_sort(graph: &Digraph) -> Result<Vec<VertexId>> {
    let dfs = DepthFirstSearch::new(graph)?;
    if dfs.has_cycle() {
        debug!(
            vertex_count = graph.vertex_count(),
            "graph has a cycle, no topological order"
        );
        return Ok(Vec::new());
    }

    let order: Vec<VertexId> = dfs
        .finish_order()
        .iter()
        .rev()
        .map(|entry| entry.vertex)
        .collect();

    debug!(
        vertex_count = order.len(),
        edge_count = graph.edge_count(),
        "topological sort complete"
    );

    Ok(order)
}
