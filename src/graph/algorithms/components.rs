//! Strongly connected components.
//!
//! Components are found with Kosaraju's algorithm: a first depth-first search over the
//! graph, then a second over its transpose that launches from vertices in descending
//! finish order of the first. Each tree of the second forest is exactly one component.
//! For an undirected graph the transpose is the graph itself and the components are its
//! connected components.

use tracing::debug;

use crate::{
    graph::{algorithms::DepthFirstSearch, Graph, VertexId},
    utils::slice_by,
    Result,
};

/// Partitions the vertices of `graph` into strongly connected components.
///
/// Components are returned in the order the second search discovers them, and each lists
/// its vertices in discovery order starting from the vertex that launched it. Every vertex
/// appears in exactly one component.
///
/// # Errors
///
/// Propagates failures from the underlying [`DepthFirstSearch`] passes.
///
/// # Examples
///
/// ```rust
/// use graphical::{connected_components, Digraph, VertexId};
///
/// let graph = Digraph::from_edges(4, [(0, 1), (1, 0), (2, 3)])?;
/// let components = connected_components(&graph)?;
///
/// assert_eq!(components.len(), 3);
/// assert!(components.contains(&vec![VertexId::new(0), VertexId::new(1)]));
/// # Ok::<(), graphical::Error>(())
/// ```
pub fn connected_components<G: Graph>(graph: &G) -> Result<Vec<Vec<VertexId>>> {
    let first = DepthFirstSearch::new(graph)?;
    let order: Vec<VertexId> = first
        .finish_order()
        .iter()
        .rev()
        .map(|entry| entry.vertex)
        .collect();

    let transposed = graph.transpose();
    let second = DepthFirstSearch::with_visit_order(&transposed, &order)?;

    let started = second.start_order();
    let components: Vec<Vec<VertexId>> = slice_by(&started, |entry| entry.is_root())
        .into_iter()
        .map(|run| run.iter().map(|entry| entry.vertex).collect())
        .collect();

    debug!(
        vertex_count = graph.vertex_count(),
        components = components.len(),
        "connected components complete"
    );

    Ok(components)
}

#[cfg(test)]
mod tests {
    use crate::{
        graph::algorithms::components::connected_components,
        test::{diamond, digraph, undirected},
        VertexId,
    };

    fn ids(indices: &[usize]) -> Vec<VertexId> {
        indices.iter().copied().map(VertexId::new).collect()
    }

    #[test]
    fn test_components_pair_and_edge() {
        let graph = digraph(4, &[(0, 1), (1, 0), (2, 3)]);
        let components = connected_components(&graph).unwrap();

        assert_eq!(components, vec![ids(&[2]), ids(&[3]), ids(&[0, 1])]);
    }

    #[test]
    fn test_components_edgeless() {
        let graph = digraph(4, &[]);
        let components = connected_components(&graph).unwrap();

        assert_eq!(components.len(), 4);
        assert!(components.iter().all(|component| component.len() == 1));
    }

    #[test]
    fn test_components_single_cycle() {
        let graph = digraph(5, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]);
        let components = connected_components(&graph).unwrap();

        assert_eq!(components.len(), 1);
        let mut only = components[0].clone();
        only.sort();
        assert_eq!(only, ids(&[0, 1, 2, 3, 4]));
    }

    #[test]
    fn test_components_dag_is_all_singletons() {
        let components = connected_components(&diamond()).unwrap();
        assert_eq!(components.len(), 4);
    }

    #[test]
    fn test_components_two_cycles_joined() {
        // {0, 1, 2} -> {3, 4}
        let graph = digraph(5, &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 3)]);
        let mut components: Vec<Vec<VertexId>> = connected_components(&graph)
            .unwrap()
            .into_iter()
            .map(|mut component| {
                component.sort();
                component
            })
            .collect();
        components.sort();

        assert_eq!(components, vec![ids(&[0, 1, 2]), ids(&[3, 4])]);
    }

    #[test]
    fn test_components_undirected() {
        let graph = undirected(6, &[(0, 1), (1, 2), (3, 4)]);
        let mut components: Vec<Vec<VertexId>> = connected_components(&graph)
            .unwrap()
            .into_iter()
            .map(|mut component| {
                component.sort();
                component
            })
            .collect();
        components.sort();

        assert_eq!(components, vec![ids(&[0, 1, 2]), ids(&[3, 4]), ids(&[5])]);
    }
}
