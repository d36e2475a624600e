//! Integration tests for graph construction and the searches built on it.
//!
//! These tests drive the public API only, the way a downstream crate would: build a graph,
//! run a search, and inspect the results.

use graphical::{prelude::*, Result};

fn ids(indices: &[usize]) -> Vec<VertexId> {
    indices.iter().copied().map(VertexId::new).collect()
}

fn normalized(mut components: Vec<Vec<VertexId>>) -> Vec<Vec<VertexId>> {
    for component in &mut components {
        component.sort();
    }
    components.sort();
    components
}

#[test]
fn test_zero_vertex_graphs_rejected() {
    assert!(matches!(Digraph::new(0), Err(Error::InvalidArgument(_))));
    assert!(matches!(
        UndirectedGraph::new(0),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn test_out_of_range_edge_leaves_graph_untouched() -> Result<()> {
    let mut graph = Digraph::new(2)?;
    let result = graph.add_edge(VertexId::new(0), VertexId::new(5));

    assert_eq!(
        result,
        Err(Error::OutOfRange {
            vertex: 5,
            vertex_count: 2
        })
    );
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.adjacent(VertexId::new(0))?.is_empty());
    Ok(())
}

#[test]
fn test_duplicate_edges_counted_once() -> Result<()> {
    let mut digraph = Digraph::new(2)?;
    digraph.add_edge(VertexId::new(0), VertexId::new(1))?;
    digraph.add_edge(VertexId::new(0), VertexId::new(1))?;
    assert_eq!(digraph.edge_count(), 1);
    assert_eq!(digraph.adjacent(VertexId::new(0))?, &ids(&[1])[..]);

    let mut undirected = UndirectedGraph::new(2)?;
    undirected.add_edge(VertexId::new(0), VertexId::new(1))?;
    undirected.add_edge(VertexId::new(1), VertexId::new(0))?;
    assert_eq!(undirected.edge_count(), 1);
    assert_eq!(undirected.adjacent(VertexId::new(1))?, &ids(&[0])[..]);
    Ok(())
}

#[test]
fn test_transpose_reverses_edges() -> Result<()> {
    let graph = Digraph::from_edges(3, [(0, 1), (0, 2), (2, 1)])?;
    let transposed = graph.transpose();

    assert_eq!(transposed.vertex_count(), 3);
    assert_eq!(transposed.edge_count(), 3);
    assert_eq!(transposed.adjacent(VertexId::new(1))?, &ids(&[0, 2])[..]);
    assert_eq!(transposed.adjacent(VertexId::new(2))?, &ids(&[0])[..]);
    assert!(transposed.adjacent(VertexId::new(0))?.is_empty());

    // The receiver is untouched
    assert_eq!(graph.adjacent(VertexId::new(0))?, &ids(&[1, 2])[..]);
    Ok(())
}

#[test]
fn test_undirected_transpose_is_identical() -> Result<()> {
    let graph = UndirectedGraph::from_edges(4, [(0, 1), (1, 2), (3, 3)])?;
    assert_eq!(graph.transpose(), graph);
    Ok(())
}

#[test]
fn test_bfs_layers_and_paths() -> Result<()> {
    // Two routes from 0 to 4, one of length 2 and one of length 3
    let graph = Digraph::from_edges(6, [(0, 1), (1, 2), (2, 4), (0, 3), (3, 4), (5, 0)])?;
    let bfs = BreadthFirstSearch::new(&graph, VertexId::new(0))?;

    assert_eq!(bfs.len(), 5);
    assert_eq!(bfs.distance_to(VertexId::new(4)), Some(2));
    assert_eq!(bfs.path_to(VertexId::new(4)), Some(ids(&[0, 3, 4])));
    assert!(!bfs.has_path_to(VertexId::new(5)));

    let distances: Vec<usize> = bfs.iter().map(|entry| entry.distance).collect();
    assert!(distances.windows(2).all(|pair| pair[0] <= pair[1]));
    Ok(())
}

#[test]
fn test_bfs_out_of_range_start() -> Result<()> {
    let graph = UndirectedGraph::new(3)?;
    assert!(matches!(
        BreadthFirstSearch::new(&graph, VertexId::new(3)),
        Err(Error::OutOfRange { .. })
    ));
    Ok(())
}

#[test]
fn test_dfs_forest_over_disconnected_graph() -> Result<()> {
    let graph = Digraph::from_edges(5, [(0, 1), (2, 3), (3, 4)])?;
    let dfs = DepthFirstSearch::new(&graph)?;

    assert_eq!(dfs.roots(), ids(&[0, 2]));
    assert_eq!(dfs.tree_edges().len(), 3);
    assert!(!dfs.has_cycle());

    let finished: Vec<usize> = dfs
        .finish_order()
        .iter()
        .map(|entry| entry.finished)
        .collect();
    assert_eq!(finished, vec![3, 4, 8, 9, 10]);
    Ok(())
}

#[test]
fn test_dfs_respects_visit_order() -> Result<()> {
    let graph = Digraph::from_edges(4, [(0, 1), (2, 3)])?;
    let dfs = DepthFirstSearch::with_visit_order(&graph, &ids(&[3, 2, 1, 0]))?;

    assert_eq!(dfs.roots(), ids(&[3, 2, 1, 0]));
    assert_eq!(dfs[VertexId::new(3)].discovered, 1);
    Ok(())
}

#[test]
fn test_topological_sort_chain_then_cycle() -> Result<()> {
    let mut graph = Digraph::from_edges(3, [(0, 1), (1, 2)])?;
    assert_eq!(topological_sort(&graph)?, ids(&[0, 1, 2]));

    graph.add_edge(VertexId::new(2), VertexId::new(0))?;
    assert!(topological_sort(&graph)?.is_empty());
    Ok(())
}

#[test]
fn test_topological_sort_dependency_graph() -> Result<()> {
    // undershorts -> pants -> shoes, socks -> shoes, pants -> belt, shirt -> belt
    let graph = Digraph::from_edges(6, [(0, 1), (1, 2), (3, 2), (1, 4), (5, 4)])?;
    let order = topological_sort(&graph)?;

    assert_eq!(order.len(), 6);
    let position = |vertex: usize| order.iter().position(|&v| v.index() == vertex);
    for edge in graph.edges() {
        assert!(position(edge.source.index()) < position(edge.target.index()));
    }
    Ok(())
}

#[test]
fn test_components_pair_and_single_edge() -> Result<()> {
    let graph = Digraph::from_edges(4, [(0, 1), (1, 0), (2, 3)])?;
    let components = normalized(connected_components(&graph)?);

    assert_eq!(components, vec![ids(&[0, 1]), ids(&[2]), ids(&[3])]);
    Ok(())
}

#[test]
fn test_components_edgeless_graph() -> Result<()> {
    let graph = Digraph::new(5)?;
    let components = normalized(connected_components(&graph)?);

    assert_eq!(components.len(), 5);
    assert!(components.iter().all(|component| component.len() == 1));
    Ok(())
}

#[test]
fn test_components_single_cycle() -> Result<()> {
    let edges: Vec<(usize, usize)> = (0..8).map(|i| (i, (i + 1) % 8)).collect();
    let graph = Digraph::from_edges(8, edges)?;
    let components = connected_components(&graph)?;

    assert_eq!(components.len(), 1);
    assert_eq!(normalized(components)[0], ids(&[0, 1, 2, 3, 4, 5, 6, 7]));
    Ok(())
}

#[test]
fn test_components_undirected_graph() -> Result<()> {
    let graph = UndirectedGraph::from_edges(5, [(0, 4), (1, 2)])?;
    let components = normalized(connected_components(&graph)?);

    assert_eq!(components, vec![ids(&[0, 4]), ids(&[1, 2]), ids(&[3])]);
    Ok(())
}

#[test]
fn test_queue_dequeue_from_empty() {
    let mut queue: Queue<VertexId> = Queue::new();
    assert_eq!(queue.dequeue(), Err(Error::EmptyQueue));
}

#[test]
fn test_slice_by_on_search_results() -> Result<()> {
    let graph = Digraph::from_edges(4, [(0, 1), (2, 3)])?;
    let dfs = DepthFirstSearch::new(&graph)?;
    let started = dfs.start_order();

    let trees = slice_by(&started, |entry| entry.is_root());
    assert_eq!(trees.len(), 2);
    assert!(trees.iter().all(|tree| tree[0].is_root()));
    Ok(())
}
