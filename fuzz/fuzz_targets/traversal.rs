#![no_main]

use graphical::{
    connected_components, topological_sort, BreadthFirstSearch, DepthFirstSearch, Digraph, Graph,
    UndirectedGraph, VertexId,
};
use libfuzzer_sys::fuzz_target;

// First byte is the vertex count, every following byte pair is an edge. Out-of-range pairs
// are fed through as well and must be rejected without touching the graph.
fuzz_target!(|data: &[u8]| {
    let Some((&count, pairs)) = data.split_first() else {
        return;
    };
    let vertex_count = usize::from(count);

    let (Ok(mut digraph), Ok(mut undirected)) =
        (Digraph::new(vertex_count), UndirectedGraph::new(vertex_count))
    else {
        assert_eq!(vertex_count, 0);
        return;
    };

    for pair in pairs.chunks_exact(2) {
        let source = VertexId::new(usize::from(pair[0]));
        let target = VertexId::new(usize::from(pair[1]));
        let before = digraph.edge_count();
        if digraph.add_edge(source, target).is_err() {
            assert_eq!(digraph.edge_count(), before);
        }
        let _ = undirected.add_edge(source, target);
    }

    let bfs = BreadthFirstSearch::new(&digraph, VertexId::new(0)).unwrap();
    assert!(bfs.len() <= vertex_count);

    let dfs = DepthFirstSearch::new(&digraph).unwrap();
    let order = topological_sort(&digraph).unwrap();
    assert_eq!(order.is_empty(), dfs.has_cycle());

    let covered: usize = connected_components(&digraph)
        .unwrap()
        .iter()
        .map(Vec::len)
        .sum();
    assert_eq!(covered, vertex_count);

    let covered: usize = connected_components(&undirected)
        .unwrap()
        .iter()
        .map(Vec::len)
        .sum();
    assert_eq!(covered, undirected.vertex_count());
});
