//! Depth-first search over the whole graph.
//!
//! The search is iterative. Recursion is simulated with two stacks: a *to-start* stack of
//! vertices waiting to be discovered, and a *finishing* stack holding the path from the
//! current root to the vertex being explored. A vertex is finished once it reaches the top
//! of the finishing stack with no undiscovered neighbour left, so arbitrarily deep graphs
//! never touch the call stack.
//!
//! Every vertex receives a discovery and a finish timestamp from a clock that starts at 1
//! and advances by one per event, so timestamps cover `1..=2 * vertex_count` exactly once.

use std::ops::Index;

use tracing::{debug, trace};

use crate::{
    graph::{algorithms::Color, Edge, Graph, VertexId},
    Result,
};

/// The search result for one vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DfsEntry {
    /// The vertex this entry describes
    pub vertex: VertexId,
    /// The tree parent, `None` for the root of a search tree
    pub predecessor: Option<VertexId>,
    /// Clock value when the vertex was first reached
    pub discovered: usize,
    /// Clock value when every neighbour of the vertex had been explored
    pub finished: usize,
}

impl DfsEntry {
    /// Returns `true` if this vertex started a new search tree.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.predecessor.is_none()
    }
}

/// The results of a depth-first search over every vertex of a graph.
///
/// Searches are launched from each still-undiscovered vertex in the visit order, ascending
/// vertex index by default, which produces a depth-first forest. Neighbours are explored in
/// adjacency order.
///
/// A cycle is reported when exploration meets an edge back to a vertex that is still on
/// the current search path. In an undirected graph the edge leading back to a vertex's own
/// tree parent is not a cycle; a self-loop is.
///
/// # Examples
///
/// ```rust
/// use graphical::{DepthFirstSearch, Digraph, VertexId};
///
/// let graph = Digraph::from_edges(3, [(0, 1), (1, 2)])?;
/// let dfs = DepthFirstSearch::new(&graph)?;
///
/// assert!(!dfs.has_cycle());
/// assert_eq!(dfs[VertexId::new(0)].discovered, 1);
/// assert_eq!(dfs[VertexId::new(0)].finished, 6);
/// assert!(dfs.is_descendant(VertexId::new(0), VertexId::new(2)));
/// # Ok::<(), graphical::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DepthFirstSearch {
    /// One entry per vertex, indexed by vertex
    entries: Vec<DfsEntry>,
    has_cycle: bool,
}

impl DepthFirstSearch {
    /// Runs a depth-first search over `graph`, launching from vertices in ascending order.
    ///
    /// # Errors
    ///
    /// Propagates adjacency lookup failures from `graph`.
    pub fn new<G: Graph>(graph: &G) -> Result<Self> {
        let order: Vec<VertexId> = graph.vertices().collect();
        Self::search(graph, &order)
    }

    /// Runs a depth-first search over `graph`, launching from vertices in `order`.
    ///
    /// `order` must name every vertex of `graph` exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if `order` has the
    /// wrong length or repeats a vertex, and [`Error::OutOfRange`](crate::Error::OutOfRange)
    /// if it names a vertex outside the graph.
    pub fn with_visit_order<G: Graph>(graph: &G, order: &[VertexId]) -> Result<Self> {
        let vertex_count = graph.vertex_count();
        if order.len() != vertex_count {
            return Err(invalid_argument!(
                "visit order has {} entries but the graph has {} vertices",
                order.len(),
                vertex_count
            ));
        }

        let mut seen = vec![false; vertex_count];
        for &vertex in order {
            graph.check_vertex(vertex)?;
            if seen[vertex.index()] {
                return Err(invalid_argument!("visit order repeats vertex {}", vertex));
            }
            seen[vertex.index()] = true;
        }

        Self::search(graph, order)
    }

    fn search<G: Graph>(graph: &G, order: &[VertexId]) -> Result<Self> {
        let mut state = SearchState::new(graph);
        for &root in order {
            if state.color[root.index()] == Color::White {
                trace!(%root, clock = state.clock, "launching depth-first visit");
                state.visit(root)?;
            }
        }

        let search = state.into_search();
        debug!(
            vertex_count = search.len(),
            roots = search.iter().filter(|entry| entry.is_root()).count(),
            has_cycle = search.has_cycle,
            "depth-first search complete"
        );

        Ok(search)
    }

    /// Returns `true` if the search met an edge closing a cycle.
    #[must_use]
    pub fn has_cycle(&self) -> bool {
        self.has_cycle
    }

    /// Returns the number of vertices covered by the search.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the search covered no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry for `vertex`, or `None` if it is not a vertex of the searched graph.
    #[must_use]
    pub fn get(&self, vertex: VertexId) -> Option<&DfsEntry> {
        self.entries.get(vertex.index())
    }

    /// Returns an iterator over the entries in ascending vertex order.
    pub fn iter(&self) -> std::slice::Iter<'_, DfsEntry> {
        self.entries.iter()
    }

    /// Returns the entries sorted by ascending discovery time.
    ///
    /// Each search tree forms a contiguous run that starts with its root.
    #[must_use]
    pub fn start_order(&self) -> Vec<DfsEntry> {
        let mut order = self.entries.clone();
        order.sort_unstable_by_key(|entry| entry.discovered);
        order
    }

    /// Returns the entries sorted by ascending finish time.
    #[must_use]
    pub fn finish_order(&self) -> Vec<DfsEntry> {
        let mut order = self.entries.clone();
        order.sort_unstable_by_key(|entry| entry.finished);
        order
    }

    /// Returns the edges of the depth-first forest, `predecessor -> vertex`, in ascending
    /// order of the child vertex.
    #[must_use]
    pub fn tree_edges(&self) -> Vec<Edge> {
        self.entries
            .iter()
            .filter_map(|entry| {
                entry
                    .predecessor
                    .map(|predecessor| Edge::new(predecessor, entry.vertex))
            })
            .collect()
    }

    /// Returns the roots of the depth-first forest in discovery order.
    #[must_use]
    pub fn roots(&self) -> Vec<VertexId> {
        self.start_order()
            .into_iter()
            .filter(DfsEntry::is_root)
            .map(|entry| entry.vertex)
            .collect()
    }

    /// Returns `true` if `descendant` lies in the search tree below `ancestor`.
    ///
    /// A vertex counts as its own descendant. Vertices outside the searched graph are
    /// descendants of nothing.
    #[must_use]
    pub fn is_descendant(&self, ancestor: VertexId, descendant: VertexId) -> bool {
        match (self.get(ancestor), self.get(descendant)) {
            (Some(outer), Some(inner)) => {
                outer.discovered <= inner.discovered && inner.finished <= outer.finished
            }
            _ => false,
        }
    }
}

impl Index<VertexId> for DepthFirstSearch {
    type Output = DfsEntry;

    /// Returns the entry for `vertex`.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not a vertex of the searched graph.
    fn index(&self, vertex: VertexId) -> &Self::Output {
        &self.entries[vertex.index()]
    }
}

impl<'a> IntoIterator for &'a DepthFirstSearch {
    type Item = &'a DfsEntry;
    type IntoIter = std::slice::Iter<'a, DfsEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Mutable bookkeeping for a single search, dropped once the results are built.
struct SearchState<'g, G> {
    graph: &'g G,
    color: Vec<Color>,
    /// Per vertex, the first adjacency position that may still hold a white neighbour
    cursor: Vec<usize>,
    clock: usize,
    discovered: Vec<usize>,
    finished: Vec<usize>,
    predecessor: Vec<Option<VertexId>>,
    has_cycle: bool,
    to_start: Vec<VertexId>,
    finishing: Vec<VertexId>,
}

impl<'g, G: Graph> SearchState<'g, G> {
    fn new(graph: &'g G) -> Self {
        let vertex_count = graph.vertex_count();
        SearchState {
            graph,
            color: vec![Color::White; vertex_count],
            cursor: vec![0; vertex_count],
            clock: 1,
            discovered: vec![0; vertex_count],
            finished: vec![0; vertex_count],
            predecessor: vec![None; vertex_count],
            has_cycle: false,
            to_start: Vec::new(),
            finishing: Vec::new(),
        }
    }

    fn tick(&mut self) -> usize {
        let now = self.clock;
        self.clock += 1;
        now
    }

    fn visit(&mut self, root: VertexId) -> Result<()> {
        self.to_start.push(root);

        while let Some(vertex) = self.to_start.pop() {
            // Stale entry for a vertex already reached through a later push
            if self.color[vertex.index()] != Color::White {
                continue;
            }

            self.discovered[vertex.index()] = self.tick();
            self.color[vertex.index()] = Color::Gray;
            self.finishing.push(vertex);

            let graph = self.graph;
            for &neighbour in graph.adjacent(vertex)? {
                match self.color[neighbour.index()] {
                    Color::White => {
                        self.predecessor[neighbour.index()] = Some(vertex);
                        self.to_start.push(neighbour);
                    }
                    Color::Gray => {
                        let parent_edge = !graph.is_directed()
                            && self.predecessor[vertex.index()] == Some(neighbour);
                        if !parent_edge {
                            trace!(%vertex, %neighbour, "edge closes a cycle");
                            self.has_cycle = true;
                        }
                    }
                    Color::Black => {}
                }
            }

            self.finish_exhausted()?;
        }

        Ok(())
    }

    /// Finishes vertices from the top of the finishing stack until one still has an
    /// undiscovered neighbour.
    fn finish_exhausted(&mut self) -> Result<()> {
        while let Some(&top) = self.finishing.last() {
            if self.has_white_neighbour(top)? {
                break;
            }

            self.finished[top.index()] = self.tick();
            self.color[top.index()] = Color::Black;
            self.finishing.pop();
        }

        Ok(())
    }

    fn has_white_neighbour(&mut self, vertex: VertexId) -> Result<bool> {
        let graph = self.graph;
        let neighbours = graph.adjacent(vertex)?;
        let cursor = &mut self.cursor[vertex.index()];
        while let Some(neighbour) = neighbours.get(*cursor) {
            if self.color[neighbour.index()] == Color::White {
                return Ok(true);
            }
            *cursor += 1;
        }

        Ok(false)
    }

    fn into_search(self) -> DepthFirstSearch {
        let entries = (0..self.color.len())
            .map(|index| DfsEntry {
                vertex: VertexId::new(index),
                predecessor: self.predecessor[index],
                discovered: self.discovered[index],
                finished: self.finished[index],
            })
            .collect();

        DepthFirstSearch {
            entries,
            has_cycle: self.has_cycle,
        }
    }
}
