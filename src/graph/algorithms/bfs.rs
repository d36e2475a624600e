//! Breadth-first search.
//!
//! [`BreadthFirstSearch`] runs a three-colour BFS from a single start vertex when it is
//! constructed and keeps the results: the visitation order, and for every reached vertex
//! its distance from the start and its predecessor on a shortest path.

use std::ops::Index;

use tracing::debug;

use crate::{
    graph::{algorithms::Color, Graph, VertexId},
    utils::Queue,
    Result,
};

/// The search result for one visited vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BfsEntry {
    /// The visited vertex
    pub vertex: VertexId,
    /// The vertex it was discovered from, `None` for the start vertex
    pub predecessor: Option<VertexId>,
    /// Number of edges on a shortest path from the start vertex
    pub distance: usize,
}

/// The results of a breadth-first search from one start vertex.
///
/// The search acts as a collection of [`BfsEntry`] values in visitation order: position 0
/// is the start vertex, followed by every vertex at distance 1, then distance 2, and so on.
/// Vertices that cannot be reached from the start are not part of the collection; use
/// [`distance_to`](Self::distance_to) to ask about an arbitrary vertex.
///
/// Neighbours are explored in adjacency order, which decides the relative order of
/// vertices at the same distance. Distances themselves do not depend on that order.
///
/// # Examples
///
/// ```rust
/// use graphical::{BreadthFirstSearch, Digraph, VertexId};
///
/// // 0 -> 1 -> 3, 0 -> 2 -> 3, vertex 4 unreachable
/// let graph = Digraph::from_edges(5, [(0, 1), (0, 2), (1, 3), (2, 3)])?;
/// let bfs = BreadthFirstSearch::new(&graph, VertexId::new(0))?;
///
/// assert_eq!(bfs.len(), 4);
/// assert_eq!(bfs[0].vertex, VertexId::new(0));
/// assert_eq!(bfs.distance_to(VertexId::new(3)), Some(2));
/// assert_eq!(bfs.distance_to(VertexId::new(4)), None);
/// assert_eq!(
///     bfs.path_to(VertexId::new(3)),
///     Some(vec![VertexId::new(0), VertexId::new(1), VertexId::new(3)])
/// );
/// # Ok::<(), graphical::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct BreadthFirstSearch {
    start: VertexId,
    /// Visited vertices, in the order they turned black
    order: Vec<BfsEntry>,
    /// Distance per vertex, `None` while unreached
    distance: Vec<Option<usize>>,
    /// Predecessor per vertex
    predecessor: Vec<Option<VertexId>>,
}

impl BreadthFirstSearch {
    /// Runs a breadth-first search over `graph` from `start`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`](crate::Error::OutOfRange) if `start` is not a vertex of
    /// `graph`.
    pub fn new<G: Graph>(graph: &G, start: VertexId) -> Result<Self> {
        graph.check_vertex(start)?;

        let vertex_count = graph.vertex_count();
        let mut color = vec![Color::White; vertex_count];
        let mut distance: Vec<Option<usize>> = vec![None; vertex_count];
        let mut predecessor: Vec<Option<VertexId>> = vec![None; vertex_count];
        let mut order = Vec::new();

        color[start.index()] = Color::Gray;
        distance[start.index()] = Some(0);

        let mut queue = Queue::with_capacity(vertex_count);
        queue.enqueue(start);

        while !queue.is_empty() {
            let next = queue.dequeue()?;
            let next_distance = distance[next.index()].unwrap_or_default();

            for &vertex in graph.adjacent(next)? {
                if color[vertex.index()] == Color::White {
                    color[vertex.index()] = Color::Gray;
                    distance[vertex.index()] = Some(next_distance + 1);
                    predecessor[vertex.index()] = Some(next);
                    queue.enqueue(vertex);
                }
            }

            color[next.index()] = Color::Black;
            order.push(BfsEntry {
                vertex: next,
                predecessor: predecessor[next.index()],
                distance: next_distance,
            });
        }

        debug!(
            %start,
            visited = order.len(),
            vertex_count,
            "breadth-first search complete"
        );

        Ok(BreadthFirstSearch {
            start,
            order,
            distance,
            predecessor,
        })
    }

    /// Returns the vertex the search started from.
    #[must_use]
    pub fn start(&self) -> VertexId {
        self.start
    }

    /// Returns the number of visited vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if no vertex was visited.
    ///
    /// A completed search always visits at least its start vertex.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the entry at `position` in visitation order.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&BfsEntry> {
        self.order.get(position)
    }

    /// Returns an iterator over the visited vertices in visitation order.
    pub fn iter(&self) -> std::slice::Iter<'_, BfsEntry> {
        self.order.iter()
    }

    /// Returns the shortest-path distance from the start to `vertex`.
    ///
    /// `None` if `vertex` was not reached or is not a vertex of the searched graph.
    #[must_use]
    pub fn distance_to(&self, vertex: VertexId) -> Option<usize> {
        self.distance.get(vertex.index()).copied().flatten()
    }

    /// Returns the vertex from which `vertex` was discovered.
    ///
    /// `None` for the start vertex and for vertices that were not reached.
    #[must_use]
    pub fn predecessor_of(&self, vertex: VertexId) -> Option<VertexId> {
        self.predecessor.get(vertex.index()).copied().flatten()
    }

    /// Returns `true` if `vertex` is reachable from the start.
    #[must_use]
    pub fn has_path_to(&self, vertex: VertexId) -> bool {
        self.distance_to(vertex).is_some()
    }

    /// Returns a shortest path from the start to `vertex`, both endpoints included.
    ///
    /// `None` if `vertex` is unreachable.
    #[must_use]
    pub fn path_to(&self, vertex: VertexId) -> Option<Vec<VertexId>> {
        let distance = self.distance_to(vertex)?;

        let mut path = Vec::with_capacity(distance + 1);
        let mut current = Some(vertex);
        while let Some(step) = current {
            path.push(step);
            current = self.predecessor_of(step);
        }
        path.reverse();

        Some(path)
    }
}

impl Index<usize> for BreadthFirstSearch {
    type Output = BfsEntry;

    /// Returns the entry at `position` in visitation order.
    ///
    /// # Panics
    ///
    /// Panics if `position >= self.len()`.
    fn index(&self, position: usize) -> &Self::Output {
        &self.order[position]
    }
}

impl<'a> IntoIterator for &'a BreadthFirstSearch {
    type Item = &'a BfsEntry;
    type IntoIter = std::slice::Iter<'a, BfsEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}
