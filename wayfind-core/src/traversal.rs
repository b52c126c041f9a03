//! Breadth-first queries: reachability, level-order paths, hop counts, and
//! component floods.
//!
//! All four operations share the same skeleton: a queue over out-edges with
//! a visited array sized to the vertex count, allocated per call so queries
//! stay reentrant. Neighbours are expanded in edge insertion order, which
//! fixes the tie-break for [`Graph::bfs_path`].

use std::collections::VecDeque;

use tracing::instrument;

use crate::{
    graph::{Graph, VertexId},
    path::RoutePath,
};

impl Graph {
    /// Returns whether at least one path of out-edges leads from `from` to
    /// `to`.
    ///
    /// Pure connectivity; weights are ignored. `false` when either name is
    /// unregistered. A vertex always reaches itself.
    ///
    /// # Examples
    /// ```
    /// use wayfind_core::{EdgeMode, GraphBuilder};
    ///
    /// let mut builder = GraphBuilder::new().with_mode(EdgeMode::Directed);
    /// builder.add_edge("A", "B", 3);
    /// builder.add_edge("B", "C", 1);
    /// let graph = builder.build();
    /// assert!(graph.has_path("A", "C"));
    /// assert!(!graph.has_path("C", "A"));
    /// assert!(!graph.has_path("A", "Atlantis"));
    /// ```
    #[must_use]
    pub fn has_path(&self, from: &str, to: &str) -> bool {
        let (Some(start), Some(goal)) = (self.resolve(from), self.resolve(to)) else {
            return false;
        };
        let mut visited = vec![false; self.vertex_count()];
        let mut queue = VecDeque::new();
        visited[start.index()] = true;
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            if current == goal {
                return true;
            }
            for edge in self.out_edges(current) {
                if !visited[edge.target.index()] {
                    visited[edge.target.index()] = true;
                    queue.push_back(edge.target);
                }
            }
        }
        false
    }

    /// Finds one path from `from` to `to` by level-order traversal.
    ///
    /// Builds a parent map where the first edge discovered to a neighbour
    /// wins, so the returned path has the fewest edge hops, with ties broken
    /// by edge insertion order. `None` when either name is unregistered or
    /// no path exists.
    #[instrument(name = "graph.bfs_path", level = "debug", skip(self))]
    #[must_use]
    pub fn bfs_path(&self, from: &str, to: &str) -> Option<RoutePath> {
        let (start, goal) = (self.resolve(from)?, self.resolve(to)?);
        let mut visited = vec![false; self.vertex_count()];
        let mut parent: Vec<Option<VertexId>> = vec![None; self.vertex_count()];
        let mut queue = VecDeque::new();
        visited[start.index()] = true;
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            if current == goal {
                return Some(self.reconstruct(&parent, goal));
            }
            for edge in self.out_edges(current) {
                if !visited[edge.target.index()] {
                    visited[edge.target.index()] = true;
                    parent[edge.target.index()] = Some(current);
                    queue.push_back(edge.target);
                }
            }
        }
        None
    }

    /// Minimum number of edge hops from `from` to `to`.
    ///
    /// Computed by unweighted breadth-first search with a distance array;
    /// edge weights play no part. `Some(0)` when `from == to` and both are
    /// registered, `None` when either name is unregistered or no path
    /// exists. For the weighted minimum see [`Self::min_path_cost`].
    ///
    /// # Examples
    /// ```
    /// use wayfind_core::{EdgeMode, GraphBuilder};
    ///
    /// let mut builder = GraphBuilder::new().with_mode(EdgeMode::Directed);
    /// builder.add_edge("A", "B", 3);
    /// builder.add_edge("A", "C", 2);
    /// builder.add_edge("B", "C", 1);
    /// let graph = builder.build();
    /// // The direct A -> C edge wins on hops even though A -> B -> C is
    /// // cheaper by weight.
    /// assert_eq!(graph.shortest_hops("A", "C"), Some(1));
    /// assert_eq!(graph.shortest_hops("A", "A"), Some(0));
    /// assert_eq!(graph.shortest_hops("C", "A"), None);
    /// ```
    #[must_use]
    pub fn shortest_hops(&self, from: &str, to: &str) -> Option<usize> {
        let (start, goal) = (self.resolve(from)?, self.resolve(to)?);
        let mut distance: Vec<Option<usize>> = vec![None; self.vertex_count()];
        let mut queue = VecDeque::new();
        distance[start.index()] = Some(0);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            let hops = distance[current.index()]?;
            if current == goal {
                return Some(hops);
            }
            for edge in self.out_edges(current) {
                if distance[edge.target.index()].is_none() {
                    distance[edge.target.index()] = Some(hops + 1);
                    queue.push_back(edge.target);
                }
            }
        }
        None
    }

    /// Number of distinct vertices reachable from `vertex` via out-edges,
    /// the vertex itself included.
    ///
    /// For a directed graph this is forward reachability, not weak
    /// connectivity. `0` when `vertex` is unregistered; at least `1`
    /// otherwise.
    #[must_use]
    pub fn component_size(&self, vertex: &str) -> usize {
        let Some(start) = self.resolve(vertex) else {
            return 0;
        };
        let mut visited = vec![false; self.vertex_count()];
        let mut queue = VecDeque::new();
        visited[start.index()] = true;
        queue.push_back(start);
        let mut count = 1;

        while let Some(current) = queue.pop_front() {
            for edge in self.out_edges(current) {
                if !visited[edge.target.index()] {
                    visited[edge.target.index()] = true;
                    queue.push_back(edge.target);
                    count += 1;
                }
            }
        }
        count
    }

    /// Walks the parent map back from `goal` and renders stops with the leg
    /// weights looked up from the adjacency store.
    pub(crate) fn reconstruct(&self, parent: &[Option<VertexId>], goal: VertexId) -> RoutePath {
        let mut ids = vec![goal];
        let mut cursor = goal;
        while let Some(previous) = parent[cursor.index()] {
            ids.push(previous);
            cursor = previous;
        }
        ids.reverse();
        self.render_walk(&ids)
    }

    /// Renders a walk of handles into a [`RoutePath`], resolving each leg
    /// weight by scanning the source vertex's out-edges for the first
    /// matching target.
    pub(crate) fn render_walk(&self, ids: &[VertexId]) -> RoutePath {
        let stops: Vec<String> = ids.iter().map(|&id| self.name_at(id).to_owned()).collect();
        let legs: Vec<i64> = ids
            .windows(2)
            .map(|pair| self.weight_between(pair[0], pair[1]).unwrap_or(-1))
            .collect();
        RoutePath::from_validated(stops, legs)
    }
}
