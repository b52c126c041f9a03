//! Graph representation: vertex registry, adjacency store, and structural
//! queries.
//!
//! Vertex names are interned into dense handles in first-seen order; edges
//! are stored per source vertex in insertion order. Several traversal
//! queries depend on that order for their tie-breaks, so adjacency lists are
//! never sorted or deduplicated after construction.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::{
    builder::EdgeMode,
    error::{GraphError, Result},
};

/// Dense handle assigned to a vertex name at first sight.
///
/// Handles are stable for the lifetime of the graph and never reused or
/// renumbered; the name-to-handle mapping is a bijection onto `0..N-1`.
///
/// # Examples
/// ```
/// use wayfind_core::GraphBuilder;
///
/// let mut builder = GraphBuilder::new();
/// let ankara = builder.ensure_vertex("Ankara");
/// let izmir = builder.ensure_vertex("Izmir");
/// assert_eq!(ankara.index(), 0);
/// assert_eq!(izmir.index(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(usize);

impl VertexId {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the dense position of this vertex in first-seen order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// An edge stored under its source vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct OutEdge {
    pub(crate) target: VertexId,
    pub(crate) weight: i64,
}

/// Immutable weighted graph of named vertices.
///
/// Built once via [`crate::GraphBuilder`], then queried read-only. No query
/// mutates shared state; per-call scratch allocations make a constructed
/// graph safe to share across threads without synchronisation.
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
///
/// assert_eq!(graph.vertex_count(), 3);
/// assert!(graph.are_adjacent("A", "B"));
/// assert!(!graph.are_adjacent("B", "A"));
/// assert_eq!(graph.neighbors("A"), ["B", "C"]);
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    names: Vec<String>,
    index: HashMap<String, VertexId>,
    adjacency: Vec<Vec<OutEdge>>,
    mode: EdgeMode,
}

impl Graph {
    pub(crate) fn from_parts(
        names: Vec<String>,
        index: HashMap<String, VertexId>,
        adjacency: Vec<Vec<OutEdge>>,
        mode: EdgeMode,
    ) -> Self {
        debug_assert_eq!(names.len(), adjacency.len());
        debug_assert_eq!(names.len(), index.len());
        Self {
            names,
            index,
            adjacency,
            mode,
        }
    }

    /// Returns the construction-time edge mode.
    ///
    /// This is the policy [`crate::GraphBuilder::add_edge`] applied while the
    /// graph was built. It is distinct from [`Self::infer_directed`], which
    /// inspects the edges actually stored.
    #[must_use]
    pub const fn mode(&self) -> EdgeMode {
        self.mode
    }

    /// Returns the number of registered vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.names.len()
    }

    /// Returns the number of stored out-edges.
    ///
    /// For a graph built in [`EdgeMode::Undirected`] mode this counts both
    /// halves of every mirrored pair.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Returns whether `name` has ever been registered.
    ///
    /// Query operations collapse "unknown vertex" and "no result" into the
    /// same neutral answer; this predicate lets callers tell them apart.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Looks up the handle for `name`, if registered.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<VertexId> {
        self.index.get(name).copied()
    }

    /// Strict variant of [`Self::resolve`].
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] when `name` was never seen by
    /// the registry.
    pub fn require(&self, name: &str) -> Result<VertexId> {
        self.resolve(name).ok_or_else(|| GraphError::UnknownVertex {
            name: Arc::from(name),
        })
    }

    /// Returns the name registered for `id`, if the handle is in range.
    #[must_use]
    pub fn name_of(&self, id: VertexId) -> Option<&str> {
        self.names.get(id.index()).map(String::as_str)
    }

    /// Returns every registered vertex name in handle order.
    #[must_use]
    pub fn vertex_names(&self) -> &[String] {
        &self.names
    }

    /// Name lookup for handles the engine itself produced.
    pub(crate) fn name_at(&self, id: VertexId) -> &str {
        &self.names[id.index()]
    }

    pub(crate) fn out_edges(&self, id: VertexId) -> &[OutEdge] {
        self.adjacency
            .get(id.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Weight of the first stored edge from `from` to `to`, if any.
    ///
    /// Parallel edges are resolved in favour of the earliest insertion; path
    /// rendering relies on this.
    pub(crate) fn weight_between(&self, from: VertexId, to: VertexId) -> Option<i64> {
        self.out_edges(from)
            .iter()
            .find(|edge| edge.target == to)
            .map(|edge| edge.weight)
    }

    /// Distinct target names of `vertex`'s out-edges, in first-occurrence
    /// order.
    ///
    /// Duplicates arising from parallel edges are collapsed. Returns an
    /// empty sequence when `vertex` is unregistered or has no out-edges.
    ///
    /// # Examples
    /// ```
    /// use wayfind_core::{EdgeMode, GraphBuilder};
    ///
    /// let mut builder = GraphBuilder::new().with_mode(EdgeMode::Directed);
    /// builder.add_edge("A", "B", 3);
    /// builder.add_edge("A", "B", 9);
    /// builder.add_edge("A", "C", 2);
    /// let graph = builder.build();
    /// assert_eq!(graph.neighbors("A"), ["B", "C"]);
    /// assert!(graph.neighbors("Atlantis").is_empty());
    /// ```
    #[must_use]
    pub fn neighbors(&self, vertex: &str) -> Vec<&str> {
        let Some(id) = self.resolve(vertex) else {
            return Vec::new();
        };
        let mut seen: HashSet<VertexId> = HashSet::new();
        let mut result = Vec::new();
        for edge in self.out_edges(id) {
            if seen.insert(edge.target) {
                if let Some(name) = self.name_of(edge.target) {
                    result.push(name);
                }
            }
        }
        result
    }

    /// Names of all vertices attaining the maximum out-degree, in handle
    /// order.
    ///
    /// Out-degree counts stored out-edges, parallel edges included. Every
    /// vertex tied at the maximum is returned, not just the first.
    ///
    /// # Examples
    /// ```
    /// use wayfind_core::{EdgeMode, GraphBuilder};
    ///
    /// let mut builder = GraphBuilder::new().with_mode(EdgeMode::Directed);
    /// builder.add_edge("A", "B", 1);
    /// builder.add_edge("A", "C", 1);
    /// builder.add_edge("B", "C", 1);
    /// builder.add_edge("B", "D", 1);
    /// let graph = builder.build();
    /// assert_eq!(graph.highest_degree(), ["A", "B"]);
    /// ```
    #[must_use]
    pub fn highest_degree(&self) -> Vec<&str> {
        let Some(max) = self.adjacency.iter().map(Vec::len).max() else {
            return Vec::new();
        };
        self.adjacency
            .iter()
            .zip(&self.names)
            .filter(|(edges, _)| edges.len() == max)
            .map(|(_, name)| name.as_str())
            .collect()
    }

    /// Returns whether an edge `from -> to` is stored.
    ///
    /// Checks one direction only; the reverse edge is not consulted.
    #[must_use]
    pub fn are_adjacent(&self, from: &str, to: &str) -> bool {
        let (Some(a), Some(b)) = (self.resolve(from), self.resolve(to)) else {
            return false;
        };
        self.out_edges(a).iter().any(|edge| edge.target == b)
    }

    /// Infers directedness from the stored edge set.
    ///
    /// Reports directed as soon as any edge `u -> v` with weight `w` lacks a
    /// mirror `v -> u` with the same weight. This is a structural inference
    /// independent of [`Self::mode`]: an undirected build always satisfies
    /// it, while a directed build can pass by coincidence when its edges
    /// happen to be weight-symmetric.
    ///
    /// Worst case O(E²) via a linear scan of each endpoint's out-edges.
    #[must_use]
    pub fn infer_directed(&self) -> bool {
        for (source, edges) in self.adjacency.iter().enumerate() {
            let u = VertexId::new(source);
            for edge in edges {
                let mirrored = self
                    .out_edges(edge.target)
                    .iter()
                    .any(|back| back.target == u && back.weight == edge.weight);
                if !mirrored {
                    return true;
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use crate::{EdgeMode, GraphBuilder};

    use rstest::rstest;

    fn directed() -> GraphBuilder {
        GraphBuilder::new().with_mode(EdgeMode::Directed)
    }

    #[test]
    fn registry_assigns_handles_in_first_seen_order() {
        let mut builder = directed();
        builder.add_edge("B", "C", 1);
        builder.add_edge("A", "B", 3);
        let graph = builder.build();
        assert_eq!(graph.vertex_names(), ["B", "C", "A"]);
        assert_eq!(graph.resolve("B").map(|id| id.index()), Some(0));
        assert_eq!(graph.resolve("A").map(|id| id.index()), Some(2));
    }

    #[test]
    fn contains_distinguishes_unknown_from_isolated() {
        let mut builder = directed();
        builder.add_edge("A", "B", 1);
        let graph = builder.build();
        assert!(graph.contains("B"));
        assert!(!graph.contains("Z"));
        assert!(graph.neighbors("B").is_empty());
        assert!(graph.neighbors("Z").is_empty());
    }

    #[test]
    fn require_reports_unknown_vertices() {
        let mut builder = directed();
        builder.add_edge("A", "B", 1);
        let graph = builder.build();
        assert!(graph.require("A").is_ok());
        let err = graph.require("Z").expect_err("Z is unregistered");
        assert_eq!(err.code().as_str(), "WAYFIND_UNKNOWN_VERTEX");
    }

    #[test]
    fn neighbors_collapses_parallel_edges() {
        let mut builder = directed();
        builder.add_edge("A", "B", 3);
        builder.add_edge("A", "C", 2);
        builder.add_edge("A", "B", 7);
        let graph = builder.build();
        assert_eq!(graph.neighbors("A"), ["B", "C"]);
    }

    #[test]
    fn highest_degree_returns_every_tied_vertex() {
        let mut builder = directed();
        builder.add_edge("A", "B", 1);
        builder.add_edge("A", "C", 1);
        builder.add_edge("A", "D", 1);
        builder.add_edge("B", "A", 1);
        builder.add_edge("B", "C", 1);
        builder.add_edge("B", "D", 1);
        builder.add_edge("C", "D", 1);
        let graph = builder.build();
        assert_eq!(graph.highest_degree(), ["A", "B"]);
    }

    #[test]
    fn highest_degree_of_empty_graph_is_empty() {
        let graph = GraphBuilder::new().build();
        assert!(graph.highest_degree().is_empty());
    }

    #[rstest]
    #[case("A", "B", true)]
    #[case("B", "A", false)]
    #[case("A", "Z", false)]
    #[case("Z", "A", false)]
    fn adjacency_checks_one_direction_only(
        #[case] from: &str,
        #[case] to: &str,
        #[case] expected: bool,
    ) {
        let mut builder = directed();
        builder.add_edge("A", "B", 3);
        let graph = builder.build();
        assert_eq!(graph.are_adjacent(from, to), expected);
    }

    #[test]
    fn undirected_build_infers_undirected() {
        let mut builder = GraphBuilder::new().with_mode(EdgeMode::Undirected);
        builder.add_edge("A", "B", 5);
        let graph = builder.build();
        assert!(graph.are_adjacent("A", "B"));
        assert!(graph.are_adjacent("B", "A"));
        assert!(!graph.infer_directed());
        assert_eq!(graph.mode(), EdgeMode::Undirected);
    }

    #[test]
    fn directed_build_with_missing_mirror_infers_directed() {
        let mut builder = directed();
        builder.add_edge("A", "B", 3);
        builder.add_edge("B", "C", 1);
        let graph = builder.build();
        assert!(graph.infer_directed());
    }

    #[test]
    fn symmetric_directed_build_infers_undirected() {
        // The inference trusts the stored edges, not the construction flag.
        let mut builder = directed();
        builder.add_edge("A", "B", 3);
        builder.add_edge("B", "A", 3);
        let graph = builder.build();
        assert_eq!(graph.mode(), EdgeMode::Directed);
        assert!(!graph.infer_directed());
    }

    #[test]
    fn asymmetric_mirror_weights_infer_directed() {
        let mut builder = directed();
        builder.add_edge("A", "B", 3);
        builder.add_edge("B", "A", 4);
        let graph = builder.build();
        assert!(graph.infer_directed());
    }

    #[test]
    fn edge_count_includes_mirrored_halves() {
        let mut builder = GraphBuilder::new().with_mode(EdgeMode::Undirected);
        builder.add_edge("A", "B", 5);
        let graph = builder.build();
        assert_eq!(graph.edge_count(), 2);
    }
}
