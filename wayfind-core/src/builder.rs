//! Construction surface for [`Graph`] instances.
//!
//! The graph is built exactly once, by ensuring vertices exist and appending
//! edges, then frozen: [`GraphBuilder::build`] hands out an immutable
//! [`Graph`] and no further mutation is possible.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{info, instrument};

use crate::{
    Result,
    error::GraphError,
    graph::{Graph, OutEdge, VertexId},
    source::EdgeSource,
};

/// Controls whether [`GraphBuilder::add_edge`] mirrors each edge.
///
/// This is purely a construction-time policy, read at edge-insertion time.
/// Whether a finished graph *looks* directed is answered independently by
/// [`Graph::infer_directed`], which inspects the stored edges instead of
/// trusting this flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeMode {
    /// Each directive adds a single edge `from -> to`.
    Directed,
    /// Each directive also adds the mirror `to -> from` with the same weight.
    Undirected,
}

/// Configures and assembles [`Graph`] instances.
///
/// # Examples
/// ```
/// use wayfind_core::{EdgeList, EdgeMode, GraphBuilder};
///
/// let mut edges = EdgeList::new("demo");
/// edges.push("A", "B", 3);
/// edges.push("B", "C", 1);
///
/// let graph = GraphBuilder::new()
///     .with_mode(EdgeMode::Directed)
///     .ingest(&edges)?
///     .build();
/// assert_eq!(graph.vertex_count(), 3);
/// assert!(graph.has_path("A", "C"));
/// # Ok::<(), wayfind_core::GraphError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    mode: EdgeMode,
    names: Vec<String>,
    index: HashMap<String, VertexId>,
    adjacency: Vec<Vec<OutEdge>>,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self {
            mode: EdgeMode::Undirected,
            names: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
        }
    }
}

impl GraphBuilder {
    /// Creates a builder with the default [`EdgeMode::Undirected`] policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the edge-insertion mode.
    ///
    /// Must be chosen before edges are added; the mode is read each time
    /// [`Self::add_edge`] runs, so switching mid-build would produce a
    /// half-mirrored graph.
    #[must_use]
    pub fn with_mode(mut self, mode: EdgeMode) -> Self {
        self.mode = mode;
        self
    }

    /// Returns the configured edge-insertion mode.
    #[must_use]
    pub const fn mode(&self) -> EdgeMode {
        self.mode
    }

    /// Ensures `name` is registered, returning its handle.
    ///
    /// Unseen names are assigned the next sequential handle and an empty
    /// out-edge list. Idempotent: repeated calls with the same name return
    /// the same handle without growing the registry.
    ///
    /// # Examples
    /// ```
    /// use wayfind_core::GraphBuilder;
    ///
    /// let mut builder = GraphBuilder::new();
    /// let first = builder.ensure_vertex("Ankara");
    /// let again = builder.ensure_vertex("Ankara");
    /// assert_eq!(first, again);
    /// ```
    pub fn ensure_vertex(&mut self, name: &str) -> VertexId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = VertexId::new(self.names.len());
        self.names.push(name.to_owned());
        self.index.insert(name.to_owned(), id);
        self.adjacency.push(Vec::new());
        id
    }

    /// Appends a weighted edge `from -> to`, creating endpoints as needed.
    ///
    /// In [`EdgeMode::Undirected`] mode the mirror `to -> from` with the
    /// same weight is appended as well. Edges are append-only and parallel
    /// edges are kept; insertion order is part of the query contract.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: i64) {
        let v1 = self.ensure_vertex(from);
        let v2 = self.ensure_vertex(to);
        self.adjacency[v1.index()].push(OutEdge { target: v2, weight });
        if self.mode == EdgeMode::Undirected {
            self.adjacency[v2.index()].push(OutEdge { target: v1, weight });
        }
    }

    /// Appends every record from `source`.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptySource`] when the source holds no records.
    #[instrument(
        name = "builder.ingest",
        err,
        skip(self, source),
        fields(source = %source.name(), records = source.records().len()),
    )]
    pub fn ingest<S: EdgeSource>(mut self, source: &S) -> Result<Self> {
        if source.is_empty() {
            return Err(GraphError::EmptySource {
                edge_source: Arc::from(source.name()),
            });
        }
        for record in source.records() {
            self.add_edge(&record.from, &record.to, record.weight);
        }
        info!(
            vertices = self.names.len(),
            edges = self.adjacency.iter().map(Vec::len).sum::<usize>(),
            "edge source ingested"
        );
        Ok(self)
    }

    /// Finalises the builder into an immutable [`Graph`].
    #[must_use]
    pub fn build(self) -> Graph {
        Graph::from_parts(self.names, self.index, self.adjacency, self.mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::EdgeList;

    #[test]
    fn ensure_vertex_is_idempotent() {
        let mut builder = GraphBuilder::new();
        let a = builder.ensure_vertex("A");
        let b = builder.ensure_vertex("B");
        assert_eq!(builder.ensure_vertex("A"), a);
        assert_eq!(builder.ensure_vertex("B"), b);
        let graph = builder.build();
        assert_eq!(graph.vertex_count(), 2);
    }

    #[test]
    fn default_mode_is_undirected() {
        let builder = GraphBuilder::new();
        assert_eq!(builder.mode(), EdgeMode::Undirected);
        let mut builder = builder;
        builder.add_edge("A", "B", 5);
        let graph = builder.build();
        assert!(graph.are_adjacent("B", "A"));
    }

    #[test]
    fn directed_mode_skips_the_mirror() {
        let mut builder = GraphBuilder::new().with_mode(EdgeMode::Directed);
        builder.add_edge("A", "B", 5);
        let graph = builder.build();
        assert!(graph.are_adjacent("A", "B"));
        assert!(!graph.are_adjacent("B", "A"));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn ingest_rejects_empty_sources() {
        let edges = EdgeList::new("empty");
        let err = GraphBuilder::new()
            .ingest(&edges)
            .expect_err("empty source must be rejected");
        assert!(matches!(err, GraphError::EmptySource { .. }));
        assert_eq!(err.code().as_str(), "WAYFIND_EMPTY_SOURCE");
    }

    #[test]
    fn ingest_applies_records_in_order() {
        let mut edges = EdgeList::new("demo");
        edges.push("A", "B", 3);
        edges.push("A", "C", 2);
        let graph = GraphBuilder::new()
            .with_mode(EdgeMode::Directed)
            .ingest(&edges)
            .expect("source is non-empty")
            .build();
        assert_eq!(graph.neighbors("A"), ["B", "C"]);
    }
}
