//! Property suites for the graph engine invariants.
//!
//! Generates small random edge sets (a handful of vertices, bounded edge
//! counts, signed weights) and checks the invariants that must hold for
//! every graph rather than for hand-picked fixtures.

use proptest::prelude::*;

use crate::{EdgeMode, Graph, GraphBuilder};

const NAMES: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

prop_compose! {
    fn edge_set()(
        edges in prop::collection::vec((0..NAMES.len(), 0..NAMES.len(), -9_i64..10), 1..16)
    ) -> Vec<(&'static str, &'static str, i64)> {
        edges
            .into_iter()
            .map(|(from, to, weight)| (NAMES[from], NAMES[to], weight))
            .collect()
    }
}

fn build(mode: EdgeMode, edges: &[(&str, &str, i64)]) -> Graph {
    let mut builder = GraphBuilder::new().with_mode(mode);
    for &(from, to, weight) in edges {
        builder.add_edge(from, to, weight);
    }
    builder.build()
}

proptest! {
    #[test]
    fn registry_stays_a_bijection(edges in edge_set()) {
        let mut builder = GraphBuilder::new().with_mode(EdgeMode::Directed);
        for &(from, to, weight) in &edges {
            builder.add_edge(from, to, weight);
        }
        let before = builder.clone().build().vertex_count();
        for &(from, _, _) in &edges {
            builder.ensure_vertex(from);
        }
        let graph = builder.build();
        prop_assert_eq!(graph.vertex_count(), before);
        for (index, name) in graph.vertex_names().iter().enumerate() {
            prop_assert_eq!(graph.resolve(name).map(crate::VertexId::index), Some(index));
        }
    }

    #[test]
    fn undirected_builds_infer_undirected(edges in edge_set()) {
        let graph = build(EdgeMode::Undirected, &edges);
        prop_assert!(!graph.infer_directed());
    }

    #[test]
    fn undirected_reachability_is_symmetric(edges in edge_set()) {
        let graph = build(EdgeMode::Undirected, &edges);
        for a in graph.vertex_names() {
            for b in graph.vertex_names() {
                prop_assert_eq!(graph.has_path(a, b), graph.has_path(b, a));
            }
        }
    }

    #[test]
    fn hop_count_agrees_with_reachability(edges in edge_set()) {
        let graph = build(EdgeMode::Directed, &edges);
        for a in graph.vertex_names() {
            prop_assert_eq!(graph.shortest_hops(a, a), Some(0));
            for b in graph.vertex_names() {
                let reachable = graph.has_path(a, b);
                prop_assert_eq!(graph.shortest_hops(a, b).is_some(), reachable);
                prop_assert_eq!(graph.bfs_path(a, b).is_some(), reachable);
                prop_assert_eq!(graph.dfs_path(a, b).is_some(), reachable);
            }
        }
    }

    #[test]
    fn simple_path_count_bounds_reachability(edges in edge_set()) {
        let graph = build(EdgeMode::Directed, &edges);
        for a in graph.vertex_names() {
            for b in graph.vertex_names() {
                let count = graph.count_simple_paths(a, b);
                if graph.has_path(a, b) {
                    prop_assert!(count >= 1);
                } else {
                    prop_assert_eq!(count, 0);
                }
            }
        }
    }

    #[test]
    fn every_registered_vertex_is_in_its_own_component(edges in edge_set()) {
        let graph = build(EdgeMode::Directed, &edges);
        for name in graph.vertex_names() {
            prop_assert!(graph.component_size(name) >= 1);
        }
    }

    #[test]
    fn bfs_path_has_minimal_hops(edges in edge_set()) {
        let graph = build(EdgeMode::Directed, &edges);
        for a in graph.vertex_names() {
            for b in graph.vertex_names() {
                if let Some(path) = graph.bfs_path(a, b) {
                    prop_assert_eq!(Some(path.hops()), graph.shortest_hops(a, b));
                }
            }
        }
    }
}
