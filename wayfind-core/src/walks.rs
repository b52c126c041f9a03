//! Backtracking queries: depth-first paths, simple-path enumeration,
//! weighted minimum cost, and cycle detection.
//!
//! These all walk the graph recursively with a mark/unmark discipline:
//! a vertex is marked while it sits on the in-progress path and unmarked on
//! backtrack, so sibling branches sharing descendants are still explored.
//! Enumeration is exponential in the worst case; the only mitigation is
//! input-size discipline, not cancellation.

use tracing::instrument;

use crate::{
    graph::{Graph, VertexId},
    path::RoutePath,
};

impl Graph {
    /// Finds one path from `from` to `to` by depth-first exploration.
    ///
    /// Commits to the first unvisited neighbour in edge insertion order and
    /// backtracks when a branch dead-ends; the first complete path to the
    /// goal is returned. `None` when either name is unregistered or no path
    /// exists.
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
    /// // Depth-first commits to the A -> B branch before trying A -> C.
    /// let path = graph.dfs_path("A", "C").expect("A reaches C");
    /// assert_eq!(path.to_string(), "A -3-> B -1-> C");
    /// ```
    #[instrument(name = "graph.dfs_path", level = "debug", skip(self))]
    #[must_use]
    pub fn dfs_path(&self, from: &str, to: &str) -> Option<RoutePath> {
        let (start, goal) = (self.resolve(from)?, self.resolve(to)?);
        let mut visited = vec![false; self.vertex_count()];
        let mut trail = vec![start];
        self.dfs_visit(start, goal, &mut visited, &mut trail)
            .then(|| self.render_walk(&trail))
    }

    fn dfs_visit(
        &self,
        current: VertexId,
        goal: VertexId,
        visited: &mut [bool],
        trail: &mut Vec<VertexId>,
    ) -> bool {
        if current == goal {
            return true;
        }
        visited[current.index()] = true;
        for edge in self.out_edges(current) {
            if !visited[edge.target.index()] {
                trail.push(edge.target);
                if self.dfs_visit(edge.target, goal, visited, trail) {
                    return true;
                }
                trail.pop();
            }
        }
        false
    }

    /// Counts every simple path (no repeated vertex) from `from` to `to`.
    ///
    /// Exhaustive backtracking enumeration with a per-call accumulator; no
    /// memoisation is applied because simple-path counts do not decompose
    /// over subpaths. Exponential in the worst case. `0` when either name
    /// is unregistered; `count_simple_paths(a, a)` is `1` (the empty path).
    ///
    /// # Examples
    /// ```
    /// use wayfind_core::{EdgeMode, GraphBuilder};
    ///
    /// let mut builder = GraphBuilder::new().with_mode(EdgeMode::Directed);
    /// builder.add_edge("A", "B", 1);
    /// builder.add_edge("B", "C", 1);
    /// builder.add_edge("A", "C", 1);
    /// let graph = builder.build();
    /// assert_eq!(graph.count_simple_paths("A", "C"), 2);
    /// ```
    #[instrument(name = "graph.count_simple_paths", level = "debug", skip(self))]
    #[must_use]
    pub fn count_simple_paths(&self, from: &str, to: &str) -> u64 {
        let (Some(start), Some(goal)) = (self.resolve(from), self.resolve(to)) else {
            return 0;
        };
        let mut visited = vec![false; self.vertex_count()];
        self.count_visit(start, goal, &mut visited)
    }

    fn count_visit(&self, current: VertexId, goal: VertexId, visited: &mut [bool]) -> u64 {
        if current == goal {
            return 1;
        }
        visited[current.index()] = true;
        let mut count = 0;
        for edge in self.out_edges(current) {
            if !visited[edge.target.index()] {
                count += self.count_visit(edge.target, goal, visited);
            }
        }
        visited[current.index()] = false;
        count
    }

    /// Minimum sum of edge weights over all simple paths from `from` to
    /// `to`.
    ///
    /// This is the explicitly weighted operation; the hop-count notion of
    /// shortness lives in [`Self::shortest_hops`] and the two are never
    /// conflated. Computed by exhaustive backtracking, so it tolerates
    /// negative weights but is exponential in the worst case. `None` when
    /// either name is unregistered or no path exists; `Some(0)` when
    /// `from == to`.
    #[instrument(name = "graph.min_path_cost", level = "debug", skip(self))]
    #[must_use]
    pub fn min_path_cost(&self, from: &str, to: &str) -> Option<i64> {
        let (start, goal) = (self.resolve(from)?, self.resolve(to)?);
        let mut visited = vec![false; self.vertex_count()];
        let mut best = None;
        self.cost_visit(start, goal, 0, &mut visited, &mut best);
        best
    }

    fn cost_visit(
        &self,
        current: VertexId,
        goal: VertexId,
        cost_so_far: i64,
        visited: &mut [bool],
        best: &mut Option<i64>,
    ) {
        if current == goal {
            *best = Some(match *best {
                Some(cost) => cost.min(cost_so_far),
                None => cost_so_far,
            });
            return;
        }
        visited[current.index()] = true;
        for edge in self.out_edges(current) {
            if !visited[edge.target.index()] {
                self.cost_visit(edge.target, goal, cost_so_far + edge.weight, visited, best);
            }
        }
        visited[current.index()] = false;
    }

    /// Returns whether a cycle of at least one edge starts and ends at
    /// `vertex` without revisiting any other vertex.
    ///
    /// Any out-edge leading back to the origin closes a cycle, including a
    /// self-loop. Vertices are unmarked on backtrack, so a cycle is still
    /// found after a fruitless branch has explored shared descendants.
    /// `false` when `vertex` is unregistered.
    ///
    /// # Examples
    /// ```
    /// use wayfind_core::{EdgeMode, GraphBuilder};
    ///
    /// let mut builder = GraphBuilder::new().with_mode(EdgeMode::Directed);
    /// builder.add_edge("A", "B", 1);
    /// builder.add_edge("B", "C", 1);
    /// builder.add_edge("C", "A", 1);
    /// let graph = builder.build();
    /// assert!(graph.has_cycle_through("A"));
    /// assert!(graph.has_cycle_through("B"));
    /// ```
    #[must_use]
    pub fn has_cycle_through(&self, vertex: &str) -> bool {
        let Some(start) = self.resolve(vertex) else {
            return false;
        };
        let mut visited = vec![false; self.vertex_count()];
        self.cycle_visit(start, start, &mut visited)
    }

    fn cycle_visit(&self, current: VertexId, origin: VertexId, visited: &mut [bool]) -> bool {
        visited[current.index()] = true;
        for edge in self.out_edges(current) {
            if edge.target == origin {
                return true;
            }
            if !visited[edge.target.index()] && self.cycle_visit(edge.target, origin, visited) {
                return true;
            }
        }
        visited[current.index()] = false;
        false
    }
}

#[cfg(test)]
mod tests {
    use crate::{EdgeMode, Graph, GraphBuilder};

    use rstest::rstest;

    fn directed(edges: &[(&str, &str, i64)]) -> Graph {
        let mut builder = GraphBuilder::new().with_mode(EdgeMode::Directed);
        for &(from, to, weight) in edges {
            builder.add_edge(from, to, weight);
        }
        builder.build()
    }

    #[test]
    fn dfs_path_commits_to_first_branch_and_backtracks() {
        // A's first branch (B) dead-ends; DFS must back out and take C.
        let graph = directed(&[("A", "B", 3), ("A", "C", 2), ("C", "D", 1)]);
        let path = graph.dfs_path("A", "D").expect("A reaches D");
        assert_eq!(path.to_string(), "A -2-> C -1-> D");
    }

    #[test]
    fn dfs_path_reports_missing_routes_as_none() {
        let graph = directed(&[("A", "B", 3)]);
        assert!(graph.dfs_path("B", "A").is_none());
        assert!(graph.dfs_path("A", "Z").is_none());
        let trivial = graph.dfs_path("B", "B").expect("trivial path");
        assert_eq!(trivial.to_string(), "B");
    }

    #[rstest]
    #[case::chain(&[("A", "B", 1), ("B", "C", 1)], "A", "C", 1)]
    #[case::chain_plus_shortcut(&[("A", "B", 1), ("B", "C", 1), ("A", "C", 1)], "A", "C", 2)]
    #[case::diamond(&[("A", "B", 1), ("A", "C", 1), ("B", "D", 1), ("C", "D", 1)], "A", "D", 2)]
    #[case::self_target(&[("A", "B", 1)], "A", "A", 1)]
    #[case::unknown(&[("A", "B", 1)], "A", "Z", 0)]
    #[case::unreachable(&[("A", "B", 1), ("C", "D", 1)], "A", "D", 0)]
    fn count_simple_paths_enumerates_distinct_routes(
        #[case] edges: &[(&str, &str, i64)],
        #[case] from: &str,
        #[case] to: &str,
        #[case] expected: u64,
    ) {
        assert_eq!(directed(edges).count_simple_paths(from, to), expected);
    }

    #[test]
    fn count_respects_reachability_lower_bound() {
        let graph = directed(&[("A", "B", 1), ("B", "C", 1)]);
        assert!(graph.count_simple_paths("A", "C") >= 1);
        assert_eq!(graph.count_simple_paths("C", "A"), 0);
        assert!(!graph.has_path("C", "A"));
    }

    #[test]
    fn min_path_cost_picks_the_cheaper_longer_route() {
        let graph = directed(&[("A", "B", 3), ("A", "C", 2), ("B", "C", 1)]);
        // Hop count prefers the direct edge; weight prefers neither here
        // (direct A -> C already costs 2 < 3 + 1).
        assert_eq!(graph.min_path_cost("A", "C"), Some(2));
        let graph = directed(&[("A", "B", 1), ("B", "C", 1), ("A", "C", 1000)]);
        assert_eq!(graph.min_path_cost("A", "C"), Some(2));
        assert_eq!(graph.shortest_hops("A", "C"), Some(1));
    }

    #[test]
    fn min_path_cost_handles_negative_weights() {
        let graph = directed(&[("A", "B", 5), ("A", "C", -2), ("C", "B", -1)]);
        assert_eq!(graph.min_path_cost("A", "B"), Some(-3));
    }

    #[test]
    fn min_path_cost_edge_cases() {
        let graph = directed(&[("A", "B", 5)]);
        assert_eq!(graph.min_path_cost("A", "A"), Some(0));
        assert_eq!(graph.min_path_cost("B", "A"), None);
        assert_eq!(graph.min_path_cost("A", "Z"), None);
    }

    #[test]
    fn cycle_found_in_triangle_from_any_member() {
        let graph = directed(&[("A", "B", 1), ("B", "C", 1), ("C", "A", 1)]);
        assert!(graph.has_cycle_through("A"));
        assert!(graph.has_cycle_through("B"));
        assert!(graph.has_cycle_through("C"));
    }

    #[test]
    fn diamond_cycle_survives_a_fruitless_first_branch() {
        // The B branch marks D first; the cycle closing through D must
        // still be found.
        let graph = directed(&[
            ("A", "B", 1),
            ("A", "C", 1),
            ("B", "D", 1),
            ("C", "D", 1),
            ("D", "A", 1),
        ]);
        assert!(graph.has_cycle_through("A"));
    }

    #[test]
    fn no_cycle_in_a_dag() {
        let graph = directed(&[("A", "B", 1), ("A", "C", 1), ("B", "D", 1), ("C", "D", 1)]);
        assert!(!graph.has_cycle_through("A"));
        assert!(!graph.has_cycle_through("D"));
        assert!(!graph.has_cycle_through("Z"));
    }

    #[test]
    fn self_loop_counts_as_a_cycle() {
        let graph = directed(&[("A", "A", 1)]);
        assert!(graph.has_cycle_through("A"));
    }

    #[test]
    fn undirected_edge_closes_a_two_leg_cycle() {
        let mut builder = GraphBuilder::new().with_mode(EdgeMode::Undirected);
        builder.add_edge("A", "B", 5);
        let graph = builder.build();
        assert!(graph.has_cycle_through("A"));
    }
}
