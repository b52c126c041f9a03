//! Command-line interface for querying wayfind route graphs.
//!
//! Offers two entry points over the same engine: `query` runs a single
//! structural query against a route file and exits, while `menu` starts the
//! interactive numbered menu familiar from classroom graph tools. Both load
//! the graph once up front; every subsequent operation is read-only.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use wayfind_core::{EdgeMode, Graph, GraphBuilder, GraphError, RoutePath};
use wayfind_routes::{RouteFile, RouteFileError};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "wayfind",
    about = "Query a weighted route graph loaded from a text description."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run a single query against a route file.
    Query(QueryCommand),
    /// Start the interactive graph operations menu.
    Menu(MenuCommand),
}

/// Options shared by every command that loads a graph.
#[derive(Debug, Args, Clone)]
pub struct GraphArgs {
    /// Path to the route description file.
    #[arg(long)]
    pub routes: PathBuf,

    /// Treat each directive as a one-way edge instead of mirroring it.
    #[arg(long)]
    pub directed: bool,
}

/// Options accepted by the `query` command.
#[derive(Debug, Args, Clone)]
pub struct QueryCommand {
    /// Graph to load before running the query.
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Query to execute.
    #[command(subcommand)]
    pub op: QueryOp,
}

/// Options accepted by the `menu` command.
#[derive(Debug, Args, Clone)]
pub struct MenuCommand {
    /// Graph to load before starting the menu.
    #[command(flatten)]
    pub graph: GraphArgs,
}

/// One-shot queries exposed by the `query` command.
#[derive(Debug, Subcommand, Clone)]
pub enum QueryOp {
    /// Report whether the stored edge set is directed.
    Directed,
    /// Check whether any route leads from one vertex to another.
    HasPath {
        /// Start vertex name.
        from: String,
        /// Goal vertex name.
        to: String,
    },
    /// Show one breadth-first route between two vertices.
    BfsPath {
        /// Start vertex name.
        from: String,
        /// Goal vertex name.
        to: String,
    },
    /// Show one depth-first route between two vertices.
    DfsPath {
        /// Start vertex name.
        from: String,
        /// Goal vertex name.
        to: String,
    },
    /// Minimum number of edge hops between two vertices.
    ShortestHops {
        /// Start vertex name.
        from: String,
        /// Goal vertex name.
        to: String,
    },
    /// Minimum sum of edge weights over all simple routes.
    MinCost {
        /// Start vertex name.
        from: String,
        /// Goal vertex name.
        to: String,
    },
    /// Count the distinct simple routes between two vertices.
    CountPaths {
        /// Start vertex name.
        from: String,
        /// Goal vertex name.
        to: String,
    },
    /// List the distinct neighbors of a vertex.
    Neighbors {
        /// Vertex name.
        vertex: String,
    },
    /// Show every vertex attaining the maximum out-degree.
    HighestDegree,
    /// Check whether an edge runs directly from one vertex to another.
    Adjacent {
        /// Source vertex name.
        from: String,
        /// Target vertex name.
        to: String,
    },
    /// Check for a cycle through a vertex.
    Cycle {
        /// Vertex name.
        vertex: String,
    },
    /// Number of vertices in the component reachable from a vertex.
    Component {
        /// Vertex name.
        vertex: String,
    },
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Route file loading failed.
    #[error(transparent)]
    Routes(#[from] RouteFileError),
    /// Graph construction failed.
    #[error(transparent)]
    Core(#[from] GraphError),
    /// Writing query output failed.
    #[error("failed to write output: {source}")]
    Output {
        /// Underlying write error.
        #[source]
        source: io::Error,
    },
    /// Reading interactive input failed.
    #[error("failed to read menu input: {source}")]
    Input {
        /// Underlying read error.
        #[source]
        source: io::Error,
    },
}

/// Which traversal produced a rendered path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// Level-order traversal.
    Bfs,
    /// Depth-first traversal.
    Dfs,
}

impl PathKind {
    const fn label(self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
        }
    }
}

/// Outcome of a path-producing traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathOutcome {
    /// A route was found.
    Found(RoutePath),
    /// Both endpoints exist but no route connects them.
    NoRoute,
    /// At least one endpoint was never registered.
    UnknownVertex,
}

/// Result of executing one query, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// Structural directedness inference.
    Directed {
        /// Whether any edge lacks its weight-matched mirror.
        directed: bool,
    },
    /// Reachability check.
    HasPath {
        /// Start vertex name.
        from: String,
        /// Goal vertex name.
        to: String,
        /// Whether any route exists.
        found: bool,
    },
    /// Traversal path result.
    Path {
        /// Which traversal ran.
        kind: PathKind,
        /// Start vertex name.
        from: String,
        /// Goal vertex name.
        to: String,
        /// What the traversal produced.
        outcome: PathOutcome,
    },
    /// Hop-count shortest path.
    Hops {
        /// Start vertex name.
        from: String,
        /// Goal vertex name.
        to: String,
        /// Minimum hop count, when a route exists.
        hops: Option<usize>,
    },
    /// Weighted minimum route cost.
    Cost {
        /// Start vertex name.
        from: String,
        /// Goal vertex name.
        to: String,
        /// Minimum weight sum, when a route exists.
        cost: Option<i64>,
    },
    /// Simple-path count.
    PathCount {
        /// Start vertex name.
        from: String,
        /// Goal vertex name.
        to: String,
        /// Number of distinct simple routes.
        count: u64,
    },
    /// Distinct out-neighbours of a vertex.
    Neighbors {
        /// Queried vertex name.
        vertex: String,
        /// Neighbour names in first-occurrence order.
        names: Vec<String>,
    },
    /// Vertices tied at the maximum out-degree.
    HighestDegree {
        /// Winning vertex names in handle order.
        names: Vec<String>,
    },
    /// Direct adjacency check.
    Adjacent {
        /// Source vertex name.
        from: String,
        /// Target vertex name.
        to: String,
        /// Whether an edge `from -> to` is stored.
        adjacent: bool,
    },
    /// Cycle check.
    Cycle {
        /// Queried vertex name.
        vertex: String,
        /// Whether a cycle through the vertex exists.
        found: bool,
    },
    /// Component size.
    Component {
        /// Queried vertex name.
        vertex: String,
        /// Number of reachable vertices, the vertex included.
        size: usize,
    },
}

/// Executes the CLI command represented by `cli`.
///
/// `input` feeds the interactive menu; `query` commands ignore it.
///
/// # Errors
/// Returns [`CliError`] when loading the graph or driving I/O fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use wayfind_cli::cli::{Cli, Command, GraphArgs, QueryCommand, QueryOp, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "A -> B:3, C:2\nB -> C:1\n")?;
/// let cli = Cli {
///     command: Command::Query(QueryCommand {
///         graph: GraphArgs {
///             routes: file.path().to_path_buf(),
///             directed: true,
///         },
///         op: QueryOp::ShortestHops {
///             from: "A".into(),
///             to: "C".into(),
///         },
///     }),
/// };
/// let mut out = Vec::new();
/// run_cli(cli, std::io::empty(), &mut out)?;
/// assert_eq!(
///     String::from_utf8(out)?,
///     "Shortest path length from A to C is: 1\n"
/// );
/// # Ok(())
/// # }
/// ```
pub fn run_cli(
    cli: Cli,
    mut input: impl BufRead,
    mut output: impl Write,
) -> Result<(), CliError> {
    match cli.command {
        Command::Query(command) => {
            let graph = load_graph(&command.graph)?;
            let outcome = execute(&graph, &command.op);
            render_outcome(&outcome, &mut output).map_err(|source| CliError::Output { source })
        }
        Command::Menu(command) => {
            let graph = load_graph(&command.graph)?;
            run_menu(&graph, &mut input, &mut output)
        }
    }
}

fn load_graph(args: &GraphArgs) -> Result<Graph, CliError> {
    let routes = RouteFile::try_from_path(&args.routes)?;
    let mode = if args.directed {
        EdgeMode::Directed
    } else {
        EdgeMode::Undirected
    };
    let graph = GraphBuilder::new().with_mode(mode).ingest(&routes)?.build();
    Ok(graph)
}

/// Runs one query against a loaded graph.
#[must_use]
pub fn execute(graph: &Graph, op: &QueryOp) -> QueryOutcome {
    match op {
        QueryOp::Directed => QueryOutcome::Directed {
            directed: graph.infer_directed(),
        },
        QueryOp::HasPath { from, to } => QueryOutcome::HasPath {
            from: from.clone(),
            to: to.clone(),
            found: graph.has_path(from, to),
        },
        QueryOp::BfsPath { from, to } => QueryOutcome::Path {
            kind: PathKind::Bfs,
            from: from.clone(),
            to: to.clone(),
            outcome: path_outcome(graph, from, to, Graph::bfs_path),
        },
        QueryOp::DfsPath { from, to } => QueryOutcome::Path {
            kind: PathKind::Dfs,
            from: from.clone(),
            to: to.clone(),
            outcome: path_outcome(graph, from, to, Graph::dfs_path),
        },
        QueryOp::ShortestHops { from, to } => QueryOutcome::Hops {
            from: from.clone(),
            to: to.clone(),
            hops: graph.shortest_hops(from, to),
        },
        QueryOp::MinCost { from, to } => QueryOutcome::Cost {
            from: from.clone(),
            to: to.clone(),
            cost: graph.min_path_cost(from, to),
        },
        QueryOp::CountPaths { from, to } => QueryOutcome::PathCount {
            from: from.clone(),
            to: to.clone(),
            count: graph.count_simple_paths(from, to),
        },
        QueryOp::Neighbors { vertex } => QueryOutcome::Neighbors {
            vertex: vertex.clone(),
            names: graph.neighbors(vertex).iter().map(|&n| n.to_owned()).collect(),
        },
        QueryOp::HighestDegree => QueryOutcome::HighestDegree {
            names: graph
                .highest_degree()
                .iter()
                .map(|&n| n.to_owned())
                .collect(),
        },
        QueryOp::Adjacent { from, to } => QueryOutcome::Adjacent {
            from: from.clone(),
            to: to.clone(),
            adjacent: graph.are_adjacent(from, to),
        },
        QueryOp::Cycle { vertex } => QueryOutcome::Cycle {
            vertex: vertex.clone(),
            found: graph.has_cycle_through(vertex),
        },
        QueryOp::Component { vertex } => QueryOutcome::Component {
            vertex: vertex.clone(),
            size: graph.component_size(vertex),
        },
    }
}

fn path_outcome(
    graph: &Graph,
    from: &str,
    to: &str,
    traverse: fn(&Graph, &str, &str) -> Option<RoutePath>,
) -> PathOutcome {
    if !graph.contains(from) || !graph.contains(to) {
        return PathOutcome::UnknownVertex;
    }
    match traverse(graph, from, to) {
        Some(path) => PathOutcome::Found(path),
        None => PathOutcome::NoRoute,
    }
}

/// Renders `outcome` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_outcome(outcome: &QueryOutcome, mut writer: impl Write) -> io::Result<()> {
    match outcome {
        QueryOutcome::Directed { directed } => {
            let not = if *directed { "" } else { "not " };
            writeln!(writer, "The graph is {not}directed.")
        }
        QueryOutcome::HasPath { from, to, found } => {
            let no = if *found { "a" } else { "no" };
            writeln!(writer, "There is {no} path from {from} to {to}.")
        }
        QueryOutcome::Path {
            kind,
            from,
            to,
            outcome,
        } => match outcome {
            PathOutcome::Found(path) => writeln!(writer, "{} path: {path}", kind.label()),
            PathOutcome::NoRoute => writeln!(
                writer,
                "{from} --x-- {to} (no {} path found)",
                kind.label()
            ),
            PathOutcome::UnknownVertex => writeln!(writer, "No such vertices."),
        },
        QueryOutcome::Hops { from, to, hops } => match hops {
            Some(hops) => writeln!(
                writer,
                "Shortest path length from {from} to {to} is: {hops}"
            ),
            None => writeln!(writer, "No path found from {from} to {to}."),
        },
        QueryOutcome::Cost { from, to, cost } => match cost {
            Some(cost) => writeln!(
                writer,
                "Minimum route cost from {from} to {to} is: {cost}"
            ),
            None => writeln!(writer, "No path found from {from} to {to}."),
        },
        QueryOutcome::PathCount { from, to, count } => writeln!(
            writer,
            "Number of simple paths from {from} to {to} is: {count}"
        ),
        QueryOutcome::Neighbors { vertex, names } => {
            writeln!(writer, "Neighbors of {vertex}: {}", join_or_none(names))
        }
        QueryOutcome::HighestDegree { names } => {
            writeln!(writer, "Highest out-degree: {}", join_or_none(names))
        }
        QueryOutcome::Adjacent { from, to, adjacent } => {
            let not = if *adjacent { "" } else { "not " };
            writeln!(writer, "{from} and {to} are {not}adjacent.")
        }
        QueryOutcome::Cycle { vertex, found } => {
            let no = if *found { "a" } else { "no" };
            writeln!(writer, "There is {no} cycle involving vertex {vertex}.")
        }
        QueryOutcome::Component { vertex, size } => writeln!(
            writer,
            "Vertices in the component containing {vertex}: {size}"
        ),
    }
}

fn join_or_none(names: &[String]) -> String {
    if names.is_empty() {
        "(none)".to_owned()
    } else {
        names.join(", ")
    }
}

const MENU: &str = "\
Please select an operation:
 1. Check whether the graph is directed
 2. BFS route between two vertices
 3. DFS route between two vertices
 4. Shortest path length (hops) between two vertices
 5. Minimum route cost between two vertices
 6. Count simple paths between two vertices
 7. List the neighbors of a vertex
 8. Vertices with the highest out-degree
 9. Check whether two vertices are adjacent
10. Check for a cycle through a vertex
11. Component size of a vertex
12. Check whether any path exists between two vertices
13. Exit";

const SEPARATOR: &str = "----------------------------------------";

/// Drives the interactive numbered menu until exit or end of input.
///
/// # Errors
/// Returns [`CliError`] when reading a choice or writing a response fails.
pub fn run_menu(
    graph: &Graph,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<(), CliError> {
    writeln_out(output, "Welcome to the graph operations menu!")?;
    writeln_out(output, SEPARATOR)?;

    loop {
        writeln_out(output, MENU)?;
        let Some(choice) = prompt(input, output, "Enter your choice (1-13): ")? else {
            break;
        };

        match choice.as_str() {
            "1" => respond(graph, &QueryOp::Directed, output)?,
            "2" => pair_query(graph, input, output, |from, to| QueryOp::BfsPath { from, to })?,
            "3" => pair_query(graph, input, output, |from, to| QueryOp::DfsPath { from, to })?,
            "4" => pair_query(graph, input, output, |from, to| QueryOp::ShortestHops {
                from,
                to,
            })?,
            "5" => pair_query(graph, input, output, |from, to| QueryOp::MinCost { from, to })?,
            "6" => pair_query(graph, input, output, |from, to| QueryOp::CountPaths {
                from,
                to,
            })?,
            "7" => single_query(graph, input, output, |vertex| QueryOp::Neighbors { vertex })?,
            "8" => respond(graph, &QueryOp::HighestDegree, output)?,
            "9" => pair_query(graph, input, output, |from, to| QueryOp::Adjacent { from, to })?,
            "10" => single_query(graph, input, output, |vertex| QueryOp::Cycle { vertex })?,
            "11" => single_query(graph, input, output, |vertex| QueryOp::Component { vertex })?,
            "12" => pair_query(graph, input, output, |from, to| QueryOp::HasPath { from, to })?,
            "13" => {
                writeln_out(output, "Exiting the graph operations menu. Goodbye!")?;
                break;
            }
            _ => writeln_out(output, "Invalid choice. Please select a valid option (1-13).")?,
        }

        writeln_out(output, SEPARATOR)?;
    }

    Ok(())
}

fn respond(graph: &Graph, op: &QueryOp, output: &mut impl Write) -> Result<(), CliError> {
    let outcome = execute(graph, op);
    render_outcome(&outcome, &mut *output).map_err(|source| CliError::Output { source })
}

fn pair_query(
    graph: &Graph,
    input: &mut impl BufRead,
    output: &mut impl Write,
    build: fn(String, String) -> QueryOp,
) -> Result<(), CliError> {
    let Some(from) = prompt(input, output, "Enter source vertex: ")? else {
        return Ok(());
    };
    let Some(to) = prompt(input, output, "Enter destination vertex: ")? else {
        return Ok(());
    };
    respond(graph, &build(from, to), output)
}

fn single_query(
    graph: &Graph,
    input: &mut impl BufRead,
    output: &mut impl Write,
    build: fn(String) -> QueryOp,
) -> Result<(), CliError> {
    let Some(vertex) = prompt(input, output, "Enter vertex: ")? else {
        return Ok(());
    };
    respond(graph, &build(vertex), output)
}

/// Writes `message`, flushes, and reads one trimmed line.
///
/// Returns `Ok(None)` at end of input.
fn prompt(
    input: &mut impl BufRead,
    output: &mut impl Write,
    message: &str,
) -> Result<Option<String>, CliError> {
    write!(output, "{message}").map_err(|source| CliError::Output { source })?;
    output.flush().map_err(|source| CliError::Output { source })?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|source| CliError::Input { source })?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}

fn writeln_out(output: &mut impl Write, message: &str) -> Result<(), CliError> {
    writeln!(output, "{message}").map_err(|source| CliError::Output { source })
}
