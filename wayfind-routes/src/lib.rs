//! Route-file provider: parses line-oriented route directives into edge
//! records for the wayfind core.
//!
//! The format is one directive per line:
//!
//! ```text
//! SOURCE -> TARGET1:WEIGHT1, TARGET2:WEIGHT2, ...
//! ```
//!
//! Whitespace around tokens is insignificant. Blank lines and lines without
//! `->` are skipped; a `TARGET:WEIGHT` segment that does not split into
//! exactly two colon-separated tokens, or whose weight is not a signed
//! integer, is skipped without failing the rest of the line. Skips are
//! reported through `tracing` diagnostics rather than errors, so the core
//! only ever sees well-formed triples.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::warn;
use wayfind_core::{EdgeRecord, EdgeSource};

/// Errors surfaced while reading route data.
///
/// Parse problems are not errors (the skip policy handles them); only I/O
/// failures are reported.
#[derive(Debug, Error)]
pub enum RouteFileError {
    /// Opening the route file failed.
    #[error("failed to open `{path}`: {source}")]
    Open {
        /// Path that could not be opened.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Reading a line from the route data failed.
    #[error("failed to read route data from `{name}`: {source}")]
    Read {
        /// Name of the source being read.
        name: String,
        /// Underlying read error.
        #[source]
        source: io::Error,
    },
}

/// Parsed route file implementing [`EdgeSource`].
///
/// # Examples
/// ```
/// use wayfind_core::EdgeSource;
/// use wayfind_routes::RouteFile;
///
/// let data = "A -> B:3, C:2\nB -> C:1\n";
/// let routes = RouteFile::try_from_reader("demo", data.as_bytes())?;
/// assert_eq!(routes.name(), "demo");
/// assert_eq!(routes.records().len(), 3);
/// # Ok::<(), wayfind_routes::RouteFileError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RouteFile {
    name: String,
    records: Vec<EdgeRecord>,
}

impl RouteFile {
    /// Reads and parses route directives from `path`.
    ///
    /// The source name defaults to the file stem.
    ///
    /// # Errors
    /// Returns [`RouteFileError::Open`] when the file cannot be opened and
    /// [`RouteFileError::Read`] when a line cannot be read.
    pub fn try_from_path(path: &Path) -> Result<Self, RouteFileError> {
        let name = path
            .file_stem()
            .and_then(|value| value.to_str())
            .map(ToOwned::to_owned)
            .unwrap_or_else(|| "routes".to_owned());
        let file = File::open(path).map_err(|source| RouteFileError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::try_from_reader(name, BufReader::new(file))
    }

    /// Parses route directives from an in-memory or streaming reader.
    ///
    /// # Errors
    /// Returns [`RouteFileError::Read`] when a line cannot be read.
    pub fn try_from_reader(
        name: impl Into<String>,
        reader: impl BufRead,
    ) -> Result<Self, RouteFileError> {
        let name = name.into();
        let mut records = Vec::new();
        for (line_no, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| RouteFileError::Read {
                name: name.clone(),
                source,
            })?;
            parse_directive(&line, line_no + 1, &mut records);
        }
        Ok(Self { name, records })
    }

    /// Returns the number of parsed edge records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether no directive parsed into a record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl EdgeSource for RouteFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn records(&self) -> &[EdgeRecord] {
        &self.records
    }
}

/// Parses one `SOURCE -> TARGET:WEIGHT, ...` line, appending whatever
/// well-formed segments it contains.
fn parse_directive(line: &str, line_no: usize, records: &mut Vec<EdgeRecord>) {
    let line = line.trim();
    if line.is_empty() {
        return;
    }
    let Some((head, tail)) = line.split_once("->") else {
        warn!(line = line_no, "skipping directive without `->`");
        return;
    };
    let source = head.trim();
    if source.is_empty() {
        warn!(line = line_no, "skipping directive with empty source");
        return;
    }
    for segment in tail.split(',') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        let tokens: Vec<&str> = segment.split(':').collect();
        let [target, weight] = tokens.as_slice() else {
            warn!(line = line_no, segment, "skipping malformed segment");
            continue;
        };
        let target = target.trim();
        let Ok(weight) = weight.trim().parse::<i64>() else {
            warn!(line = line_no, segment, "skipping segment with unparsable weight");
            continue;
        };
        if target.is_empty() {
            warn!(line = line_no, segment, "skipping segment with empty target");
            continue;
        }
        records.push(EdgeRecord::new(source, target, weight));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use rstest::rstest;
    use tempfile::TempDir;
    use wayfind_core::{EdgeMode, GraphBuilder};

    fn parse(data: &str) -> RouteFile {
        RouteFile::try_from_reader("test", data.as_bytes()).expect("in-memory read cannot fail")
    }

    fn triples(routes: &RouteFile) -> Vec<(&str, &str, i64)> {
        routes
            .records()
            .iter()
            .map(|r| (r.from.as_str(), r.to.as_str(), r.weight))
            .collect()
    }

    #[test]
    fn parses_multi_target_directives_in_order() {
        let routes = parse("A -> B:3, C:2, D:1\nB -> C:1\n");
        assert_eq!(
            triples(&routes),
            [("A", "B", 3), ("A", "C", 2), ("A", "D", 1), ("B", "C", 1)]
        );
    }

    #[rstest]
    #[case::spaces_everywhere("  A   ->   B : 3 ,  C:2  ", &[("A", "B", 3), ("A", "C", 2)])]
    #[case::negative_weight("A -> B:-7", &[("A", "B", -7)])]
    #[case::tabs("\tA ->\tB:3", &[("A", "B", 3)])]
    fn tolerates_whitespace_and_signs(
        #[case] data: &str,
        #[case] expected: &[(&str, &str, i64)],
    ) {
        assert_eq!(triples(&parse(data)), expected);
    }

    #[rstest]
    #[case::blank_line("\n\n")]
    #[case::no_arrow("A B:3")]
    #[case::empty_source("-> B:3")]
    fn skips_unusable_lines(#[case] data: &str) {
        assert!(parse(data).is_empty());
    }

    #[rstest]
    #[case::missing_weight("A -> B, C:2", &[("A", "C", 2)])]
    #[case::unparsable_weight("A -> B:x, C:2", &[("A", "C", 2)])]
    #[case::too_many_colons("A -> B:3:4, C:2", &[("A", "C", 2)])]
    #[case::empty_target("A -> :3, C:2", &[("A", "C", 2)])]
    fn a_bad_segment_does_not_fail_the_line(
        #[case] data: &str,
        #[case] expected: &[(&str, &str, i64)],
    ) {
        assert_eq!(triples(&parse(data)), expected);
    }

    #[test]
    fn bad_lines_do_not_fail_the_file() {
        let routes = parse("garbage\nA -> B:3\n\nB -> C:nope\n");
        assert_eq!(triples(&routes), [("A", "B", 3)]);
        assert_eq!(routes.len(), 1);
    }

    #[test]
    fn reads_from_disk_and_names_after_the_stem() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("cities.txt");
        let mut file = File::create(&path)?;
        writeln!(file, "A -> B:3, C:2")?;
        writeln!(file, "B -> C:1")?;

        let routes = RouteFile::try_from_path(&path)?;
        assert_eq!(routes.name(), "cities");
        assert_eq!(routes.len(), 3);
        Ok(())
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = RouteFile::try_from_path(Path::new("/nonexistent/routes.txt"))
            .expect_err("file does not exist");
        assert!(matches!(err, RouteFileError::Open { .. }));
        assert!(err.to_string().contains("/nonexistent/routes.txt"));
    }

    #[test]
    fn feeds_the_core_builder_end_to_end() -> anyhow::Result<()> {
        let routes = parse("A -> B:3, C:2\nB -> C:1\n");
        let graph = GraphBuilder::new()
            .with_mode(EdgeMode::Directed)
            .ingest(&routes)?
            .build();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.shortest_hops("A", "C"), Some(1));
        Ok(())
    }
}
