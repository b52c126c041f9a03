//! Edge-tuple source abstractions for graph construction.
//!
//! The core never parses text itself: an external provider turns its input
//! into [`EdgeRecord`] triples and hands them over through the [`EdgeSource`]
//! trait. Malformed input is the provider's problem and never reaches the
//! core.

/// A single weighted edge directive supplied by an [`EdgeSource`].
///
/// # Examples
/// ```
/// use wayfind_core::EdgeRecord;
///
/// let record = EdgeRecord::new("Ankara", "Izmir", 7);
/// assert_eq!(record.from, "Ankara");
/// assert_eq!(record.weight, 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord {
    /// Source vertex name.
    pub from: String,
    /// Target vertex name.
    pub to: String,
    /// Signed edge weight; no sign or range constraint is imposed.
    pub weight: i64,
}

impl EdgeRecord {
    /// Creates a new edge record.
    #[must_use]
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: i64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

/// Abstraction over a finished sequence of parsed edge directives.
///
/// # Examples
/// ```
/// use wayfind_core::{EdgeRecord, EdgeSource};
///
/// struct Fixed(Vec<EdgeRecord>);
///
/// impl EdgeSource for Fixed {
///     fn name(&self) -> &str { "fixed" }
///     fn records(&self) -> &[EdgeRecord] { &self.0 }
/// }
///
/// let src = Fixed(vec![EdgeRecord::new("A", "B", 3)]);
/// assert_eq!(src.name(), "fixed");
/// assert_eq!(src.records().len(), 1);
/// assert!(!src.is_empty());
/// ```
pub trait EdgeSource {
    /// Returns a human-readable name identifying the source.
    fn name(&self) -> &str;

    /// Returns the parsed edge records in input order.
    fn records(&self) -> &[EdgeRecord];

    /// Returns whether the source yielded no records.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.records().is_empty()
    }
}

/// In-memory [`EdgeSource`] backed by a plain vector.
///
/// Useful for tests and for hosts that assemble edges programmatically
/// instead of parsing a route file.
///
/// # Examples
/// ```
/// use wayfind_core::{EdgeList, EdgeSource};
///
/// let mut edges = EdgeList::new("demo");
/// edges.push("A", "B", 3);
/// edges.push("B", "C", 1);
/// assert_eq!(edges.records().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EdgeList {
    name: String,
    records: Vec<EdgeRecord>,
}

impl EdgeList {
    /// Creates an empty edge list with the given source name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: Vec::new(),
        }
    }

    /// Appends a single edge directive.
    pub fn push(&mut self, from: impl Into<String>, to: impl Into<String>, weight: i64) {
        self.records.push(EdgeRecord::new(from, to, weight));
    }
}

impl EdgeSource for EdgeList {
    fn name(&self) -> &str {
        &self.name
    }

    fn records(&self) -> &[EdgeRecord] {
        &self.records
    }
}

impl FromIterator<EdgeRecord> for EdgeList {
    fn from_iter<I: IntoIterator<Item = EdgeRecord>>(iter: I) -> Self {
        Self {
            name: "edges".to_owned(),
            records: iter.into_iter().collect(),
        }
    }
}
