//! Renderable traversal paths.
//!
//! A [`RoutePath`] is the ordered list of vertex names a traversal walked,
//! interleaved with the weight of each leg between consecutive stops.

use std::fmt;

use thiserror::Error;

/// Error returned when path parts do not line up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MalformedRoutePath {
    /// A path must contain at least one stop.
    #[error("a route path must contain at least one stop")]
    NoStops,
    /// There must be exactly one leg weight between consecutive stops.
    #[error("expected {expected} leg weights for {stops} stops, got {got}")]
    LegMismatch {
        /// Number of stops supplied.
        stops: usize,
        /// Required number of leg weights.
        expected: usize,
        /// Number of leg weights supplied.
        got: usize,
    },
}

/// One concrete path between two vertices, ready for rendering.
///
/// `Display` renders each leg with its weight, e.g. `A -3-> B -1-> C`; a
/// single-stop path renders just the name.
///
/// # Examples
/// ```
/// use wayfind_core::RoutePath;
///
/// let path = RoutePath::try_new(
///     vec!["A".into(), "B".into(), "C".into()],
///     vec![3, 1],
/// )?;
/// assert_eq!(path.hops(), 2);
/// assert_eq!(path.to_string(), "A -3-> B -1-> C");
/// # Ok::<(), wayfind_core::MalformedRoutePath>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePath {
    stops: Vec<String>,
    legs: Vec<i64>,
}

impl RoutePath {
    /// Builds a path from explicit stops and per-leg weights.
    ///
    /// # Errors
    /// Returns [`MalformedRoutePath::NoStops`] for an empty stop list and
    /// [`MalformedRoutePath::LegMismatch`] when the weight count is not
    /// exactly one less than the stop count.
    pub fn try_new(stops: Vec<String>, legs: Vec<i64>) -> Result<Self, MalformedRoutePath> {
        if stops.is_empty() {
            return Err(MalformedRoutePath::NoStops);
        }
        if legs.len() != stops.len() - 1 {
            return Err(MalformedRoutePath::LegMismatch {
                stops: stops.len(),
                expected: stops.len() - 1,
                got: legs.len(),
            });
        }
        Ok(Self { stops, legs })
    }

    /// Internal constructor for paths the engine has already validated.
    pub(crate) fn from_validated(stops: Vec<String>, legs: Vec<i64>) -> Self {
        debug_assert!(!stops.is_empty());
        debug_assert_eq!(legs.len(), stops.len() - 1);
        Self { stops, legs }
    }

    /// Returns the visited vertex names in traversal order.
    #[must_use]
    pub fn stops(&self) -> &[String] {
        &self.stops
    }

    /// Returns the weight of each leg between consecutive stops.
    #[must_use]
    pub fn legs(&self) -> &[i64] {
        &self.legs
    }

    /// Returns the number of edges traversed.
    ///
    /// A single-stop path (start equals goal) has zero hops.
    #[must_use]
    pub fn hops(&self) -> usize {
        self.legs.len()
    }

    /// Sum of leg weights along this path.
    #[must_use]
    pub fn total_weight(&self) -> i64 {
        self.legs.iter().sum()
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, stop) in self.stops.iter().enumerate() {
            f.write_str(stop)?;
            if let Some(weight) = self.legs.get(position) {
                write!(f, " -{weight}-> ")?;
            }
        }
        Ok(())
    }
}
