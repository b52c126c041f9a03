//! Wayfind core library.
//!
//! Models a weighted graph of named vertices (cities, stations, hosts) built
//! once from an edge-tuple source and then queried read-only: reachability,
//! traversal paths, shortest-path length, simple-path counting, adjacency,
//! degree, cycle detection, and connected-component size.

mod builder;
mod error;
mod graph;
mod path;
mod source;
mod traversal;
mod walks;

#[cfg(test)]
mod property_tests;

pub use crate::{
    builder::{EdgeMode, GraphBuilder},
    error::{GraphError, GraphErrorCode, Result},
    graph::{Graph, VertexId},
    path::{MalformedRoutePath, RoutePath},
    source::{EdgeList, EdgeRecord, EdgeSource},
};
