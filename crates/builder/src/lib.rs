//! A library for weighted, undirected, simple graphs that serve as the
//! building block for random connected graph generation.
//!
//! A graph is made of `node_count` nodes, numbered from `0` to
//! `node_count - 1`, and a list of undirected edges. Every edge carries a
//! value, its *distance*. The library stores the edge list in the order it
//! was given, the distances in a parallel list and an adjacency list for
//! neighbor queries.
//!
//! # How to build a graph
//!
//! Graphs are created with the [`GraphBuilder`]. The builder validates that
//! the graph is simple, i.e., no edge connects a node with itself and no two
//! edges connect the same pair of nodes.
//!
//! ```
//! use connected_graph_builder::prelude::*;
//!
//! let graph: WeightedGraph<u32, u32> = GraphBuilder::new()
//!     .edges_with_values(vec![(0, 1, 5), (0, 2, 7), (1, 2, 3), (1, 3, 42)])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(graph.node_count(), 4);
//! assert_eq!(graph.edge_count(), 4);
//! assert_eq!(graph.degree(1), 3);
//!
//! assert_eq!(
//!     graph.neighbors_with_values(1).as_slice(),
//!     &[Target::new(0, 5), Target::new(2, 3), Target::new(3, 42)]
//! );
//! ```
//!
//! The node count can be set explicitly, which is required for a graph
//! without edges:
//!
//! ```
//! use connected_graph_builder::prelude::*;
//!
//! let graph: WeightedGraph<u32, f32> = GraphBuilder::new()
//!     .edges_with_values(Vec::<(u32, u32, f32)>::new())
//!     .node_count(1)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(graph.node_count(), 1);
//! assert_eq!(graph.edge_count(), 0);
//! ```
//!
//! Graphs can also be read from a file in the weighted edge list format, see
//! [`WeightedEdgeListInput`](crate::input::WeightedEdgeListInput).

pub mod builder;
pub mod graph;
pub mod graph_ops;
pub mod index;
pub mod input;
pub mod prelude;

pub use crate::builder::GraphBuilder;
pub use crate::graph::weighted::WeightedGraph;

use crate::graph::Target;
use crate::index::Idx;
use crate::input::ParseValue;
use std::fmt::{Debug, Display};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("error while reading or writing graph")]
    IoError {
        #[from]
        source: std::io::Error,
    },
    #[error("incompatible index type")]
    IdxError {
        #[from]
        source: std::num::TryFromIntError,
    },
    #[error("invalid header in line {line}, expected '<node_count> <edge_count>'")]
    InvalidHeader { line: usize },
    #[error("invalid edge in line {line}, expected '<source> <target> <distance>'")]
    InvalidEdge { line: usize },
    #[error("edge in line {line} has no distance")]
    MissingDistance { line: usize },
    #[error("header announces {expected} edges, found {actual}")]
    EdgeCountMismatch { expected: usize, actual: usize },
    #[error("edge ({source_node}, {target_node}) references a node outside of [0, {node_count})")]
    NodeOutOfRange {
        source_node: usize,
        target_node: usize,
        node_count: usize,
    },
    #[error("edge ({node}, {node}) is a self loop")]
    SelfLoop { node: usize },
    #[error("edge ({source_node}, {target_node}) is a parallel edge")]
    ParallelEdge {
        source_node: usize,
        target_node: usize,
    },
    #[error("distance of edge {edge} must be positive")]
    NonPositiveDistance { edge: usize },
}

/// The value attached to an edge.
///
/// Distances are positive numbers. Integer distances in `[1, 100]` can be
/// created via `From<u8>`, which is what the random generator uses.
pub trait Distance:
    Copy + PartialOrd + From<u8> + Debug + Display + ParseValue + Send + Sync + 'static
{
    /// Returns `true` if the distance is strictly greater than zero.
    ///
    /// `NaN` is not positive.
    fn is_positive(&self) -> bool {
        *self > Self::from(0u8)
    }
}

macro_rules! impl_distance {
    ($($ty:ty),+ $(,)?) => {
        $(impl Distance for $ty {})+
    };
}

impl_distance!(u8, u16, u32, u64, usize, i16, i32, i64, f32, f64);

/// A graph is a tuple `(N, E)`, where `N` is a set of nodes and `E` a set of
/// edges. Each edge connects exactly two nodes.
///
/// `Graph` is parameterized over the node index type `NI` which is used to
/// uniquely identify a node. An edge is a tuple of node identifiers.
pub trait Graph<NI: Idx> {
    /// Returns the number of nodes in the graph.
    fn node_count(&self) -> NI;

    /// Returns the number of edges in the graph.
    fn edge_count(&self) -> NI;
}

pub trait UndirectedDegrees<NI: Idx> {
    /// Returns the number of edges connected to the given node.
    fn degree(&self, node: NI) -> NI;
}

/// Returns the neighbors of a given node.
///
/// The edge `(42, 1337)` is equivalent to the edge `(1337, 42)`.
pub trait UndirectedNeighbors<NI: Idx> {
    type NeighborsIterator<'a>: Iterator<Item = &'a NI>
    where
        Self: 'a;

    /// Returns an iterator of all nodes connected to the given node.
    fn neighbors(&self, node: NI) -> Self::NeighborsIterator<'_>;
}

/// Returns the neighbors of a given node.
///
/// The edge `(42, 1337)` is equivalent to the edge `(1337, 42)`.
pub trait UndirectedNeighborsWithValues<NI: Idx, EV> {
    type NeighborsIterator<'a>: Iterator<Item = &'a Target<NI, EV>>
    where
        Self: 'a,
        EV: 'a;

    /// Returns an iterator of all nodes connected to the given node
    /// including the value of the connecting edge.
    fn neighbors_with_values(&self, node: NI) -> Self::NeighborsIterator<'_>;
}
