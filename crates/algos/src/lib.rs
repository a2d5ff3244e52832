//! Generates random connected, undirected, simple graphs with a positive
//! distance on every edge.
//!
//! The entry point is [`random_connected_graph`]. It takes the number of
//! nodes, the number of edges, the [`Distances`] to put on the edges and a
//! [`GeneratorConfig`] and returns a
//! [`WeightedGraph`](connected_graph_builder::WeightedGraph).
//!
//! ```
//! use connected_graph::prelude::*;
//!
//! let config = GeneratorConfig::default().with_seed(42);
//! let graph: WeightedGraph<u32, u32> =
//!     random_connected_graph(10, 15, Distances::Uniform, config).unwrap();
//!
//! assert_eq!(graph.node_count(), 10);
//! assert_eq!(graph.edge_count(), 15);
//! assert!(is_connected(&graph));
//! assert!(graph.distances().iter().all(|d| (1..=100).contains(d)));
//! ```
//!
//! Requests that cannot be satisfied fail before anything is sampled:
//!
//! ```
//! use connected_graph::prelude::*;
//!
//! // 4 nodes need at least 3 edges to be connected.
//! let res = random_connected_graph::<u32, u32>(4, 2, Distances::Uniform, Default::default());
//!
//! assert!(matches!(
//!     res,
//!     Err(Error::InvalidArgument(InvalidArgument::TooFewEdges { .. }))
//! ));
//! ```

pub mod bfs;
pub mod connectivity;
pub mod dss;
pub mod generate;
pub mod prelude;

pub use crate::generate::gen_and_store;
pub use crate::generate::random_connected_graph;
pub use crate::generate::random_connected_graph_with_rng;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),
    #[error("no connected graph found after {attempts} attempts")]
    AttemptsExhausted { attempts: usize },
    #[error(transparent)]
    Builder(#[from] connected_graph_builder::Error),
}

/// A generator request that can never be satisfied.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    #[error("node_count must be at least 1")]
    NoNodes,
    #[error("{node_count} nodes need at least {minimum} edges to be connected, got {edge_count}")]
    TooFewEdges {
        node_count: usize,
        edge_count: usize,
        minimum: usize,
    },
    #[error("the number of node pairs of {node_count} nodes exceeds the address space")]
    TooManyNodes { node_count: usize },
    #[error("{node_count} nodes allow at most {maximum} edges, got {edge_count}")]
    TooManyEdges {
        node_count: usize,
        edge_count: usize,
        maximum: usize,
    },
    #[error("expected {expected} distances, one per edge, got {actual}")]
    DistanceCountMismatch { expected: usize, actual: usize },
    #[error("distance at position {position} is not positive")]
    NonPositiveDistance { position: usize },
    #[error("max_attempts must be at least 1")]
    ZeroAttempts,
}
