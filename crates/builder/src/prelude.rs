pub use crate::builder::GraphBuilder;

pub use crate::graph::weighted::WeightedGraph;
pub use crate::graph::Target;

pub use crate::graph_ops::DeserializeGraphOp;
pub use crate::graph_ops::SerializeGraphOp;

pub use crate::index::Idx;

pub use crate::input::*;

pub use crate::Distance;
pub use crate::Graph;
pub use crate::UndirectedDegrees;
pub use crate::UndirectedNeighbors;
pub use crate::UndirectedNeighborsWithValues;

pub use crate::Error;
