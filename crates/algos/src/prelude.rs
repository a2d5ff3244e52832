pub use connected_graph_builder::prelude::*;

pub use crate::bfs::*;
pub use crate::connectivity::*;
pub use crate::dss::*;
pub use crate::generate::*;

pub use crate::Error;
pub use crate::InvalidArgument;
