use std::convert::TryFrom;
use std::io::{BufWriter, Read, Write};
use std::time::Instant;

use log::info;

use crate::{index::Idx, input::EdgeList, Distance, Error, Graph, WeightedGraph};

/// Writes a graph in the weighted edge list format.
///
/// The output can be read back with
/// [`WeightedEdgeListInput`](crate::input::WeightedEdgeListInput) or
/// [`DeserializeGraphOp`].
pub trait SerializeGraphOp<W> {
    fn serialize(&self, write: W) -> Result<(), Error>;
}

/// Reads a graph from the weighted edge list format.
pub trait DeserializeGraphOp<R, G> {
    fn deserialize(read: R) -> Result<G, Error>;
}

impl<W, NI, EV> SerializeGraphOp<W> for WeightedGraph<NI, EV>
where
    W: Write,
    NI: Idx,
    EV: Distance,
{
    /// # Example
    ///
    /// ```
    /// use connected_graph_builder::prelude::*;
    ///
    /// let graph: WeightedGraph<u32, u32> = GraphBuilder::new()
    ///     .edges_with_values(vec![(0, 1, 42), (1, 2, 7)])
    ///     .build()
    ///     .unwrap();
    ///
    /// let mut bytes = Vec::new();
    /// graph.serialize(&mut bytes).unwrap();
    ///
    /// assert_eq!(String::from_utf8(bytes).unwrap(), "3 2\n0 1 42\n1 2 7\n");
    /// ```
    fn serialize(&self, output: W) -> Result<(), Error> {
        let start = Instant::now();
        let mut output = BufWriter::new(output);

        writeln!(output, "{} {}", self.node_count(), self.edge_count())?;
        for (s, t, d) in self.edges_with_distances() {
            writeln!(output, "{} {} {}", s, t, d)?;
        }
        output.flush()?;

        info!(
            "Serialized {:?} edges in {:?}",
            self.edge_count(),
            start.elapsed()
        );

        Ok(())
    }
}

impl<R, NI, EV> DeserializeGraphOp<R, Self> for WeightedGraph<NI, EV>
where
    R: Read,
    NI: Idx,
    EV: Distance,
{
    fn deserialize(mut read: R) -> Result<Self, Error> {
        let mut bytes = Vec::new();
        read.read_to_end(&mut bytes)?;

        let edge_list = EdgeList::try_from(bytes.as_slice())?;
        WeightedGraph::try_from(edge_list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn serialize_then_deserialize_float_distances() {
        let graph: WeightedGraph<usize, f32> = GraphBuilder::new()
            .edges_with_values(vec![(2, 0, 0.1), (0, 1, 13.37), (1, 2, 1e-3)])
            .build()
            .unwrap();

        let mut bytes = Vec::new();
        graph.serialize(&mut bytes).unwrap();

        let loaded = WeightedGraph::<usize, f32>::deserialize(bytes.as_slice()).unwrap();

        assert_eq!(loaded.node_count(), 3);
        assert_eq!(loaded.edges(), graph.edges());
        assert_eq!(loaded.distances(), graph.distances());
    }

    #[test]
    fn single_node_survives() {
        let graph: WeightedGraph<u32, u32> = GraphBuilder::new()
            .edges_with_values(Vec::new())
            .node_count(1)
            .build()
            .unwrap();

        let mut bytes = Vec::new();
        graph.serialize(&mut bytes).unwrap();
        assert_eq!(bytes, b"1 0\n");

        let loaded = WeightedGraph::<u32, u32>::deserialize(&bytes[..]).unwrap();
        assert_eq!(loaded.node_count(), 1);
        assert_eq!(loaded.edge_count(), 0);
    }

    #[test]
    fn deserialize_without_distance_fails() {
        let res = WeightedGraph::<u32, u32>::deserialize(&b"2 1\n0 1\n"[..]);

        assert!(matches!(res, Err(Error::MissingDistance { line: 2 })));
    }
}
