use std::{convert::TryFrom, marker::PhantomData};

use crate::{
    index::Idx,
    input::{edgelist::EdgeList, InputCapabilities, InputPath},
    Distance, Error, WeightedGraph,
};
use std::path::Path as StdPath;

pub struct Uninitialized;

pub struct FromEdgesWithValues<NI, Edges, EV>
where
    NI: Idx,
    Edges: IntoIterator<Item = (NI, NI, EV)>,
{
    edges: Edges,
    node_count: Option<NI>,
    _value: PhantomData<EV>,
}

pub struct FromInput<NI, P, Format>
where
    P: AsRef<StdPath>,
    NI: Idx,
    Format: InputCapabilities<NI>,
    Format::GraphInput: TryFrom<InputPath<P>>,
{
    _idx: PhantomData<NI>,
    _path: PhantomData<P>,
    _format: PhantomData<Format>,
}

pub struct FromPath<NI, P, Format>
where
    P: AsRef<StdPath>,
    NI: Idx,
    Format: InputCapabilities<NI>,
    Format::GraphInput: TryFrom<InputPath<P>>,
{
    path: P,
    _idx: PhantomData<NI>,
    _format: PhantomData<Format>,
}

/// A builder to create graphs in a type-safe way.
///
/// The builder implementation uses different states to allow staged building of
/// graphs. Each individual state enables stage-specific methods on the builder.
///
/// # Examples
///
/// Create a weighted graph from a vec of edges:
///
/// ```
/// use connected_graph_builder::prelude::*;
///
/// let graph: WeightedGraph<usize, u32> = GraphBuilder::new()
///     .edges_with_values(vec![(0, 1, 3), (0, 2, 1), (1, 2, 7), (1, 3, 2)])
///     .build()
///     .unwrap();
///
/// assert_eq!(graph.node_count(), 4);
/// ```
///
/// Building fails if the edges do not form a simple graph:
///
/// ```
/// use connected_graph_builder::prelude::*;
///
/// let graph: Result<WeightedGraph<usize, u32>, Error> = GraphBuilder::new()
///     .edges_with_values(vec![(0, 1, 3), (1, 0, 1)])
///     .build();
///
/// assert!(graph.is_err());
/// ```
pub struct GraphBuilder<State> {
    state: State,
}

impl Default for GraphBuilder<Uninitialized> {
    fn default() -> Self {
        GraphBuilder::new()
    }
}

impl GraphBuilder<Uninitialized> {
    /// Creates a new builder
    pub fn new() -> Self {
        Self {
            state: Uninitialized,
        }
    }

    /// Create a graph from the given edge triplets.
    ///
    /// # Example
    ///
    /// ```
    /// use connected_graph_builder::prelude::*;
    ///
    /// let graph: WeightedGraph<usize, f32> = GraphBuilder::new()
    ///     .edges_with_values(vec![(0, 1, 0.1), (0, 2, 0.2), (1, 2, 0.3), (1, 3, 0.4), (2, 3, 0.5)])
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(graph.node_count(), 4);
    /// assert_eq!(graph.edge_count(), 5);
    /// ```
    pub fn edges_with_values<NI, Edges, EV>(
        self,
        edges: Edges,
    ) -> GraphBuilder<FromEdgesWithValues<NI, Edges, EV>>
    where
        NI: Idx,
        Edges: IntoIterator<Item = (NI, NI, EV)>,
    {
        GraphBuilder {
            state: FromEdgesWithValues {
                edges,
                node_count: None,
                _value: PhantomData,
            },
        }
    }

    /// Creates a graph by reading it from the given file format.
    ///
    /// # Example
    ///
    /// ```
    /// use std::io::Write;
    ///
    /// use connected_graph_builder::prelude::*;
    ///
    /// let mut file = tempfile::NamedTempFile::new().unwrap();
    /// writeln!(file, "3 2\n0 1 17\n1 2 4").unwrap();
    ///
    /// let graph: WeightedGraph<usize, u32> = GraphBuilder::new()
    ///     .file_format(WeightedEdgeListInput::default())
    ///     .path(file.path())
    ///     .build()
    ///     .expect("loading failed");
    ///
    /// assert_eq!(graph.node_count(), 3);
    /// assert_eq!(graph.edge_count(), 2);
    /// assert_eq!(graph.distances(), &[17, 4]);
    /// ```
    pub fn file_format<Format, Path, NI>(
        self,
        _format: Format,
    ) -> GraphBuilder<FromInput<NI, Path, Format>>
    where
        Path: AsRef<StdPath>,
        NI: Idx,
        Format: InputCapabilities<NI>,
        Format::GraphInput: TryFrom<InputPath<Path>>,
    {
        GraphBuilder {
            state: FromInput {
                _idx: PhantomData,
                _path: PhantomData,
                _format: PhantomData,
            },
        }
    }
}

impl<NI, Edges, EV> GraphBuilder<FromEdgesWithValues<NI, Edges, EV>>
where
    NI: Idx,
    Edges: IntoIterator<Item = (NI, NI, EV)>,
{
    /// Sets the number of nodes in the graph.
    ///
    /// Without it, the node count is the highest node id plus one.
    #[must_use]
    pub fn node_count(mut self, node_count: NI) -> Self {
        self.state.node_count = Some(node_count);
        self
    }

    /// Build the graph from the given vec of edges.
    pub fn build(self) -> Result<WeightedGraph<NI, EV>, Error>
    where
        EV: Distance,
    {
        let edges = self.state.edges.into_iter().collect();
        let edge_list = match self.state.node_count {
            Some(node_count) => EdgeList::with_node_count(edges, node_count),
            None => EdgeList::new(edges),
        };

        WeightedGraph::try_from(edge_list)
    }
}

impl<NI, Path, Format> GraphBuilder<FromInput<NI, Path, Format>>
where
    Path: AsRef<StdPath>,
    NI: Idx,
    Format: InputCapabilities<NI>,
    Format::GraphInput: TryFrom<InputPath<Path>>,
{
    /// Set the location where the graph is stored.
    pub fn path(self, path: Path) -> GraphBuilder<FromPath<NI, Path, Format>> {
        GraphBuilder {
            state: FromPath {
                path,
                _idx: PhantomData,
                _format: PhantomData,
            },
        }
    }
}

impl<NI, Path, Format> GraphBuilder<FromPath<NI, Path, Format>>
where
    Path: AsRef<StdPath>,
    NI: Idx,
    Format: InputCapabilities<NI>,
    Format::GraphInput: TryFrom<InputPath<Path>>,
    crate::Error: From<<Format::GraphInput as TryFrom<InputPath<Path>>>::Error>,
{
    /// Build the graph from the given input format and path.
    pub fn build<Graph>(self) -> Result<Graph, Error>
    where
        Graph: TryFrom<Format::GraphInput>,
        crate::Error: From<Graph::Error>,
    {
        let input = Format::GraphInput::try_from(InputPath(self.state.path))?;
        let graph = Graph::try_from(input)?;

        Ok(graph)
    }
}
