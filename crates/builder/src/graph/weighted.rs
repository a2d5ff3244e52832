use std::convert::TryFrom;
use std::time::Instant;

use fxhash::FxHashMap;
use log::info;

use crate::{
    graph::{adj_list::AdjacencyList, Target},
    index::Idx,
    input::EdgeList,
    Distance, Error, Graph, UndirectedDegrees, UndirectedNeighbors,
    UndirectedNeighborsWithValues,
};

/// An undirected, simple graph with a distance on every edge.
///
/// The graph keeps the edges in the order they were given. Edge `i` is
/// `edges()[i]` and its distance is `distances()[i]`. Neighbor queries are
/// answered from an adjacency list that is built once on construction.
///
/// A `WeightedGraph` is immutable. It can only be created through
/// [`GraphBuilder`](crate::GraphBuilder), which guarantees that
///
/// * every edge references nodes in `[0, node_count)`,
/// * no edge is a self loop,
/// * no two edges connect the same pair of nodes,
/// * every distance is positive.
#[derive(Debug)]
pub struct WeightedGraph<NI: Idx, EV> {
    node_count: NI,
    edge_count: NI,
    edges: Box<[(NI, NI)]>,
    distances: Box<[EV]>,
    edge_ids: FxHashMap<(NI, NI), usize>,
    adjacency: AdjacencyList<NI, EV>,
}

impl<NI: Idx, EV: Copy> WeightedGraph<NI, EV> {
    /// The edges in enumeration order.
    pub fn edges(&self) -> &[(NI, NI)] {
        &self.edges
    }

    /// The distances, parallel to [`WeightedGraph::edges`].
    pub fn distances(&self) -> &[EV] {
        &self.distances
    }

    /// Returns `(source, target, distance)` for every edge in enumeration
    /// order.
    pub fn edges_with_distances(&self) -> impl Iterator<Item = (NI, NI, EV)> + '_ {
        self.edges
            .iter()
            .zip(self.distances.iter())
            .map(|(&(s, t), &d)| (s, t, d))
    }

    /// Returns the id of the edge connecting `u` and `v`, in any direction.
    pub fn edge_id(&self, u: NI, v: NI) -> Option<usize> {
        self.edge_ids.get(&normalize(u, v)).copied()
    }

    /// Maps a path, given as a sequence of nodes, to the ids of the edges
    /// along that path.
    ///
    /// Returns `None` if two consecutive nodes are not adjacent.
    pub fn path_edges(&self, path: &[NI]) -> Option<Vec<usize>> {
        path.windows(2)
            .map(|pair| self.edge_id(pair[0], pair[1]))
            .collect()
    }

    /// Consumes the graph and returns node count, edges and distances.
    pub fn into_parts(self) -> (NI, Vec<(NI, NI)>, Vec<EV>) {
        (
            self.node_count,
            self.edges.into_vec(),
            self.distances.into_vec(),
        )
    }
}

#[inline]
fn normalize<NI: Idx>(u: NI, v: NI) -> (NI, NI) {
    if u <= v {
        (u, v)
    } else {
        (v, u)
    }
}

impl<NI: Idx, EV> Graph<NI> for WeightedGraph<NI, EV> {
    fn node_count(&self) -> NI {
        self.node_count
    }

    fn edge_count(&self) -> NI {
        self.edge_count
    }
}

impl<NI: Idx, EV> UndirectedDegrees<NI> for WeightedGraph<NI, EV> {
    fn degree(&self, node: NI) -> NI {
        self.adjacency.degree(node)
    }
}

type TargetFn<'a, NI, EV> = fn(&'a Target<NI, EV>) -> &'a NI;

fn target_of<NI, EV>(target: &Target<NI, EV>) -> &NI {
    &target.target
}

impl<NI: Idx, EV> UndirectedNeighbors<NI> for WeightedGraph<NI, EV> {
    type NeighborsIterator<'a> = std::iter::Map<std::slice::Iter<'a, Target<NI, EV>>, TargetFn<'a, NI, EV>> where EV: 'a;

    fn neighbors(&self, node: NI) -> Self::NeighborsIterator<'_> {
        self.adjacency
            .targets_with_values(node)
            .iter()
            .map(target_of as TargetFn<'_, NI, EV>)
    }
}

impl<NI: Idx, EV> UndirectedNeighborsWithValues<NI, EV> for WeightedGraph<NI, EV> {
    type NeighborsIterator<'a> = std::slice::Iter<'a, Target<NI, EV>> where EV: 'a;

    fn neighbors_with_values(&self, node: NI) -> Self::NeighborsIterator<'_> {
        self.adjacency.targets_with_values(node).iter()
    }
}

impl<NI, EV> TryFrom<EdgeList<NI, EV>> for WeightedGraph<NI, EV>
where
    NI: Idx,
    EV: Distance,
{
    type Error = Error;

    fn try_from(edge_list: EdgeList<NI, EV>) -> Result<Self, Self::Error> {
        let start = Instant::now();

        let node_count = edge_list.node_count()?;
        let list = edge_list.into_vec();
        let edge_count = NI::try_new(list.len())?;

        let mut edge_ids = FxHashMap::default();
        edge_ids.reserve(list.len());

        for (edge, &(s, t, distance)) in list.iter().enumerate() {
            if s >= node_count || t >= node_count {
                return Err(Error::NodeOutOfRange {
                    source_node: s.index(),
                    target_node: t.index(),
                    node_count: node_count.index(),
                });
            }
            if s == t {
                return Err(Error::SelfLoop { node: s.index() });
            }
            if !distance.is_positive() {
                return Err(Error::NonPositiveDistance { edge });
            }
            if edge_ids.insert(normalize(s, t), edge).is_some() {
                return Err(Error::ParallelEdge {
                    source_node: s.index(),
                    target_node: t.index(),
                });
            }
        }

        let adjacency = AdjacencyList::from((list.as_slice(), node_count));
        debug_assert_eq!(adjacency.node_count(), node_count);
        debug_assert_eq!(adjacency.target_count(), 2 * list.len());

        let (edges, distances): (Vec<_>, Vec<_>) =
            list.into_iter().map(|(s, t, d)| ((s, t), d)).unzip();

        info!(
            "Created weighted graph (node_count = {:?}, edge_count = {:?}) in {:?}",
            node_count,
            edge_count,
            start.elapsed()
        );

        Ok(Self {
            node_count,
            edge_count,
            edges: edges.into_boxed_slice(),
            distances: distances.into_boxed_slice(),
            edge_ids,
            adjacency,
        })
    }
}
