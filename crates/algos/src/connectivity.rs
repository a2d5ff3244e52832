use std::time::Instant;

use log::info;

use crate::prelude::*;

/// Maps every node to the id of the component it belongs to.
pub trait Components<NI> {
    /// Returns the component id of `node`.
    fn component(&mut self, node: NI) -> NI;
    /// Returns the component id of every node, indexed by node id.
    fn to_vec(self) -> Vec<NI>;
}

impl<NI: Idx> Components<NI> for DisjointSetStruct<NI> {
    fn component(&mut self, node: NI) -> NI {
        self.find(node)
    }

    fn to_vec(mut self) -> Vec<NI> {
        (0..self.len()).map(|id| self.find(NI::new(id))).collect()
    }
}

/// Returns `true` if every node of the graph can be reached from node `0`.
///
/// A graph without nodes is not connected.
///
/// # Example
///
/// ```
/// use connected_graph::prelude::*;
///
/// let path: WeightedGraph<u32, u32> = GraphBuilder::new()
///     .edges_with_values(vec![(0, 1, 1), (1, 2, 1)])
///     .build()
///     .unwrap();
/// assert!(is_connected(&path));
///
/// let split: WeightedGraph<u32, u32> = GraphBuilder::new()
///     .edges_with_values(vec![(0, 1, 1), (2, 3, 1)])
///     .build()
///     .unwrap();
/// assert!(!is_connected(&split));
/// ```
pub fn is_connected<NI, G>(graph: &G) -> bool
where
    NI: Idx,
    G: Graph<NI> + UndirectedNeighbors<NI>,
{
    let node_count = graph.node_count().index();
    if node_count == 0 {
        return false;
    }

    bfs_undirected(graph, [NI::zero()]).count() == node_count
}

/// Computes the connected components of an undirected graph.
pub fn wcc<NI, G>(graph: &G) -> DisjointSetStruct<NI>
where
    NI: Idx,
    G: Graph<NI> + UndirectedNeighbors<NI>,
{
    let start = Instant::now();
    let node_count = graph.node_count().index();
    let mut dss = DisjointSetStruct::new(node_count);

    for u in 0..node_count {
        let u = NI::new(u);
        for &v in graph.neighbors(u).filter(|&&v| v > u) {
            dss.union(u, v);
        }
    }

    info!(
        "Computed {} components in {:?}",
        dss.set_count(),
        start.elapsed()
    );

    dss
}

/// Returns `true` if the edges connect all `node_count` nodes.
///
/// Works on a plain edge list so that candidate edge sets can be checked
/// before a graph is built from them.
pub fn spans_all_nodes<NI: Idx>(node_count: usize, edges: &[(NI, NI)]) -> bool {
    if node_count == 0 {
        return false;
    }

    let mut dss = DisjointSetStruct::new(node_count);
    for &(u, v) in edges {
        if dss.union(u, v) && dss.set_count() == 1 {
            return true;
        }
    }

    dss.set_count() == 1
}
