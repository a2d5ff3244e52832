use std::collections::VecDeque;

use bitvec::prelude::*;

use crate::prelude::*;

/// Visits all nodes reachable from the given start nodes in breadth-first
/// order.
///
/// # Example
///
/// ```
/// use connected_graph::prelude::*;
///
/// let graph: WeightedGraph<u32, u32> = GraphBuilder::new()
///     .edges_with_values(vec![(0, 1, 1), (0, 2, 1), (1, 3, 1), (4, 5, 1)])
///     .build()
///     .unwrap();
///
/// let visited: Vec<u32> = bfs_undirected(&graph, [0]).collect();
///
/// assert_eq!(visited, vec![0, 1, 2, 3]);
/// ```
pub fn bfs_undirected<NI, G>(
    graph: &G,
    node_ids: impl IntoIterator<Item = NI>,
) -> UndirectedBreadthFirst<'_, G, NI>
where
    NI: Idx,
    G: Graph<NI> + UndirectedNeighbors<NI>,
{
    UndirectedBreadthFirst::new(graph, node_ids)
}

pub struct UndirectedBreadthFirst<'a, G, NI> {
    graph: &'a G,
    seen: BitVec<usize>,
    visited: BitVec<usize>,
    queue: VecDeque<NI>,
}

impl<'a, G, NI> UndirectedBreadthFirst<'a, G, NI>
where
    NI: Idx,
    G: Graph<NI> + UndirectedNeighbors<NI>,
{
    pub fn new(graph: &'a G, node_ids: impl IntoIterator<Item = NI>) -> Self {
        let bitvec = BitVec::repeat(false, graph.node_count().index());
        let visited = bitvec.clone();

        let mut seen = bitvec;
        let mut queue = VecDeque::new();
        Self::enqueue_into(&mut seen, &mut queue, node_ids);

        Self {
            graph,
            seen,
            visited,
            queue,
        }
    }

    fn dequeue(&mut self) -> Option<NI> {
        loop {
            let node_id = self.queue.pop_front()?;

            if !self.visited.replace(node_id.index(), true) {
                return Some(node_id);
            }
        }
    }

    fn enqueue_into(
        seen: &mut BitVec<usize>,
        queue: &mut VecDeque<NI>,
        node_ids: impl IntoIterator<Item = NI>,
    ) {
        for node_id in node_ids {
            if !seen.replace(node_id.index(), true) {
                queue.push_back(node_id);
            }
        }
    }

    fn enqueue_neighbors_of(&mut self, node_id: NI) {
        let node_ids = self
            .graph
            .neighbors(node_id)
            .copied()
            .filter(|&node_id| !self.visited[node_id.index()]);

        Self::enqueue_into(&mut self.seen, &mut self.queue, node_ids);
    }
}

impl<'a, G, NI> Iterator for UndirectedBreadthFirst<'a, G, NI>
where
    NI: Idx,
    G: Graph<NI> + UndirectedNeighbors<NI>,
{
    type Item = NI;

    fn next(&mut self) -> Option<Self::Item> {
        let node_id = self.dequeue()?;

        self.enqueue_neighbors_of(node_id);

        Some(node_id)
    }
}
