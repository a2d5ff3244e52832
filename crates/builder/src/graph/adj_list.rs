use crate::{graph::Target, index::Idx};

/// Per-node neighbor lists, keyed by node index.
///
/// Each undirected edge `(s, t)` is stored twice, once in the list of `s`
/// and once in the list of `t`. Neighbor lists are sorted by target.
#[derive(Debug)]
pub struct AdjacencyList<NI, EV> {
    edges: Vec<Vec<Target<NI, EV>>>,
}

impl<NI: Idx, EV> AdjacencyList<NI, EV> {
    pub fn new(edges: Vec<Vec<Target<NI, EV>>>) -> Self {
        Self { edges }
    }

    #[inline]
    pub(crate) fn node_count(&self) -> NI {
        NI::new(self.edges.len())
    }

    /// Number of stored targets, i.e. twice the number of undirected edges.
    #[inline]
    pub(crate) fn target_count(&self) -> usize {
        self.edges.iter().map(|v| v.len()).sum()
    }

    #[inline]
    pub(crate) fn degree(&self, node: NI) -> NI {
        NI::new(self.edges[node.index()].len())
    }

    #[inline]
    pub(crate) fn targets_with_values(&self, node: NI) -> &[Target<NI, EV>] {
        self.edges[node.index()].as_slice()
    }
}

impl<NI, EV> From<(&'_ [(NI, NI, EV)], NI)> for AdjacencyList<NI, EV>
where
    NI: Idx,
    EV: Copy,
{
    fn from((edge_list, node_count): (&'_ [(NI, NI, EV)], NI)) -> Self {
        let mut edges = Vec::with_capacity(node_count.index());
        edges.resize_with(node_count.index(), Vec::new);

        for &(s, t, v) in edge_list {
            edges[s.index()].push(Target::new(t, v));
            edges[t.index()].push(Target::new(s, v));
        }

        for list in edges.iter_mut() {
            list.sort_unstable_by_key(|t| t.target);
        }

        AdjacencyList::new(edges)
    }
}
