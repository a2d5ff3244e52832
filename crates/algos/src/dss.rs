use crate::prelude::*;

#[allow(clippy::len_without_is_empty)]
pub trait UnionFind<NI> {
    /// Joins the set of `id1` with the set of `id2`.
    ///
    /// Returns `true` if the two ids were in different sets before.
    fn union(&mut self, id1: NI, id2: NI) -> bool;
    /// Find the set of `id`.
    fn find(&mut self, id: NI) -> NI;
    /// Returns the number of elements in the union find,
    /// also referred to as its 'length'.
    fn len(&self) -> usize;
    /// Returns the number of disjoint sets.
    fn set_count(&self) -> usize;
}

/// A Disjoint Set Struct with union-by-min and path halving.
///
/// The smaller set id always becomes the root, so the set id of a node is
/// the smallest node id in its set.
#[derive(Debug, Clone)]
pub struct DisjointSetStruct<NI: Idx> {
    parents: Box<[NI]>,
    set_count: usize,
}

impl<NI: Idx> UnionFind<NI> for DisjointSetStruct<NI> {
    /// Joins the set of `id1` with the set of `id2`.
    ///
    /// # Examples
    ///
    /// ```
    /// use connected_graph::prelude::*;
    ///
    /// let mut dss = DisjointSetStruct::<u32>::new(10);
    /// assert!(dss.union(2, 4));
    /// assert!(!dss.union(4, 2));
    /// assert_eq!(dss.find(2), 2);
    /// assert_eq!(dss.find(4), 2);
    /// ```
    fn union(&mut self, id1: NI, id2: NI) -> bool {
        let mut id1 = self.find(id1);
        let mut id2 = self.find(id2);

        if id1 == id2 {
            return false;
        }

        // Union-by-Min: the root of the larger id is attached to the smaller one.
        if id1 < id2 {
            std::mem::swap(&mut id1, &mut id2);
        }

        self.parents[id1.index()] = id2;
        self.set_count -= 1;

        true
    }

    /// Find the set of `id`.
    ///
    /// # Examples
    ///
    /// ```
    /// use connected_graph::prelude::*;
    ///
    /// let mut dss = DisjointSetStruct::<u32>::new(10);
    /// assert_eq!(dss.find(4), 4);
    /// dss.union(4, 2);
    /// assert_eq!(dss.find(4), 2);
    /// ```
    fn find(&mut self, mut id: NI) -> NI {
        let mut parent = self.parent(id);

        while id != parent {
            let grand_parent = self.parent(parent);
            self.parents[id.index()] = grand_parent;
            id = parent;
            parent = grand_parent;
        }

        id
    }

    /// Returns the number of elements in the dss.
    ///
    /// # Examples
    ///
    /// ```
    /// use connected_graph::prelude::*;
    ///
    /// let dss = DisjointSetStruct::<usize>::new(3);
    /// assert_eq!(dss.len(), 3);
    /// ```
    fn len(&self) -> usize {
        self.parents.len()
    }

    fn set_count(&self) -> usize {
        self.set_count
    }
}

impl<NI: Idx> DisjointSetStruct<NI> {
    /// Creates a new disjoint-set struct of `size` elements, each in its own
    /// set.
    pub fn new(size: usize) -> Self {
        Self {
            parents: (0..size).map(NI::new).collect(),
            set_count: size,
        }
    }

    fn parent(&self, i: NI) -> NI {
        self.parents[i.index()]
    }
}
