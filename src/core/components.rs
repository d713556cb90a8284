//! Connectivity of the undirected state graph.
//!
//! A machine whose states split into unrelated clusters is almost always two
//! machines declared together by mistake. The builder uses
//! [`connected_components`] to reject those declarations.

use std::collections::HashMap;
use std::hash::Hash;

/// Disjoint-set forest over a fixed set of nodes, with path compression.
#[derive(Debug, Clone)]
pub struct DisjointSet<N> {
    index: HashMap<N, usize>,
    parent: Vec<usize>,
}

impl<N: Eq + Hash> DisjointSet<N> {
    /// Create a forest where every node is its own singleton set.
    ///
    /// Storage is sized from the iterator's lower size bound, which is exact
    /// for the state sets the builder passes in.
    pub fn new(nodes: impl IntoIterator<Item = N>) -> Self {
        let nodes = nodes.into_iter();
        let capacity = nodes.size_hint().0;
        Self::with_capacity(capacity, nodes)
    }

    /// Like [`new`](Self::new), with room reserved for `capacity` nodes.
    pub fn with_capacity(capacity: usize, nodes: impl IntoIterator<Item = N>) -> Self {
        let mut index = HashMap::with_capacity(capacity);
        for node in nodes {
            let next = index.len();
            index.entry(node).or_insert(next);
        }
        let parent = (0..index.len()).collect();
        Self { index, parent }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    fn root(&mut self, mut i: usize) -> usize {
        let mut root = i;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        while self.parent[i] != root {
            let next = self.parent[i];
            self.parent[i] = root;
            i = next;
        }
        root
    }

    /// Representative of the set containing `node`, or `None` for unknown nodes.
    pub fn find(&mut self, node: &N) -> Option<usize> {
        let i = *self.index.get(node)?;
        Some(self.root(i))
    }

    /// Merge the sets containing `a` and `b`.
    ///
    /// Returns `false` if either node is unknown or both were already joined.
    pub fn union(&mut self, a: &N, b: &N) -> bool {
        let (Some(ra), Some(rb)) = (self.find(a), self.find(b)) else {
            return false;
        };
        if ra == rb {
            return false;
        }
        self.parent[ra] = rb;
        true
    }

    /// Number of disjoint sets.
    pub fn count(&mut self) -> usize {
        (0..self.parent.len()).filter(|&i| self.root(i) == i).count()
    }
}

/// Count the connected components of an undirected graph.
///
/// `nodes` lists every vertex; `edges` may only mention listed vertices
/// (edges touching unknown vertices are ignored). Direction is irrelevant.
///
/// # Example
///
/// ```rust
/// use automaton::core::connected_components;
///
/// let nodes = ["a", "b", "c", "d"];
/// assert_eq!(connected_components(nodes, [("a", "b"), ("c", "d")]), 2);
/// assert_eq!(connected_components(nodes, [("a", "b"), ("c", "d"), ("d", "a")]), 1);
/// ```
pub fn connected_components<N, E>(nodes: impl IntoIterator<Item = N>, edges: E) -> usize
where
    N: Eq + Hash,
    E: IntoIterator<Item = (N, N)>,
{
    let mut forest = DisjointSet::new(nodes);
    for (a, b) in edges {
        forest.union(&a, &b);
    }
    forest.count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_graph_has_no_components() {
        let nodes: [&str; 0] = [];
        assert_eq!(connected_components(nodes, []), 0);
    }

    #[test]
    fn singletons_are_separate() {
        assert_eq!(connected_components(["a", "b", "c"], []), 3);
    }

    #[test]
    fn union_joins_transitively() {
        let mut forest = DisjointSet::new(["a", "b", "c"]);
        assert!(forest.union(&"a", &"b"));
        assert!(forest.union(&"b", &"c"));
        assert!(!forest.union(&"a", &"c"));
        assert_eq!(forest.find(&"a"), forest.find(&"c"));
        assert_eq!(forest.count(), 1);
    }

    #[test]
    fn self_edge_changes_nothing() {
        let mut forest = DisjointSet::new(["a", "b"]);
        assert!(!forest.union(&"a", &"a"));
        assert_eq!(forest.count(), 2);
    }

    #[test]
    fn unknown_nodes_are_ignored() {
        let mut forest = DisjointSet::new(["a"]);
        assert_eq!(forest.find(&"z"), None);
        assert!(!forest.union(&"a", &"z"));
        assert_eq!(forest.len(), 1);
    }

    #[test]
    fn duplicate_nodes_collapse() {
        let forest = DisjointSet::new(["a", "a", "b"]);
        assert_eq!(forest.len(), 2);
    }

    #[test]
    fn storage_sized_by_node_count() {
        let forest = DisjointSet::new(0..300u32);
        assert!(forest.index.capacity() >= 300);
        assert_eq!(forest.parent.len(), 300);

        let forest = DisjointSet::with_capacity(64, ["a", "b"]);
        assert!(forest.index.capacity() >= 64);
        assert_eq!(forest.len(), 2);
    }

    #[test]
    fn long_chain_is_one_component() {
        let nodes: Vec<u32> = (0..500).collect();
        let edges = (0..499).map(|i| (i, i + 1));
        assert_eq!(connected_components(nodes, edges), 1);
    }
}
