//! Level-set nodes and the containers that hold them.

use std::cmp::Ordering;

use strata_core::GridIndex;

/// A grid index paired with a scalar value.
///
/// In extractor output the value is the non-negative distance from the
/// index to the level set. In a narrow-band input it is whatever signed
/// quantity the caller uses to select candidates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LevelSetNode<const D: usize> {
    /// Grid position.
    pub index: GridIndex<D>,
    /// Associated value.
    pub value: f64,
}

impl<const D: usize> LevelSetNode<D> {
    /// Pair `index` with `value`.
    pub const fn new(index: GridIndex<D>, value: f64) -> Self {
        Self { index, value }
    }

    /// Total order on `value` alone.
    pub fn cmp_value(&self, other: &Self) -> Ordering {
        self.value.total_cmp(&other.value)
    }
}

/// An ordered, growable list of [`LevelSetNode`]s.
///
/// Insertion order is preserved; the extractor appends in visit order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodeContainer<const D: usize> {
    nodes: Vec<LevelSetNode<D>>,
}

impl<const D: usize> NodeContainer<D> {
    /// An empty container.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// An empty container with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Append a node.
    pub fn push(&mut self, node: LevelSetNode<D>) {
        self.nodes.push(node);
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the container holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node at `position`, if any.
    pub fn get(&self, position: usize) -> Option<&LevelSetNode<D>> {
        self.nodes.get(position)
    }

    /// Remove every node, keeping the allocation.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Iterate nodes in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, LevelSetNode<D>> {
        self.nodes.iter()
    }

    /// The nodes as a slice.
    pub fn as_slice(&self) -> &[LevelSetNode<D>] {
        &self.nodes
    }

    /// Consume the container, returning the underlying vector.
    pub fn into_vec(self) -> Vec<LevelSetNode<D>> {
        self.nodes
    }
}

impl<const D: usize> std::ops::Index<usize> for NodeContainer<D> {
    type Output = LevelSetNode<D>;

    fn index(&self, position: usize) -> &LevelSetNode<D> {
        &self.nodes[position]
    }
}

impl<const D: usize> From<Vec<LevelSetNode<D>>> for NodeContainer<D> {
    fn from(nodes: Vec<LevelSetNode<D>>) -> Self {
        Self { nodes }
    }
}

impl<const D: usize> FromIterator<LevelSetNode<D>> for NodeContainer<D> {
    fn from_iter<I: IntoIterator<Item = LevelSetNode<D>>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl<const D: usize> Extend<LevelSetNode<D>> for NodeContainer<D> {
    fn extend<I: IntoIterator<Item = LevelSetNode<D>>>(&mut self, iter: I) {
        self.nodes.extend(iter);
    }
}

impl<'a, const D: usize> IntoIterator for &'a NodeContainer<D> {
    type Item = &'a LevelSetNode<D>;
    type IntoIter = std::slice::Iter<'a, LevelSetNode<D>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl<const D: usize> IntoIterator for NodeContainer<D> {
    type Item = LevelSetNode<D>;
    type IntoIter = std::vec::IntoIter<LevelSetNode<D>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(x: i64, value: f64) -> LevelSetNode<1> {
        LevelSetNode::new(GridIndex::new([x]), value)
    }

    #[test]
    fn push_preserves_insertion_order() {
        let mut c = NodeContainer::new();
        c.push(node(3, 0.5));
        c.push(node(1, 0.25));
        assert_eq!(c.len(), 2);
        assert_eq!(c[0].index, GridIndex::new([3]));
        assert_eq!(c.get(1).map(|n| n.value), Some(0.25));
        assert_eq!(c.get(2), None);
    }

    #[test]
    fn clear_empties_container() {
        let mut c: NodeContainer<1> = (0..4).map(|x| node(x, 1.0)).collect();
        assert_eq!(c.len(), 4);
        c.clear();
        assert!(c.is_empty());
    }

    #[test]
    fn cmp_value_sorts_by_distance() {
        let mut v = vec![node(0, 2.0), node(1, -1.0), node(2, 0.5)];
        v.sort_by(LevelSetNode::cmp_value);
        let values: Vec<f64> = v.iter().map(|n| n.value).collect();
        assert_eq!(values, vec![-1.0, 0.5, 2.0]);
    }

    #[test]
    fn extend_and_iterate() {
        let mut c = NodeContainer::with_capacity(2);
        c.extend([node(0, 0.0), node(1, 1.0)]);
        let xs: Vec<i64> = (&c).into_iter().map(|n| n.index[0]).collect();
        assert_eq!(xs, vec![0, 1]);
        assert_eq!(c.into_vec().len(), 2);
    }
}
