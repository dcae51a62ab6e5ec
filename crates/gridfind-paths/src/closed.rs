use std::collections::HashSet;

use crate::node::NodeId;

/// Finalized nodes, in the order they were closed.
///
/// A cell that is closed is never opened again during the same search.
#[derive(Debug, Clone, Default)]
pub struct ClosedSet {
    order: Vec<NodeId>,
    cells: HashSet<usize>,
}

impl ClosedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.cells.clear();
    }

    pub fn push(&mut self, cell: usize, id: NodeId) {
        self.order.push(id);
        self.cells.insert(cell);
    }

    #[inline]
    pub fn contains(&self, cell: usize) -> bool {
        self.cells.contains(&cell)
    }

    /// The most recently closed node.
    pub fn last(&self) -> Option<NodeId> {
        self.order.last().copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.order.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{NodeArena, SearchNode};
    use gridfind_core::Point;

    #[test]
    fn keeps_insertion_order_and_membership() {
        let mut arena = NodeArena::new();
        let a = arena.alloc(SearchNode::new(Point::new(0, 0), None, 0, 1));
        let b = arena.alloc(SearchNode::new(Point::new(1, 0), Some(a), 1, 0));
        let mut closed = ClosedSet::new();
        closed.push(0, a);
        closed.push(1, b);
        assert_eq!(closed.iter().collect::<Vec<_>>(), vec![a, b]);
        assert_eq!(closed.last(), Some(b));
        assert!(closed.contains(1));
        assert!(!closed.contains(2));
        closed.clear();
        assert!(closed.is_empty());
        assert_eq!(closed.last(), None);
    }
}
