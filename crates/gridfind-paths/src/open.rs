use std::collections::{HashMap, VecDeque};

use crate::config::OpenOrdering;
use crate::node::{NodeArena, NodeId, SearchNode};

#[derive(Debug, Clone, Copy)]
struct Entry {
    cell: usize,
    id: NodeId,
}

/// Frontier of discovered but unexpanded nodes.
///
/// Keeps the priority order and the lookup by cell index in one structure so
/// the two can never disagree. The front entry has the smallest
/// `distance_total`.
#[derive(Debug, Clone)]
pub struct OpenSet {
    ordering: OpenOrdering,
    order: VecDeque<Entry>,
    index: HashMap<usize, NodeId>,
}

impl OpenSet {
    pub fn new(ordering: OpenOrdering) -> Self {
        Self {
            ordering,
            order: VecDeque::new(),
            index: HashMap::new(),
        }
    }

    /// Change the ordering rule. Only allowed on an empty set, since entries
    /// already placed would not satisfy the new rule.
    pub fn set_ordering(&mut self, ordering: OpenOrdering) {
        debug_assert!(self.is_empty(), "ordering changed on a non-empty open set");
        self.ordering = ordering;
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.index.clear();
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The node currently open for `cell`, if any.
    #[inline]
    pub fn get(&self, cell: usize) -> Option<NodeId> {
        self.index.get(&cell).copied()
    }

    /// Add a node for a cell that is not open yet.
    pub fn insert(&mut self, cell: usize, id: NodeId, arena: &NodeArena) {
        debug_assert!(!self.index.contains_key(&cell), "cell {cell} already open");
        self.index.insert(cell, id);
        let at = self.position_for(arena.get(id), arena);
        self.order.insert(at, Entry { cell, id });
    }

    /// Remove and return the best node together with its cell index.
    pub fn pop_first(&mut self) -> Option<(usize, NodeId)> {
        let Entry { cell, id } = self.order.pop_front()?;
        self.index.remove(&cell);
        Some((cell, id))
    }

    /// Give the open node of `cell` a cheaper route through `parent` and move
    /// it to its new place in the order. The node keeps its id and its index
    /// entry. Returns `false` if `cell` is not open.
    pub fn decrease_key(
        &mut self,
        cell: usize,
        distance_to_start: i32,
        parent: NodeId,
        arena: &mut NodeArena,
    ) -> bool {
        let Some(id) = self.get(cell) else {
            return false;
        };
        if let Some(at) = self.order.iter().position(|e| e.id == id) {
            self.order.remove(at);
        }
        let node = arena.get_mut(id);
        node.set_distance_to_start(distance_to_start);
        node.set_parent(Some(parent));
        let at = self.position_for(arena.get(id), arena);
        self.order.insert(at, Entry { cell, id });
        true
    }

    /// Node ids from best to worst.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.order.iter().map(|e| e.id)
    }

    fn position_for(&self, node: &SearchNode, arena: &NodeArena) -> usize {
        match self.ordering {
            OpenOrdering::LinearScan => self.scan_position(node, arena),
            OpenOrdering::Keyed => {
                let key = (node.distance_total(), node.distance_to_start());
                self.order.partition_point(|e| {
                    let other = arena.get(e.id);
                    (other.distance_total(), other.distance_to_start()) <= key
                })
            }
        }
    }

    fn scan_position(&self, node: &SearchNode, arena: &NodeArena) -> usize {
        for (i, e) in self.order.iter().enumerate() {
            let other = arena.get(e.id);
            if node.distance_total() > other.distance_total() {
                continue;
            }
            if node.distance_total() < other.distance_total()
                || node.distance_to_start() < other.distance_to_start()
            {
                return i;
            }
        }
        self.order.len()
    }
}
