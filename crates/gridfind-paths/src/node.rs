use gridfind_core::Point;

/// Handle of a [`SearchNode`] inside a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    fn slot(self) -> usize {
        self.0 as usize
    }
}

/// The state of one cell during (and after) a search.
///
/// `distance_total` always equals `distance_to_start + distance_to_end`; the
/// only way to change the cost from the start is
/// [`set_distance_to_start`](Self::set_distance_to_start), which keeps the
/// sum in step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    pos: Point,
    parent: Option<NodeId>,
    distance_to_start: i32,
    distance_to_end: i32,
    distance_total: i32,
}

impl SearchNode {
    pub fn new(
        pos: Point,
        parent: Option<NodeId>,
        distance_to_start: i32,
        distance_to_end: i32,
    ) -> Self {
        Self {
            pos,
            parent,
            distance_to_start,
            distance_to_end,
            distance_total: distance_to_start + distance_to_end,
        }
    }

    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline]
    pub fn distance_to_start(&self) -> i32 {
        self.distance_to_start
    }

    #[inline]
    pub fn distance_to_end(&self) -> i32 {
        self.distance_to_end
    }

    /// The A* priority key.
    #[inline]
    pub fn distance_total(&self) -> i32 {
        self.distance_total
    }

    pub fn set_distance_to_start(&mut self, d: i32) {
        self.distance_to_start = d;
        self.distance_total = d + self.distance_to_end;
    }

    pub fn set_parent(&mut self, parent: Option<NodeId>) {
        self.parent = parent;
    }
}

/// Owns every node created during one search.
///
/// Parents are referenced by [`NodeId`], and nodes are only dropped together
/// by [`clear`](Self::clear), so a parent always outlives its children.
#[derive(Debug, Clone, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.slot()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id.slot()]
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Walk from `id` up the parent chain to the root, `id` first.
    pub fn lineage(&self, id: NodeId) -> Lineage<'_> {
        Lineage {
            arena: self,
            next: Some(id),
        }
    }
}

/// Iterator returned by [`NodeArena::lineage`].
pub struct Lineage<'a> {
    arena: &'a NodeArena,
    next: Option<NodeId>,
}

impl<'a> Iterator for Lineage<'a> {
    type Item = &'a SearchNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.arena.get(self.next?);
        self.next = node.parent();
        Some(node)
    }
}
