use gridfind_core::Point;
use log::{debug, trace};

use crate::blocked::BlockedCells;
use crate::closed::ClosedSet;
use crate::config::FinderConfig;
use crate::distance::manhattan;
use crate::grid::GridSize;
use crate::neighbors::{CARDINAL, Direction};
use crate::node::{NodeArena, NodeId, SearchNode};
use crate::open::OpenSet;
use crate::path::Path;
use crate::traits::PathFinder;

/// Read-only view of one node left in the open or closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeSummary {
    pub pos: Point,
    pub distance_to_start: i32,
    pub distance_total: i32,
}

impl From<&SearchNode> for NodeSummary {
    fn from(n: &SearchNode) -> Self {
        Self {
            pos: n.pos(),
            distance_to_start: n.distance_to_start(),
            distance_total: n.distance_total(),
        }
    }
}

/// Counters for the most recent [`GridPathfinder::find_path`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Nodes popped from the open set and closed.
    pub expanded: usize,
    /// Nodes created for newly seen cells, the start included.
    pub discovered: usize,
    /// Open nodes that received a cheaper route.
    pub improved: usize,
}

/// Four-directional A* over a grid with blocked cells.
///
/// The grid size and the blocked cells persist across searches. The open
/// and closed sets belong to one [`find_path`](Self::find_path) call: they
/// are cleared when the next call starts and can be inspected in between
/// through [`open_nodes`](Self::open_nodes) and
/// [`closed_nodes`](Self::closed_nodes).
#[derive(Debug, Clone)]
pub struct GridPathfinder {
    config: FinderConfig,
    size: GridSize,
    blocked: BlockedCells,
    arena: NodeArena,
    open: OpenSet,
    closed: ClosedSet,
    stats: SearchStats,
}

impl GridPathfinder {
    /// A pathfinder for a `width` x `height` grid with the default ordering.
    pub fn new(width: i32, height: i32) -> Self {
        Self::with_config(width, height, FinderConfig::default())
    }

    pub fn with_config(width: i32, height: i32, config: FinderConfig) -> Self {
        let size = GridSize::new(width, height);
        Self {
            config,
            size,
            blocked: BlockedCells::new(size),
            arena: NodeArena::new(),
            open: OpenSet::new(config.ordering),
            closed: ClosedSet::new(),
            stats: SearchStats::default(),
        }
    }

    pub fn config(&self) -> FinderConfig {
        self.config
    }

    /// Replace the configuration. Drops the state of the last search.
    pub fn set_config(&mut self, config: FinderConfig) {
        self.reset_search();
        self.config = config;
        self.open.set_ordering(config.ordering);
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Set the grid dimensions.
    ///
    /// Blocked cells are defined relative to a size, so they are always
    /// cleared, even when the dimensions do not change. The state of the last
    /// search is dropped too.
    pub fn configure(&mut self, width: i32, height: i32) {
        self.size = GridSize::new(width, height);
        self.blocked.resize(self.size);
        self.reset_search();
        debug!("grid configured to {width}x{height}");
    }

    /// Block `p`. Returns `false` if `p` is out of bounds or already blocked.
    pub fn mark_blocked(&mut self, p: Point) -> bool {
        self.blocked.mark(p)
    }

    /// Unblock `p`. Returns `false` if `p` is out of bounds or not blocked.
    pub fn unmark_blocked(&mut self, p: Point) -> bool {
        self.blocked.unmark(p)
    }

    pub fn clear_blocked(&mut self) {
        self.blocked.clear();
    }

    pub fn is_blocked(&self, p: Point) -> bool {
        self.blocked.contains(p)
    }

    pub fn blocked(&self) -> &BlockedCells {
        &self.blocked
    }

    /// Compute the shortest path from `start` to `end`.
    ///
    /// The returned [`Path`] lists cells goal first. `start == end` yields the
    /// single-cell path without searching, whatever the bounds or blocked
    /// state of that cell. Otherwise `None` means the goal is unreachable or
    /// an endpoint lies outside the grid.
    ///
    /// The goal is recognized as soon as it is adjacent to an expanded node,
    /// before bounds or blocked checks, so a blocked goal can still be
    /// reached. It is then appended to the closed set as the terminal node.
    pub fn find_path(&mut self, start: Point, end: Point) -> Option<Path> {
        self.reset_search();

        if start == end {
            return Some(Path::from_goal_first(vec![start]));
        }

        let (Some(start_idx), Some(end_idx)) = (self.size.index(start), self.size.index(end))
        else {
            debug!(
                "find_path {start} -> {end}: endpoint outside {}x{} grid",
                self.size.width(),
                self.size.height()
            );
            return None;
        };

        let estimate = manhattan(start, end);
        let root = self.arena.alloc(SearchNode::new(start, None, 0, estimate));
        self.open.insert(start_idx, root, &self.arena);
        self.stats.discovered = 1;

        let mut reached = false;
        while !reached {
            let Some((cell, current)) = self.open.pop_first() else {
                break;
            };
            self.closed.push(cell, current);
            self.stats.expanded += 1;

            for dir in CARDINAL {
                if self.relax(current, dir, end) {
                    // The terminal node carries the start-to-goal estimate as
                    // its cost, matching what the overlay labels show.
                    let terminal = SearchNode::new(end, Some(current), estimate, 0);
                    let terminal = self.arena.alloc(terminal);
                    self.closed.push(end_idx, terminal);
                    reached = true;
                    break;
                }
            }
        }

        let last = self
            .closed
            .last()
            .filter(|&id| self.arena.get(id).pos() == end);
        let Some(last) = last else {
            debug!(
                "find_path {start} -> {end}: no path ({} expanded)",
                self.stats.expanded
            );
            return None;
        };

        let cells: Vec<Point> = self.arena.lineage(last).map(SearchNode::pos).collect();
        debug!(
            "find_path {start} -> {end}: {} steps, {} expanded, {} discovered, {} improved",
            cells.len() - 1,
            self.stats.expanded,
            self.stats.discovered,
            self.stats.improved
        );
        Some(Path::from_goal_first(cells))
    }

    /// Examine the neighbor of `current` in direction `dir`.
    ///
    /// Returns `true` when the neighbor is the goal; the goal itself is never
    /// opened.
    fn relax(&mut self, current: NodeId, dir: Direction, goal: Point) -> bool {
        let (pos, distance_to_start) = {
            let n = self.arena.get(current);
            (n.pos(), n.distance_to_start())
        };
        let next = dir.step(pos);
        if next == goal {
            return true;
        }

        let Some(ni) = self.size.index(next) else {
            return false;
        };
        if self.closed.contains(ni) || self.blocked.contains_index(ni) {
            return false;
        }

        let tentative = distance_to_start + 1;
        match self.open.get(ni) {
            None => {
                let node = SearchNode::new(next, Some(current), tentative, manhattan(next, goal));
                let id = self.arena.alloc(node);
                self.open.insert(ni, id, &self.arena);
                self.stats.discovered += 1;
                trace!("open {next} via {pos}, g={tentative}");
            }
            // Unit moves under the Manhattan estimate never find a cheaper
            // route to an open cell in practice, so `improved` stays 0 there.
            Some(id) if tentative < self.arena.get(id).distance_to_start() => {
                self.open.decrease_key(ni, tentative, current, &mut self.arena);
                self.stats.improved += 1;
                trace!("cheaper route to {next} via {pos}, g={tentative}");
            }
            Some(_) => {}
        }
        false
    }

    fn reset_search(&mut self) {
        self.open.clear();
        self.closed.clear();
        self.arena.clear();
        self.stats = SearchStats::default();
    }

    /// Nodes still open after the last search, best first.
    pub fn open_nodes(&self) -> impl Iterator<Item = NodeSummary> + '_ {
        self.open.iter().map(|id| NodeSummary::from(self.arena.get(id)))
    }

    /// Nodes closed by the last search, in closing order. On success the
    /// last entry is the goal.
    pub fn closed_nodes(&self) -> impl Iterator<Item = NodeSummary> + '_ {
        self.closed.iter().map(|id| NodeSummary::from(self.arena.get(id)))
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

impl PathFinder for GridPathfinder {
    fn configure(&mut self, width: i32, height: i32) {
        GridPathfinder::configure(self, width, height);
    }

    fn mark_blocked(&mut self, p: Point) -> bool {
        GridPathfinder::mark_blocked(self, p)
    }

    fn unmark_blocked(&mut self, p: Point) -> bool {
        GridPathfinder::unmark_blocked(self, p)
    }

    fn clear_blocked(&mut self) {
        GridPathfinder::clear_blocked(self);
    }

    fn find_path(&mut self, start: Point, end: Point) -> Option<Path> {
        GridPathfinder::find_path(self, start, end)
    }
}
