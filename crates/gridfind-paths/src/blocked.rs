use std::collections::BTreeSet;

use gridfind_core::Point;

use crate::grid::GridSize;

/// The set of impassable cells of a grid.
///
/// Cells are stored by index, so the set is only meaningful for the size it
/// was built against; [`resize`](Self::resize) therefore empties it.
#[derive(Debug, Clone, Default)]
pub struct BlockedCells {
    size: GridSize,
    cells: BTreeSet<usize>,
}

impl BlockedCells {
    /// An empty set for a grid of `size`.
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            cells: BTreeSet::new(),
        }
    }

    /// Switch to a new grid size. Always clears the set.
    pub fn resize(&mut self, size: GridSize) {
        self.size = size;
        self.cells.clear();
    }

    /// Block `p`. Returns `false` without changing anything if `p` is out of
    /// bounds or already blocked.
    pub fn mark(&mut self, p: Point) -> bool {
        match self.size.index(p) {
            Some(idx) => self.cells.insert(idx),
            None => false,
        }
    }

    /// Unblock `p`. Returns `false` without changing anything if `p` is out
    /// of bounds or not blocked.
    pub fn unmark(&mut self, p: Point) -> bool {
        match self.size.index(p) {
            Some(idx) => self.cells.remove(&idx),
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Whether `p` is blocked. Out-of-bounds points are never blocked.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.size.index(p).is_some_and(|idx| self.contains_index(idx))
    }

    #[inline]
    pub(crate) fn contains_index(&self, idx: usize) -> bool {
        self.cells.contains(&idx)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Blocked cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.cells.iter().map(|&idx| self.size.point(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blocked_5x5() -> BlockedCells {
        BlockedCells::new(GridSize::new(5, 5))
    }

    #[test]
    fn mark_twice_reports_false_and_keeps_len() {
        let mut b = blocked_5x5();
        assert!(b.mark(Point::new(2, 3)));
        assert!(!b.mark(Point::new(2, 3)));
        assert_eq!(b.len(), 1);
        assert!(b.contains(Point::new(2, 3)));
    }

    #[test]
    fn out_of_bounds_is_rejected() {
        let mut b = blocked_5x5();
        assert!(!b.mark(Point::new(5, 0)));
        assert!(!b.mark(Point::new(0, -1)));
        assert!(!b.unmark(Point::new(7, 7)));
        assert!(b.is_empty());
    }

    #[test]
    fn unmark_requires_blocked_cell() {
        let mut b = blocked_5x5();
        assert!(!b.unmark(Point::new(1, 1)));
        b.mark(Point::new(1, 1));
        assert!(b.unmark(Point::new(1, 1)));
        assert!(!b.contains(Point::new(1, 1)));
    }

    #[test]
    fn resize_clears_everything() {
        let mut b = blocked_5x5();
        b.mark(Point::new(0, 0));
        b.mark(Point::new(4, 4));
        b.resize(GridSize::new(8, 8));
        assert!(b.is_empty());
        assert!(!b.contains(Point::new(0, 0)));
        // The larger grid accepts coordinates the old one rejected.
        assert!(b.mark(Point::new(7, 7)));
    }

    #[test]
    fn iter_is_row_major() {
        let mut b = blocked_5x5();
        b.mark(Point::new(3, 2));
        b.mark(Point::new(0, 4));
        b.mark(Point::new(4, 0));
        let pts: Vec<Point> = b.iter().collect();
        assert_eq!(pts, vec![Point::new(4, 0), Point::new(3, 2), Point::new(0, 4)]);
    }
}
