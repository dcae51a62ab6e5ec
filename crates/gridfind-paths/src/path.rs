use gridfind_core::Point;

/// A shortest path found by [`GridPathfinder`](crate::GridPathfinder).
///
/// Cells are stored goal first, in the order the parent chain is walked, so
/// `cells()[0]` is the goal and the last cell is the start. Use
/// [`forward`](Self::forward) for start-to-goal order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    cells: Vec<Point>,
}

impl Path {
    pub(crate) fn from_goal_first(cells: Vec<Point>) -> Self {
        debug_assert!(!cells.is_empty());
        Self { cells }
    }

    /// All cells, goal first.
    pub fn cells(&self) -> &[Point] {
        &self.cells
    }

    /// Number of cells, both endpoints included.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a path holds at least its start cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of unit moves.
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    pub fn goal(&self) -> Point {
        self.cells[0]
    }

    pub fn start(&self) -> Point {
        self.cells[self.cells.len() - 1]
    }

    /// Cells from start to goal.
    pub fn forward(&self) -> impl DoubleEndedIterator<Item = Point> + '_ {
        self.cells.iter().rev().copied()
    }

    /// The cells strictly between the two endpoints, goal side first.
    pub fn interior(&self) -> &[Point] {
        if self.cells.len() <= 2 {
            return &[];
        }
        &self.cells[1..self.cells.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Path {
        Path::from_goal_first(vec![
            Point::new(2, 0),
            Point::new(1, 0),
            Point::new(1, 1),
            Point::new(0, 1),
        ])
    }

    #[test]
    fn endpoints_and_steps() {
        let p = sample();
        assert_eq!(p.goal(), Point::new(2, 0));
        assert_eq!(p.start(), Point::new(0, 1));
        assert_eq!(p.len(), 4);
        assert_eq!(p.steps(), 3);
    }

    #[test]
    fn forward_runs_start_to_goal() {
        let fwd: Vec<Point> = sample().forward().collect();
        assert_eq!(fwd.first(), Some(&Point::new(0, 1)));
        assert_eq!(fwd.last(), Some(&Point::new(2, 0)));
    }

    #[test]
    fn interior_skips_endpoints() {
        assert_eq!(sample().interior(), &[Point::new(1, 0), Point::new(1, 1)]);
        let single = Path::from_goal_first(vec![Point::new(3, 3)]);
        assert!(single.interior().is_empty());
        assert_eq!(single.steps(), 0);
        assert_eq!(single.start(), single.goal());
    }
}
