use gridfind_core::{Point, Range};

/// Dimensions of the board a pathfinder searches, anchored at (0, 0).
///
/// Converts between [`Point`]s and flat cell indices (`x + y * width`). The
/// index is the identity of a cell for a fixed size; it means nothing once
/// the size changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSize {
    rng: Range,
}

impl GridSize {
    /// A `width` x `height` grid. Non-positive dimensions give an empty grid
    /// in which every coordinate is out of bounds.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            rng: Range::sized(width, height),
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.rng.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.rng.height()
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.rng.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rng.is_empty()
    }

    /// The grid rectangle.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.rng.contains(p)
    }

    /// Convert a `Point` to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        Some(p.x as usize + p.y as usize * self.width() as usize)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let w = self.width().max(1) as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_column_plus_row_times_width() {
        let g = GridSize::new(5, 3);
        assert_eq!(g.index(Point::new(0, 0)), Some(0));
        assert_eq!(g.index(Point::new(4, 0)), Some(4));
        assert_eq!(g.index(Point::new(1, 2)), Some(11));
        assert_eq!(g.len(), 15);
    }

    #[test]
    fn out_of_bounds_has_no_index() {
        let g = GridSize::new(5, 3);
        assert_eq!(g.index(Point::new(5, 0)), None);
        assert_eq!(g.index(Point::new(0, 3)), None);
        assert_eq!(g.index(Point::new(-1, 1)), None);
    }

    #[test]
    fn point_inverts_index() {
        let g = GridSize::new(7, 4);
        for p in g.range() {
            let idx = g.index(p).unwrap();
            assert_eq!(g.point(idx), p);
        }
    }

    #[test]
    fn degenerate_size_is_empty() {
        let g = GridSize::new(0, 10);
        assert!(g.is_empty());
        assert!(!g.contains(Point::ZERO));
        assert_eq!(g.index(Point::ZERO), None);
    }
}
