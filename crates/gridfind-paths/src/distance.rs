use gridfind_core::Point;

/// Manhattan (L1) distance between two points.
///
/// Admissible and consistent for unit-cost four-directional movement, which
/// is what makes the A* search in this crate return shortest paths.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Point::new(1, 4);
        let b = Point::new(6, -2);
        assert_eq!(manhattan(a, b), 11);
        assert_eq!(manhattan(b, a), 11);
        assert_eq!(manhattan(a, a), 0);
    }
}
