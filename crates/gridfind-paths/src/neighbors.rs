use gridfind_core::Point;

/// One of the four axis-aligned moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    West,
    East,
    North,
    South,
}

/// Expansion order used by the search: left, right, up, down.
pub const CARDINAL: [Direction; 4] = [
    Direction::West,
    Direction::East,
    Direction::North,
    Direction::South,
];

impl Direction {
    /// Unit offset of this move. North is towards row 0.
    #[inline]
    pub const fn offset(self) -> Point {
        match self {
            Self::West => Point::new(-1, 0),
            Self::East => Point::new(1, 0),
            Self::North => Point::new(0, -1),
            Self::South => Point::new(0, 1),
        }
    }

    /// The cell reached from `p` by this move.
    #[inline]
    pub fn step(self, p: Point) -> Point {
        p + self.offset()
    }
}
