use gridfind_core::Point;

use crate::path::Path;

/// The capability set a board front-end needs from a pathfinder.
pub trait PathFinder {
    /// Set the grid size. Always forgets every blocked cell.
    fn configure(&mut self, width: i32, height: i32);

    /// Block a cell. `false` if out of bounds or already blocked.
    fn mark_blocked(&mut self, p: Point) -> bool;

    /// Unblock a cell. `false` if out of bounds or not blocked.
    fn unmark_blocked(&mut self, p: Point) -> bool;

    /// Unblock every cell.
    fn clear_blocked(&mut self);

    /// Shortest four-directional path between `start` and `end`, or `None`
    /// when the goal cannot be reached.
    fn find_path(&mut self, start: Point, end: Point) -> Option<Path>;
}
