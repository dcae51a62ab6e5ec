//! The interactive board: walls, endpoints and the overlay of the last search.

use std::collections::{HashMap, HashSet};

use gridfind_core::Point;
use gridfind_paths::{FinderConfig, GridPathfinder};
use log::{debug, info};
use thiserror::Error;

use crate::scene::Scene;

pub const DEFAULT_WIDTH: i32 = 10;
pub const DEFAULT_HEIGHT: i32 = 10;

/// What a tap does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Toggle walls.
    #[default]
    Wall,
    /// Move the start marker.
    Start,
    /// Move the end marker.
    End,
}

/// User-facing reasons an action did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Notice {
    #[error("set a start and an end first")]
    MissingEndpoints,
    #[error("no path found")]
    NoPath,
    #[error("invalid board size {width}x{height}")]
    InvalidSize { width: i32, height: i32 },
}

/// How a cell is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Empty,
    Wall,
    Start,
    End,
    Path,
}

/// Everything a renderer needs for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    pub kind: CellKind,
    /// `distance_total` of the search node at this cell, if the last search
    /// left one in its open or closed set.
    pub label: Option<i32>,
}

#[derive(Debug, Clone, Default)]
struct Overlay {
    path: HashSet<Point>,
    labels: HashMap<Point, i32>,
}

/// Board state driven by taps and commands.
///
/// After [`find`](Self::find) the board shows the search result and ignores
/// taps until [`reset`](Self::reset).
#[derive(Debug, Clone)]
pub struct Board {
    finder: GridPathfinder,
    mode: Mode,
    start: Option<Point>,
    end: Option<Point>,
    overlay: Option<Overlay>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, FinderConfig::default())
    }
}

impl Board {
    pub fn new(width: i32, height: i32, config: FinderConfig) -> Self {
        Self {
            finder: GridPathfinder::with_config(width, height, config),
            mode: Mode::Wall,
            start: None,
            end: None,
            overlay: None,
        }
    }

    /// A board laid out like `scene`.
    pub fn from_scene(scene: &Scene, config: FinderConfig) -> Self {
        let mut board = Self::new(scene.width, scene.height, config);
        scene.apply(&mut board.finder);
        board.start = scene.start;
        board.end = scene.end;
        board
    }

    pub fn width(&self) -> i32 {
        self.finder.size().width()
    }

    pub fn height(&self) -> i32 {
        self.finder.size().height()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn start(&self) -> Option<Point> {
        self.start
    }

    pub fn end(&self) -> Option<Point> {
        self.end
    }

    /// Whether a search result is on display.
    pub fn is_locked(&self) -> bool {
        self.overlay.is_some()
    }

    pub fn finder(&self) -> &GridPathfinder {
        &self.finder
    }

    fn is_endpoint(&self, p: Point) -> bool {
        self.start == Some(p) || self.end == Some(p)
    }

    /// Apply a tap on `p` in the current mode. Returns whether the board
    /// changed.
    pub fn tap(&mut self, p: Point) -> bool {
        if self.is_locked() || !self.finder.size().contains(p) || self.is_endpoint(p) {
            return false;
        }
        match self.mode {
            Mode::Wall => {
                if !self.finder.unmark_blocked(p) {
                    self.finder.mark_blocked(p);
                }
            }
            Mode::Start => {
                self.finder.unmark_blocked(p);
                self.start = Some(p);
            }
            Mode::End => {
                self.finder.unmark_blocked(p);
                self.end = Some(p);
            }
        }
        true
    }

    /// Search from start to end and keep the result on display. Returns the
    /// number of steps.
    ///
    /// The overlay is kept even when no path exists, so the explored cells
    /// stay visible.
    pub fn find(&mut self) -> Result<usize, Notice> {
        let (Some(start), Some(end)) = (self.start, self.end) else {
            return Err(Notice::MissingEndpoints);
        };

        let path = self.finder.find_path(start, end);

        let mut overlay = Overlay::default();
        for n in self.finder.open_nodes().chain(self.finder.closed_nodes()) {
            overlay.labels.insert(n.pos, n.distance_total);
        }
        if let Some(path) = &path {
            overlay.path.extend(path.interior().iter().copied());
        }
        self.overlay = Some(overlay);

        match path {
            Some(path) => {
                info!("path {start} -> {end}: {} steps", path.steps());
                Ok(path.steps())
            }
            None => {
                info!("no path {start} -> {end}");
                Err(Notice::NoPath)
            }
        }
    }

    /// Clear walls, endpoints and overlay, and go back to wall mode.
    pub fn reset(&mut self) {
        self.start = None;
        self.end = None;
        self.overlay = None;
        self.finder.clear_blocked();
        self.mode = Mode::Wall;
    }

    /// Change the board size. The board is reset.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<(), Notice> {
        if width <= 0 || height <= 0 {
            return Err(Notice::InvalidSize { width, height });
        }
        self.finder.configure(width, height);
        self.reset();
        debug!("board resized to {width}x{height}");
        Ok(())
    }

    pub fn cell(&self, p: Point) -> CellView {
        let on_path = self.overlay.as_ref().is_some_and(|o| o.path.contains(&p));
        let kind = if self.start == Some(p) {
            CellKind::Start
        } else if self.end == Some(p) {
            CellKind::End
        } else if self.finder.is_blocked(p) {
            CellKind::Wall
        } else if on_path {
            CellKind::Path
        } else {
            CellKind::Empty
        };
        let label = self
            .overlay
            .as_ref()
            .and_then(|o| o.labels.get(&p).copied());
        CellView { kind, label }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    fn board_with_endpoints() -> Board {
        let mut b = Board::new(4, 3, FinderConfig::default());
        b.set_mode(Mode::Start);
        b.tap(pt(0, 0));
        b.set_mode(Mode::End);
        b.tap(pt(3, 0));
        b.set_mode(Mode::Wall);
        b
    }

    #[test]
    fn default_board_is_ten_by_ten() {
        let b = Board::default();
        assert_eq!((b.width(), b.height()), (10, 10));
        assert_eq!(b.mode(), Mode::Wall);
    }

    #[test]
    fn wall_taps_toggle() {
        let mut b = Board::default();
        assert!(b.tap(pt(2, 2)));
        assert_eq!(b.cell(pt(2, 2)).kind, CellKind::Wall);
        assert!(b.tap(pt(2, 2)));
        assert_eq!(b.cell(pt(2, 2)).kind, CellKind::Empty);
    }

    #[test]
    fn taps_outside_or_on_endpoints_are_ignored() {
        let mut b = board_with_endpoints();
        assert!(!b.tap(pt(4, 0)));
        assert!(!b.tap(pt(0, 0)));
        assert_eq!(b.cell(pt(0, 0)).kind, CellKind::Start);
        b.set_mode(Mode::End);
        assert!(!b.tap(pt(0, 0)));
        assert_eq!(b.end(), Some(pt(3, 0)));
    }

    #[test]
    fn moving_a_marker_onto_a_wall_clears_it() {
        let mut b = board_with_endpoints();
        b.tap(pt(1, 1));
        b.set_mode(Mode::Start);
        assert!(b.tap(pt(1, 1)));
        assert_eq!(b.start(), Some(pt(1, 1)));
        assert!(!b.finder().is_blocked(pt(1, 1)));
        assert_eq!(b.cell(pt(0, 0)).kind, CellKind::Empty);
    }

    #[test]
    fn find_needs_both_endpoints() {
        let mut b = Board::default();
        assert_eq!(b.find(), Err(Notice::MissingEndpoints));
        assert!(!b.is_locked());
    }

    #[test]
    fn find_paints_interior_and_labels() {
        let mut b = board_with_endpoints();
        b.tap(pt(1, 0));
        b.tap(pt(2, 0));
        assert_eq!(b.find(), Ok(5));
        assert!(b.is_locked());
        assert_eq!(b.cell(pt(0, 1)).kind, CellKind::Path);
        assert_eq!(b.cell(pt(0, 0)).kind, CellKind::Start);
        assert_eq!(b.cell(pt(3, 0)).kind, CellKind::End);
        assert_eq!(b.cell(pt(3, 0)).label, Some(3));
        assert_eq!(b.cell(pt(1, 0)).label, None);
        // Locked until reset.
        assert!(!b.tap(pt(2, 2)));
    }

    #[test]
    fn no_path_keeps_explored_labels() {
        let mut b = board_with_endpoints();
        for y in 0..3 {
            b.tap(pt(2, y));
        }
        assert_eq!(b.find(), Err(Notice::NoPath));
        assert!(b.is_locked());
        assert!(b.cell(pt(0, 0)).label.is_some());
        assert_eq!(b.cell(pt(0, 1)).kind, CellKind::Empty);
    }

    #[test]
    fn reset_clears_everything() {
        let mut b = board_with_endpoints();
        b.tap(pt(1, 1));
        b.find().unwrap();
        b.set_mode(Mode::End);
        b.reset();
        assert_eq!(b.mode(), Mode::Wall);
        assert_eq!(b.start(), None);
        assert!(!b.is_locked());
        assert!(b.finder().blocked().is_empty());
        assert_eq!(b.cell(pt(0, 1)).label, None);
    }

    #[test]
    fn resize_validates_and_resets() {
        let mut b = board_with_endpoints();
        assert_eq!(
            b.resize(0, 5),
            Err(Notice::InvalidSize { width: 0, height: 5 })
        );
        assert_eq!(b.start(), Some(pt(0, 0)));
        b.resize(20, 15).unwrap();
        assert_eq!((b.width(), b.height()), (20, 15));
        assert_eq!(b.start(), None);
        assert!(b.tap(pt(19, 14)));
    }

    #[test]
    fn bundled_maze_is_solved_optimally() {
        let scene = Scene::parse(include_str!("../scenes/maze.txt")).unwrap();
        for config in [
            FinderConfig::default(),
            FinderConfig::with_ordering(gridfind_paths::OpenOrdering::Keyed),
        ] {
            let mut b = Board::from_scene(&scene, config);
            assert_eq!(b.find(), Ok(21));
        }
    }

    #[test]
    fn board_from_scene() {
        let scene = Scene::parse("S#.\n..E").unwrap();
        let mut b = Board::from_scene(&scene, FinderConfig::default());
        assert_eq!(b.cell(pt(1, 0)).kind, CellKind::Wall);
        assert_eq!(b.find(), Ok(3));
    }
}
