//! Boards described as ASCII art.
//!
//! ```text
//! S..#....
//! .#.#.##.
//! .#...#.E
//! ```
//!
//! `.` is an open cell, `#` a wall, `S` the start and `E` the end. Every
//! line must have the same width. Blank lines before and after the board
//! are ignored; any other whitespace is an invalid character.

use std::path::Path;

use gridfind_core::Point;
use gridfind_paths::GridPathfinder;
use thiserror::Error;

use crate::error::DemoError;

/// Errors that can occur when parsing a scene.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    #[error("scene is empty")]
    Empty,
    #[error("line {line} is {found} cells wide, expected {expected}")]
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("invalid character {ch:?} at {pos}")]
    InvalidChar { ch: char, pos: Point },
    #[error("second {marker:?} marker at {second}, first one at {first}")]
    DuplicateMarker {
        marker: char,
        first: Point,
        second: Point,
    },
}

/// A parsed board: its size, walls and optional endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    pub width: i32,
    pub height: i32,
    pub walls: Vec<Point>,
    pub start: Option<Point>,
    pub end: Option<Point>,
}

impl Scene {
    pub fn parse(s: &str) -> Result<Self, SceneError> {
        let lines: Vec<&str> = s.lines().map(|l| l.trim_end_matches('\r')).collect();
        let Some(first) = lines.iter().position(|l| !l.trim().is_empty()) else {
            return Err(SceneError::Empty);
        };
        let last = lines.iter().rposition(|l| !l.trim().is_empty()).unwrap_or(first);

        let mut width = None;
        let mut walls = Vec::new();
        let mut start: Option<Point> = None;
        let mut end: Option<Point> = None;
        let mut height = 0;

        for (y, line) in lines[first..=last].iter().enumerate() {
            let found = line.chars().count();
            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(SceneError::InconsistentWidth {
                        line: y + 1,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            for (x, ch) in line.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                match ch {
                    '.' => {}
                    '#' => walls.push(pos),
                    'S' => set_marker(&mut start, 'S', pos)?,
                    'E' => set_marker(&mut end, 'E', pos)?,
                    _ => return Err(SceneError::InvalidChar { ch, pos }),
                }
            }
            height += 1;
        }

        Ok(Self {
            width: width.unwrap_or(0) as i32,
            height,
            walls,
            start,
            end,
        })
    }

    /// Read and parse a scene file.
    pub fn load(path: &Path) -> Result<Self, DemoError> {
        let text = std::fs::read_to_string(path).map_err(|source| DemoError::ReadScene {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text).map_err(|source| DemoError::ParseScene {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resize `finder` to this scene and block its walls.
    pub fn apply(&self, finder: &mut GridPathfinder) {
        finder.configure(self.width, self.height);
        for &w in &self.walls {
            finder.mark_blocked(w);
        }
    }
}

fn set_marker(slot: &mut Option<Point>, marker: char, pos: Point) -> Result<(), SceneError> {
    if let Some(first) = *slot {
        return Err(SceneError::DuplicateMarker {
            marker,
            first,
            second: pos,
        });
    }
    *slot = Some(pos);
    Ok(())
}
