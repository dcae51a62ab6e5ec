//! Board front-end for the gridfind pathfinder.
//!
//! Paint walls, place a start and an end, and look at the A* result together
//! with the `distance_total` of every node the search left open or closed.
//! [`board::Board`] holds the state, [`render`] turns it into text and
//! [`term`] drives it interactively from a terminal.

pub mod board;
pub mod error;
pub mod render;
pub mod scene;
pub mod term;

pub use board::{Board, CellKind, CellView, Mode, Notice};
pub use error::DemoError;
pub use scene::{Scene, SceneError};
