//! Four-directional A* pathfinding over a grid of blocked cells.
//!
//! [`GridPathfinder`] owns the grid size and the set of blocked cells, and
//! runs an A* search with unit step costs and the [`manhattan`] heuristic.
//! After each search the final open and closed sets can be read back for
//! visualization.
//!
//! ```
//! use gridfind_core::Point;
//! use gridfind_paths::GridPathfinder;
//!
//! let mut pf = GridPathfinder::new(3, 3);
//! pf.mark_blocked(Point::new(1, 0));
//! pf.mark_blocked(Point::new(1, 1));
//! let path = pf.find_path(Point::new(0, 0), Point::new(2, 0)).unwrap();
//! assert_eq!(path.steps(), 6);
//! assert_eq!(path.goal(), Point::new(2, 0));
//! ```
//!
//! # Building blocks
//!
//! | Type | Role |
//! |---|---|
//! | [`GridSize`] | bounds and cell indices |
//! | [`BlockedCells`] | impassable cells |
//! | [`NodeArena`] / [`SearchNode`] | search nodes linked to their parents |
//! | [`OpenSet`] | frontier ordered by [`OpenOrdering`] |
//! | [`ClosedSet`] | finalized nodes |

mod blocked;
mod closed;
mod config;
mod distance;
mod finder;
mod grid;
mod neighbors;
mod node;
mod open;
mod path;
mod traits;

pub use blocked::BlockedCells;
pub use closed::ClosedSet;
pub use config::{FinderConfig, OpenOrdering};
pub use distance::manhattan;
pub use finder::{GridPathfinder, NodeSummary, SearchStats};
pub use grid::GridSize;
pub use neighbors::{CARDINAL, Direction};
pub use node::{Lineage, NodeArena, NodeId, SearchNode};
pub use open::OpenSet;
pub use path::Path;
pub use traits::PathFinder;
