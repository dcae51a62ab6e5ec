//! **gridfind-core** — geometry primitives shared by the *gridfind* crates.
//!
//! Only two types live here: [`Point`], a cell coordinate, and [`Range`], the
//! half-open rectangle a grid occupies.

pub mod geom;

pub use geom::{Point, Range, RangeIter};
