//! Pure geometry for wrapflow
//!
//! Points, sizes and rectangles in physical (x/y, width/height) space.
//! Axis-relative geometry lives in `wrapflow-layout`.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{Point, Rect, Size};
}
