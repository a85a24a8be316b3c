//! Testing utilities and harness for wrapflow

pub mod assertions;
pub mod item;
pub mod render;

pub use assertions::*;
pub use item::*;
pub use render::*;

pub mod prelude {
    pub use crate::assertions;
    pub use crate::item::{repeated, Placement, TestItem};
    pub use crate::render::{layout, render, render_unbordered, LayoutDescription, RenderError};
}
