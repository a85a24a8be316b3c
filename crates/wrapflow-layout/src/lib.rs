//! Wrapping flow layout for wrapflow
//!
//! Items are packed greedily into lines along a primary axis, optionally
//! justified to fill the proposed breadth, and stacked along the cross axis.
//! The same algorithm serves horizontal and vertical flows.

mod alignment;
mod axis;
mod constraints;
mod core;
mod dimensions;
mod flow;
mod justification;
mod line;
mod proposal;
mod spacing;

pub use alignment::*;
pub use axis::*;
pub use constraints::*;
pub use self::core::*;
pub use dimensions::*;
pub use flow::*;
pub use justification::*;
pub use line::*;
pub use proposal::*;
pub use spacing::*;

pub use wrapflow_graphics::{Point, Rect, Size};

pub mod prelude {
    pub use crate::alignment::{Alignment, AlignmentGuide, HorizontalAlignment, VerticalAlignment};
    pub use crate::core::{Layout, LayoutItem};
    pub use crate::flow::FlowLayout;
    pub use crate::justification::Justification;
    pub use crate::proposal::{ProposedSize, SizeProposal};
    pub use crate::spacing::ViewSpacing;
    pub use wrapflow_graphics::{Point, Rect, Size};
}
