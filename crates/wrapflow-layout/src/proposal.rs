//! Size proposals exchanged between a layout and its items

use crate::axis::{Axis, AxisSize};
use wrapflow_graphics::Size;

/// A proposed size with optional extents.
///
/// `None` leaves an axis unspecified (the item picks its ideal extent) and
/// `f32::INFINITY` leaves it unbounded.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ProposedSize {
    pub width: Option<f32>,
    pub height: Option<f32>,
}

impl ProposedSize {
    pub const UNSPECIFIED: ProposedSize = ProposedSize {
        width: None,
        height: None,
    };

    pub const ZERO: ProposedSize = ProposedSize::fixed(0.0, 0.0);

    pub const INFINITY: ProposedSize = ProposedSize::fixed(f32::INFINITY, f32::INFINITY);

    pub const fn new(width: Option<f32>, height: Option<f32>) -> Self {
        Self { width, height }
    }

    pub const fn fixed(width: f32, height: f32) -> Self {
        Self::new(Some(width), Some(height))
    }

    pub fn from_size(size: Size) -> Self {
        Self::fixed(size.width, size.height)
    }

    pub fn from_axis(size: AxisSize, axis: Axis) -> Self {
        Self::from_size(size.to_size(axis))
    }

    /// Proposed extent along `axis`, if any.
    pub fn value_on(&self, axis: Axis) -> Option<f32> {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Fills unspecified axes from `size`.
    pub fn replacing_unspecified(&self, size: Size) -> Size {
        Size::new(
            self.width.unwrap_or(size.width),
            self.height.unwrap_or(size.height),
        )
    }
}

impl From<Size> for ProposedSize {
    fn from(size: Size) -> Self {
        Self::from_size(size)
    }
}

/// The question a layout asks an item about its size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SizeProposal {
    /// Smallest size the item can take.
    Min,
    /// Size the item prefers when nothing is proposed.
    Ideal,
    /// Largest size the item can take.
    Max,
    /// An explicit proposal; the answer must lie between `Min` and `Max`.
    Exact(ProposedSize),
}

impl From<ProposedSize> for SizeProposal {
    fn from(proposal: ProposedSize) -> Self {
        SizeProposal::Exact(proposal)
    }
}
