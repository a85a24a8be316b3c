//! Size ranges for layout items

use crate::proposal::SizeProposal;
use wrapflow_graphics::Size;

/// Minimum and maximum extents an item accepts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constraints {
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl Constraints {
    /// Creates constraints spanning `min` to `max`.
    pub fn new(min: Size, max: Size) -> Self {
        Self {
            min_width: min.width,
            max_width: max.width,
            min_height: min.height,
            max_height: max.height,
        }
    }

    /// Creates constraints with exact width and height.
    pub fn tight(width: f32, height: f32) -> Self {
        Self::new(Size::new(width, height), Size::new(width, height))
    }

    /// Creates constraints with loose bounds (min = 0, max = given values).
    pub fn loose(max_width: f32, max_height: f32) -> Self {
        Self::new(Size::ZERO, Size::new(max_width, max_height))
    }

    /// Constraints accepting any non-negative size.
    pub fn unbounded() -> Self {
        Self::loose(f32::INFINITY, f32::INFINITY)
    }

    /// Returns true if these constraints have a single size that satisfies them.
    pub fn is_tight(&self) -> bool {
        self.min_width == self.max_width && self.min_height == self.max_height
    }

    pub fn min_size(&self) -> Size {
        Size::new(self.min_width, self.min_height)
    }

    pub fn max_size(&self) -> Size {
        Size::new(self.max_width, self.max_height)
    }

    /// Constrains the provided width and height to fit within these constraints.
    pub fn constrain(&self, width: f32, height: f32) -> Size {
        Size::new(
            width.max(self.min_width).min(self.max_width),
            height.max(self.min_height).min(self.max_height),
        )
    }

    /// Answers `proposal` for an item with these bounds and the given ideal size.
    pub fn size_for(&self, proposal: SizeProposal, ideal: Size) -> Size {
        match proposal {
            SizeProposal::Min => self.min_size(),
            SizeProposal::Ideal => self.constrain(ideal.width, ideal.height),
            SizeProposal::Max => self.max_size(),
            SizeProposal::Exact(proposed) => {
                let size = proposed.replacing_unspecified(ideal);
                self.constrain(size.width, size.height)
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/constraints_tests.rs"]
mod tests;
