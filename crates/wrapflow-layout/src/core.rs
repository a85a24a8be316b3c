//! Core layout traits shared by every flow participant.

use std::rc::Rc;

use wrapflow_graphics::{Point, Rect, Size};

use crate::alignment::Alignment;
use crate::dimensions::Dimensions;
use crate::proposal::{ProposedSize, SizeProposal};
use crate::spacing::ViewSpacing;

/// Capabilities a flow layout needs from each of its items.
///
/// Size and dimension queries must be free of side effects: the same proposal
/// is asked again during placement and must yield the same answer.
pub trait LayoutItem {
    /// Preferred spacing to neighbouring items and lines.
    fn spacing(&self) -> ViewSpacing {
        ViewSpacing::ZERO
    }

    /// Layout priority. Higher priority items are offered slack last, so they
    /// absorb whatever the others leave behind.
    fn priority(&self) -> f32 {
        0.0
    }

    /// Returns the size the item takes for `proposal`.
    ///
    /// Answers to [`SizeProposal::Exact`] must lie between the `Min` and `Max` answers.
    fn size_that_fits(&self, proposal: SizeProposal) -> Size;

    /// Returns the item's size and alignment guides for `proposal`.
    fn dimensions(&self, proposal: SizeProposal) -> Dimensions {
        Dimensions::new(self.size_that_fits(proposal))
    }

    /// Receives the final placement. `position` is where `anchor` of the item goes.
    fn place(&self, position: Point, anchor: Alignment, proposal: ProposedSize);
}

impl<T: LayoutItem + ?Sized> LayoutItem for &T {
    fn spacing(&self) -> ViewSpacing {
        (**self).spacing()
    }

    fn priority(&self) -> f32 {
        (**self).priority()
    }

    fn size_that_fits(&self, proposal: SizeProposal) -> Size {
        (**self).size_that_fits(proposal)
    }

    fn dimensions(&self, proposal: SizeProposal) -> Dimensions {
        (**self).dimensions(proposal)
    }

    fn place(&self, position: Point, anchor: Alignment, proposal: ProposedSize) {
        (**self).place(position, anchor, proposal)
    }
}

impl<T: LayoutItem + ?Sized> LayoutItem for Box<T> {
    fn spacing(&self) -> ViewSpacing {
        (**self).spacing()
    }

    fn priority(&self) -> f32 {
        (**self).priority()
    }

    fn size_that_fits(&self, proposal: SizeProposal) -> Size {
        (**self).size_that_fits(proposal)
    }

    fn dimensions(&self, proposal: SizeProposal) -> Dimensions {
        (**self).dimensions(proposal)
    }

    fn place(&self, position: Point, anchor: Alignment, proposal: ProposedSize) {
        (**self).place(position, anchor, proposal)
    }
}

impl<T: LayoutItem + ?Sized> LayoutItem for Rc<T> {
    fn spacing(&self) -> ViewSpacing {
        (**self).spacing()
    }

    fn priority(&self) -> f32 {
        (**self).priority()
    }

    fn size_that_fits(&self, proposal: SizeProposal) -> Size {
        (**self).size_that_fits(proposal)
    }

    fn dimensions(&self, proposal: SizeProposal) -> Dimensions {
        (**self).dimensions(proposal)
    }

    fn place(&self, position: Point, anchor: Alignment, proposal: ProposedSize) {
        (**self).place(position, anchor, proposal)
    }
}

/// Policy responsible for measuring and placing a sequence of items.
///
/// Hosts call [`Layout::size_that_fits`] to negotiate a size and later
/// [`Layout::place_items`] with the same proposal to commit positions.
pub trait Layout {
    /// Computes the size the layout needs for `proposal`.
    fn size_that_fits<I: LayoutItem>(&self, proposal: ProposedSize, items: &[I]) -> Size;

    /// Places every item inside `bounds`.
    fn place_items<I: LayoutItem>(&self, bounds: Rect, proposal: ProposedSize, items: &[I]);
}
