//! Flow layout: wraps items into lines along a primary axis.
//!
//! Measurement and placement both rerun the same pack + justify pipeline from
//! scratch, so the two passes agree as long as they receive the same proposal.
//! Nothing is cached between calls.

use wrapflow_graphics::{Rect, Size};

use crate::alignment::{Alignment, AlignmentGuide, HorizontalAlignment, VerticalAlignment};
use crate::axis::{Axis, AxisSize};
use crate::core::{Layout, LayoutItem};
use crate::justification::Justification;
use crate::line::{Line, LineItem, LinePacker};
use crate::proposal::{ProposedSize, SizeProposal};

/// Configuration of a wrapping flow layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlowLayout {
    /// Primary axis along which lines run.
    pub axis: Axis,
    /// Guide used to position items within the depth of their line.
    pub alignment: AlignmentGuide,
    /// Fixed gap between items; `None` uses the items' spacing preferences.
    pub item_spacing: Option<f32>,
    /// Fixed gap between lines; `None` uses the items' spacing preferences.
    pub line_spacing: Option<f32>,
    pub justification: Option<Justification>,
    /// Lay items out from the far end of the primary axis.
    pub reversed_breadth: bool,
    /// Stack lines from the far end of the cross axis.
    pub reversed_depth: bool,
}

impl FlowLayout {
    /// Horizontal flow: items run left to right, lines stack top to bottom.
    pub const fn horizontal(alignment: VerticalAlignment) -> Self {
        Self::new(Axis::Horizontal, AlignmentGuide::Vertical(alignment))
    }

    /// Vertical flow: items run top to bottom, lines stack left to right.
    pub const fn vertical(alignment: HorizontalAlignment) -> Self {
        Self::new(Axis::Vertical, AlignmentGuide::Horizontal(alignment))
    }

    pub const fn new(axis: Axis, alignment: AlignmentGuide) -> Self {
        Self {
            axis,
            alignment,
            item_spacing: None,
            line_spacing: None,
            justification: None,
            reversed_breadth: false,
            reversed_depth: false,
        }
    }

    pub fn item_spacing(mut self, spacing: f32) -> Self {
        self.item_spacing = Some(spacing);
        self
    }

    pub fn line_spacing(mut self, spacing: f32) -> Self {
        self.line_spacing = Some(spacing);
        self
    }

    pub fn justified(mut self, justification: Justification) -> Self {
        self.justification = Some(justification);
        self
    }

    pub fn reversed_breadth(mut self, reversed: bool) -> Self {
        self.reversed_breadth = reversed;
        self
    }

    pub fn reversed_depth(mut self, reversed: bool) -> Self {
        self.reversed_depth = reversed;
        self
    }

    /// Replaces the guide used for cross-axis alignment.
    pub fn alignment_guide(mut self, guide: impl Into<AlignmentGuide>) -> Self {
        self.alignment = guide.into();
        self
    }

    fn packer(&self) -> LinePacker {
        LinePacker {
            axis: self.axis,
            item_spacing: self.item_spacing,
            line_spacing: self.line_spacing,
        }
    }

    /// Packs and justifies `items` for `proposal`.
    ///
    /// An unspecified breadth is treated as unbounded, which keeps every item on
    /// one line. This differs from substituting a small default breadth, which
    /// would wrap nearly every item onto its own line. Justification only
    /// applies to a finite breadth.
    pub fn lines<I: LayoutItem>(&self, proposal: ProposedSize, items: &[I]) -> Vec<Line> {
        let proposed_breadth = proposal.value_on(self.axis).unwrap_or(f32::INFINITY);
        let mut lines = self.packer().pack(items, proposed_breadth);
        if let Some(justification) = self.justification {
            if proposed_breadth.is_finite() {
                for line in &mut lines {
                    justification.justify(line, items, self.axis, proposed_breadth);
                }
            }
        }
        lines
    }

    /// Computes the physical size needed to lay out `items` for `proposal`.
    pub fn measure<I: LayoutItem>(&self, proposal: ProposedSize, items: &[I]) -> Size {
        if items.is_empty() {
            return Size::ZERO;
        }
        let lines = self.lines(proposal, items);
        let size = lines.iter().fold(AxisSize::ZERO, |size, line| {
            AxisSize::new(
                size.breadth.max(line.size.breadth),
                size.depth + line.spacing + line.size.depth,
            )
        });
        log::debug!(
            "flow measured {} items in {} lines: {size:?} for {proposal:?}",
            items.len(),
            lines.len()
        );
        size.to_size(self.axis)
    }

    /// Places `items` inside `bounds`. `proposal` must match the one used to measure.
    pub fn place<I: LayoutItem>(&self, bounds: Rect, proposal: ProposedSize, items: &[I]) {
        if items.is_empty() {
            return;
        }
        let origin = AxisSize::from_point(bounds.origin(), self.axis);
        let extent = AxisSize::from_size(bounds.size(), self.axis);
        let line_start = if self.reversed_breadth {
            origin.breadth + extent.breadth
        } else {
            origin.breadth
        };
        let mut depth = if self.reversed_depth {
            origin.depth + extent.depth
        } else {
            origin.depth
        };

        let lines = self.lines(proposal, items);
        let mut placed = 0;
        for line in &lines {
            if self.reversed_depth {
                depth -= line.spacing + line.size.depth;
            } else {
                depth += line.spacing;
            }
            let mut breadth = line_start;
            for entry in &line.items {
                if self.reversed_breadth {
                    breadth -= entry.spacing + entry.size.breadth;
                } else {
                    breadth += entry.spacing;
                }
                let position = AxisSize::new(breadth, depth);
                self.align_and_place(&items[entry.index], entry, line, position);
                if !self.reversed_breadth {
                    breadth += entry.size.breadth;
                }
                placed += 1;
            }
            if !self.reversed_depth {
                depth += line.size.depth;
            }
        }
        debug_assert_eq!(placed, items.len(), "every item must be placed exactly once");
        log::debug!(
            "flow placed {placed} items in {} lines within {bounds:?}",
            lines.len()
        );
    }

    fn align_and_place<I: LayoutItem>(
        &self,
        item: &I,
        entry: &LineItem,
        line: &Line,
        mut position: AxisSize,
    ) {
        let proposal =
            ProposedSize::from_axis(AxisSize::new(entry.size.breadth, line.size.depth), self.axis);
        // The guide and the depth must describe the same size: items that grow
        // along the cross axis answer the line-depth proposal with their own depth.
        let dimensions = item.dimensions(SizeProposal::Exact(proposal));
        let depth = AxisSize::from_size(dimensions.size, self.axis).depth;
        if depth > 0.0 {
            let guide = dimensions.guide(self.alignment);
            position.depth += (guide / depth) * (line.size.depth - depth);
        }
        item.place(position.to_point(self.axis), Alignment::TOP_START, proposal);
    }
}

impl Default for FlowLayout {
    fn default() -> Self {
        Self::horizontal(VerticalAlignment::Top)
    }
}

impl Layout for FlowLayout {
    fn size_that_fits<I: LayoutItem>(&self, proposal: ProposedSize, items: &[I]) -> Size {
        self.measure(proposal, items)
    }

    fn place_items<I: LayoutItem>(&self, bounds: Rect, proposal: ProposedSize, items: &[I]) {
        self.place(bounds, proposal, items)
    }
}

#[cfg(test)]
#[path = "tests/flow_tests.rs"]
mod tests;
