//! Greedy line packing.

use crate::axis::{Axis, AxisSize};
use crate::core::LayoutItem;
use crate::proposal::SizeProposal;
use crate::spacing::ViewSpacing;

/// An item's slot inside a [`Line`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineItem {
    /// Index of the item in the slice handed to the layout.
    pub index: usize,
    /// Assigned size; justification may change the breadth.
    pub size: AxisSize,
    /// Gap before this item along the primary axis. Always 0 for the first item.
    pub spacing: f32,
}

/// A run of consecutive items laid out without wrapping.
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    pub items: Vec<LineItem>,
    /// Summed breadth (items and gaps) and maximum depth.
    pub size: AxisSize,
    /// Gap to the previous line along the cross axis. Always 0 for the first line.
    pub spacing: f32,
}

impl Line {
    fn new(index: usize, size: AxisSize) -> Self {
        Self {
            items: vec![LineItem {
                index,
                size,
                spacing: 0.0,
            }],
            size,
            spacing: 0.0,
        }
    }

    fn append(&mut self, index: usize, size: AxisSize, spacing: f32) {
        self.items.push(LineItem {
            index,
            size,
            spacing,
        });
        self.size = AxisSize::new(
            self.size.breadth + spacing + size.breadth,
            self.size.depth.max(size.depth),
        );
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Recomputes the line size from its items.
    pub(crate) fn refresh_size(&mut self) {
        self.size = self
            .items
            .iter()
            .fold(AxisSize::ZERO, |size, item| {
                AxisSize::new(
                    size.breadth + item.spacing + item.size.breadth,
                    size.depth.max(item.size.depth),
                )
            });
    }
}

/// Splits items into lines that fit a proposed breadth.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinePacker {
    pub axis: Axis,
    /// Replaces the items' own spacing preferences between neighbours.
    pub item_spacing: Option<f32>,
    /// Replaces the items' own spacing preferences between lines.
    pub line_spacing: Option<f32>,
}

impl LinePacker {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            item_spacing: None,
            line_spacing: None,
        }
    }

    /// Packs `items` greedily into lines no wider than `proposed_breadth`.
    ///
    /// An item that does not fit starts a new line, even if it alone exceeds the
    /// proposed breadth. A zero breadth therefore puts every item on its own line.
    pub fn pack<I: LayoutItem>(&self, items: &[I], proposed_breadth: f32) -> Vec<Line> {
        let mut lines: Vec<Line> = Vec::new();
        for (index, item) in items.iter().enumerate() {
            let size = AxisSize::from_size(item.size_that_fits(SizeProposal::Ideal), self.axis);
            if let Some(line) = lines.last_mut() {
                let spacing = self.item_spacing(items, index);
                if proposed_breadth > 0.0
                    && line.size.breadth + spacing + size.breadth <= proposed_breadth
                {
                    line.append(index, size, spacing);
                    continue;
                }
            }
            lines.push(Line::new(index, size));
        }
        self.apply_line_spacing(&mut lines, items);
        for (number, line) in lines.iter().enumerate() {
            log::trace!(
                "packed line {number}: {} items, breadth {} of {proposed_breadth}, depth {}",
                line.len(),
                line.size.breadth,
                line.size.depth
            );
        }
        lines
    }

    fn item_spacing<I: LayoutItem>(&self, items: &[I], index: usize) -> f32 {
        if index == 0 {
            return 0.0;
        }
        self.item_spacing.unwrap_or_else(|| {
            items[index - 1]
                .spacing()
                .distance(&items[index].spacing(), self.axis)
        })
    }

    fn apply_line_spacing<I: LayoutItem>(&self, lines: &mut [Line], items: &[I]) {
        let cross_axis = self.axis.cross_axis();
        let spacings: Vec<ViewSpacing> = lines
            .iter()
            .map(|line| {
                line.items
                    .iter()
                    .fold(ViewSpacing::ZERO, |spacing, entry| {
                        spacing.union(&items[entry.index].spacing())
                    })
            })
            .collect();
        for index in 1..lines.len() {
            lines[index].spacing = self
                .line_spacing
                .unwrap_or_else(|| spacings[index - 1].distance(&spacings[index], cross_axis));
        }
    }
}

#[cfg(test)]
#[path = "tests/line_tests.rs"]
mod tests;
