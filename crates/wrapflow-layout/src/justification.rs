//! Justification strategies for stretching a packed line to the proposed breadth

use crate::axis::Axis;
use crate::core::LayoutItem;
use crate::line::Line;
use crate::proposal::{ProposedSize, SizeProposal};

/// How slack in a line is redistributed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Justification {
    /// Grow flexible items toward their maximum breadth; gaps keep their size.
    StretchItems,
    /// Widen the gaps between items; items keep their size.
    StretchSpaces,
    /// Grow items first, then spread what is left across the gaps.
    StretchItemsAndSpaces,
}

/// Per-item facts the slack allocation is driven by.
#[derive(Clone, Copy, Debug, PartialEq)]
struct ItemProperties {
    index_in_line: usize,
    priority: f32,
    spacing: f32,
    min: f32,
    max: f32,
}

impl ItemProperties {
    fn flexibility(&self) -> f32 {
        self.max - self.min
    }
}

impl Justification {
    pub fn stretches_items(self) -> bool {
        matches!(
            self,
            Justification::StretchItems | Justification::StretchItemsAndSpaces
        )
    }

    pub fn stretches_spaces(self) -> bool {
        matches!(
            self,
            Justification::StretchSpaces | Justification::StretchItemsAndSpaces
        )
    }

    /// Redistributes the slack of `line` so that it spans `proposed_breadth`.
    ///
    /// Slack that cannot be absorbed (every item at its maximum and no gaps to
    /// widen) is left over, and the line ends up narrower than proposed. A line
    /// whose minimum already exceeds the proposal stays wider than proposed.
    pub fn justify<I: LayoutItem>(
        self,
        line: &mut Line,
        items: &[I],
        axis: Axis,
        proposed_breadth: f32,
    ) {
        if line.is_empty() {
            return;
        }
        let mut remaining_space = if self.stretches_items() {
            stretch_items(line, items, axis, proposed_breadth)
        } else {
            let used: f32 = line
                .items
                .iter()
                .map(|item| item.spacing + item.size.breadth)
                .sum();
            proposed_breadth - used
        };
        if self.stretches_spaces() {
            distribute_across_gaps(line, &mut remaining_space);
        }
        if self.stretches_items() {
            refresh_depths(line, items, axis);
        }
        line.refresh_size();
        line.size.breadth = proposed_breadth - remaining_space;
        log::trace!(
            "justified line of {} items ({self:?}): breadth {}, {remaining_space} left over",
            line.len(),
            line.size.breadth
        );
    }
}

/// Grows items from their minimum breadth and returns the space left over.
fn stretch_items<I: LayoutItem>(
    line: &mut Line,
    items: &[I],
    axis: Axis,
    proposed_breadth: f32,
) -> f32 {
    let mut properties: Vec<ItemProperties> = line
        .items
        .iter()
        .enumerate()
        .map(|(index_in_line, entry)| {
            let item = &items[entry.index];
            let min = axis.value_of(item.size_that_fits(SizeProposal::Min));
            let max = axis.value_of(item.size_that_fits(SizeProposal::Max));
            ItemProperties {
                index_in_line,
                priority: item.priority(),
                spacing: entry.spacing,
                min,
                max: max.max(min),
            }
        })
        .collect();
    // Stable: ties keep their order in the line.
    properties.sort_by(|a, b| {
        a.priority
            .total_cmp(&b.priority)
            .then(a.flexibility().total_cmp(&b.flexibility()))
            .then(a.min.total_cmp(&b.min))
    });

    let sum_of_min: f32 = properties.iter().map(|p| p.spacing + p.min).sum();
    let sum_of_max: f32 = properties.iter().map(|p| p.spacing + p.max).sum();
    let mut remaining_space = proposed_breadth - sum_of_min;

    if sum_of_max - sum_of_min <= remaining_space {
        for property in &properties {
            line.items[property.index_in_line].size.breadth = property.max;
            remaining_space -= property.flexibility();
        }
    } else {
        let mut remaining_items = properties.len();
        for property in &properties {
            let offer = remaining_space / remaining_items as f32;
            let actual = property.flexibility().min(offer).max(0.0);
            remaining_space -= actual;
            remaining_items -= 1;
            line.items[property.index_in_line].size.breadth = property.min + actual;
        }
    }
    remaining_space
}

/// Spreads `remaining_space` evenly over the gaps between items.
fn distribute_across_gaps(line: &mut Line, remaining_space: &mut f32) {
    let gaps = line.len().saturating_sub(1);
    if gaps == 0 {
        return;
    }
    let share = *remaining_space / gaps as f32;
    for item in line.items.iter_mut().skip(1) {
        item.spacing += share;
        *remaining_space -= share;
    }
}

/// Re-reads each item's depth at its assigned breadth.
fn refresh_depths<I: LayoutItem>(line: &mut Line, items: &[I], axis: Axis) {
    for entry in &mut line.items {
        let proposal = match axis {
            Axis::Horizontal => ProposedSize::new(Some(entry.size.breadth), None),
            Axis::Vertical => ProposedSize::new(None, Some(entry.size.breadth)),
        };
        let size = items[entry.index].size_that_fits(SizeProposal::Exact(proposal));
        entry.size.depth = axis.cross_axis().value_of(size);
    }
}

#[cfg(test)]
#[path = "tests/justification_tests.rs"]
mod tests;
