//! Invariants that must hold for every flow configuration.

use wrapflow_layout::prelude::*;
use wrapflow_layout::Axis;
use wrapflow_testing::{assert_no_overlap, assert_rect_approx_eq, placed_rects, TestItem};

const WIDTHS: [f32; 10] = [3.0, 5.0, 2.0, 7.0, 4.0, 1.0, 6.0, 3.0, 2.0, 5.0];
const HEIGHTS: [f32; 10] = [1.0, 2.0, 3.0, 1.0, 2.0, 1.0, 4.0, 2.0, 1.0, 3.0];
const BREADTHS: [f32; 5] = [0.0, 7.0, 12.0, 20.0, 100.0];

/// Items flexing along the primary axis of `axis`, every fourth one also along
/// the cross axis.
fn items(axis: Axis) -> Vec<TestItem> {
    WIDTHS
        .iter()
        .zip(HEIGHTS)
        .enumerate()
        .map(|(index, (&breadth, depth))| {
            let max_breadth = match index % 3 {
                0 => breadth,
                1 => breadth + 3.0,
                _ => f32::INFINITY,
            };
            let max_depth = if index % 4 == 1 { depth + 4.0 } else { depth };
            let (min, max) = match axis {
                Axis::Horizontal => (
                    Size::new(breadth, depth),
                    Size::new(max_breadth, max_depth),
                ),
                Axis::Vertical => (
                    Size::new(depth, breadth),
                    Size::new(max_depth, max_breadth),
                ),
            };
            TestItem::flexible(min, max).with_priority((index % 4) as f32)
        })
        .collect()
}

fn configurations() -> Vec<FlowLayout> {
    let justifications = [
        None,
        Some(Justification::StretchItems),
        Some(Justification::StretchSpaces),
        Some(Justification::StretchItemsAndSpaces),
    ];
    let mut flows = Vec::new();
    for axis in [Axis::Horizontal, Axis::Vertical] {
        let guides: [AlignmentGuide; 3] = match axis {
            Axis::Horizontal => [
                VerticalAlignment::Top.into(),
                VerticalAlignment::CenterVertically.into(),
                VerticalAlignment::Bottom.into(),
            ],
            Axis::Vertical => [
                HorizontalAlignment::Start.into(),
                HorizontalAlignment::CenterHorizontally.into(),
                HorizontalAlignment::End.into(),
            ],
        };
        for guide in guides {
            for justification in justifications {
                for (reversed_breadth, reversed_depth) in
                    [(false, false), (true, false), (false, true), (true, true)]
                {
                    let mut flow = FlowLayout::new(axis, guide)
                        .item_spacing(1.0)
                        .line_spacing(1.0)
                        .reversed_breadth(reversed_breadth)
                        .reversed_depth(reversed_depth);
                    flow.justification = justification;
                    flows.push(flow);
                }
            }
        }
    }
    flows
}

fn proposal(axis: Axis, breadth: f32) -> ProposedSize {
    match axis {
        Axis::Horizontal => ProposedSize::new(Some(breadth), None),
        Axis::Vertical => ProposedSize::new(None, Some(breadth)),
    }
}

#[test]
fn placements_never_overlap() {
    for flow in configurations() {
        for breadth in BREADTHS {
            let items = items(flow.axis);
            let proposal = proposal(flow.axis, breadth);
            let size = flow.measure(proposal, &items);
            flow.place(Rect::from_size(size), proposal, &items);
            let rects = match placed_rects(&items) {
                Ok(rects) => rects,
                Err(err) => panic!("{flow:?} at {breadth}: {err}"),
            };
            assert_no_overlap(&rects, &format!("{flow:?} at {breadth}"));
        }
    }
}

#[test]
fn placements_span_the_measured_size() {
    for flow in configurations() {
        for breadth in BREADTHS {
            let items = items(flow.axis);
            let proposal = proposal(flow.axis, breadth);
            let size = flow.measure(proposal, &items);
            let bounds = Rect::new(3.0, 4.0, size.width, size.height);
            flow.place(bounds, proposal, &items);
            let union = placed_rects(&items)
                .unwrap_or_default()
                .into_iter()
                .reduce(|union, rect| union.union(&rect))
                .unwrap_or_default();
            assert_rect_approx_eq(union, bounds, 1e-3, &format!("{flow:?} at {breadth}"));
        }
    }
}

#[test]
fn lines_respect_the_proposed_breadth() {
    for flow in configurations() {
        for breadth in BREADTHS.into_iter().filter(|breadth| *breadth > 0.0) {
            let items = items(flow.axis);
            for line in flow.lines(proposal(flow.axis, breadth), &items) {
                assert!(
                    line.len() == 1 || line.size.breadth <= breadth + 1e-3,
                    "{flow:?}: line of {} items spans {} > {breadth}",
                    line.len(),
                    line.size.breadth
                );
            }
        }
    }
}

#[test]
fn lines_keep_input_order() {
    for flow in configurations() {
        let items = items(flow.axis);
        let indices: Vec<usize> = flow
            .lines(proposal(flow.axis, 12.0), &items)
            .iter()
            .flat_map(|line| line.items.iter().map(|item| item.index))
            .collect();
        assert_eq!(indices, (0..items.len()).collect::<Vec<_>>());
    }
}

#[test]
fn measurement_is_idempotent() {
    for flow in configurations() {
        let items = items(flow.axis);
        let proposal = proposal(flow.axis, 12.0);
        assert_eq!(flow.measure(proposal, &items), flow.measure(proposal, &items));
    }
}

#[test]
fn three_items_wrap_one_unit_below_threshold() {
    let flow = FlowLayout::horizontal(VerticalAlignment::Top).item_spacing(2.0);
    let items: Vec<TestItem> = (0..3).map(|_| TestItem::new(4.0, 1.0)).collect();
    assert_eq!(flow.lines(ProposedSize::fixed(16.0, 10.0), &items).len(), 1);
    let lines = flow.lines(ProposedSize::fixed(15.0, 10.0), &items);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1].items[0].index, 2);
}

#[test]
fn depth_flexible_item_stays_within_its_line() {
    let flow = FlowLayout::horizontal(VerticalAlignment::Bottom)
        .item_spacing(0.0)
        .line_spacing(0.0);
    let items = vec![
        TestItem::new(1.0, 3.0),
        TestItem::flexible(Size::new(1.0, 1.0), Size::new(1.0, 10.0)),
        TestItem::new(2.0, 5.0),
    ];
    let proposal = ProposedSize::new(Some(2.0), None);
    let size = flow.measure(proposal, &items);
    assert_eq!(size, Size::new(2.0, 8.0));
    flow.place(Rect::from_size(size), proposal, &items);
    let rects = match placed_rects(&items) {
        Ok(rects) => rects,
        Err(err) => panic!("{err}"),
    };
    // grows to the line depth, so bottom alignment leaves it at the line start
    assert_rect_approx_eq(rects[1], Rect::new(1.0, 0.0, 1.0, 3.0), 1e-3, "flexible item");
    assert_no_overlap(&rects, "depth flexible");
}
