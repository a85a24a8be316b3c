//! Assertion helpers for layout tests

use wrapflow_graphics::Rect;

/// Assert that a value is within `tolerance` of the expected value.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{msg}: expected {expected} (±{tolerance}), got {actual} (diff: {diff})"
    );
}

/// Assert that a rectangle is approximately equal to another.
pub fn assert_rect_approx_eq(actual: Rect, expected: Rect, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{msg} - x"));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{msg} - y"));
    assert_approx_eq(actual.width, expected.width, tolerance, &format!("{msg} - width"));
    assert_approx_eq(actual.height, expected.height, tolerance, &format!("{msg} - height"));
}

/// Assert that no two rectangles share interior area.
pub fn assert_no_overlap(rects: &[Rect], msg: &str) {
    for (index, first) in rects.iter().enumerate() {
        for (offset, second) in rects[index + 1..].iter().enumerate() {
            assert!(
                !first.intersects(second),
                "{msg}: rect {index} {first:?} overlaps rect {} {second:?}",
                index + offset + 1
            );
        }
    }
}
