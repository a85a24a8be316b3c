use super::*;
use crate::dimensions::Dimensions;
use wrapflow_graphics::Size;

#[test]
fn offsets_scale_with_extent() {
    assert_eq!(HorizontalAlignment::Start.offset_in(8.0), 0.0);
    assert_eq!(HorizontalAlignment::CenterHorizontally.offset_in(8.0), 4.0);
    assert_eq!(HorizontalAlignment::End.offset_in(8.0), 8.0);
    assert_eq!(VerticalAlignment::Top.offset_in(3.0), 0.0);
    assert_eq!(VerticalAlignment::CenterVertically.offset_in(3.0), 1.5);
    assert_eq!(VerticalAlignment::Bottom.offset_in(3.0), 3.0);
}

#[test]
fn dimensions_fall_back_to_default_offsets() {
    let dimensions = Dimensions::new(Size::new(6.0, 4.0));
    assert_eq!(dimensions.guide(HorizontalAlignment::End), 6.0);
    assert_eq!(dimensions.guide(VerticalAlignment::CenterVertically), 2.0);
    assert_eq!(dimensions.guide(AlignmentGuide::Named("baseline")), 0.0);
}

#[test]
fn explicit_guides_override_defaults() {
    let dimensions = Dimensions::new(Size::new(6.0, 4.0))
        .with_guide(VerticalAlignment::Bottom, 3.0)
        .with_guide(AlignmentGuide::Named("baseline"), 2.5)
        .with_guide(VerticalAlignment::Bottom, 3.5);
    assert_eq!(dimensions.guide(VerticalAlignment::Bottom), 3.5);
    assert_eq!(dimensions.guide(AlignmentGuide::Named("baseline")), 2.5);
    assert_eq!(dimensions.guide(VerticalAlignment::Top), 0.0);
}
