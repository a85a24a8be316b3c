use smallvec::SmallVec;
use wrapflow_graphics::Size;

use crate::alignment::AlignmentGuide;

/// An item's size together with its alignment guides.
///
/// Guides that were not set explicitly fall back to their natural position:
/// start/top at 0, center at half the extent, end/bottom at the full extent.
/// Named guides default to 0.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Dimensions {
    pub size: Size,
    guides: SmallVec<[(AlignmentGuide, f32); 2]>,
}

impl Dimensions {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            guides: SmallVec::new(),
        }
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// Overrides the offset of `guide`.
    pub fn with_guide(mut self, guide: impl Into<AlignmentGuide>, value: f32) -> Self {
        let guide = guide.into();
        match self.guides.iter_mut().find(|(existing, _)| *existing == guide) {
            Some(entry) => entry.1 = value,
            None => self.guides.push((guide, value)),
        }
        self
    }

    /// Offset of `guide` from the item's top-left corner.
    pub fn guide(&self, guide: impl Into<AlignmentGuide>) -> f32 {
        let guide = guide.into();
        if let Some((_, value)) = self.guides.iter().find(|(existing, _)| *existing == guide) {
            return *value;
        }
        match guide {
            AlignmentGuide::Horizontal(alignment) => alignment.offset_in(self.size.width),
            AlignmentGuide::Vertical(alignment) => alignment.offset_in(self.size.height),
            AlignmentGuide::Named(_) => 0.0,
        }
    }
}

impl From<Size> for Dimensions {
    fn from(size: Size) -> Self {
        Self::new(size)
    }
}
