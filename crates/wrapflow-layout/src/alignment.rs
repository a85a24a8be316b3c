//! Alignment guides for positioning items within the depth of a line

/// Alignment across both axes, used as the anchor of a placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alignment {
    /// Horizontal alignment component.
    pub horizontal: HorizontalAlignment,
    /// Vertical alignment component.
    pub vertical: VerticalAlignment,
}

impl Alignment {
    /// Creates a new [`Alignment`] from explicit horizontal and vertical components.
    pub const fn new(horizontal: HorizontalAlignment, vertical: VerticalAlignment) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Anchor at the top-start corner. Flow placements always use it.
    pub const TOP_START: Self = Self::new(HorizontalAlignment::Start, VerticalAlignment::Top);
}

/// Alignment along the horizontal axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HorizontalAlignment {
    Start,
    CenterHorizontally,
    End,
}

impl HorizontalAlignment {
    /// Position of the guide as a fraction of the item's width.
    pub fn fraction(self) -> f32 {
        match self {
            HorizontalAlignment::Start => 0.0,
            HorizontalAlignment::CenterHorizontally => 0.5,
            HorizontalAlignment::End => 1.0,
        }
    }

    /// Default guide offset inside an item `width` wide.
    pub fn offset_in(self, width: f32) -> f32 {
        self.fraction() * width
    }
}

/// Alignment along the vertical axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerticalAlignment {
    Top,
    CenterVertically,
    Bottom,
}

impl VerticalAlignment {
    pub fn fraction(self) -> f32 {
        match self {
            VerticalAlignment::Top => 0.0,
            VerticalAlignment::CenterVertically => 0.5,
            VerticalAlignment::Bottom => 1.0,
        }
    }

    /// Default guide offset inside an item `height` tall.
    pub fn offset_in(self, height: f32) -> f32 {
        self.fraction() * height
    }
}

/// A reference offset inside an item, used to position it within a line.
///
/// The flow layout reads the guide from the item's [`Dimensions`](crate::Dimensions)
/// and interpolates the item's position across the line's depth: a guide at the
/// item's start keeps it at the start of the line, a guide at its end pushes it
/// to the end, and anything in between lands proportionally.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlignmentGuide {
    Horizontal(HorizontalAlignment),
    Vertical(VerticalAlignment),
    /// A custom guide; items that do not define it report 0.
    Named(&'static str),
}

impl From<HorizontalAlignment> for AlignmentGuide {
    fn from(alignment: HorizontalAlignment) -> Self {
        AlignmentGuide::Horizontal(alignment)
    }
}

impl From<VerticalAlignment> for AlignmentGuide {
    fn from(alignment: VerticalAlignment) -> Self {
        AlignmentGuide::Vertical(alignment)
    }
}

#[cfg(test)]
#[path = "tests/alignment_tests.rs"]
mod tests;
