use wrapflow_graphics::{Point, Size};

/// Represents the primary axis of a flow layout.
///
/// Items are laid out along the primary axis (breadth) until a line is full,
/// then the layout advances along the cross axis (depth) to start a new line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal primary axis (HFlow).
    /// Lines run left to right and stack top to bottom.
    Horizontal,

    /// Vertical primary axis (VFlow).
    /// Lines run top to bottom and stack left to right.
    Vertical,
}

impl Axis {
    /// Returns the opposite axis.
    #[inline]
    pub fn cross_axis(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// Returns true if this is the horizontal axis.
    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Axis::Horizontal)
    }

    /// Returns true if this is the vertical axis.
    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Axis::Vertical)
    }

    /// Extent of `size` along this axis.
    #[inline]
    pub fn value_of(self, size: Size) -> f32 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }
}

/// A size or offset expressed relative to an [`Axis`].
///
/// `breadth` runs along the primary axis and `depth` along the cross axis, so
/// the same arithmetic serves both horizontal and vertical flows.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisSize {
    pub breadth: f32,
    pub depth: f32,
}

impl AxisSize {
    pub const ZERO: AxisSize = AxisSize {
        breadth: 0.0,
        depth: 0.0,
    };

    pub const fn new(breadth: f32, depth: f32) -> Self {
        Self { breadth, depth }
    }

    pub fn from_size(size: Size, axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => Self::new(size.width, size.height),
            Axis::Vertical => Self::new(size.height, size.width),
        }
    }

    pub fn from_point(point: Point, axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => Self::new(point.x, point.y),
            Axis::Vertical => Self::new(point.y, point.x),
        }
    }

    pub fn to_size(self, axis: Axis) -> Size {
        match axis {
            Axis::Horizontal => Size::new(self.breadth, self.depth),
            Axis::Vertical => Size::new(self.depth, self.breadth),
        }
    }

    pub fn to_point(self, axis: Axis) -> Point {
        match axis {
            Axis::Horizontal => Point::new(self.breadth, self.depth),
            Axis::Vertical => Point::new(self.depth, self.breadth),
        }
    }
}
