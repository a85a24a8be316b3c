use crate::axis::Axis;

/// Preferred spacing an item wants around itself, per axis.
///
/// The distance between two neighbours is the larger of their preferences, so
/// `a.distance(&b, axis) == b.distance(&a, axis)`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ViewSpacing {
    pub horizontal: f32,
    pub vertical: f32,
}

impl ViewSpacing {
    pub const ZERO: ViewSpacing = ViewSpacing {
        horizontal: 0.0,
        vertical: 0.0,
    };

    pub const fn new(horizontal: f32, vertical: f32) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    pub const fn uniform(spacing: f32) -> Self {
        Self::new(spacing, spacing)
    }

    pub fn value_on(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        }
    }

    /// Distance to keep between `self` and `other` along `axis`.
    pub fn distance(&self, other: &ViewSpacing, axis: Axis) -> f32 {
        self.value_on(axis).max(other.value_on(axis))
    }

    /// Spacing that satisfies both `self` and `other`.
    pub fn union(&self, other: &ViewSpacing) -> ViewSpacing {
        ViewSpacing::new(
            self.horizontal.max(other.horizontal),
            self.vertical.max(other.vertical),
        )
    }
}
