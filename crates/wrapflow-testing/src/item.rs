//! Configurable layout item for tests

use std::cell::Cell;

use wrapflow_graphics::{Point, Size};
use wrapflow_layout::{
    Alignment, AlignmentGuide, Constraints, Dimensions, LayoutItem, ProposedSize, SizeProposal,
    ViewSpacing,
};

/// Where and how large an item ended up after placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub position: Point,
    pub size: Size,
    pub proposal: ProposedSize,
}

/// A layout item with explicit minimum, ideal and maximum sizes.
///
/// Proposals are answered by clamping into the min/max range, with unspecified
/// axes falling back to the ideal size. Placements are recorded so tests can
/// inspect them afterwards.
#[derive(Debug)]
pub struct TestItem {
    constraints: Constraints,
    ideal: Size,
    priority: f32,
    spacing: ViewSpacing,
    guides: Vec<(AlignmentGuide, f32)>,
    placement: Cell<Option<Placement>>,
}

impl TestItem {
    /// A rigid item of the given size.
    pub fn new(width: f32, height: f32) -> Self {
        let size = Size::new(width, height);
        Self::with_range(size, size, size)
    }

    /// A flexible item that prefers its minimum size.
    pub fn flexible(min: Size, max: Size) -> Self {
        Self::with_range(min, min, max)
    }

    pub fn with_range(min: Size, ideal: Size, max: Size) -> Self {
        Self {
            constraints: Constraints::new(min, max),
            ideal,
            priority: 0.0,
            spacing: ViewSpacing::ZERO,
            guides: Vec::new(),
            placement: Cell::new(None),
        }
    }

    pub fn with_ideal(mut self, ideal: Size) -> Self {
        self.ideal = ideal;
        self
    }

    pub fn with_priority(mut self, priority: f32) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_spacing(mut self, spacing: ViewSpacing) -> Self {
        self.spacing = spacing;
        self
    }

    /// Overrides an alignment guide with an absolute offset.
    pub fn with_guide(mut self, guide: impl Into<AlignmentGuide>, value: f32) -> Self {
        self.guides.push((guide.into(), value));
        self
    }

    pub fn placement(&self) -> Option<Placement> {
        self.placement.get()
    }

    /// Forgets the last placement.
    pub fn reset(&self) {
        self.placement.set(None);
    }
}

impl LayoutItem for TestItem {
    fn spacing(&self) -> ViewSpacing {
        self.spacing
    }

    fn priority(&self) -> f32 {
        self.priority
    }

    fn size_that_fits(&self, proposal: SizeProposal) -> Size {
        self.constraints.size_for(proposal, self.ideal)
    }

    fn dimensions(&self, proposal: SizeProposal) -> Dimensions {
        self.guides.iter().fold(
            Dimensions::new(self.size_that_fits(proposal)),
            |dimensions, (guide, value)| dimensions.with_guide(*guide, *value),
        )
    }

    fn place(&self, position: Point, _anchor: Alignment, proposal: ProposedSize) {
        let size = self.size_that_fits(SizeProposal::Exact(proposal));
        self.placement.set(Some(Placement {
            position,
            size,
            proposal,
        }));
    }
}

/// Builds `times` items from `factory`.
pub fn repeated<T>(factory: impl Fn() -> T, times: usize) -> Vec<T> {
    (0..times).map(|_| factory()).collect()
}
