use super::*;
use crate::proposal::ProposedSize;

#[test]
fn sentinel_proposals_return_range_ends() {
    let constraints = Constraints::new(Size::new(2.0, 1.0), Size::new(8.0, 4.0));
    let ideal = Size::new(5.0, 2.0);
    assert_eq!(constraints.size_for(SizeProposal::Min, ideal), Size::new(2.0, 1.0));
    assert_eq!(constraints.size_for(SizeProposal::Ideal, ideal), ideal);
    assert_eq!(constraints.size_for(SizeProposal::Max, ideal), Size::new(8.0, 4.0));
}

#[test]
fn exact_proposal_is_clamped_per_axis() {
    let constraints = Constraints::new(Size::new(2.0, 1.0), Size::new(8.0, 4.0));
    let ideal = Size::new(5.0, 2.0);
    let proposal = SizeProposal::Exact(ProposedSize::fixed(20.0, 0.0));
    assert_eq!(constraints.size_for(proposal, ideal), Size::new(8.0, 1.0));
}

#[test]
fn unspecified_axis_falls_back_to_ideal() {
    let constraints = Constraints::unbounded();
    let ideal = Size::new(5.0, 2.0);
    let proposal = SizeProposal::Exact(ProposedSize::new(Some(7.0), None));
    assert_eq!(constraints.size_for(proposal, ideal), Size::new(7.0, 2.0));
}

#[test]
fn tight_constraints_ignore_proposals() {
    let constraints = Constraints::tight(3.0, 3.0);
    assert!(constraints.is_tight());
    let proposal = SizeProposal::Exact(ProposedSize::INFINITY);
    assert_eq!(
        constraints.size_for(proposal, Size::new(3.0, 3.0)),
        Size::new(3.0, 3.0)
    );
}
