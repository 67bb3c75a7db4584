//! Outlet resolution.

use tracing::trace;
use wt_core::SegmentIdx;

use crate::error::{TopologyError, TopologyResult};
use crate::segment_set::SegmentSet;
use crate::validate;

/// Resolve every segment's outlet id into a handle within the same set.
///
/// After a successful pass the set is a forest rooted at the
/// wellhead-adjacent segments: every outlet exists, no active segment
/// drains into an inactive one, and every outlet chain reaches a root.
/// Returns the number of links made.
pub fn link_segments(segments: &mut SegmentSet) -> TopologyResult<usize> {
    let mut pending: Vec<(SegmentIdx, SegmentIdx)> = Vec::new();

    for (idx, segment) in segments.iter() {
        if segment.nearest_wellhead() {
            continue;
        }
        if segment.outlet_id() == segment.id() {
            return Err(TopologyError::SelfOutlet {
                segment: segment.id(),
            });
        }
        let outlet = segments
            .handle(segment.outlet_id())
            .ok_or(TopologyError::UnknownOutlet {
                segment: segment.id(),
                outlet: segment.outlet_id(),
            })?;
        pending.push((idx, outlet));
    }

    for &(idx, outlet) in &pending {
        segments.link_strict(idx, outlet);
    }

    let total: usize = segments
        .segments()
        .iter()
        .map(|s| s.link_count() as usize)
        .sum();
    debug_assert_eq!(total, pending.len(), "link counts disagree with links made");

    trace!(segments = segments.len(), links = pending.len(), "linked segment set");

    validate::validate_links(segments)?;
    Ok(pending.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::{INACTIVE, MAIN_STEM, OUTLET_END, Segment};
    use wt_restart::RsegValues;

    fn set_of(rows: &[(i32, i32, i32)]) -> SegmentSet {
        let mut set = SegmentSet::new();
        for &(id, outlet, branch) in rows {
            set.insert(Segment::new(id, outlet, branch, RsegValues::default()))
                .unwrap();
        }
        set
    }

    #[test]
    fn links_three_segment_well() {
        let mut set = set_of(&[(1, OUTLET_END, MAIN_STEM), (2, 1, MAIN_STEM), (3, 1, 2)]);
        assert_eq!(link_segments(&mut set).unwrap(), 2);

        let root = set.get_by_id(1).unwrap();
        assert_eq!(root.link_count(), 2);
        assert!(root.outlet().is_none());
        assert_eq!(set.get_by_id(2).unwrap().outlet(), set.handle(1));
        assert_eq!(set.get_by_id(3).unwrap().outlet(), set.handle(1));
    }

    #[test]
    fn unknown_outlet_is_structural_error() {
        let mut set = set_of(&[(1, OUTLET_END, MAIN_STEM), (2, 9, MAIN_STEM)]);
        assert_eq!(
            link_segments(&mut set),
            Err(TopologyError::UnknownOutlet {
                segment: 2,
                outlet: 9
            })
        );
        // Nothing was linked.
        assert_eq!(set.get_by_id(1).unwrap().link_count(), 0);
    }

    #[test]
    fn self_outlet_is_structural_error() {
        let mut set = set_of(&[(1, OUTLET_END, MAIN_STEM), (2, 2, MAIN_STEM)]);
        assert_eq!(
            link_segments(&mut set),
            Err(TopologyError::SelfOutlet { segment: 2 })
        );
    }

    #[test]
    fn cycle_is_detected() {
        let mut set = set_of(&[
            (1, OUTLET_END, MAIN_STEM),
            (2, 3, MAIN_STEM),
            (3, 4, MAIN_STEM),
            (4, 2, MAIN_STEM),
        ]);
        assert!(matches!(
            link_segments(&mut set),
            Err(TopologyError::OutletCycle { limit: 4, .. })
        ));
    }

    #[test]
    fn active_segment_must_not_drain_into_inactive_one() {
        let mut set = set_of(&[(1, OUTLET_END, INACTIVE), (2, 1, MAIN_STEM)]);
        assert_eq!(
            link_segments(&mut set),
            Err(TopologyError::InactiveOutlet {
                segment: 2,
                outlet: 1
            })
        );
    }

    #[test]
    fn inactive_padding_rows_are_roots() {
        let mut set = set_of(&[
            (1, OUTLET_END, MAIN_STEM),
            (2, 1, MAIN_STEM),
            (3, OUTLET_END, INACTIVE),
        ]);
        assert_eq!(link_segments(&mut set).unwrap(), 1);
        assert_eq!(set.roots().count(), 1);
        assert_eq!(set.active_len(), 2);
    }
}
