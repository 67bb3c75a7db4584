//! Post-link structural checks.

use wt_core::SegmentIdx;

use crate::error::{TopologyError, TopologyResult};
use crate::segment_set::SegmentSet;

/// Check a linked set: no active segment drains into an inactive one and
/// every outlet chain reaches a root within `len()` steps.
pub(crate) fn validate_links(segments: &SegmentSet) -> TopologyResult<()> {
    for (_, segment) in segments.iter() {
        if !segment.active() {
            continue;
        }
        if let Some(outlet) = segment.outlet().and_then(|o| segments.get(o))
            && !outlet.active()
        {
            return Err(TopologyError::InactiveOutlet {
                segment: segment.id(),
                outlet: outlet.id(),
            });
        }
    }
    check_acyclic(segments)
}

/// Bounded walk from every segment; chains already proven to reach a root
/// are not walked again.
fn check_acyclic(segments: &SegmentSet) -> TopologyResult<()> {
    let limit = segments.len();
    let mut reaches_root = vec![false; limit];
    let mut walked: Vec<SegmentIdx> = Vec::new();

    for (start, segment) in segments.iter() {
        if reaches_root[start.slot()] {
            continue;
        }
        walked.clear();
        let mut current = Some(start);

        while let Some(idx) = current {
            if reaches_root[idx.slot()] {
                break;
            }
            if walked.len() == limit {
                return Err(TopologyError::OutletCycle {
                    segment: segment.id(),
                    limit,
                });
            }
            walked.push(idx);
            current = segments.get(idx).and_then(|s| s.outlet());
        }

        for idx in &walked {
            reaches_root[idx.slot()] = true;
        }
    }
    Ok(())
}

/// Check every non-root segment has been linked.
pub(crate) fn require_linked(segments: &SegmentSet) -> TopologyResult<()> {
    for (_, segment) in segments.iter() {
        if !segment.nearest_wellhead() && segment.outlet().is_none() {
            return Err(TopologyError::Unlinked {
                segment: segment.id(),
                outlet: segment.outlet_id(),
            });
        }
    }
    Ok(())
}
