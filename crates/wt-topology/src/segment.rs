//! The segment node.

use wt_core::{Real, SegmentIdx};
use wt_restart::{
    RsegValues, WELL_SEGMENT_BRANCH_INACTIVE_VALUE, WELL_SEGMENT_BRANCH_MAIN_STEM_VALUE,
    WELL_SEGMENT_OUTLET_END_VALUE,
};

/// Outlet id of a wellhead-adjacent segment.
pub const OUTLET_END: i32 = WELL_SEGMENT_OUTLET_END_VALUE;
/// Branch id of the well's primary bore.
pub const MAIN_STEM: i32 = WELL_SEGMENT_BRANCH_MAIN_STEM_VALUE;
/// Branch id of a segment excluded from the active topology.
pub const INACTIVE: i32 = WELL_SEGMENT_BRANCH_INACTIVE_VALUE;

/// One modelled length of a multi-segment well.
///
/// Segments live in a [`SegmentSet`](crate::SegmentSet) arena. The outlet
/// link is a handle into that arena, never an owning reference, and is only
/// written by [`SegmentSet::link`](crate::SegmentSet::link).
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    id: i32,
    outlet_id: i32,
    branch_id: i32,
    depth: Real,
    length: Real,
    total_length: Real,
    diameter: Real,
    pub(crate) outlet: Option<SegmentIdx>,
    pub(crate) link_count: u32,
}

impl Segment {
    /// Unlinked segment from one ISEG row and its RSEG attributes.
    pub fn new(id: i32, outlet_id: i32, branch_id: i32, attrs: RsegValues) -> Self {
        Self {
            id,
            outlet_id,
            branch_id,
            depth: attrs.depth,
            length: attrs.length,
            total_length: attrs.total_length,
            diameter: attrs.diameter,
            outlet: None,
            link_count: 0,
        }
    }

    /// Simulator segment id, 1-based and unique within the well.
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Id of the segment this one drains into, or [`OUTLET_END`].
    pub fn outlet_id(&self) -> i32 {
        self.outlet_id
    }

    /// Branch number; [`INACTIVE`] for segments outside the topology.
    pub fn branch_id(&self) -> i32 {
        self.branch_id
    }

    /// Handle of the resolved outlet segment; `None` before linking and for
    /// wellhead-adjacent segments.
    pub fn outlet(&self) -> Option<SegmentIdx> {
        self.outlet
    }

    /// Number of segments currently linked to this one as their outlet.
    pub fn link_count(&self) -> u32 {
        self.link_count
    }

    /// Whether the segment takes part in the active topology.
    pub fn active(&self) -> bool {
        self.branch_id != INACTIVE
    }

    /// On the primary bore.
    pub fn main_stem(&self) -> bool {
        self.branch_id == MAIN_STEM
    }

    /// Drains straight to the wellhead.
    pub fn nearest_wellhead(&self) -> bool {
        self.outlet_id == OUTLET_END
    }

    /// Whether `candidate` is the segment this one drains into.
    pub fn accepts_outlet(&self, candidate: &Segment) -> bool {
        candidate.id == self.outlet_id && candidate.id != self.id
    }

    /// Depth of the segment node.
    pub fn depth(&self) -> Real {
        self.depth
    }

    /// Segment length.
    pub fn length(&self) -> Real {
        self.length
    }

    /// Tubing length from the wellhead to this node.
    pub fn total_length(&self) -> Real {
        self.total_length
    }

    /// Tubing diameter.
    pub fn diameter(&self) -> Real {
        self.diameter
    }
}
