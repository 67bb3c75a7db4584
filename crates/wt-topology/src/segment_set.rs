//! Segment arena for one well at one report time.

use std::collections::HashMap;

use wt_core::SegmentIdx;

use crate::error::{TopologyError, TopologyResult};
use crate::segment::Segment;

/// All segments of one well at one report time, in table row order.
///
/// The set owns its segments; outlets and branch starts are handles into it,
/// so tearing the set down can never leave a dangling outlet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentSet {
    segments: Vec<Segment>,
    by_id: HashMap<i32, SegmentIdx>,
}

impl SegmentSet {
    /// Create a new empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty set with room for `capacity` segments.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            segments: Vec::with_capacity(capacity),
            by_id: HashMap::with_capacity(capacity),
        }
    }

    /// Append a segment and return its handle.
    pub fn insert(&mut self, segment: Segment) -> TopologyResult<SegmentIdx> {
        if self.by_id.contains_key(&segment.id()) {
            return Err(TopologyError::DuplicateSegmentId {
                segment: segment.id(),
            });
        }
        let idx = SegmentIdx::from_usize(self.segments.len());
        self.by_id.insert(segment.id(), idx);
        self.segments.push(segment);
        Ok(idx)
    }

    /// Number of segments, active or not.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments taking part in the active topology.
    pub fn active_len(&self) -> usize {
        self.segments.iter().filter(|s| s.active()).count()
    }

    /// Segment behind a handle.
    pub fn get(&self, idx: SegmentIdx) -> Option<&Segment> {
        self.segments.get(idx.slot())
    }

    /// Look up a segment by its simulator id.
    pub fn get_by_id(&self, id: i32) -> Option<&Segment> {
        self.handle(id).and_then(|idx| self.get(idx))
    }

    /// Handle of the segment with simulator id `id`.
    pub fn handle(&self, id: i32) -> Option<SegmentIdx> {
        self.by_id.get(&id).copied()
    }

    /// Whether a segment with id `id` exists.
    pub fn has_segment(&self, id: i32) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Segment at row position `index`.
    pub fn iget(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    /// All segments in row order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Handles and segments in row order.
    pub fn iter(&self) -> impl Iterator<Item = (SegmentIdx, &Segment)> {
        self.segments
            .iter()
            .enumerate()
            .map(|(i, s)| (SegmentIdx::from_usize(i), s))
    }

    /// Active wellhead-adjacent segments.
    pub fn roots(&self) -> impl Iterator<Item = (SegmentIdx, &Segment)> {
        self.iter()
            .filter(|(_, s)| s.active() && s.nearest_wellhead())
    }

    /// The resolved outlet of a segment.
    pub fn outlet_of(&self, idx: SegmentIdx) -> Option<&Segment> {
        self.get(idx)?.outlet().and_then(|o| self.get(o))
    }

    /// Link `segment` to `candidate` if `candidate` is its outlet.
    ///
    /// Returns `false`, leaving both segments untouched, when the ids do not
    /// match. Linking an already linked pair again is a no-op that returns
    /// `true`; the candidate's link count only moves on the first link.
    pub fn link(&mut self, segment: SegmentIdx, candidate: SegmentIdx) -> bool {
        let (Some(seg), Some(cand)) = (self.get(segment), self.get(candidate)) else {
            return false;
        };
        if segment == candidate || !seg.accepts_outlet(cand) {
            return false;
        }
        if seg.outlet == Some(candidate) {
            return true;
        }

        self.segments[segment.slot()].outlet = Some(candidate);
        self.segments[candidate.slot()].link_count += 1;
        true
    }

    /// Like [`SegmentSet::link`], for callers that have already matched ids.
    ///
    /// # Panics
    ///
    /// Panics if `candidate` is not the outlet of `segment`.
    pub fn link_strict(&mut self, segment: SegmentIdx, candidate: SegmentIdx) {
        if !self.link(segment, candidate) {
            panic!(
                "segment {:?} cannot be linked to {:?}: outlet id mismatch",
                self.get(segment).map(Segment::id),
                self.get(candidate).map(Segment::id),
            );
        }
    }

    /// Outlet chain from `start` towards the wellhead, `start` included.
    ///
    /// The walk stops after `len()` segments even if the chain loops.
    pub fn outlet_chain(&self, start: SegmentIdx) -> OutletWalk<'_> {
        OutletWalk {
            set: self,
            next: self.get(start).map(|_| start),
            remaining: self.len(),
        }
    }
}

/// Bounded walk along outlet links.
#[derive(Debug, Clone)]
pub struct OutletWalk<'a> {
    set: &'a SegmentSet,
    next: Option<SegmentIdx>,
    remaining: usize,
}

impl Iterator for OutletWalk<'_> {
    type Item = SegmentIdx;

    fn next(&mut self) -> Option<SegmentIdx> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next?;
        self.remaining -= 1;
        self.next = self.set.get(current).and_then(Segment::outlet);
        Some(current)
    }
}
