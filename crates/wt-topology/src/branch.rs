//! Branch decomposition.
//!
//! A branch is the maximal outlet chain of segments sharing a branch id.
//! Only its deepest ("start") segment is stored; the members are recovered
//! by walking outlets from there until the chain reaches the wellhead or
//! drains into a different branch.

use std::collections::BTreeMap;

use wt_core::SegmentIdx;

use crate::error::{TopologyError, TopologyResult};
use crate::segment::Segment;
use crate::segment_set::{OutletWalk, SegmentSet};
use crate::validate;

/// One branch: its id and deepest segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Branch {
    pub branch_id: i32,
    pub start: SegmentIdx,
}

impl Branch {
    /// Members of this branch from the start segment towards the wellhead.
    pub fn walk<'a>(&self, segments: &'a SegmentSet) -> BranchWalk<'a> {
        BranchWalk {
            set: segments,
            branch_id: self.branch_id,
            next: Some(self.start),
            remaining: segments.len(),
        }
    }

    /// The segment of another branch this branch drains into, if any.
    pub fn junction(&self, segments: &SegmentSet) -> Option<SegmentIdx> {
        let last = self.walk(segments).last()?;
        let outlet = segments.get(last)?.outlet()?;
        let outlet_branch = segments.get(outlet)?.branch_id();
        (outlet_branch != self.branch_id).then_some(outlet)
    }

    /// Full outlet chain from the start segment to the wellhead.
    pub fn path_to_wellhead<'a>(&self, segments: &'a SegmentSet) -> OutletWalk<'a> {
        segments.outlet_chain(self.start)
    }
}

/// Restartable, bounded walk over one branch's members.
#[derive(Debug, Clone)]
pub struct BranchWalk<'a> {
    set: &'a SegmentSet,
    branch_id: i32,
    next: Option<SegmentIdx>,
    remaining: usize,
}

impl Iterator for BranchWalk<'_> {
    type Item = SegmentIdx;

    fn next(&mut self) -> Option<SegmentIdx> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next?;
        self.remaining -= 1;
        self.next = self
            .set
            .get(current)
            .and_then(Segment::outlet)
            .filter(|&o| {
                self.set
                    .get(o)
                    .is_some_and(|s| s.branch_id() == self.branch_id)
            });
        Some(current)
    }
}

/// Branches of one well, in order of first appearance of each branch id.
///
/// A branch id normally names one chain. A well with several wellhead
/// entries has one independent chain per entry under the same id; each
/// chain is its own [`Branch`] and id lookups return the first of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchCollection {
    branches: Vec<Branch>,
    index: BTreeMap<i32, usize>,
}

impl BranchCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decompose a linked segment set into branches.
    ///
    /// A start is an active member not fed by another member of the same
    /// branch. Starts whose chains never meet are independent branches;
    /// two starts whose chains merge are a fork and rejected. Inactive
    /// segments never form branches.
    pub fn decompose(segments: &SegmentSet) -> TopologyResult<Self> {
        validate::require_linked(segments)?;

        // Segments fed by a same-branch segment cannot start their branch.
        let mut fed = vec![false; segments.len()];
        for (_, segment) in segments.iter().filter(|(_, s)| s.active()) {
            if let Some(outlet) = segment.outlet()
                && segments
                    .get(outlet)
                    .is_some_and(|o| o.branch_id() == segment.branch_id())
            {
                fed[outlet.slot()] = true;
            }
        }

        let mut collection = Self::new();
        let mut seen: Vec<i32> = Vec::new();
        for (idx, segment) in segments.iter().filter(|(_, s)| s.active()) {
            let branch_id = segment.branch_id();
            if !seen.contains(&branch_id) {
                seen.push(branch_id);
            }
            if !fed[idx.slot()] {
                collection.branches.push(Branch {
                    branch_id,
                    start: idx,
                });
            }
        }

        if let Some(&branch) = seen
            .iter()
            .find(|&&b| !collection.branches.iter().any(|br| br.branch_id == b))
        {
            return Err(TopologyError::BranchWithoutStart { branch });
        }

        // Every member belongs to exactly one chain.
        let mut claimed: Vec<Option<SegmentIdx>> = vec![None; segments.len()];
        for branch in &collection.branches {
            for member in branch.walk(segments) {
                if let Some(other) = claimed[member.slot()] {
                    return Err(TopologyError::AmbiguousBranchStart {
                        branch: branch.branch_id,
                        first: segments.get(other).map_or(0, Segment::id),
                        second: segments.get(branch.start).map_or(0, Segment::id),
                    });
                }
                claimed[member.slot()] = Some(branch.start);
            }
        }

        // Keep first-appearance order of branch ids, then row order of starts.
        collection
            .branches
            .sort_by_key(|b| seen.iter().position(|&id| id == b.branch_id));
        collection.reindex();
        Ok(collection)
    }

    fn reindex(&mut self) {
        self.index.clear();
        for (i, branch) in self.branches.iter().enumerate() {
            self.index.entry(branch.branch_id).or_insert(i);
        }
    }

    /// Number of branches (chains), not of distinct branch ids.
    pub fn len(&self) -> usize {
        self.branches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }

    /// Whether any chain carries `branch_id`.
    pub fn has_branch(&self, branch_id: i32) -> bool {
        self.index.contains_key(&branch_id)
    }

    /// First chain with `branch_id`.
    pub fn get(&self, branch_id: i32) -> Option<&Branch> {
        self.index.get(&branch_id).map(|&i| &self.branches[i])
    }

    /// Every chain with `branch_id`, in row order of their starts.
    pub fn chains(&self, branch_id: i32) -> impl Iterator<Item = &Branch> {
        self.branches
            .iter()
            .filter(move |b| b.branch_id == branch_id)
    }

    /// Start segment of the first chain with `branch_id`.
    pub fn start_segment(&self, branch_id: i32) -> Option<SegmentIdx> {
        self.get(branch_id).map(|b| b.start)
    }

    /// Branch by position.
    pub fn iget(&self, index: usize) -> Option<&Branch> {
        self.branches.get(index)
    }

    /// Start segment of the branch at `index`.
    pub fn iget_start_segment(&self, index: usize) -> Option<SegmentIdx> {
        self.iget(index).map(|b| b.start)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Branch> {
        self.branches.iter()
    }
}
