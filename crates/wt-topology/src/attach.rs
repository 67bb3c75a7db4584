//! Attaching grid connections to the segments they drain through.

use std::collections::{BTreeMap, HashMap};

use tracing::trace;
use wt_core::{ConnIdx, SegmentIdx};
use wt_grid::{GridId, GridSet};

use crate::connection::ConnectionCollection;
use crate::error::{TopologyError, TopologyResult};
use crate::segment_set::SegmentSet;

/// What a connection communicates through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionOwner {
    Segment(SegmentIdx),
    /// The single implicit bore of a normal well.
    MainBore,
}

/// One connection resolved against the segment set and its grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub conn: ConnIdx,
    pub owner: ConnectionOwner,
    /// Index in the connection's own grid; `None` without grid information.
    pub global_index: Option<usize>,
    /// `None` without grid information or for an inactive cell.
    pub active_index: Option<usize>,
}

/// Per-grid attachments of one well.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentConnections {
    attachments: BTreeMap<GridId, Vec<Attachment>>,
    by_owner: HashMap<(ConnectionOwner, GridId), Vec<ConnIdx>>,
}

impl SegmentConnections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach every connection of `connections` (all in one grid).
    ///
    /// With `segments` present the well is segmented and each connection
    /// must name a segment of the set. Without it every connection belongs
    /// to the main bore. Cell indices are resolved in the connection's own
    /// grid when `grids` is given.
    pub fn attach(
        &mut self,
        segments: Option<&SegmentSet>,
        connections: &ConnectionCollection,
        grids: Option<&GridSet>,
    ) -> TopologyResult<()> {
        for (conn, connection) in connections.iter() {
            let owner = match segments {
                Some(set) => {
                    let segment_id = connection.segment_id.unwrap_or(0);
                    let idx = set.handle(segment_id).ok_or_else(|| {
                        TopologyError::UnknownConnectionSegment {
                            conn: conn.slot(),
                            grid: connection.grid.clone(),
                            segment: segment_id,
                        }
                    })?;
                    ConnectionOwner::Segment(idx)
                }
                None => ConnectionOwner::MainBore,
            };

            let (global_index, active_index) = match grids {
                Some(grids) => {
                    let (i, j, k) = connection.ijk;
                    let global = grids.global_index(&connection.grid, i, j, k)?;
                    (Some(global), grids.active_index(&connection.grid, global))
                }
                None => (None, None),
            };

            trace!(conn = %conn, grid = %connection.grid, ?owner, "attached connection");
            self.by_owner
                .entry((owner, connection.grid.clone()))
                .or_default()
                .push(conn);
            self.attachments
                .entry(connection.grid.clone())
                .or_default()
                .push(Attachment {
                    conn,
                    owner,
                    global_index,
                    active_index,
                });
        }
        Ok(())
    }

    pub fn attachments(&self, grid: &GridId) -> &[Attachment] {
        self.attachments.get(grid).map_or(&[], Vec::as_slice)
    }

    pub fn grids(&self) -> impl Iterator<Item = &GridId> {
        self.attachments.keys()
    }

    pub fn segment_connections(&self, segment: SegmentIdx, grid: &GridId) -> &[ConnIdx] {
        self.owned_by(ConnectionOwner::Segment(segment), grid)
    }

    pub fn main_bore_connections(&self, grid: &GridId) -> &[ConnIdx] {
        self.owned_by(ConnectionOwner::MainBore, grid)
    }

    pub fn has_grid_connections(&self, segment: SegmentIdx, grid: &GridId) -> bool {
        !self.segment_connections(segment, grid).is_empty()
    }

    pub fn has_global_grid_connections(&self, segment: SegmentIdx) -> bool {
        self.has_grid_connections(segment, &GridId::Global)
    }

    /// Connections in `grid` owned by any member of branch `branch_id`.
    pub fn branch_connections(
        &self,
        segments: &SegmentSet,
        branch_id: i32,
        grid: &GridId,
    ) -> Vec<ConnIdx> {
        self.attachments(grid)
            .iter()
            .filter(|a| match a.owner {
                ConnectionOwner::Segment(idx) => segments
                    .get(idx)
                    .is_some_and(|s| s.branch_id() == branch_id),
                ConnectionOwner::MainBore => false,
            })
            .map(|a| a.conn)
            .collect()
    }

    fn owned_by(&self, owner: ConnectionOwner, grid: &GridId) -> &[ConnIdx] {
        self.by_owner
            .get(&(owner, grid.clone()))
            .map_or(&[], Vec::as_slice)
    }
}
