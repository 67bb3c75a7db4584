//! Topology error types.

use thiserror::Error;
use wt_grid::{GridError, GridId};
use wt_restart::RestartError;

/// Structural inconsistencies found while reconstructing a well.
///
/// Any of these aborts reconstruction of the affected snapshot.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TopologyError {
    #[error("Segment {segment} listed twice")]
    DuplicateSegmentId { segment: i32 },

    #[error("Segment {segment} has outlet {outlet}, which is not in the segment set")]
    UnknownOutlet { segment: i32, outlet: i32 },

    #[error("Segment {segment} names itself as outlet")]
    SelfOutlet { segment: i32 },

    #[error("Active segment {segment} drains into inactive segment {outlet}")]
    InactiveOutlet { segment: i32, outlet: i32 },

    #[error("Outlet chain from segment {segment} does not reach the wellhead within {limit} steps")]
    OutletCycle { segment: i32, limit: usize },

    #[error("Segment {segment} has not been linked to its outlet {outlet}")]
    Unlinked { segment: i32, outlet: i32 },

    #[error("Branch {branch} has no start segment")]
    BranchWithoutStart { branch: i32 },

    #[error("Branch {branch} forks: chains from segments {first} and {second} merge")]
    AmbiguousBranchStart { branch: i32, first: i32, second: i32 },

    #[error("Connection {conn} in grid {grid} refers to unknown segment {segment}")]
    UnknownConnectionSegment {
        conn: usize,
        grid: GridId,
        segment: i32,
    },

    #[error("Restart data: {0}")]
    Restart(#[from] RestartError),

    #[error("Grid: {0}")]
    Grid(#[from] GridError),
}

pub type TopologyResult<T> = Result<T, TopologyError>;

