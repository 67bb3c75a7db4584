//! Grid error types.

use thiserror::Error;

use crate::grid_id::GridId;

/// Errors raised while building or querying grid index maps.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    #[error("Grid header has {len} fields, need at least {need}")]
    ShortHeader { len: usize, need: usize },

    #[error("Grid dimensions must be positive (nx={nx}, ny={ny}, nz={nz})")]
    BadDimensions { nx: i32, ny: i32, nz: i32 },

    #[error("ACTNUM has {len} values but grid {grid} has {expected} cells")]
    ActnumSize {
        grid: GridId,
        len: usize,
        expected: usize,
    },

    #[error("Cell ({i}, {j}, {k}) outside grid {grid}")]
    CellOutOfRange {
        grid: GridId,
        i: usize,
        j: usize,
        k: usize,
    },

    #[error("Grid {0} is not known")]
    UnknownGrid(GridId),

    #[error("Grid {0} registered twice")]
    DuplicateGrid(GridId),
}

pub type GridResult<T> = Result<T, GridError>;
