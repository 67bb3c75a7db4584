//! Restart record errors.

use thiserror::Error;
use wt_core::WtError;
use wt_grid::GridId;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RestartError {
    #[error("Missing {keyword} record for well {well} in grid {grid}")]
    MissingRecord {
        keyword: &'static str,
        grid: GridId,
        well: usize,
    },

    #[error("{keyword} record too short: need index {needed}, have {len} values")]
    RecordTooShort {
        keyword: &'static str,
        needed: usize,
        len: usize,
    },

    #[error("Well {well} out of range (grid {grid} has {nwells} wells)")]
    WellOutOfRange {
        grid: GridId,
        well: usize,
        nwells: usize,
    },

    #[error("Grid {0} has no records in this report")]
    UnknownGrid(GridId),

    #[error("Bad value in {keyword}: {source}")]
    BadValue {
        keyword: &'static str,
        #[source]
        source: WtError,
    },

    #[error("JSON error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for RestartError {
    fn from(err: serde_json::Error) -> Self {
        RestartError::Json(err.to_string())
    }
}

pub type RestartResult<T> = Result<T, RestartError>;
