//! wt-history: archived well snapshots and point-in-time lookup.

pub mod registry;
pub mod series;
pub mod state;

pub use registry::WellHistory;
pub use series::{TimeKey, WellTimeSeries};
pub use state::WellState;

pub type HistoryResult<T> = Result<T, HistoryError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum HistoryError {
    #[error("Snapshot of well {got} added to the history of well {expected}")]
    WellNameMismatch { expected: String, got: String },

    #[error("Well not found: {0}")]
    UnknownWell(String),
}
