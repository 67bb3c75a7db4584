//! Error types for the wt-app service layer.

use std::path::PathBuf;

/// Application error type that flattens errors from the engine crates
/// into messages a front end can show directly.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Case configuration error: {0}")]
    Config(String),

    #[error("Failed to read {what} file: {path}")]
    FileRead {
        what: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Case validation failed: {0}")]
    Validation(String),

    #[error("Restart data error: {0}")]
    Restart(String),

    #[error("Grid error: {0}")]
    Grid(String),

    #[error("Well {well} at report {report_step}: {message}")]
    Topology {
        well: String,
        report_step: i32,
        message: String,
    },

    #[error("History error: {0}")]
    History(String),

    #[error("Well not found: {0}")]
    WellNotFound(String),

    #[error("No snapshot of well {well} at or before {at}")]
    NoSnapshot { well: String, at: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for wt-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<wt_restart::RestartError> for AppError {
    fn from(err: wt_restart::RestartError) -> Self {
        AppError::Restart(err.to_string())
    }
}

impl From<wt_grid::GridError> for AppError {
    fn from(err: wt_grid::GridError) -> Self {
        AppError::Grid(err.to_string())
    }
}

impl From<wt_history::HistoryError> for AppError {
    fn from(err: wt_history::HistoryError) -> Self {
        match err {
            wt_history::HistoryError::UnknownWell(name) => AppError::WellNotFound(name),
            other => AppError::History(other.to_string()),
        }
    }
}
