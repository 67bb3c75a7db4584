//! Shared application service layer for the well topology engine.
//!
//! Loads a case (config, grids, restart report dumps), reconstructs every
//! well of every report and answers point-in-time queries over the
//! resulting history. Used by the CLI.

pub mod case;
pub mod config;
pub mod error;
pub mod query;
pub mod reconstruct;

pub use case::{Case, open_case, open_config, read_report};
pub use config::{CaseConfig, LoadOptions, load_case, load_grids, parse_case, validate_case};
pub use error::{AppError, AppResult};
pub use query::{
    BranchSummary, GridConnectionSummary, SegmentSummary, StateSummary, TopologySummary,
    WellSummary, latest, list_wells, snapshot, state_summary, topology_summary,
};
pub use reconstruct::{ReportOutcome, load_report, reconstruct_well};
pub use wt_history::{TimeKey, WellHistory, WellState};
