//! Opening a case: config, grids and every listed report.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::info;
use wt_grid::GridSet;
use wt_history::WellHistory;
use wt_restart::RestartReport;

use crate::config::{CaseConfig, load_case, load_grids};
use crate::error::{AppError, AppResult};
use crate::reconstruct::{ReportOutcome, load_report};

/// A loaded case with the archived history of all its wells.
#[derive(Debug)]
pub struct Case {
    pub config: CaseConfig,
    pub grids: Option<GridSet>,
    pub history: WellHistory,
    pub outcomes: Vec<ReportOutcome>,
}

/// Read one restart report dump.
pub fn read_report(path: &Path) -> AppResult<RestartReport> {
    let file = File::open(path).map_err(|source| AppError::FileRead {
        what: "report",
        path: path.to_path_buf(),
        source,
    })?;
    Ok(RestartReport::from_reader(BufReader::new(file))?)
}

/// Load the case at `path` and reconstruct every report it lists.
pub fn open_case(path: &Path) -> AppResult<Case> {
    let config = load_case(path)?;
    open_config(config)
}

pub fn open_config(config: CaseConfig) -> AppResult<Case> {
    let grids = config.grid.as_deref().map(load_grids).transpose()?;
    let history = WellHistory::new();
    let mut outcomes = Vec::with_capacity(config.reports.len());

    for report_path in &config.reports {
        let report = read_report(report_path)?;
        let outcome = load_report(&report, grids.as_ref(), &config.options, &history)?;
        info!(
            case = %config.name,
            report_step = outcome.report_step,
            wells = outcome.archived.len(),
            skipped = outcome.skipped.len(),
            "loaded report"
        );
        outcomes.push(outcome);
    }

    Ok(Case {
        config,
        grids,
        history,
        outcomes,
    })
}
