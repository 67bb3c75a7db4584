//! Query helpers over an archived well history.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use wt_grid::GridId;
use wt_history::{TimeKey, WellHistory, WellState};
use wt_restart::WellKind;

use crate::error::{AppError, AppResult};

/// Summary of a well over the whole archive.
#[derive(Debug, Clone, Serialize)]
pub struct WellSummary {
    pub name: String,
    pub snapshots: usize,
    pub first_report: i32,
    pub last_report: i32,
    pub kind: WellKind,
    pub msw: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SegmentSummary {
    pub id: i32,
    pub outlet_id: i32,
    pub branch_id: i32,
    pub depth: f64,
    pub link_count: u32,
    pub global_connections: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct BranchSummary {
    pub branch_id: i32,
    pub start_segment: i32,
    /// Member ids from the start segment towards the wellhead.
    pub members: Vec<i32>,
    pub junction: Option<i32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopologySummary {
    pub well: String,
    pub report_step: i32,
    pub sim_time: DateTime<Utc>,
    pub segments: Vec<SegmentSummary>,
    pub branches: Vec<BranchSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GridConnectionSummary {
    pub grid: GridId,
    pub wellhead: Option<(usize, usize, usize)>,
    pub connections: usize,
    pub open: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct StateSummary {
    pub well: String,
    pub report_step: i32,
    pub sim_time: DateTime<Utc>,
    pub kind: WellKind,
    pub open: bool,
    pub msw: bool,
    pub segments: usize,
    pub branches: usize,
    pub grids: Vec<GridConnectionSummary>,
}

/// Summaries of every archived well, sorted by name.
pub fn list_wells(history: &WellHistory) -> Vec<WellSummary> {
    history
        .well_names()
        .into_iter()
        .filter_map(|name| {
            let series = history.time_series(&name)?;
            let first = series.first_state()?;
            let last = series.last_state()?;
            Some(WellSummary {
                snapshots: series.len(),
                first_report: first.report_step(),
                last_report: last.report_step(),
                kind: last.kind(),
                msw: last.is_msw(),
                name,
            })
        })
        .collect()
}

/// Snapshot of `well` at or before `key`, or an error saying why none exists.
pub fn snapshot(history: &WellHistory, well: &str, key: TimeKey) -> AppResult<Arc<WellState>> {
    history
        .snapshot_at(well, key)?
        .ok_or_else(|| AppError::NoSnapshot {
            well: well.to_string(),
            at: match key {
                TimeKey::Report(step) => format!("report {step}"),
                TimeKey::Time(time) => time.to_rfc3339(),
            },
        })
}

/// Latest snapshot of `well`.
pub fn latest(history: &WellHistory, well: &str) -> AppResult<Arc<WellState>> {
    history
        .time_series(well)
        .and_then(|series| series.last_state().cloned())
        .ok_or_else(|| AppError::WellNotFound(well.to_string()))
}

pub fn topology_summary(state: &WellState) -> TopologySummary {
    let mut segments = Vec::new();
    let mut branches = Vec::new();

    if let Some(set) = state.segments() {
        for (idx, segment) in set.iter() {
            segments.push(SegmentSummary {
                id: segment.id(),
                outlet_id: segment.outlet_id(),
                branch_id: segment.branch_id(),
                depth: segment.depth(),
                link_count: segment.link_count(),
                global_connections: state
                    .attachments()
                    .segment_connections(idx, &GridId::Global)
                    .len(),
            });
        }

        let id_of = |idx| set.get(idx).map_or(0, |s| s.id());
        for branch in state.branches().iter() {
            branches.push(BranchSummary {
                branch_id: branch.branch_id,
                start_segment: id_of(branch.start),
                members: branch.walk(set).map(id_of).collect(),
                junction: branch.junction(set).map(id_of),
            });
        }
    }

    TopologySummary {
        well: state.name().to_string(),
        report_step: state.report_step(),
        sim_time: state.sim_time(),
        segments,
        branches,
    }
}

pub fn state_summary(state: &WellState) -> StateSummary {
    let grids = state
        .grids()
        .map(|grid| {
            let connections = state.connections(grid);
            GridConnectionSummary {
                grid: grid.clone(),
                wellhead: state.wellhead(grid),
                connections: connections.map_or(0, |c| c.len()),
                open: connections.map_or(0, |c| c.iter().filter(|(_, c)| c.open).count()),
            }
        })
        .collect();

    StateSummary {
        well: state.name().to_string(),
        report_step: state.report_step(),
        sim_time: state.sim_time(),
        kind: state.kind(),
        open: state.is_open(),
        msw: state.is_msw(),
        segments: state.num_segments(),
        branches: state.branches().len(),
        grids,
    }
}
