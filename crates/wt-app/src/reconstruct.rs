//! Reconstruct every well of a restart report and archive the snapshots.

use rayon::prelude::*;
use tracing::{debug, warn};
use wt_grid::GridSet;
use wt_history::{WellHistory, WellState};
use wt_restart::{RestartReport, RsegLoader, WellHeader};
use wt_topology::{
    BranchCollection, ConnectionCollection, SegmentConnections, TopologyResult, link_segments,
    load_segments,
};

use crate::config::LoadOptions;
use crate::error::{AppError, AppResult};

/// Snapshot of global well `well_nr`: segments, branches and connections in
/// every grid the well appears in.
pub fn reconstruct_well(
    report: &RestartReport,
    rseg: &mut RsegLoader<'_>,
    grids: Option<&GridSet>,
    well_nr: usize,
    options: &LoadOptions,
) -> TopologyResult<WellState> {
    let header = &report.header;
    let global = report.global()?;
    let well = WellHeader::decode(header, global, well_nr)?;
    let mut state = WellState::new(header.report_step, header.sim_time, &well);

    let segments = if options.load_segments {
        match load_segments(header, global, rseg, well_nr)? {
            Some(mut segments) => {
                link_segments(&mut segments)?;
                Some(segments)
            }
            None => None,
        }
    } else {
        None
    };

    if let Some(segments) = segments {
        let branches = if options.load_branches {
            BranchCollection::decompose(&segments)?
        } else {
            BranchCollection::new()
        };
        state = state.with_topology(segments, branches);
    }

    let mut attachments = SegmentConnections::new();
    for records in &report.grids {
        let Some(nr) = records.find_well(&well.name) else {
            continue;
        };
        let grid_well = WellHeader::decode(header, records, nr)?;
        let connections = ConnectionCollection::load(header, records, &grid_well, state.is_msw())?;
        attachments.attach(state.segments(), &connections, grids)?;
        state.add_grid(records.grid.clone(), grid_well.wellhead, connections);
    }
    state.set_attachments(attachments);

    debug!(
        well = %well.name,
        report_step = header.report_step,
        segments = state.num_segments(),
        branches = state.branches().len(),
        "reconstructed well"
    );
    Ok(state)
}

/// What happened to the wells of one report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportOutcome {
    pub report_step: i32,
    pub archived: Vec<String>,
    /// Wells skipped in non-strict mode, with the reason.
    pub skipped: Vec<(String, String)>,
}

/// Reconstruct all wells of `report` in parallel and archive them.
///
/// In strict mode the first inconsistent well fails the whole report and
/// nothing from it is archived. Otherwise inconsistent wells are skipped.
pub fn load_report(
    report: &RestartReport,
    grids: Option<&GridSet>,
    options: &LoadOptions,
    history: &WellHistory,
) -> AppResult<ReportOutcome> {
    let global = report.global()?;
    let report_step = report.header.report_step;

    let results: Vec<_> = (0..global.nwells())
        .into_par_iter()
        .map_init(
            || RsegLoader::new(&report.header, global),
            |rseg, well_nr| {
                let name = global.well_names[well_nr].clone();
                let state = reconstruct_well(report, rseg, grids, well_nr, options);
                (name, state)
            },
        )
        .collect();

    let mut outcome = ReportOutcome {
        report_step,
        ..ReportOutcome::default()
    };
    let mut states = Vec::with_capacity(results.len());
    for (name, result) in results {
        match result {
            Ok(state) => states.push(state),
            Err(err) if options.strict => {
                return Err(AppError::Topology {
                    well: name,
                    report_step,
                    message: err.to_string(),
                });
            }
            Err(err) => {
                warn!(well = %name, report_step, error = %err, "skipping well");
                outcome.skipped.push((name, err.to_string()));
            }
        }
    }

    for state in states {
        outcome.archived.push(state.name().to_string());
        history.add_state(state)?;
    }
    Ok(outcome)
}
