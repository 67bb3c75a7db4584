//! Builders for synthetic restart reports used in tests.

use chrono::{DateTime, TimeZone, Utc};
use wt_grid::GridId;

use crate::constants::*;
use crate::header::RestartHeader;
use crate::report::{GridRecords, RestartReport};

const NIWELZ: usize = IWEL_SEGMENTED_WELL_NR_INDEX + 1;
const NISEGZ: usize = ISEG_BRANCH_INDEX + 1;
const NRSEGZ: usize = RSEG_DEPTH_INDEX + 1;
const NICONZ: usize = ICON_SEGMENT_INDEX + 1;
const NSCONZ: usize = SCON_CF_INDEX + 1;

/// Offsets of the small fixture headers never overflow.
fn at(offset: Option<usize>) -> usize {
    offset.expect("fixture row offset fits in usize")
}

/// Simulation time `days` days after a fixed start date.
pub fn sim_time(days: i64) -> DateTime<Utc> {
    let start = Utc
        .with_ymd_and_hms(2000, 1, 1, 0, 0, 0)
        .single()
        .expect("valid start date");
    start + chrono::Duration::days(days)
}

#[derive(Debug, Clone, PartialEq)]
pub struct SegmentRow {
    pub outlet: i32,
    pub branch: i32,
    pub depth: f64,
    pub length: f64,
    pub total_length: f64,
    pub diameter: f64,
}

impl SegmentRow {
    pub fn new(outlet: i32, branch: i32) -> Self {
        Self {
            outlet,
            branch,
            depth: 0.0,
            length: 0.0,
            total_length: 0.0,
            diameter: 0.0,
        }
    }

    pub fn depth(mut self, depth: f64) -> Self {
        self.depth = depth;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionRow {
    /// 1-based cell, as stored in `ICON`.
    pub ijk: (i32, i32, i32),
    pub open: bool,
    pub dir: i32,
    pub segment: i32,
    pub cf: f64,
}

impl ConnectionRow {
    pub fn new(i: i32, j: i32, k: i32) -> Self {
        Self {
            ijk: (i, j, k),
            open: true,
            dir: ICON_DIRZ,
            segment: 0,
            cf: 1.0,
        }
    }

    pub fn segment(mut self, segment: i32) -> Self {
        self.segment = segment;
        self
    }

    pub fn closed(mut self) -> Self {
        self.open = false;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WellFixture {
    pub name: String,
    /// 1-based wellhead cell.
    pub head: (i32, i32, i32),
    pub kind: i32,
    pub open: bool,
    pub msw: bool,
    pub connections: Vec<ConnectionRow>,
    pub segments: Vec<SegmentRow>,
}

impl WellFixture {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            head: (1, 1, 1),
            kind: IWEL_PRODUCER,
            open: true,
            msw: false,
            connections: Vec::new(),
            segments: Vec::new(),
        }
    }

    /// Segmented well with the given segment rows (row `n` is segment `n + 1`).
    pub fn msw(mut self, segments: Vec<SegmentRow>) -> Self {
        self.msw = true;
        self.segments = segments;
        self
    }

    /// Segment rows present in the records although the header says the
    /// well is not segmented.
    pub fn stray_segments(mut self, segments: Vec<SegmentRow>) -> Self {
        self.msw = false;
        self.segments = segments;
        self
    }

    pub fn connection(mut self, conn: ConnectionRow) -> Self {
        self.connections.push(conn);
        self
    }

    pub fn head(mut self, i: i32, j: i32, k: i32) -> Self {
        self.head = (i, j, k);
        self
    }

    pub fn kind(mut self, kind: i32) -> Self {
        self.kind = kind;
        self
    }

    pub fn shut(mut self) -> Self {
        self.open = false;
        self
    }
}

#[derive(Debug, Clone)]
pub struct ReportFixture {
    pub report_step: i32,
    pub sim_time: DateTime<Utc>,
    pub wells: Vec<WellFixture>,
    pub local_grids: Vec<(GridId, Vec<WellFixture>)>,
    /// Drop `ISEG`/`RSEG` from the output even when wells have segments.
    pub omit_segment_records: bool,
}

impl ReportFixture {
    pub fn new(report_step: i32, days: i64) -> Self {
        Self {
            report_step,
            sim_time: sim_time(days),
            wells: Vec::new(),
            local_grids: Vec::new(),
            omit_segment_records: false,
        }
    }

    pub fn well(mut self, well: WellFixture) -> Self {
        self.wells.push(well);
        self
    }

    pub fn local_grid(mut self, name: &str, wells: Vec<WellFixture>) -> Self {
        self.local_grids.push((GridId::Local(name.to_string()), wells));
        self
    }

    pub fn without_segment_records(mut self) -> Self {
        self.omit_segment_records = true;
        self
    }

    pub fn build(&self) -> RestartReport {
        let all_wells = self
            .wells
            .iter()
            .chain(self.local_grids.iter().flat_map(|(_, w)| w.iter()));
        let nsegmx = all_wells
            .clone()
            .map(|w| w.segments.len())
            .max()
            .unwrap_or(0)
            .max(1);
        let ncwmax = all_wells
            .map(|w| w.connections.len())
            .max()
            .unwrap_or(0)
            .max(1);

        let header = RestartHeader {
            report_step: self.report_step,
            sim_time: self.sim_time,
            niwelz: NIWELZ,
            nsegmx,
            nisegz: NISEGZ,
            nrsegz: NRSEGZ,
            ncwmax,
            niconz: NICONZ,
            nsconz: NSCONZ,
        };

        let mut grids = vec![self.grid_records(&header, GridId::Global, &self.wells, true)];
        for (id, wells) in &self.local_grids {
            grids.push(self.grid_records(&header, id.clone(), wells, false));
        }
        RestartReport { header, grids }
    }

    fn grid_records(
        &self,
        header: &RestartHeader,
        grid: GridId,
        wells: &[WellFixture],
        with_segments: bool,
    ) -> GridRecords {
        let nwells = wells.len();
        let mut iwel = vec![0; nwells * header.niwelz];
        let mut icon = vec![0; nwells * header.ncwmax * header.niconz];
        let mut scon = vec![0.0; nwells * header.ncwmax * header.nsconz];

        let seg_wells = wells.iter().filter(|w| !w.segments.is_empty()).count();
        let mut iseg = vec![0; seg_wells * header.nsegmx * header.nisegz];
        let mut rseg = vec![0.0; seg_wells * header.nsegmx * header.nrsegz];
        let mut next_seg_well = 0;

        for (well_nr, well) in wells.iter().enumerate() {
            let off = at(header.iwel_offset(well_nr));
            iwel[off + IWEL_HEADI_INDEX] = well.head.0;
            iwel[off + IWEL_HEADJ_INDEX] = well.head.1;
            iwel[off + IWEL_HEADK_INDEX] = well.head.2;
            iwel[off + IWEL_CONNECTIONS_INDEX] = well.connections.len() as i32;
            iwel[off + IWEL_TYPE_INDEX] = well.kind;
            iwel[off + IWEL_STATUS_INDEX] = i32::from(well.open);

            for (conn_nr, conn) in well.connections.iter().enumerate() {
                let c = at(header.icon_offset(well_nr, conn_nr));
                icon[c + ICON_IC_INDEX] = conn_nr as i32 + 1;
                icon[c + ICON_I_INDEX] = conn.ijk.0;
                icon[c + ICON_J_INDEX] = conn.ijk.1;
                icon[c + ICON_K_INDEX] = conn.ijk.2;
                icon[c + ICON_STATUS_INDEX] = i32::from(conn.open);
                icon[c + ICON_DIRECTION_INDEX] = conn.dir;
                icon[c + ICON_SEGMENT_INDEX] = conn.segment;
                scon[at(header.scon_offset(well_nr, conn_nr)) + SCON_CF_INDEX] = conn.cf;
            }

            if well.segments.is_empty() {
                continue;
            }
            let seg_well_nr = next_seg_well;
            next_seg_well += 1;
            if well.msw {
                iwel[off + IWEL_SEGMENTED_WELL_NR_INDEX] = seg_well_nr as i32 + 1;
            }
            for (index, seg) in well.segments.iter().enumerate() {
                let i = at(header.iseg_offset(seg_well_nr, index));
                iseg[i + ISEG_OUTLET_INDEX] = seg.outlet;
                iseg[i + ISEG_BRANCH_INDEX] = seg.branch;

                let r = at(header.rseg_offset(seg_well_nr, index));
                rseg[r + RSEG_DEPTH_INDEX] = seg.depth;
                rseg[r + RSEG_LENGTH_INDEX] = seg.length;
                rseg[r + RSEG_TOTAL_LENGTH_INDEX] = seg.total_length;
                rseg[r + RSEG_DIAMETER_INDEX] = seg.diameter;
            }
        }

        let emit_segments = with_segments && seg_wells > 0 && !self.omit_segment_records;
        GridRecords {
            grid,
            well_names: wells.iter().map(|w| w.name.clone()).collect(),
            iwel,
            icon,
            scon: Some(scon),
            iseg: emit_segments.then_some(iseg),
            rseg: emit_segments.then_some(rseg),
        }
    }
}
