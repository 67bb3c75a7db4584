//! Per-report restart header.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Report level sizes needed to address well, segment and connection rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestartHeader {
    pub report_step: i32,
    pub sim_time: DateTime<Utc>,
    /// Integers per `IWEL` row.
    pub niwelz: usize,
    /// Maximum segments per segmented well (rows per well in `ISEG`/`RSEG`).
    pub nsegmx: usize,
    /// Integers per `ISEG` row.
    pub nisegz: usize,
    /// Doubles per `RSEG` row.
    pub nrsegz: usize,
    /// Maximum connections per well (rows per well in `ICON`/`SCON`).
    pub ncwmax: usize,
    /// Integers per `ICON` row.
    pub niconz: usize,
    /// Doubles per `SCON` row.
    pub nsconz: usize,
}

impl RestartHeader {
    // Sizes come from the file, so offsets are checked; `None` means the row
    // lies beyond any addressable record.

    pub fn iwel_offset(&self, well_nr: usize) -> Option<usize> {
        well_nr.checked_mul(self.niwelz)
    }

    pub fn iseg_offset(&self, segment_well_nr: usize, segment_index: usize) -> Option<usize> {
        row_offset(segment_well_nr, self.nsegmx, segment_index, self.nisegz)
    }

    pub fn rseg_offset(&self, segment_well_nr: usize, segment_index: usize) -> Option<usize> {
        row_offset(segment_well_nr, self.nsegmx, segment_index, self.nrsegz)
    }

    pub fn icon_offset(&self, well_nr: usize, conn_nr: usize) -> Option<usize> {
        row_offset(well_nr, self.ncwmax, conn_nr, self.niconz)
    }

    pub fn scon_offset(&self, well_nr: usize, conn_nr: usize) -> Option<usize> {
        row_offset(well_nr, self.ncwmax, conn_nr, self.nsconz)
    }
}

/// `(block * rows_per_block + row) * width`, or `None` on overflow.
fn row_offset(block: usize, rows_per_block: usize, row: usize, width: usize) -> Option<usize> {
    block
        .checked_mul(rows_per_block)?
        .checked_add(row)?
        .checked_mul(width)
}
