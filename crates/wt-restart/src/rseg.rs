//! Stateful `RSEG` loader.
//!
//! One loader serves every segmented well of a report: it resolves the
//! record once and reuses a small value buffer for each row it reads.

use wt_core::{Real, ensure_finite};

use crate::constants::{
    RSEG_DEPTH_INDEX, RSEG_DIAMETER_INDEX, RSEG_KW, RSEG_LENGTH_INDEX, RSEG_TOTAL_LENGTH_INDEX,
};
use crate::error::{RestartError, RestartResult};
use crate::header::RestartHeader;
use crate::report::{GridRecords, row};

/// Real valued attributes of one segment row.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RsegValues {
    pub depth: Real,
    pub length: Real,
    pub total_length: Real,
    pub diameter: Real,
}

/// Columns read from each row, in `RsegValues` field order.
const RSEG_COLUMNS: [(usize, &str); 4] = [
    (RSEG_DEPTH_INDEX, "RSEG depth"),
    (RSEG_LENGTH_INDEX, "RSEG length"),
    (RSEG_TOTAL_LENGTH_INDEX, "RSEG total length"),
    (RSEG_DIAMETER_INDEX, "RSEG diameter"),
];

pub struct RsegLoader<'r> {
    header: &'r RestartHeader,
    records: &'r GridRecords,
    values: [Real; 4],
}

impl<'r> RsegLoader<'r> {
    /// Loader over the global grid's `RSEG` record (which may be absent).
    pub fn new(header: &'r RestartHeader, records: &'r GridRecords) -> Self {
        Self {
            header,
            records,
            values: [0.0; 4],
        }
    }

    pub fn has_record(&self) -> bool {
        self.records.rseg.is_some()
    }

    /// Read one segment row of the given segmented well.
    pub fn load(
        &mut self,
        well_nr: usize,
        segment_well_nr: usize,
        segment_index: usize,
    ) -> RestartResult<RsegValues> {
        let rseg = self.records.rseg(well_nr)?;
        let values = row(
            rseg,
            RSEG_KW,
            self.header.rseg_offset(segment_well_nr, segment_index),
            self.header.nrsegz,
        )?;

        for (slot, (column, what)) in self.values.iter_mut().zip(RSEG_COLUMNS) {
            let raw = *values.get(column).ok_or(RestartError::RecordTooShort {
                keyword: RSEG_KW,
                needed: column,
                len: values.len(),
            })?;
            *slot = ensure_finite(raw, what).map_err(|source| RestartError::BadValue {
                keyword: RSEG_KW,
                source,
            })?;
        }

        let [depth, length, total_length, diameter] = self.values;
        Ok(RsegValues {
            depth,
            length,
            total_length,
            diameter,
        })
    }
}
