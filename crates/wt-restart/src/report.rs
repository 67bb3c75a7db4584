//! One decoded restart report.

use std::io::Read;

use serde::{Deserialize, Serialize};
use wt_grid::GridId;

use crate::constants::{ICON_KW, ISEG_KW, IWEL_KW, RSEG_KW, SCON_KW};
use crate::error::{RestartError, RestartResult};
use crate::header::RestartHeader;

/// Well related records of one grid.
///
/// Local grids carry their own well list and `IWEL`/`ICON` records with
/// cell indices in the local grid's domain. Segment records only appear
/// with the global grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridRecords {
    pub grid: GridId,
    pub well_names: Vec<String>,
    pub iwel: Vec<i32>,
    pub icon: Vec<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scon: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iseg: Option<Vec<i32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rseg: Option<Vec<f64>>,
}

/// Header plus per-grid records of one report step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestartReport {
    pub header: RestartHeader,
    /// Global grid first, then local grids.
    pub grids: Vec<GridRecords>,
}

impl RestartReport {
    pub fn from_json_str(s: &str) -> RestartResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> RestartResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn global(&self) -> RestartResult<&GridRecords> {
        self.grid(&GridId::Global)
    }

    pub fn grid(&self, id: &GridId) -> RestartResult<&GridRecords> {
        self.grids
            .iter()
            .find(|g| &g.grid == id)
            .ok_or_else(|| RestartError::UnknownGrid(id.clone()))
    }

    pub fn local_grids(&self) -> impl Iterator<Item = &GridRecords> {
        self.grids.iter().filter(|g| !g.grid.is_global())
    }

    /// Number of wells in the global grid.
    pub fn nwells(&self) -> usize {
        self.global().map_or(0, |g| g.nwells())
    }
}

/// Slice out one fixed width row, checking the record is long enough.
///
/// An offset that overflowed (`None`) is reported like any other row past
/// the end of the record.
pub(crate) fn row<'a, T>(
    record: &'a [T],
    keyword: &'static str,
    offset: Option<usize>,
    width: usize,
) -> RestartResult<&'a [T]> {
    let range = offset.and_then(|start| Some(start..start.checked_add(width)?));
    let too_short = |needed: usize| RestartError::RecordTooShort {
        keyword,
        needed,
        len: record.len(),
    };
    match range {
        Some(range) => {
            let needed = range.end.saturating_sub(1);
            record.get(range).ok_or_else(|| too_short(needed))
        }
        None => Err(too_short(usize::MAX)),
    }
}

impl GridRecords {
    pub fn nwells(&self) -> usize {
        self.well_names.len()
    }

    pub fn find_well(&self, name: &str) -> Option<usize> {
        self.well_names.iter().position(|n| n == name)
    }

    fn check_well(&self, well_nr: usize) -> RestartResult<()> {
        if well_nr >= self.nwells() {
            return Err(RestartError::WellOutOfRange {
                grid: self.grid.clone(),
                well: well_nr,
                nwells: self.nwells(),
            });
        }
        Ok(())
    }

    fn missing(&self, keyword: &'static str, well_nr: usize) -> RestartError {
        RestartError::MissingRecord {
            keyword,
            grid: self.grid.clone(),
            well: well_nr,
        }
    }

    pub fn iwel_row(&self, header: &RestartHeader, well_nr: usize) -> RestartResult<&[i32]> {
        self.check_well(well_nr)?;
        row(&self.iwel, IWEL_KW, header.iwel_offset(well_nr), header.niwelz)
    }

    pub fn icon_row(
        &self,
        header: &RestartHeader,
        well_nr: usize,
        conn_nr: usize,
    ) -> RestartResult<&[i32]> {
        self.check_well(well_nr)?;
        row(
            &self.icon,
            ICON_KW,
            header.icon_offset(well_nr, conn_nr),
            header.niconz,
        )
    }

    /// `SCON` row, or `None` when the report carries no `SCON` record.
    pub fn scon_row(
        &self,
        header: &RestartHeader,
        well_nr: usize,
        conn_nr: usize,
    ) -> RestartResult<Option<&[f64]>> {
        self.check_well(well_nr)?;
        match &self.scon {
            Some(scon) => row(
                scon,
                SCON_KW,
                header.scon_offset(well_nr, conn_nr),
                header.nsconz,
            )
            .map(Some),
            None => Ok(None),
        }
    }

    /// `ISEG` row of a segmented well; the record must exist.
    pub fn iseg_row(
        &self,
        header: &RestartHeader,
        well_nr: usize,
        segment_well_nr: usize,
        segment_index: usize,
    ) -> RestartResult<&[i32]> {
        row(
            self.iseg(well_nr)?,
            ISEG_KW,
            header.iseg_offset(segment_well_nr, segment_index),
            header.nisegz,
        )
    }

    /// Whole `ISEG` record; the record must exist.
    pub fn iseg(&self, well_nr: usize) -> RestartResult<&[i32]> {
        self.iseg
            .as_deref()
            .ok_or_else(|| self.missing(ISEG_KW, well_nr))
    }

    /// Whole `RSEG` record; the record must exist.
    pub fn rseg(&self, well_nr: usize) -> RestartResult<&[f64]> {
        self.rseg
            .as_deref()
            .ok_or_else(|| self.missing(RSEG_KW, well_nr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_checks_bounds() {
        let record = [1, 2, 3, 4, 5, 6];
        assert_eq!(row(&record, "X", Some(3), 3).unwrap(), &[4, 5, 6]);
        assert!(matches!(
            row(&record, "X", Some(4), 3),
            Err(RestartError::RecordTooShort {
                needed: 6,
                len: 6,
                ..
            })
        ));
    }

    #[test]
    fn overflowing_offsets_are_too_short_not_wrapped() {
        let record = [1, 2, 3];
        for offset in [None, Some(usize::MAX - 1)] {
            assert!(matches!(
                row(&record, "X", offset, 3),
                Err(RestartError::RecordTooShort {
                    needed: usize::MAX,
                    len: 3,
                    ..
                })
            ));
        }
    }
}
