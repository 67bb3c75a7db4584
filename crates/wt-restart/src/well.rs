//! Well header rows (`IWEL`).

use serde::{Deserialize, Serialize};
use wt_grid::GridId;

use crate::constants::*;
use crate::error::RestartResult;
use crate::header::RestartHeader;
use crate::report::GridRecords;

/// Producer/injector classification of a well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WellKind {
    Producer,
    OilInjector,
    WaterInjector,
    GasInjector,
    /// Type code zero: the simulator has not classified the well (yet).
    Undefined,
}

impl WellKind {
    pub fn from_code(code: i32) -> Self {
        match code {
            IWEL_PRODUCER => WellKind::Producer,
            IWEL_OIL_INJECTOR => WellKind::OilInjector,
            IWEL_WATER_INJECTOR => WellKind::WaterInjector,
            IWEL_GAS_INJECTOR => WellKind::GasInjector,
            _ => WellKind::Undefined,
        }
    }

    pub fn is_injector(self) -> bool {
        matches!(
            self,
            WellKind::OilInjector | WellKind::WaterInjector | WellKind::GasInjector
        )
    }
}

/// Decoded `IWEL` row of one well in one grid.
#[derive(Debug, Clone, PartialEq)]
pub struct WellHeader {
    pub name: String,
    pub grid: GridId,
    pub well_nr: usize,
    /// 0-based wellhead cell in this grid's index domain.
    pub wellhead: (usize, usize, usize),
    pub num_connections: usize,
    pub kind: WellKind,
    pub open: bool,
    /// 0-based index into the segment records; `None` for normal wells.
    pub segment_well_nr: Option<usize>,
}

impl WellHeader {
    pub fn decode(
        header: &RestartHeader,
        records: &GridRecords,
        well_nr: usize,
    ) -> RestartResult<Self> {
        let iwel = records.iwel_row(header, well_nr)?;
        let field = |index: usize| -> RestartResult<i32> {
            iwel.get(index)
                .copied()
                .ok_or(crate::RestartError::RecordTooShort {
                    keyword: IWEL_KW,
                    needed: index,
                    len: iwel.len(),
                })
        };

        let one_based = |v: i32| (v - 1).max(0) as usize;

        let segment_well_nr = match iwel.get(IWEL_SEGMENTED_WELL_NR_INDEX) {
            Some(&raw) if raw - 1 != IWEL_SEGMENTED_WELL_NR_NORMAL_VALUE => {
                Some(one_based(raw))
            }
            _ => None,
        };

        Ok(Self {
            name: records.well_names[well_nr].clone(),
            grid: records.grid.clone(),
            well_nr,
            wellhead: (
                one_based(field(IWEL_HEADI_INDEX)?),
                one_based(field(IWEL_HEADJ_INDEX)?),
                one_based(field(IWEL_HEADK_INDEX)?),
            ),
            num_connections: field(IWEL_CONNECTIONS_INDEX)?.max(0) as usize,
            kind: WellKind::from_code(field(IWEL_TYPE_INDEX)?),
            open: field(IWEL_STATUS_INDEX)? > 0,
            segment_well_nr,
        })
    }

    pub fn is_msw(&self) -> bool {
        self.segment_well_nr.is_some()
    }
}

/// The well header's multi-segment indicator.
///
/// This is the only authority on whether a well is segmented; stray rows in
/// the segment records never make a normal well segmented.
pub fn well_is_msw(
    header: &RestartHeader,
    records: &GridRecords,
    well_nr: usize,
) -> RestartResult<bool> {
    Ok(WellHeader::decode(header, records, well_nr)?.is_msw())
}
