//! Per-grid dimension table.
//!
//! A case has one global grid followed by zero or more local grids. Each
//! grid contributes one header record; the table keeps them in file order.

use serde::{Deserialize, Serialize};

use crate::error::{GridError, GridResult};

/// Field positions inside an EGRID `GRIDHEAD` record.
pub const GRIDHEAD_NX_INDEX: usize = 1;
pub const GRIDHEAD_NY_INDEX: usize = 2;
pub const GRIDHEAD_NZ_INDEX: usize = 3;

/// Field positions inside a GRID `DIMENS` record.
pub const DIMENS_NX_INDEX: usize = 0;
pub const DIMENS_NY_INDEX: usize = 1;
pub const DIMENS_NZ_INDEX: usize = 2;

/// Position of the active cell count inside an `INTEHEAD` record.
pub const INTEHEAD_NACTIVE_INDEX: usize = 11;

/// Logical size of one grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDims {
    pub nx: usize,
    pub ny: usize,
    pub nz: usize,
    /// Active cell count; equals the global size when no data file was read.
    pub nactive: usize,
}

impl GridDims {
    /// Dimensions of a grid where every cell is active.
    pub fn new(nx: usize, ny: usize, nz: usize) -> Self {
        Self {
            nx,
            ny,
            nz,
            nactive: nx * ny * nz,
        }
    }

    fn from_ints(nx: i32, ny: i32, nz: i32) -> GridResult<Self> {
        if nx <= 0 || ny <= 0 || nz <= 0 {
            return Err(GridError::BadDimensions { nx, ny, nz });
        }
        Ok(Self::new(nx as usize, ny as usize, nz as usize))
    }

    pub fn global_size(&self) -> usize {
        self.nx * self.ny * self.nz
    }

    pub fn contains(&self, i: usize, j: usize, k: usize) -> bool {
        i < self.nx && j < self.ny && k < self.nz
    }

    /// Global index of a 0-based `(i, j, k)`; `None` outside the grid.
    pub fn global_index(&self, i: usize, j: usize, k: usize) -> Option<usize> {
        self.contains(i, j, k)
            .then(|| i + j * self.nx + k * self.nx * self.ny)
    }

    /// Inverse of [`GridDims::global_index`].
    pub fn ijk(&self, global_index: usize) -> Option<(usize, usize, usize)> {
        if global_index >= self.global_size() {
            return None;
        }
        let layer = self.nx * self.ny;
        let k = global_index / layer;
        let rem = global_index % layer;
        Some((rem % self.nx, rem / self.nx, k))
    }
}

/// Ordered dimensions of every grid in a case (global grid first).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridDimsTable {
    dims: Vec<GridDims>,
}

impl GridDimsTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `GRIDHEAD` records, pairing each with the `INTEHEAD` of
    /// the same position when a data file was read.
    pub fn from_gridheads(gridheads: &[Vec<i32>], inteheads: &[Vec<i32>]) -> GridResult<Self> {
        Self::from_headers(
            gridheads,
            inteheads,
            [GRIDHEAD_NX_INDEX, GRIDHEAD_NY_INDEX, GRIDHEAD_NZ_INDEX],
        )
    }

    /// Build from `DIMENS` records of an old style GRID file.
    pub fn from_dimens(dimens: &[Vec<i32>], inteheads: &[Vec<i32>]) -> GridResult<Self> {
        Self::from_headers(
            dimens,
            inteheads,
            [DIMENS_NX_INDEX, DIMENS_NY_INDEX, DIMENS_NZ_INDEX],
        )
    }

    fn from_headers(
        headers: &[Vec<i32>],
        inteheads: &[Vec<i32>],
        layout: [usize; 3],
    ) -> GridResult<Self> {
        let need = layout.iter().max().map_or(0, |m| m + 1);
        let mut table = Self::new();

        for (nr, header) in headers.iter().enumerate() {
            if header.len() < need {
                return Err(GridError::ShortHeader {
                    len: header.len(),
                    need,
                });
            }
            let mut dims =
                GridDims::from_ints(header[layout[0]], header[layout[1]], header[layout[2]])?;

            if let Some(intehead) = inteheads.get(nr) {
                if intehead.len() <= INTEHEAD_NACTIVE_INDEX {
                    return Err(GridError::ShortHeader {
                        len: intehead.len(),
                        need: INTEHEAD_NACTIVE_INDEX + 1,
                    });
                }
                dims.nactive = intehead[INTEHEAD_NACTIVE_INDEX].max(0) as usize;
            }
            table.push(dims);
        }
        Ok(table)
    }

    pub fn push(&mut self, dims: GridDims) {
        self.dims.push(dims);
    }

    pub fn num_grids(&self) -> usize {
        self.dims.len()
    }

    pub fn iget_dims(&self, grid_nr: usize) -> Option<&GridDims> {
        self.dims.get(grid_nr)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GridDims> {
        self.dims.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_index_is_i_fastest() {
        let dims = GridDims::new(4, 3, 2);
        assert_eq!(dims.global_index(0, 0, 0), Some(0));
        assert_eq!(dims.global_index(1, 0, 0), Some(1));
        assert_eq!(dims.global_index(0, 1, 0), Some(4));
        assert_eq!(dims.global_index(0, 0, 1), Some(12));
        assert_eq!(dims.global_index(4, 0, 0), None);
        assert_eq!(dims.ijk(23), Some((3, 2, 1)));
        assert_eq!(dims.ijk(24), None);
    }

    #[test]
    fn table_from_gridheads_with_and_without_intehead() {
        let heads = vec![vec![1, 10, 5, 3, 0], vec![1, 2, 2, 2, 0]];
        let mut intehead = vec![0; 12];
        intehead[INTEHEAD_NACTIVE_INDEX] = 120;

        let table = GridDimsTable::from_gridheads(&heads, &[intehead]).unwrap();
        assert_eq!(table.num_grids(), 2);

        let global = table.iget_dims(0).unwrap();
        assert_eq!((global.nx, global.ny, global.nz), (10, 5, 3));
        assert_eq!(global.nactive, 120);

        // No INTEHEAD for the local grid: every cell counts as active.
        let local = table.iget_dims(1).unwrap();
        assert_eq!(local.nactive, 8);
        assert!(table.iget_dims(2).is_none());
    }

    #[test]
    fn table_from_dimens() {
        let table = GridDimsTable::from_dimens(&[vec![3, 2, 1]], &[]).unwrap();
        assert_eq!(table.iter().next(), Some(&GridDims::new(3, 2, 1)));
    }

    #[test]
    fn short_or_bad_header_is_rejected() {
        assert!(matches!(
            GridDimsTable::from_gridheads(&[vec![1, 2]], &[]),
            Err(GridError::ShortHeader { len: 2, need: 4 })
        ));
        assert!(matches!(
            GridDimsTable::from_dimens(&[vec![3, 0, 1]], &[]),
            Err(GridError::BadDimensions { .. })
        ));
    }
}
