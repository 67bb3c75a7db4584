//! Active/global cell index mapping.
//!
//! Only active cells carry solution data, so per-cell arrays from the
//! simulator are indexed by active index. Dual porosity grids keep two
//! active index spaces, one for matrix cells and one for fracture cells.

use crate::dims::GridDims;
use crate::error::{GridError, GridResult};
use crate::grid_id::GridId;

/// ACTNUM bit marking an active matrix cell.
pub const CELL_ACTIVE_MATRIX: i32 = 1;
/// ACTNUM bit marking an active fracture cell.
pub const CELL_ACTIVE_FRACTURE: i32 = 2;

/// Bidirectional global <-> active index mapping for one grid.
#[derive(Debug, Clone)]
pub struct ActiveMap {
    dims: GridDims,
    /// global -> matrix active index
    matrix_index: Vec<Option<usize>>,
    /// global -> fracture active index
    fracture_index: Vec<Option<usize>>,
    /// matrix active index -> global
    matrix_global: Vec<usize>,
    /// fracture active index -> global
    fracture_global: Vec<usize>,
}

impl ActiveMap {
    /// Map where every cell is an active matrix cell.
    pub fn all_active(dims: GridDims) -> Self {
        let size = dims.global_size();
        Self {
            dims,
            matrix_index: (0..size).map(Some).collect(),
            fracture_index: vec![None; size],
            matrix_global: (0..size).collect(),
            fracture_global: Vec::new(),
        }
    }

    /// Build from an ACTNUM record.
    pub fn from_actnum(grid: &GridId, dims: GridDims, actnum: &[i32]) -> GridResult<Self> {
        let size = dims.global_size();
        if actnum.len() != size {
            return Err(GridError::ActnumSize {
                grid: grid.clone(),
                len: actnum.len(),
                expected: size,
            });
        }

        let mut matrix_index = vec![None; size];
        let mut fracture_index = vec![None; size];
        let mut matrix_global = Vec::new();
        let mut fracture_global = Vec::new();

        for (gi, &flag) in actnum.iter().enumerate() {
            if flag & CELL_ACTIVE_MATRIX != 0 {
                matrix_index[gi] = Some(matrix_global.len());
                matrix_global.push(gi);
            }
            if flag & CELL_ACTIVE_FRACTURE != 0 {
                fracture_index[gi] = Some(fracture_global.len());
                fracture_global.push(gi);
            }
        }

        Ok(Self {
            dims: GridDims {
                nactive: matrix_global.len(),
                ..dims
            },
            matrix_index,
            fracture_index,
            matrix_global,
            fracture_global,
        })
    }

    pub fn dims(&self) -> &GridDims {
        &self.dims
    }

    pub fn active_size(&self) -> usize {
        self.matrix_global.len()
    }

    pub fn active_fracture_size(&self) -> usize {
        self.fracture_global.len()
    }

    /// Matrix active index of a global cell; `None` for inactive cells.
    pub fn active_index(&self, global_index: usize) -> Option<usize> {
        self.matrix_index.get(global_index).copied().flatten()
    }

    /// Fracture active index of a global cell.
    pub fn active_fracture_index(&self, global_index: usize) -> Option<usize> {
        self.fracture_index.get(global_index).copied().flatten()
    }

    pub fn global_index_of_active(&self, active_index: usize) -> Option<usize> {
        self.matrix_global.get(active_index).copied()
    }

    pub fn global_index_of_fracture(&self, active_index: usize) -> Option<usize> {
        self.fracture_global.get(active_index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_active_is_identity() {
        let map = ActiveMap::all_active(GridDims::new(2, 2, 2));
        assert_eq!(map.active_size(), 8);
        assert_eq!(map.active_fracture_size(), 0);
        for gi in 0..8 {
            assert_eq!(map.active_index(gi), Some(gi));
            assert_eq!(map.global_index_of_active(gi), Some(gi));
        }
        assert_eq!(map.active_index(8), None);
    }

    #[test]
    fn dual_porosity_keeps_two_index_spaces() {
        // matrix only, inactive, matrix+fracture, fracture only
        let actnum = [1, 0, 3, 2];
        let map = ActiveMap::from_actnum(&GridId::Global, GridDims::new(4, 1, 1), &actnum).unwrap();

        assert_eq!(map.active_size(), 2);
        assert_eq!(map.active_fracture_size(), 2);
        assert_eq!(map.dims().nactive, 2);

        let mut matrix = 0;
        let mut fracture = 0;
        for (gi, &flag) in actnum.iter().enumerate() {
            if flag & CELL_ACTIVE_MATRIX != 0 {
                assert_eq!(map.active_index(gi), Some(matrix));
                assert_eq!(map.global_index_of_active(matrix), Some(gi));
                matrix += 1;
            } else {
                assert_eq!(map.active_index(gi), None);
            }
            if flag & CELL_ACTIVE_FRACTURE != 0 {
                assert_eq!(map.active_fracture_index(gi), Some(fracture));
                assert_eq!(map.global_index_of_fracture(fracture), Some(gi));
                fracture += 1;
            }
        }
    }

    #[test]
    fn actnum_size_must_match() {
        let err = ActiveMap::from_actnum(&GridId::Global, GridDims::new(2, 1, 1), &[1]).unwrap_err();
        assert!(matches!(err, GridError::ActnumSize { len: 1, expected: 2, .. }));
    }
}
