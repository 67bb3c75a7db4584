//! Cell geometry seam.

use wt_core::Real;

use crate::dims::GridDims;

/// Source of world coordinates and volumes for the cells of one grid.
pub trait CellGeometry: Sync {
    fn dims(&self) -> &GridDims;

    /// Centre of a cell in world coordinates.
    fn cell_center(&self, global_index: usize) -> Option<(Real, Real, Real)>;

    fn cell_volume(&self, global_index: usize) -> Option<Real>;
}

/// Axis aligned box grid with uniform cell sizes.
///
/// `z` grows downwards, matching depth.
#[derive(Debug, Clone, PartialEq)]
pub struct RegularGeometry {
    pub dims: GridDims,
    pub origin: [Real; 3],
    pub cell_size: [Real; 3],
}

impl RegularGeometry {
    pub fn new(dims: GridDims, origin: [Real; 3], cell_size: [Real; 3]) -> Self {
        Self {
            dims,
            origin,
            cell_size,
        }
    }
}

impl CellGeometry for RegularGeometry {
    fn dims(&self) -> &GridDims {
        &self.dims
    }

    fn cell_center(&self, global_index: usize) -> Option<(Real, Real, Real)> {
        let (i, j, k) = self.dims.ijk(global_index)?;
        let [dx, dy, dz] = self.cell_size;
        Some((
            self.origin[0] + (i as Real + 0.5) * dx,
            self.origin[1] + (j as Real + 0.5) * dy,
            self.origin[2] + (k as Real + 0.5) * dz,
        ))
    }

    fn cell_volume(&self, global_index: usize) -> Option<Real> {
        self.dims.ijk(global_index)?;
        let [dx, dy, dz] = self.cell_size;
        Some(dx * dy * dz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wt_core::{Tolerances, nearly_equal};

    #[test]
    fn regular_centres_and_volumes() {
        let geo = RegularGeometry::new(GridDims::new(2, 2, 2), [100.0, 200.0, 1000.0], [10.0, 20.0, 5.0]);
        let (x, y, z) = geo.cell_center(7).unwrap();
        let tol = Tolerances::default();
        assert!(nearly_equal(x, 115.0, tol));
        assert!(nearly_equal(y, 230.0, tol));
        assert!(nearly_equal(z, 1007.5, tol));
        assert!(nearly_equal(geo.cell_volume(0).unwrap(), 1000.0, tol));
        assert!(geo.cell_center(8).is_none());
    }
}
