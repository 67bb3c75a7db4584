//! Cached world positions of active cells.
//!
//! Repeated coordinate lookups go through the active index, so the cache
//! internalizes the centre of every active cell once. Volumes are costlier
//! and rarely needed; they are computed on first request.

use std::sync::OnceLock;

use rayon::prelude::*;
use wt_core::Real;

use crate::active::ActiveMap;
use crate::geometry::CellGeometry;

/// Active cell centres (and lazily, volumes) for one grid.
pub struct GridCache<'g, G: CellGeometry> {
    geometry: &'g G,
    global_index: Vec<usize>,
    xp: Vec<Real>,
    yp: Vec<Real>,
    zp: Vec<Real>,
    volume: OnceLock<Vec<Real>>,
}

impl<'g, G: CellGeometry> GridCache<'g, G> {
    pub fn new(geometry: &'g G, active: &ActiveMap) -> Self {
        let size = active.active_size();
        let mut global_index = Vec::with_capacity(size);
        let mut xp = Vec::with_capacity(size);
        let mut yp = Vec::with_capacity(size);
        let mut zp = Vec::with_capacity(size);

        for active_index in 0..size {
            let Some(gi) = active.global_index_of_active(active_index) else {
                continue;
            };
            let Some((x, y, z)) = geometry.cell_center(gi) else {
                continue;
            };
            global_index.push(gi);
            xp.push(x);
            yp.push(y);
            zp.push(z);
        }

        Self {
            geometry,
            global_index,
            xp,
            yp,
            zp,
            volume: OnceLock::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.global_index.len()
    }

    pub fn global_index(&self) -> &[usize] {
        &self.global_index
    }

    pub fn xp(&self) -> &[Real] {
        &self.xp
    }

    pub fn yp(&self) -> &[Real] {
        &self.yp
    }

    pub fn zp(&self) -> &[Real] {
        &self.zp
    }

    /// Centre of an active cell.
    pub fn xyz(&self, active_index: usize) -> Option<(Real, Real, Real)> {
        Some((
            *self.xp.get(active_index)?,
            self.yp[active_index],
            self.zp[active_index],
        ))
    }

    /// Volume of every active cell, computed on first call.
    pub fn volume(&self) -> &[Real] {
        self.volume.get_or_init(|| {
            self.global_index
                .par_iter()
                .map(|&gi| self.geometry.cell_volume(gi).unwrap_or(0.0))
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dims::GridDims;
    use crate::geometry::RegularGeometry;
    use crate::grid_id::GridId;

    #[test]
    fn cache_skips_inactive_cells() {
        let dims = GridDims::new(3, 1, 1);
        let geo = RegularGeometry::new(dims, [0.0; 3], [1.0, 1.0, 2.0]);
        let active = ActiveMap::from_actnum(&GridId::Global, dims, &[1, 0, 1]).unwrap();

        let cache = GridCache::new(&geo, &active);
        assert_eq!(cache.size(), 2);
        assert_eq!(cache.global_index(), &[0, 2]);
        assert_eq!(cache.xyz(1), Some((2.5, 0.5, 1.0)));
        assert_eq!(cache.xyz(2), None);
    }

    #[test]
    fn volume_is_computed_once_and_kept() {
        let dims = GridDims::new(2, 2, 1);
        let geo = RegularGeometry::new(dims, [0.0; 3], [2.0, 3.0, 4.0]);
        let active = ActiveMap::all_active(dims);
        let cache = GridCache::new(&geo, &active);

        let first = cache.volume().as_ptr();
        assert_eq!(cache.volume(), &[24.0; 4]);
        assert_eq!(cache.volume().as_ptr(), first);
    }
}
