//! The set of grids (global plus local refinements) of one case.

use serde::{Deserialize, Serialize};
use wt_core::Real;

use crate::active::ActiveMap;
use crate::dims::{GridDims, GridDimsTable};
use crate::error::{GridError, GridResult};
use crate::geometry::RegularGeometry;
use crate::grid_id::GridId;

/// Serialized description of one grid, as written by an external decoder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridDescription {
    pub name: GridId,
    pub nx: usize,
    pub ny: usize,
    pub nz: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actnum: Option<Vec<i32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<[Real; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell_size: Option<[Real; 3]>,
}

/// One grid's index domain.
#[derive(Debug, Clone)]
pub struct Grid {
    pub id: GridId,
    pub active: ActiveMap,
    pub geometry: Option<RegularGeometry>,
}

impl Grid {
    pub fn dims(&self) -> &GridDims {
        self.active.dims()
    }
}

/// Grids of a case, global grid first.
#[derive(Debug, Clone, Default)]
pub struct GridSet {
    grids: Vec<Grid>,
}

impl GridSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_descriptions(descriptions: &[GridDescription]) -> GridResult<Self> {
        let mut set = Self::new();
        for desc in descriptions {
            let dims = GridDims::new(desc.nx, desc.ny, desc.nz);
            if dims.global_size() == 0 {
                return Err(GridError::BadDimensions {
                    nx: desc.nx as i32,
                    ny: desc.ny as i32,
                    nz: desc.nz as i32,
                });
            }
            let active = match &desc.actnum {
                Some(actnum) => ActiveMap::from_actnum(&desc.name, dims, actnum)?,
                None => ActiveMap::all_active(dims),
            };
            let geometry = desc.cell_size.map(|cell_size| {
                RegularGeometry::new(*active.dims(), desc.origin.unwrap_or([0.0; 3]), cell_size)
            });
            set.insert(Grid {
                id: desc.name.clone(),
                active,
                geometry,
            })?;
        }
        Ok(set)
    }

    /// Register a grid where every cell is active.
    pub fn insert_full(&mut self, id: GridId, dims: GridDims) -> GridResult<()> {
        self.insert(Grid {
            id,
            active: ActiveMap::all_active(dims),
            geometry: None,
        })
    }

    pub fn insert(&mut self, grid: Grid) -> GridResult<()> {
        if self.grid(&grid.id).is_some() {
            return Err(GridError::DuplicateGrid(grid.id));
        }
        self.grids.push(grid);
        Ok(())
    }

    pub fn grid(&self, id: &GridId) -> Option<&Grid> {
        self.grids.iter().find(|g| &g.id == id)
    }

    pub fn grids(&self) -> &[Grid] {
        &self.grids
    }

    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }

    /// Dimension table in registration order.
    pub fn dims_table(&self) -> GridDimsTable {
        let mut table = GridDimsTable::new();
        for grid in &self.grids {
            table.push(*grid.dims());
        }
        table
    }

    /// Global index of a 0-based cell within the named grid's own domain.
    pub fn global_index(&self, id: &GridId, i: usize, j: usize, k: usize) -> GridResult<usize> {
        let grid = self
            .grid(id)
            .ok_or_else(|| GridError::UnknownGrid(id.clone()))?;
        grid.dims()
            .global_index(i, j, k)
            .ok_or_else(|| GridError::CellOutOfRange {
                grid: id.clone(),
                i,
                j,
                k,
            })
    }

    /// Active index of a global cell within the named grid.
    pub fn active_index(&self, id: &GridId, global_index: usize) -> Option<usize> {
        self.grid(id)?.active.active_index(global_index)
    }
}
