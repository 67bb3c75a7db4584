//! wt-grid: the grid-geometry view the well engine consumes.
//!
//! Provides:
//! - Grid identifiers (the global grid or a named local grid)
//! - Per-grid dimension tables read from header integer fields
//! - Active/global cell index mapping, including dual porosity grids
//! - A cache of active cell centres with lazily computed volumes
//!
//! # Example
//!
//! ```
//! use wt_grid::{GridDims, GridId, GridSet};
//!
//! let mut grids = GridSet::new();
//! grids.insert_full(GridId::Global, GridDims::new(2, 2, 1)).unwrap();
//!
//! let gi = grids.global_index(&GridId::Global, 1, 1, 0).unwrap();
//! assert_eq!(gi, 3);
//! assert_eq!(grids.active_index(&GridId::Global, gi), Some(3));
//! ```

pub mod active;
pub mod cache;
pub mod dims;
pub mod error;
pub mod geometry;
pub mod grid_id;
pub mod grids;

pub use active::{ActiveMap, CELL_ACTIVE_FRACTURE, CELL_ACTIVE_MATRIX};
pub use cache::GridCache;
pub use dims::{GridDims, GridDimsTable};
pub use error::{GridError, GridResult};
pub use geometry::{CellGeometry, RegularGeometry};
pub use grid_id::GridId;
pub use grids::{Grid, GridDescription, GridSet};
