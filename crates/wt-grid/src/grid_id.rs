//! Identifier of the grid a cell index belongs to.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Name the simulator uses for the global (host) grid.
pub const GLOBAL_GRID_NAME: &str = "Global";

/// The grid a cell index is expressed in.
///
/// Local grid refinements have their own `(i, j, k)` and global index
/// domain; an index is only meaningful together with its grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GridId {
    Global,
    Local(String),
}

impl GridId {
    /// Resolve a grid name, mapping the reserved global name to `Global`.
    pub fn from_name(name: &str) -> Self {
        if name == GLOBAL_GRID_NAME {
            GridId::Global
        } else {
            GridId::Local(name.to_string())
        }
    }

    pub fn is_global(&self) -> bool {
        matches!(self, GridId::Global)
    }

    pub fn name(&self) -> &str {
        match self {
            GridId::Global => GLOBAL_GRID_NAME,
            GridId::Local(name) => name,
        }
    }
}

impl From<String> for GridId {
    fn from(name: String) -> Self {
        GridId::from_name(&name)
    }
}

impl From<GridId> for String {
    fn from(id: GridId) -> Self {
        id.name().to_string()
    }
}

impl fmt::Display for GridId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
