//! Grid connections (perforations) of a well.

use std::collections::BTreeMap;

use wt_core::{ConnIdx, Real};
use wt_grid::GridId;
use wt_restart::{
    GridRecords, ICON_DIRECTION_INDEX, ICON_DIRX, ICON_DIRY, ICON_DIRZ, ICON_FRACX, ICON_FRACY,
    ICON_I_INDEX, ICON_J_INDEX, ICON_K_INDEX, ICON_KW, ICON_SEGMENT_INDEX, ICON_STATUS_INDEX,
    RestartError, RestartHeader, RestartResult, SCON_CF_INDEX, WellHeader,
};

/// Penetration direction of a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnDirection {
    X,
    Y,
    Z,
    FractureX,
    FractureY,
}

impl ConnDirection {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            ICON_DIRX => Some(ConnDirection::X),
            ICON_DIRY => Some(ConnDirection::Y),
            ICON_DIRZ => Some(ConnDirection::Z),
            ICON_FRACX => Some(ConnDirection::FractureX),
            ICON_FRACY => Some(ConnDirection::FractureY),
            _ => None,
        }
    }
}

/// One grid cell through which the well talks to the reservoir.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    pub grid: GridId,
    /// 0-based cell in `grid`'s own index domain.
    pub ijk: (usize, usize, usize),
    pub open: bool,
    pub direction: Option<ConnDirection>,
    /// Owning segment id; only set for multi-segment wells.
    pub segment_id: Option<i32>,
    pub connection_factor: Option<Real>,
}

impl Connection {
    /// Decode row `conn_nr` of a well's `ICON` (and `SCON`, if present).
    pub fn decode(
        header: &RestartHeader,
        records: &GridRecords,
        well_nr: usize,
        conn_nr: usize,
        is_msw: bool,
    ) -> RestartResult<Self> {
        let icon = records.icon_row(header, well_nr, conn_nr)?;
        let field = |column: usize| {
            icon.get(column).copied().ok_or(RestartError::RecordTooShort {
                keyword: ICON_KW,
                needed: column,
                len: icon.len(),
            })
        };
        let one_based = |v: i32| (v - 1).max(0) as usize;

        let segment_id = if is_msw {
            Some(field(ICON_SEGMENT_INDEX)?)
        } else {
            None
        };
        let connection_factor = records
            .scon_row(header, well_nr, conn_nr)?
            .and_then(|scon| scon.get(SCON_CF_INDEX).copied());

        Ok(Self {
            grid: records.grid.clone(),
            ijk: (
                one_based(field(ICON_I_INDEX)?),
                one_based(field(ICON_J_INDEX)?),
                one_based(field(ICON_K_INDEX)?),
            ),
            open: field(ICON_STATUS_INDEX)? > 0,
            direction: ConnDirection::from_code(field(ICON_DIRECTION_INDEX)?),
            segment_id,
            connection_factor,
        })
    }
}

/// Connections of one well in one grid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectionCollection {
    connections: Vec<Connection>,
}

impl ConnectionCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode all connections the well header announces.
    pub fn load(
        header: &RestartHeader,
        records: &GridRecords,
        well: &WellHeader,
        is_msw: bool,
    ) -> RestartResult<Self> {
        let mut collection = Self::new();
        for conn_nr in 0..well.num_connections.min(header.ncwmax) {
            collection.push(Connection::decode(
                header,
                records,
                well.well_nr,
                conn_nr,
                is_msw,
            )?);
        }
        Ok(collection)
    }

    pub fn push(&mut self, connection: Connection) -> ConnIdx {
        let idx = ConnIdx::from_usize(self.connections.len());
        self.connections.push(connection);
        idx
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    pub fn get(&self, idx: ConnIdx) -> Option<&Connection> {
        self.connections.get(idx.slot())
    }

    pub fn iter(&self) -> impl Iterator<Item = (ConnIdx, &Connection)> {
        self.connections
            .iter()
            .enumerate()
            .map(|(i, c)| (ConnIdx::from_usize(i), c))
    }
}

/// A well's connections in every grid it perforates, global grid first.
pub type GridConnections = BTreeMap<GridId, ConnectionCollection>;
