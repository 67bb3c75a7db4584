//! One well at one report step.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use wt_grid::GridId;
use wt_restart::{WellHeader, WellKind};
use wt_topology::{BranchCollection, ConnectionCollection, SegmentConnections, SegmentSet};

/// Reconstructed snapshot of a well.
///
/// Normal wells carry no segment set and an empty branch collection; their
/// connections are attached to the main bore.
#[derive(Debug, Clone)]
pub struct WellState {
    name: String,
    report_step: i32,
    sim_time: DateTime<Utc>,
    kind: WellKind,
    open: bool,
    wellheads: BTreeMap<GridId, (usize, usize, usize)>,
    segments: Option<SegmentSet>,
    branches: BranchCollection,
    connections: BTreeMap<GridId, ConnectionCollection>,
    attachments: SegmentConnections,
}

impl WellState {
    /// Empty snapshot from the well's header in its host grid.
    pub fn new(report_step: i32, sim_time: DateTime<Utc>, header: &WellHeader) -> Self {
        let mut wellheads = BTreeMap::new();
        wellheads.insert(header.grid.clone(), header.wellhead);
        Self {
            name: header.name.clone(),
            report_step,
            sim_time,
            kind: header.kind,
            open: header.open,
            wellheads,
            segments: None,
            branches: BranchCollection::new(),
            connections: BTreeMap::new(),
            attachments: SegmentConnections::new(),
        }
    }

    /// Attach the linked segment set and its branches.
    pub fn with_topology(mut self, segments: SegmentSet, branches: BranchCollection) -> Self {
        self.segments = Some(segments);
        self.branches = branches;
        self
    }

    /// Record the well's connections and wellhead in one more grid.
    pub fn add_grid(
        &mut self,
        grid: GridId,
        wellhead: (usize, usize, usize),
        connections: ConnectionCollection,
    ) {
        self.wellheads.insert(grid.clone(), wellhead);
        self.connections.insert(grid, connections);
    }

    /// Replace the connection-to-owner map.
    pub fn set_attachments(&mut self, attachments: SegmentConnections) {
        self.attachments = attachments;
    }

    /// Well name as written in the report.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Report step the snapshot was taken at.
    pub fn report_step(&self) -> i32 {
        self.report_step
    }

    /// Simulation time of the snapshot.
    pub fn sim_time(&self) -> DateTime<Utc> {
        self.sim_time
    }

    /// Producer or injector type.
    pub fn kind(&self) -> WellKind {
        self.kind
    }

    /// Whether the well was open at this report.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the well carries a segment set.
    pub fn is_msw(&self) -> bool {
        self.segments.is_some()
    }

    /// Segment set of a multi-segment well.
    pub fn segments(&self) -> Option<&SegmentSet> {
        self.segments.as_ref()
    }

    /// Number of segments; zero for a normal well.
    pub fn num_segments(&self) -> usize {
        self.segments.as_ref().map_or(0, SegmentSet::len)
    }

    /// Branches; empty for normal wells and when branch loading is off.
    pub fn branches(&self) -> &BranchCollection {
        &self.branches
    }

    /// Zero-based wellhead cell in `grid`.
    pub fn wellhead(&self, grid: &GridId) -> Option<(usize, usize, usize)> {
        self.wellheads.get(grid).copied()
    }

    /// Grids the well has connections in.
    pub fn grids(&self) -> impl Iterator<Item = &GridId> {
        self.connections.keys()
    }

    /// Whether the well appears in `grid`.
    pub fn has_grid(&self, grid: &GridId) -> bool {
        self.connections.contains_key(grid)
    }

    /// Connections in `grid`.
    pub fn connections(&self, grid: &GridId) -> Option<&ConnectionCollection> {
        self.connections.get(grid)
    }

    /// Connections in the global grid.
    pub fn global_connections(&self) -> Option<&ConnectionCollection> {
        self.connections(&GridId::Global)
    }

    /// Which segment, or the main bore, owns each connection.
    pub fn attachments(&self) -> &SegmentConnections {
        &self.attachments
    }
}
