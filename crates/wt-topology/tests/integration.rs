//! Integration tests for wt-topology.

use proptest::prelude::*;
use wt_grid::{GridDims, GridId, GridSet};
use wt_restart::fixture::{ConnectionRow, ReportFixture, SegmentRow, WellFixture};
use wt_restart::{RsegLoader, WellHeader};
use wt_topology::{
    BranchCollection, ConnectionCollection, MAIN_STEM, OUTLET_END, Segment, SegmentConnections,
    SegmentSet, TopologyError, link_segments, load_segments,
};

#[test]
fn reconstruct_well_with_one_lateral() {
    // 1 <- 2 (main stem), 1 <- 3 (branch 2)
    let report = ReportFixture::new(3, 30)
        .well(
            WellFixture::new("OP_1")
                .msw(vec![
                    SegmentRow::new(OUTLET_END, MAIN_STEM).depth(1000.0),
                    SegmentRow::new(1, MAIN_STEM).depth(1050.0),
                    SegmentRow::new(1, 2).depth(1020.0),
                ])
                .connection(ConnectionRow::new(1, 1, 2).segment(2))
                .connection(ConnectionRow::new(2, 1, 2).segment(3)),
        )
        .build();
    let global = report.global().unwrap();
    let mut rseg = RsegLoader::new(&report.header, global);

    let mut segments = load_segments(&report.header, global, &mut rseg, 0)
        .unwrap()
        .expect("segmented well");
    assert_eq!(link_segments(&mut segments).unwrap(), 2);

    let s1 = segments.handle(1).unwrap();
    let s2 = segments.handle(2).unwrap();
    let s3 = segments.handle(3).unwrap();
    assert_eq!(segments.get(s1).unwrap().link_count(), 2);
    assert_eq!(segments.get(s2).unwrap().outlet(), Some(s1));
    assert_eq!(segments.get(s3).unwrap().outlet(), Some(s1));
    assert_eq!(segments.get(s1).unwrap().outlet(), None);

    let branches = BranchCollection::decompose(&segments).unwrap();
    assert_eq!(branches.len(), 2);
    assert_eq!(branches.iget_start_segment(0), Some(s2));
    assert_eq!(branches.start_segment(2), Some(s3));
    assert!(!branches.has_branch(7));

    let main: Vec<_> = branches.get(MAIN_STEM).unwrap().walk(&segments).collect();
    assert_eq!(main, vec![s2, s1]);
    let lateral = branches.get(2).unwrap();
    assert_eq!(lateral.walk(&segments).collect::<Vec<_>>(), vec![s3]);
    assert_eq!(lateral.junction(&segments), Some(s1));
    assert_eq!(
        lateral.path_to_wellhead(&segments).collect::<Vec<_>>(),
        vec![s3, s1]
    );

    let well = WellHeader::decode(&report.header, global, 0).unwrap();
    let conns = ConnectionCollection::load(&report.header, global, &well, well.is_msw()).unwrap();
    let mut grids = GridSet::new();
    grids
        .insert_full(GridId::Global, GridDims::new(4, 4, 4))
        .unwrap();
    let mut attached = SegmentConnections::new();
    attached
        .attach(Some(&segments), &conns, Some(&grids))
        .unwrap();

    assert!(attached.has_global_grid_connections(s2));
    assert!(attached.has_global_grid_connections(s3));
    assert!(!attached.has_global_grid_connections(s1));
    let a = &attached.attachments(&GridId::Global)[1];
    // (1, 0, 1) in a 4x4x4 grid
    assert_eq!(a.global_index, Some(17));
}

#[test]
fn normal_well_with_stray_segment_rows_has_no_topology() {
    let report = ReportFixture::new(1, 1)
        .well(
            WellFixture::new("P")
                .stray_segments(vec![
                    SegmentRow::new(OUTLET_END, MAIN_STEM),
                    SegmentRow::new(1, MAIN_STEM),
                ])
                .connection(ConnectionRow::new(1, 1, 1).segment(2)),
        )
        .build();
    let global = report.global().unwrap();
    let mut rseg = RsegLoader::new(&report.header, global);
    assert_eq!(
        load_segments(&report.header, global, &mut rseg, 0).unwrap(),
        None
    );

    let well = WellHeader::decode(&report.header, global, 0).unwrap();
    let conns = ConnectionCollection::load(&report.header, global, &well, well.is_msw()).unwrap();
    let mut attached = SegmentConnections::new();
    attached.attach(None, &conns, None).unwrap();
    assert_eq!(attached.main_bore_connections(&GridId::Global).len(), 1);
}

#[test]
fn local_grid_connections_stay_in_their_grid() {
    let lgr = GridId::Local("LGR1".into());
    let report = ReportFixture::new(1, 1)
        .well(
            WellFixture::new("I")
                .msw(vec![SegmentRow::new(OUTLET_END, MAIN_STEM)])
                .connection(ConnectionRow::new(3, 3, 1).segment(1)),
        )
        .local_grid(
            "LGR1",
            vec![
                WellFixture::new("I")
                    .msw(vec![SegmentRow::new(OUTLET_END, MAIN_STEM)])
                    .connection(ConnectionRow::new(2, 1, 1).segment(1)),
            ],
        )
        .build();
    let global = report.global().unwrap();
    let mut rseg = RsegLoader::new(&report.header, global);
    let mut segments = load_segments(&report.header, global, &mut rseg, 0)
        .unwrap()
        .unwrap();
    link_segments(&mut segments).unwrap();

    let mut grids = GridSet::new();
    grids
        .insert_full(GridId::Global, GridDims::new(5, 5, 1))
        .unwrap();
    grids.insert_full(lgr.clone(), GridDims::new(2, 2, 1)).unwrap();

    let mut attached = SegmentConnections::new();
    for records in &report.grids {
        let well_nr = records.find_well("I").unwrap();
        let well = WellHeader::decode(&report.header, records, well_nr).unwrap();
        let conns = ConnectionCollection::load(&report.header, records, &well, true).unwrap();
        attached
            .attach(Some(&segments), &conns, Some(&grids))
            .unwrap();
    }

    let s1 = segments.handle(1).unwrap();
    assert!(attached.has_global_grid_connections(s1));
    assert!(attached.has_grid_connections(s1, &lgr));
    assert_eq!(attached.attachments(&GridId::Global)[0].global_index, Some(12));
    assert_eq!(attached.attachments(&lgr)[0].global_index, Some(1));
}

#[test]
fn missing_segment_records_for_msw_well_is_an_error() {
    let report = ReportFixture::new(1, 1)
        .well(WellFixture::new("OP").msw(vec![SegmentRow::new(OUTLET_END, MAIN_STEM)]))
        .without_segment_records()
        .build();
    let global = report.global().unwrap();
    let mut rseg = RsegLoader::new(&report.header, global);
    let err = load_segments(&report.header, global, &mut rseg, 0).unwrap_err();
    assert!(matches!(err, TopologyError::Restart(_)));
}

/// Rows `(outlet_id, branch_id)` of a random segment tree.
///
/// Segment `n + 1` drains into an earlier segment. A segment continues its
/// outlet's branch only when no other segment already does, so every branch
/// is a simple chain.
fn random_tree(choices: &[(prop::sample::Index, bool)]) -> Vec<(i32, i32)> {
    let mut rows = vec![(OUTLET_END, MAIN_STEM)];
    let mut continued = vec![false];
    let mut next_branch = MAIN_STEM + 1;
    for (parent, same_branch) in choices {
        let p = parent.index(rows.len());
        let branch = if *same_branch && !continued[p] {
            continued[p] = true;
            rows[p].1
        } else {
            next_branch += 1;
            next_branch - 1
        };
        rows.push((p as i32 + 1, branch));
        continued.push(false);
    }
    rows
}

proptest! {
    #[test]
    fn random_trees_decompose_into_disjoint_chains(
        choices in prop::collection::vec((any::<prop::sample::Index>(), any::<bool>()), 0..40)
    ) {
        let rows = random_tree(&choices);
        let mut set = SegmentSet::new();
        for (n, &(outlet, branch)) in rows.iter().enumerate() {
            set.insert(Segment::new(n as i32 + 1, outlet, branch, Default::default())).unwrap();
        }
        prop_assert_eq!(link_segments(&mut set).unwrap(), rows.len() - 1);
        let total_links: u32 = set.iter().map(|(_, s)| s.link_count()).sum();
        prop_assert_eq!(total_links as usize, rows.len() - 1);

        let branches = BranchCollection::decompose(&set).unwrap();
        let mut visited = vec![0_u32; set.len()];
        for branch in branches.iter() {
            for idx in branch.walk(&set) {
                prop_assert_eq!(set.get(idx).unwrap().branch_id(), branch.branch_id);
                visited[idx.slot()] += 1;
            }
            let path: Vec<_> = branch.path_to_wellhead(&set).collect();
            prop_assert!(path.len() <= set.len());
            let last = *path.last().unwrap();
            prop_assert_eq!(set.get(last).unwrap().id(), 1);
        }
        prop_assert!(visited.iter().all(|&v| v == 1));
    }
}
