//! Integration tests for wt-grid.

use wt_grid::{CellGeometry, GridCache, GridDescription, GridError, GridId, GridSet};

fn case_grids() -> GridSet {
    let json = r#"[
        {"name": "Global", "nx": 3, "ny": 2, "nz": 1,
         "actnum": [1, 1, 0, 1, 1, 1],
         "origin": [0.0, 0.0, 2000.0], "cell_size": [50.0, 50.0, 10.0]},
        {"name": "LGR1", "nx": 2, "ny": 2, "nz": 2}
    ]"#;
    let descriptions: Vec<GridDescription> = serde_json::from_str(json).unwrap();
    GridSet::from_descriptions(&descriptions).unwrap()
}

#[test]
fn grids_keep_separate_index_domains() {
    let grids = case_grids();
    let lgr = GridId::Local("LGR1".into());

    // Same (i, j, k) lands on different cells in each grid.
    assert_eq!(grids.global_index(&GridId::Global, 1, 1, 0).unwrap(), 4);
    assert_eq!(grids.global_index(&lgr, 1, 1, 0).unwrap(), 3);

    // Cell 2 is inactive in the global grid but active in the local grid.
    assert_eq!(grids.active_index(&GridId::Global, 2), None);
    assert_eq!(grids.active_index(&GridId::Global, 3), Some(2));
    assert_eq!(grids.active_index(&lgr, 2), Some(2));
}

#[test]
fn dims_table_follows_registration_order() {
    let grids = case_grids();
    let table = grids.dims_table();
    assert_eq!(table.num_grids(), 2);
    assert_eq!(table.iget_dims(0).unwrap().nactive, 5);
    assert_eq!(table.iget_dims(1).unwrap().global_size(), 8);
}

#[test]
fn unknown_grid_and_out_of_range_cells() {
    let grids = case_grids();
    assert!(matches!(
        grids.global_index(&GridId::Local("NOPE".into()), 0, 0, 0),
        Err(GridError::UnknownGrid(_))
    ));
    assert!(matches!(
        grids.global_index(&GridId::Global, 3, 0, 0),
        Err(GridError::CellOutOfRange { i: 3, .. })
    ));
    assert_eq!(grids.active_index(&GridId::Local("NOPE".into()), 0), None);
}

#[test]
fn duplicate_grid_is_rejected() {
    let mut grids = case_grids();
    let dims = *grids.grid(&GridId::Global).unwrap().dims();
    assert!(matches!(
        grids.insert_full(GridId::Global, dims),
        Err(GridError::DuplicateGrid(GridId::Global))
    ));
}

#[test]
fn cache_over_described_geometry() {
    let grids = case_grids();
    let global = grids.grid(&GridId::Global).unwrap();
    let geometry = global.geometry.as_ref().unwrap();
    assert_eq!(geometry.dims().nactive, 5);

    let cache = GridCache::new(geometry, &global.active);
    assert_eq!(cache.size(), 5);
    // Active cell 2 is global cell 3, i.e. (0, 1, 0).
    assert_eq!(cache.xyz(2), Some((25.0, 75.0, 2005.0)));
    assert!(cache.volume().iter().all(|&v| v == 25_000.0));
}
