use std::sync::Arc;
use std::thread;

use wt_grid::GridId;
use wt_history::{HistoryError, TimeKey, WellHistory, WellState};
use wt_restart::fixture::sim_time;
use wt_restart::{WellHeader, WellKind};

fn state(name: &str, report_step: i32, days: i64) -> WellState {
    let header = WellHeader {
        name: name.to_string(),
        grid: GridId::Global,
        well_nr: 0,
        wellhead: (2, 3, 0),
        num_connections: 0,
        kind: WellKind::WaterInjector,
        open: true,
        segment_well_nr: None,
    };
    WellState::new(report_step, sim_time(days), &header)
}

#[test]
fn registry_tracks_wells_separately() {
    let history = WellHistory::new();
    history.add_state(state("OP_1", 1, 30)).unwrap();
    history.add_state(state("OP_1", 2, 60)).unwrap();
    history.add_state(state("WI_1", 2, 60)).unwrap();

    assert!(history.has_well("OP_1"));
    assert!(!history.has_well("OP_9"));
    assert_eq!(history.well_names(), vec!["OP_1", "WI_1"]);
    assert_eq!(history.time_series("OP_1").unwrap().len(), 2);
    assert_eq!(history.time_series("WI_1").unwrap().len(), 1);

    let at = history
        .snapshot_at("OP_1", TimeKey::Time(sim_time(45)))
        .unwrap()
        .unwrap();
    assert_eq!(at.report_step(), 1);
    assert_eq!(at.wellhead(&GridId::Global), Some((2, 3, 0)));
    assert!(!at.is_msw());
    assert_eq!(at.num_segments(), 0);
    assert!(at.branches().is_empty());

    assert!(
        history
            .snapshot_at("WI_1", TimeKey::Report(1))
            .unwrap()
            .is_none()
    );
    assert_eq!(
        history
            .snapshot_at("OP_9", TimeKey::Report(1))
            .unwrap_err(),
        HistoryError::UnknownWell("OP_9".into())
    );
}

#[test]
fn concurrent_adds_and_lookups() {
    let history = Arc::new(WellHistory::new());
    let handles: Vec<_> = (0..4)
        .map(|w| {
            let history = Arc::clone(&history);
            thread::spawn(move || {
                let name = format!("W{w}");
                // Newest first, so every add after the first re-sorts.
                for step in (0..20).rev() {
                    history
                        .add_state(state(&name, step, i64::from(step) * 10))
                        .unwrap();
                    let _ = history.snapshot_at(&name, TimeKey::Report(step));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    for w in 0..4 {
        let series = history.time_series(&format!("W{w}")).unwrap();
        let steps: Vec<_> = series.iter().map(|s| s.report_step()).collect();
        assert_eq!(steps, (0..20).collect::<Vec<_>>());
    }
}
