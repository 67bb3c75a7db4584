//! Time ordered archive of one well's snapshots.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::state::WellState;
use crate::{HistoryError, HistoryResult};

/// Key of a point-in-time query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeKey {
    Report(i32),
    Time(DateTime<Utc>),
}

/// Snapshots of one well, ordered by simulation time.
///
/// Lookups answer "latest snapshot at or before the key". A key before the
/// first snapshot has no answer; a key past the last snapshot returns the
/// last one, so there is no way to tell a query beyond the end of the run
/// from one inside the last report interval.
#[derive(Debug, Clone)]
pub struct WellTimeSeries {
    name: String,
    entries: Vec<Arc<WellState>>,
}

impl WellTimeSeries {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a snapshot, re-sorting when it arrives out of order.
    pub fn add(&mut self, state: Arc<WellState>) -> HistoryResult<()> {
        if state.name() != self.name {
            return Err(HistoryError::WellNameMismatch {
                expected: self.name.clone(),
                got: state.name().to_string(),
            });
        }

        let out_of_order = self
            .entries
            .last()
            .is_some_and(|last| state.sim_time() < last.sim_time());
        self.entries.push(state);
        if out_of_order {
            warn!(well = %self.name, "snapshot added out of time order; re-sorting");
            self.entries.sort_by_key(|s| s.sim_time());
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn first_state(&self) -> Option<&Arc<WellState>> {
        self.entries.first()
    }

    pub fn last_state(&self) -> Option<&Arc<WellState>> {
        self.entries.last()
    }

    pub fn iget_state(&self, index: usize) -> Option<&Arc<WellState>> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<WellState>> {
        self.entries.iter()
    }

    pub fn lookup_by_time(&self, time: DateTime<Utc>) -> Option<&Arc<WellState>> {
        self.lookup_index(|s| s.sim_time(), time)
            .map(|i| &self.entries[i])
    }

    /// Report steps are assumed to increase with simulation time.
    pub fn lookup_by_report(&self, report_step: i32) -> Option<&Arc<WellState>> {
        self.lookup_index(|s| s.report_step(), report_step)
            .map(|i| &self.entries[i])
    }

    pub fn lookup(&self, key: TimeKey) -> Option<&Arc<WellState>> {
        match key {
            TimeKey::Report(step) => self.lookup_by_report(step),
            TimeKey::Time(time) => self.lookup_by_time(time),
        }
    }

    /// Index of the greatest entry whose key is `<= query`.
    fn lookup_index<K, F>(&self, key: F, query: K) -> Option<usize>
    where
        K: Ord + Copy,
        F: Fn(&WellState) -> K,
    {
        let upper = self.entries.partition_point(|s| key(s.as_ref()) <= query);
        let index = upper.checked_sub(1)?;

        debug_assert!(key(self.entries[index].as_ref()) <= query);
        debug_assert!(
            self.entries
                .get(index + 1)
                .is_none_or(|next| query < key(next.as_ref())),
            "time index bound violated at {index}"
        );
        Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use wt_grid::GridId;
    use wt_restart::fixture::sim_time;
    use wt_restart::{WellHeader, WellKind};

    fn state(name: &str, report_step: i32, days: i64) -> Arc<WellState> {
        let header = WellHeader {
            name: name.to_string(),
            grid: GridId::Global,
            well_nr: 0,
            wellhead: (0, 0, 0),
            num_connections: 0,
            kind: WellKind::Producer,
            open: true,
            segment_well_nr: None,
        };
        Arc::new(WellState::new(report_step, sim_time(days), &header))
    }

    fn series(days: &[i64]) -> WellTimeSeries {
        let mut ts = WellTimeSeries::new("OP_1");
        for (step, &d) in days.iter().enumerate() {
            ts.add(state("OP_1", step as i32, d)).unwrap();
        }
        ts
    }

    fn found_days(ts: &WellTimeSeries, days: i64) -> Option<i32> {
        ts.lookup_by_time(sim_time(days)).map(|s| s.report_step())
    }

    #[test]
    fn lookup_returns_latest_at_or_before() {
        let ts = series(&[30, 60, 70, 90]);
        assert_eq!(found_days(&ts, 10), None);
        assert_eq!(found_days(&ts, 30), Some(0));
        assert_eq!(found_days(&ts, 75), Some(2));
        assert_eq!(found_days(&ts, 90), Some(3));
        assert_eq!(found_days(&ts, 1000), Some(3));
    }

    #[test]
    fn lookup_by_report_step() {
        let ts = series(&[30, 60, 70, 90]);
        assert!(ts.lookup_by_report(-1).is_none());
        assert_eq!(ts.lookup_by_report(2).unwrap().sim_time(), sim_time(70));
        assert_eq!(ts.lookup(TimeKey::Report(40)).unwrap().report_step(), 3);
        assert_eq!(
            ts.lookup(TimeKey::Time(sim_time(65))).unwrap().report_step(),
            1
        );
    }

    #[test]
    fn out_of_order_add_is_sorted() {
        let mut ts = WellTimeSeries::new("OP_1");
        ts.add(state("OP_1", 1, 30)).unwrap();
        ts.add(state("OP_1", 3, 90)).unwrap();
        ts.add(state("OP_1", 2, 50)).unwrap();

        let days: Vec<_> = ts.iter().map(|s| s.sim_time()).collect();
        assert_eq!(days, vec![sim_time(30), sim_time(50), sim_time(90)]);
        assert_eq!(found_days(&ts, 60), Some(2));
        assert_eq!(ts.first_state().unwrap().report_step(), 1);
        assert_eq!(ts.last_state().unwrap().report_step(), 3);
        assert_eq!(ts.iget_state(1).unwrap().report_step(), 2);
    }

    #[test]
    fn empty_series_has_no_answer() {
        let ts = WellTimeSeries::new("OP_1");
        assert!(ts.is_empty());
        assert!(found_days(&ts, 0).is_none());
        assert!(ts.last_state().is_none());
    }

    #[test]
    fn rejects_other_wells() {
        let mut ts = WellTimeSeries::new("OP_1");
        let err = ts.add(state("OP_2", 0, 1)).unwrap_err();
        assert_eq!(
            err,
            HistoryError::WellNameMismatch {
                expected: "OP_1".into(),
                got: "OP_2".into()
            }
        );
        assert_eq!(ts.name(), "OP_1");
        assert!(ts.is_empty());
    }

    proptest! {
        #[test]
        fn lookup_bounds_query(
            mut days in prop::collection::vec(0_i64..500, 1..30),
            query in -10_i64..520,
        ) {
            let mut ts = WellTimeSeries::new("OP_1");
            for (step, &d) in days.iter().enumerate() {
                ts.add(state("OP_1", step as i32, d)).unwrap();
            }
            days.sort_unstable();

            let t = sim_time(query);
            match ts.lookup_by_time(t) {
                None => prop_assert!(query < days[0]),
                Some(found) => {
                    prop_assert!(found.sim_time() <= t);
                    let later = days.iter().filter(|&&d| sim_time(d) > found.sim_time());
                    for &d in later {
                        prop_assert!(t < sim_time(d));
                    }
                }
            }
            let sorted: Vec<_> = ts.iter().map(|s| s.sim_time()).collect();
            prop_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
        }
    }
}
