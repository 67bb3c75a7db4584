//! All wells of a case, each behind its own lock.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use crate::series::{TimeKey, WellTimeSeries};
use crate::state::WellState;
use crate::{HistoryError, HistoryResult};

/// Per-well archives.
///
/// The outer map is only locked long enough to find or create a well's
/// archive; adds and lookups then hold that well's lock alone, so wells
/// never contend with each other.
#[derive(Debug, Default)]
pub struct WellHistory {
    wells: RwLock<BTreeMap<String, Arc<Mutex<WellTimeSeries>>>>,
}

impl WellHistory {
    pub fn new() -> Self {
        Self::default()
    }

    fn series(&self, name: &str) -> Option<Arc<Mutex<WellTimeSeries>>> {
        self.wells
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    fn series_or_insert(&self, name: &str) -> Arc<Mutex<WellTimeSeries>> {
        if let Some(series) = self.series(name) {
            return series;
        }
        self.wells
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(WellTimeSeries::new(name))))
            .clone()
    }

    /// Archive a snapshot under its well's name.
    pub fn add_state(&self, state: WellState) -> HistoryResult<Arc<WellState>> {
        let state = Arc::new(state);
        let series = self.series_or_insert(state.name());
        series
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .add(Arc::clone(&state))?;
        Ok(state)
    }

    pub fn has_well(&self, name: &str) -> bool {
        self.series(name).is_some()
    }

    /// Well names in sorted order.
    pub fn well_names(&self) -> Vec<String> {
        self.wells
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }

    /// Copy of a well's archive; snapshots are shared, not cloned.
    pub fn time_series(&self, name: &str) -> Option<WellTimeSeries> {
        let series = self.series(name)?;
        let guard = series.lock().unwrap_or_else(PoisonError::into_inner);
        Some(guard.clone())
    }

    /// Latest snapshot of `well` at or before `key`.
    ///
    /// `Ok(None)` means the key lies before the well's first snapshot.
    pub fn snapshot_at(&self, well: &str, key: TimeKey) -> HistoryResult<Option<Arc<WellState>>> {
        let series = self
            .series(well)
            .ok_or_else(|| HistoryError::UnknownWell(well.to_string()))?;
        let guard = series.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(guard.lookup(key).cloned())
    }
}
