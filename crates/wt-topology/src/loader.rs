//! Segment table loader.

use tracing::debug;
use wt_restart::{
    GridRecords, ISEG_BRANCH_INDEX, ISEG_KW, ISEG_OUTLET_INDEX, RestartError, RestartHeader,
    RsegLoader, WellHeader,
};

use crate::error::TopologyResult;
use crate::segment::Segment;
use crate::segment_set::SegmentSet;

/// Build the unlinked segment set of one well.
///
/// The well header decides whether the well is segmented. A normal well
/// yields `Ok(None)` whatever rows the segment records hold; a segmented
/// well whose segment records are missing is an error. Every one of the
/// `nsegmx` rows becomes a segment with id `row + 1`, so unused rows show up
/// as inactive segments.
pub fn load_segments(
    header: &RestartHeader,
    records: &GridRecords,
    rseg: &mut RsegLoader<'_>,
    well_nr: usize,
) -> TopologyResult<Option<SegmentSet>> {
    let well = WellHeader::decode(header, records, well_nr)?;
    let Some(segment_well_nr) = well.segment_well_nr else {
        return Ok(None);
    };

    // Header sizes are untrusted; size the set from the record itself.
    let iseg = records.iseg(well_nr)?;
    let rows_in_record = iseg.len() / header.nisegz.max(1);
    let mut segments = SegmentSet::with_capacity(header.nsegmx.min(rows_in_record));
    for index in 0..header.nsegmx {
        let row = records.iseg_row(header, well_nr, segment_well_nr, index)?;
        let field = |column: usize| {
            row.get(column).copied().ok_or(RestartError::RecordTooShort {
                keyword: ISEG_KW,
                needed: column,
                len: row.len(),
            })
        };
        let outlet_id = field(ISEG_OUTLET_INDEX)?;
        let branch_id = field(ISEG_BRANCH_INDEX)?;
        let attrs = rseg.load(well_nr, segment_well_nr, index)?;

        segments.insert(Segment::new(index as i32 + 1, outlet_id, branch_id, attrs))?;
    }

    debug!(
        well = %well.name,
        rows = segments.len(),
        active = segments.active_len(),
        "loaded segment table"
    );
    Ok(Some(segments))
}
