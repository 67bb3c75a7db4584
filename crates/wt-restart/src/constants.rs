//! Record layouts and sentinel values.

/// Keyword names, used in error reports.
pub const IWEL_KW: &str = "IWEL";
pub const ISEG_KW: &str = "ISEG";
pub const RSEG_KW: &str = "RSEG";
pub const ICON_KW: &str = "ICON";
pub const SCON_KW: &str = "SCON";

// IWEL: one row of `niwelz` integers per well.
pub const IWEL_HEADI_INDEX: usize = 0;
pub const IWEL_HEADJ_INDEX: usize = 1;
pub const IWEL_HEADK_INDEX: usize = 2;
pub const IWEL_CONNECTIONS_INDEX: usize = 4;
pub const IWEL_TYPE_INDEX: usize = 6;
pub const IWEL_STATUS_INDEX: usize = 10;
pub const IWEL_SEGMENTED_WELL_NR_INDEX: usize = 70;

/// 0-based segmented well number stored (1-based) for a normal well.
pub const IWEL_SEGMENTED_WELL_NR_NORMAL_VALUE: i32 = -1;

pub const IWEL_PRODUCER: i32 = 1;
pub const IWEL_OIL_INJECTOR: i32 = 2;
pub const IWEL_WATER_INJECTOR: i32 = 3;
pub const IWEL_GAS_INJECTOR: i32 = 4;

// ISEG: `nsegmx` rows of `nisegz` integers per segmented well.
pub const ISEG_OUTLET_INDEX: usize = 1;
pub const ISEG_BRANCH_INDEX: usize = 3;

// RSEG: `nsegmx` rows of `nrsegz` doubles per segmented well.
pub const RSEG_LENGTH_INDEX: usize = 0;
pub const RSEG_DIAMETER_INDEX: usize = 2;
pub const RSEG_TOTAL_LENGTH_INDEX: usize = 6;
pub const RSEG_DEPTH_INDEX: usize = 7;

// ICON: `ncwmax` rows of `niconz` integers per well.
pub const ICON_IC_INDEX: usize = 0;
pub const ICON_I_INDEX: usize = 1;
pub const ICON_J_INDEX: usize = 2;
pub const ICON_K_INDEX: usize = 3;
pub const ICON_STATUS_INDEX: usize = 5;
pub const ICON_DIRECTION_INDEX: usize = 13;
pub const ICON_SEGMENT_INDEX: usize = 14;

pub const ICON_DIRX: i32 = 1;
pub const ICON_DIRY: i32 = 2;
pub const ICON_DIRZ: i32 = 3;
pub const ICON_FRACX: i32 = 4;
pub const ICON_FRACY: i32 = 5;

// SCON: `ncwmax` rows of `nsconz` doubles per well.
pub const SCON_CF_INDEX: usize = 0;

/// Outlet id of a segment that drains straight to the wellhead.
pub const WELL_SEGMENT_OUTLET_END_VALUE: i32 = 0;
/// Branch id of the well's primary bore.
pub const WELL_SEGMENT_BRANCH_MAIN_STEM_VALUE: i32 = 1;
/// Branch id of a segment outside the active topology.
pub const WELL_SEGMENT_BRANCH_INACTIVE_VALUE: i32 = 0;
