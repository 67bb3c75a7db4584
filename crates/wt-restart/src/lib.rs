//! wt-restart: decoded restart report records.
//!
//! Binary decoding happens elsewhere; this crate receives a report as
//! ordered integer/real arrays per grid and gives typed, bounds checked
//! access to the rows the well engine needs:
//! - `IWEL` well headers (one row per well)
//! - `ISEG`/`RSEG` segment rows (multi-segment wells only)
//! - `ICON`/`SCON` connection rows

pub mod constants;
pub mod error;
#[cfg(any(test, feature = "fixture"))]
pub mod fixture;
pub mod header;
pub mod report;
pub mod rseg;
pub mod well;

pub use constants::*;
pub use error::{RestartError, RestartResult};
pub use header::RestartHeader;
pub use report::{GridRecords, RestartReport};
pub use rseg::{RsegLoader, RsegValues};
pub use well::{WellHeader, WellKind, well_is_msw};
