//! wt-topology: reconstruct a well's segment tree from restart records.
//!
//! Pipeline for one well at one report step:
//! - [`load_segments`] turns the flat `ISEG`/`RSEG` rows into a [`SegmentSet`]
//! - [`link_segments`] resolves outlet ids into handles and validates the tree
//! - [`BranchCollection::decompose`] finds each branch's start segment
//! - [`SegmentConnections::attach`] ties grid connections to segments
//!
//! # Example
//!
//! ```
//! use wt_restart::RsegValues;
//! use wt_topology::{BranchCollection, MAIN_STEM, OUTLET_END, Segment, SegmentSet, link_segments};
//!
//! let mut set = SegmentSet::new();
//! set.insert(Segment::new(1, OUTLET_END, MAIN_STEM, RsegValues::default())).unwrap();
//! set.insert(Segment::new(2, 1, MAIN_STEM, RsegValues::default())).unwrap();
//! set.insert(Segment::new(3, 1, 2, RsegValues::default())).unwrap();
//!
//! link_segments(&mut set).unwrap();
//! assert_eq!(set.get_by_id(1).unwrap().link_count(), 2);
//!
//! let branches = BranchCollection::decompose(&set).unwrap();
//! assert_eq!(branches.len(), 2);
//! assert_eq!(branches.start_segment(2), set.handle(3));
//! ```

pub mod attach;
pub mod branch;
pub mod connection;
pub mod error;
pub mod link;
pub mod loader;
pub mod segment;
pub mod segment_set;
pub(crate) mod validate;

pub use attach::{Attachment, ConnectionOwner, SegmentConnections};
pub use branch::{Branch, BranchCollection, BranchWalk};
pub use connection::{ConnDirection, Connection, ConnectionCollection, GridConnections};
pub use error::{TopologyError, TopologyResult};
pub use link::link_segments;
pub use loader::load_segments;
pub use segment::{INACTIVE, MAIN_STEM, OUTLET_END, Segment};
pub use segment_set::{OutletWalk, SegmentSet};
