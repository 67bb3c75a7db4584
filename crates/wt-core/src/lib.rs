//! wt-core: stable foundation for the well topology engine.
//!
//! Contains:
//! - ids (compact arena handles for segments and connections)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{WtError, WtResult};
pub use ids::*;
pub use numeric::*;
