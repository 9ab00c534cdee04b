//! Shared data structures for the coastal erosion dataset
//!
//! - `PointRecord`: one row of the output table
//! - `Dataset`: the full, immutable table in generation order
//! - `DatasetSummary`: per-column statistics for logging and the JSON sidecar

mod record;
mod summary;

pub use record::*;
pub use summary::*;
