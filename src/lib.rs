//! coastal-synth: Synthetic Coastal Erosion Dataset
//!
//! Generates a fake, fully reproducible table of coastal erosion drivers and
//! outcomes along a one-dimensional coastline and writes it as CSV and XLSX.
//!
//! ## Pipeline
//!
//! - **Coordinates**: evenly spaced longitudes, sinusoidal latitudes
//! - **Drivers**: wave energy, slope, sediment supply, human activity,
//!   vegetation stability, curvature
//! - **Pressure**: weighted driver sum, standardized
//! - **Shoreline**: cumulative positions for 2000 / 2010 / 2020 / 2024
//! - **Risk**: linear erosion rate and a binary risk flag
//! - **Export**: CSV + single-sheet XLSX, optional JSON summary

pub mod config;
pub mod export;
pub mod processing;
pub mod synthesis;
pub mod types;

// Re-export run configuration
pub use config::{ConfigError, SynthConfig};

// Re-export the table types
pub use types::{ColumnSummary, Dataset, DatasetSummary, PointRecord, COLUMN_NAMES};

// Re-export the pipeline entry points
pub use synthesis::{generate, generate_seeded, SynthesisError};

// Re-export persistence
pub use export::{read_csv, write_all, write_csv, write_summary, write_xlsx, ExportError};
