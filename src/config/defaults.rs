//! Run-level default constants.
//!
//! Model constants (driver shapes, weights, noise scales) live next to the
//! stage that uses them in `synthesis`; only what a run can override is here.

// ============================================================================
// Generation
// ============================================================================

/// Number of coastline samples.
pub const DEFAULT_POINTS: usize = 320;

/// Seed for the run's random generator.
pub const DEFAULT_SEED: u64 = 42;

/// Largest point count that still fits an XLSX sheet (1 048 576 rows incl. header).
pub const MAX_POINTS: usize = 1_048_575;

// ============================================================================
// Output
// ============================================================================

pub const DEFAULT_OUTPUT_DIR: &str = ".";

pub const DEFAULT_CSV_FILE: &str = "synthetic_coastal_erosion_dataset.csv";

pub const DEFAULT_XLSX_FILE: &str = "synthetic_coastal_erosion_dataset.xlsx";

pub const DEFAULT_SHEET_NAME: &str = "Sheet1";

/// Excel's limit on worksheet name length.
pub const MAX_SHEET_NAME_LEN: usize = 31;

// ============================================================================
// Config discovery
// ============================================================================

/// Environment variable holding an explicit config path.
pub const CONFIG_ENV_VAR: &str = "COASTAL_SYNTH_CONFIG";

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "coastal_synth.toml";
