//! Run Configuration Module
//!
//! Point count, seed and output locations, loaded from TOML.
//!
//! ## Loading Order
//!
//! 1. `COASTAL_SYNTH_CONFIG` environment variable (path to TOML file)
//! 2. `coastal_synth.toml` in the current working directory
//! 3. Built-in defaults (320 points, seed 42, files in the working directory)
//!
//! An explicit path (the `--config` flag) goes through
//! [`SynthConfig::load_from_file`] instead and fails hard on any error.
//!
//! ```ignore
//! let mut config = SynthConfig::load();
//! config.apply_overrides(Some(500), None, None);
//! config.validate()?;
//! ```

mod synth_config;
pub mod defaults;
pub mod validation;

pub use synth_config::*;
