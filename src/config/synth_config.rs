//! Run configuration - point count, seed and output locations as TOML values
//!
//! Every struct implements `Default` with the built-in run constants, so a run
//! with no config file produces the standard dataset.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use super::defaults::{
    CONFIG_ENV_VAR, DEFAULT_CSV_FILE, DEFAULT_OUTPUT_DIR, DEFAULT_POINTS, DEFAULT_SEED,
    DEFAULT_SHEET_NAME, DEFAULT_XLSX_FILE, LOCAL_CONFIG_FILE, MAX_POINTS, MAX_SHEET_NAME_LEN,
};
use crate::synthesis::MIN_POINTS;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for a generation run.
///
/// Load with `SynthConfig::load()` which searches:
/// 1. `$COASTAL_SYNTH_CONFIG` env var
/// 2. `./coastal_synth.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SynthConfig {
    /// Dataset size and randomness
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Where the two table files go
    #[serde(default)]
    pub output: OutputConfig,
}

impl SynthConfig {
    /// Load configuration using the standard search order:
    /// 1. `$COASTAL_SYNTH_CONFIG` environment variable
    /// 2. `./coastal_synth.toml` in the current working directory
    /// 3. Built-in defaults
    pub fn load() -> Self {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), "Loaded config from {CONFIG_ENV_VAR}");
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from {CONFIG_ENV_VAR}, falling back");
                    }
                }
            } else {
                warn!(path = %path, "{CONFIG_ENV_VAR} points to non-existent file, falling back");
            }
        }

        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!("Loaded config from ./{LOCAL_CONFIG_FILE}");
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./{LOCAL_CONFIG_FILE}, using defaults");
                }
            }
        }

        info!("No {LOCAL_CONFIG_FILE} found, using built-in defaults");
        Self::default()
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_toml_str(&contents).map_err(|e| match e {
            ConfigError::Parse(_, inner) => ConfigError::Parse(path.to_path_buf(), inner),
            other => other,
        })
    }

    /// Parse and validate a TOML document.
    ///
    /// Unknown keys are logged as warnings with a suggested correction; they
    /// never fail the parse.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        for w in super::validation::validate_unknown_keys(contents) {
            warn!("{}", w);
        }

        let config: Self =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(PathBuf::new(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the current config to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Apply command-line overrides on top of the loaded values.
    pub fn apply_overrides(
        &mut self,
        points: Option<usize>,
        seed: Option<u64>,
        out_dir: Option<PathBuf>,
    ) {
        if let Some(points) = points {
            self.generation.points = points;
        }
        if let Some(seed) = seed {
            self.generation.seed = seed;
        }
        if let Some(dir) = out_dir {
            self.output.dir = dir;
        }
    }

    /// Check every value. Hard errors are collected and returned together;
    /// suspicious-but-usable values are logged.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors: Vec<String> = Vec::new();

        let points = self.generation.points;
        if !(MIN_POINTS..=MAX_POINTS).contains(&points) {
            errors.push(format!(
                "generation.points = {points} is outside the supported range ({MIN_POINTS}-{MAX_POINTS})"
            ));
        }

        let o = &self.output;
        if o.csv_file.as_os_str().is_empty() {
            errors.push("output.csv_file must not be empty".to_string());
        }
        if o.xlsx_file.as_os_str().is_empty() {
            errors.push("output.xlsx_file must not be empty".to_string());
        }
        if !o.csv_file.as_os_str().is_empty() && o.csv_file == o.xlsx_file {
            errors.push(format!(
                "output.csv_file and output.xlsx_file both point to '{}'",
                o.csv_file.display()
            ));
        }

        let sheet = o.sheet_name.as_str();
        if sheet.is_empty() {
            errors.push("output.sheet_name must not be empty".to_string());
        } else if sheet.chars().count() > MAX_SHEET_NAME_LEN {
            errors.push(format!(
                "output.sheet_name '{sheet}' is longer than {MAX_SHEET_NAME_LEN} characters"
            ));
        } else if let Some(c) = sheet.chars().find(|c| "[]:*?/\\".contains(*c)) {
            errors.push(format!(
                "output.sheet_name '{sheet}' contains forbidden character '{c}'"
            ));
        }

        for w in super::validation::validate_output_names(self) {
            warn!("{}", w);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config I/O error ({}): {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config parse error ({}): {}", .0.display(), .1)]
    Parse(PathBuf, #[source] toml::de::Error),

    #[error("Config serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Config validation failed:\n  - {}", .0.join("\n  - "))]
    Validation(Vec<String>),
}

// ============================================================================
// Generation
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Number of coastline samples
    #[serde(default = "default_points")]
    pub points: usize,
    /// Seed for the run's random generator
    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_points() -> usize {
    DEFAULT_POINTS
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            points: DEFAULT_POINTS,
            seed: DEFAULT_SEED,
        }
    }
}

// ============================================================================
// Output
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory both files are written into (created if missing)
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_csv_file")]
    pub csv_file: PathBuf,
    #[serde(default = "default_xlsx_file")]
    pub xlsx_file: PathBuf,
    /// Worksheet name inside the XLSX workbook
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_csv_file() -> PathBuf {
    PathBuf::from(DEFAULT_CSV_FILE)
}

fn default_xlsx_file() -> PathBuf {
    PathBuf::from(DEFAULT_XLSX_FILE)
}

fn default_sheet_name() -> String {
    DEFAULT_SHEET_NAME.to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            csv_file: default_csv_file(),
            xlsx_file: default_xlsx_file(),
            sheet_name: default_sheet_name(),
        }
    }
}

impl OutputConfig {
    pub fn csv_path(&self) -> PathBuf {
        self.dir.join(&self.csv_file)
    }

    pub fn xlsx_path(&self) -> PathBuf {
        self.dir.join(&self.xlsx_file)
    }
}
