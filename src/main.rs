//! coastal-synth - Synthetic Coastal Erosion Dataset Generator
//!
//! Generates the coastal erosion table and writes it to
//! `synthetic_coastal_erosion_dataset.csv` and
//! `synthetic_coastal_erosion_dataset.xlsx`.
//!
//! # Usage
//!
//! ```bash
//! # Standard dataset (320 points, seed 42) in the current directory
//! cargo run --release
//!
//! # Bigger dataset, different seed, separate directory, JSON summary
//! cargo run --release -- --points 2000 --seed 7 --out-dir data --summary-json data/summary.json
//! ```
//!
//! # Environment Variables
//!
//! - `COASTAL_SYNTH_CONFIG`: Path to a TOML config file
//! - `RUST_LOG`: Logging level (default: info)

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use coastal_synth::config::SynthConfig;
use coastal_synth::{export, synthesis};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "coastal-synth")]
#[command(about = "Synthetic coastal erosion dataset generator")]
#[command(version)]
struct CliArgs {
    /// Path to a TOML config file (errors in this file are fatal)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Number of coastline points (overrides config)
    #[arg(long)]
    points: Option<usize>,

    /// Random seed (overrides config)
    #[arg(long)]
    seed: Option<u64>,

    /// Directory for the CSV and XLSX files (overrides config)
    #[arg(long, value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// Also write a per-column JSON summary to this path
    #[arg(long, value_name = "PATH")]
    summary_json: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    let mut config = match &args.config {
        Some(path) => SynthConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => SynthConfig::load(),
    };
    config.apply_overrides(args.points, args.seed, args.out_dir);
    config.validate().context("Invalid run configuration")?;

    info!(
        points = config.generation.points,
        seed = config.generation.seed,
        "Generating synthetic coastal erosion dataset"
    );

    let dataset = synthesis::generate_seeded(config.generation.points, config.generation.seed)
        .context("Dataset generation failed")?;

    let summary = dataset.summary();
    info!(
        rows = summary.rows,
        at_risk = summary.at_risk,
        at_risk_fraction = summary.at_risk_fraction,
        "Dataset summary"
    );

    export::write_all(&dataset, &config.output).context("Failed to write dataset")?;

    if let Some(path) = &args.summary_json {
        export::write_summary(&summary, path)
            .with_context(|| format!("Failed to write summary to {}", path.display()))?;
    }

    println!("Synthetic dataset saved as CSV and Excel.");
    Ok(())
}
