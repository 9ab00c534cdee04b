//! Synthetic coastline generation
//!
//! One linear pipeline, each stage consuming the previous stage's output:
//!
//! 1. `coordinates`: longitude axis and latitude trace
//! 2. `drivers`: wave energy, slope, sediment, human activity, vegetation, curvature
//! 3. `pressure`: weighted driver sum, standardized
//! 4. `shoreline`: 2000 / 2010 / 2020 / 2024 positions
//! 5. `risk`: erosion rate and risk flag
//!
//! All randomness comes from the single generator handed to [`generate`].
//! Stages draw from it in pipeline order, so the same seed always yields the
//! same table.

mod coordinates;
mod drivers;
mod pressure;
mod risk;
mod shoreline;

pub use coordinates::*;
pub use drivers::*;
pub use pressure::*;
pub use risk::*;
pub use shoreline::*;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal, NormalError};
use thiserror::Error;
use tracing::{debug, info};

use crate::processing::NormalizationError;
use crate::types::{Dataset, PointRecord};

/// Smallest coastline the pipeline can differentiate.
pub const MIN_POINTS: usize = 2;

#[derive(Error, Debug)]
pub enum SynthesisError {
    #[error("Need at least {min} coastline points, got {requested}")]
    TooFewPoints { requested: usize, min: usize },

    #[error("Normalization failed: {0}")]
    Normalization(#[from] NormalizationError),

    #[error("Invalid noise distribution: {0}")]
    Distribution(#[from] NormalError),
}

// ============================================================================
// Noise helpers
// ============================================================================

/// `n` draws from N(0, `std_dev`).
pub(crate) fn gaussian_noise<R: Rng + ?Sized>(
    rng: &mut R,
    std_dev: f64,
    n: usize,
) -> Result<Vec<f64>, SynthesisError> {
    let normal = Normal::new(0.0, std_dev)?;
    Ok((0..n).map(|_| normal.sample(rng)).collect())
}

/// `n` draws from U[0, 1).
pub(crate) fn unit_uniform<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<f64> {
    (0..n).map(|_| rng.gen::<f64>()).collect()
}

// ============================================================================
// Pipeline
// ============================================================================

/// Generate a full dataset of `points` coastline samples from `rng`.
pub fn generate<R: Rng + ?Sized>(points: usize, rng: &mut R) -> Result<Dataset, SynthesisError> {
    if points < MIN_POINTS {
        return Err(SynthesisError::TooFewPoints {
            requested: points,
            min: MIN_POINTS,
        });
    }

    let coast = generate_coastline(points, rng)?;
    debug!(points, "Coastline generated");

    let drivers = synthesize_drivers(&coast, rng)?;
    let pressure = erosion_pressure(&drivers)?;
    let shoreline = project_shoreline(&pressure, rng)?;
    let risk = classify(&shoreline);

    let dataset = assemble(&coast, &drivers, &shoreline, &risk);
    info!(
        rows = dataset.len(),
        at_risk = dataset.at_risk_count(),
        "Synthetic coastline generated"
    );
    Ok(dataset)
}

/// Generate with a fresh [`StdRng`] seeded from `seed`.
pub fn generate_seeded(points: usize, seed: u64) -> Result<Dataset, SynthesisError> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate(points, &mut rng)
}

/// Zip the stage outputs into row records, keeping generation order.
fn assemble(
    coast: &Coastline,
    drivers: &Drivers,
    shoreline: &ShorelineProjection,
    risk: &RiskAssessment,
) -> Dataset {
    let records = (0..coast.len())
        .map(|i| PointRecord {
            longitude: coast.longitude[i],
            latitude: coast.latitude[i],
            wave_energy: drivers.wave_energy[i],
            slope: drivers.slope[i],
            sediment_supply: drivers.sediment_supply[i],
            human_activity: drivers.human_activity[i],
            veg_stability: drivers.veg_stability[i],
            curvature: drivers.curvature[i],
            shoreline_2000_m: shoreline.y2000[i],
            shoreline_2010_m: shoreline.y2010[i],
            shoreline_2020_m: shoreline.y2020[i],
            shoreline_2024_m: shoreline.y2024[i],
            erosion_rate_m_per_yr: risk.erosion_rate[i],
            erosion_risk: risk.erosion_risk[i],
        })
        .collect();
    Dataset::new(records)
}
