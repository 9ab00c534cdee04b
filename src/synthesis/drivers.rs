//! Erosion drivers
//!
//! Six per-point covariates derived from the coastline. Wave energy and slope
//! are clipped; sediment supply, human activity, vegetation stability and
//! curvature are min-max normalized over the whole coastline, so each of
//! those needs the full series before any single value is final.

use rand::Rng;
use std::f64::consts::PI;
use tracing::debug;

use super::{gaussian_noise, unit_uniform, Coastline, SynthesisError};
use crate::processing::{clamp_all, gradient, min_max_normalize};

// ============================================================================
// Driver Constants
// ============================================================================

/// Wave energy: baseline, amplitude, phase origin, half-period, noise sigma
const WAVE_BASE: f64 = 0.4;
const WAVE_AMPLITUDE: f64 = 0.4;
const WAVE_PHASE_LON: f64 = 2.5;
const WAVE_HALF_PERIOD: f64 = 1.2;
const WAVE_NOISE_SD: f64 = 0.05;

/// Slope: baseline, amplitude, phase origin, half-period, noise sigma, clip floor
const SLOPE_BASE: f64 = 0.3;
const SLOPE_AMPLITUDE: f64 = 0.3;
const SLOPE_PHASE_LON: f64 = 3.2;
const SLOPE_HALF_PERIOD: f64 = 1.7;
const SLOPE_NOISE_SD: f64 = 0.04;
pub const SLOPE_MIN: f64 = 0.05;

/// River mouth longitudes (degrees)
pub const RIVER_MOUTHS: [f64; 4] = [3.4, 4.1, 5.2, 6.1];
/// e-folding distance of sediment supply away from a river mouth (degrees)
const SEDIMENT_DECAY: f64 = 0.3;
/// Amplitude of the uniform sediment jitter
const SEDIMENT_NOISE: f64 = 0.1;

/// Human activity baseline is uniform in [MIN, MIN + SPAN)
const HUMAN_BASE_MIN: f64 = 0.2;
const HUMAN_BASE_SPAN: f64 = 0.6;
/// Width (1 sigma) of each hotspot bump (degrees)
const HOTSPOT_WIDTH: f64 = 0.06;

/// Vegetation stability is uniform in [MIN, MIN + SPAN) before normalization
const VEG_MIN: f64 = 0.3;
const VEG_SPAN: f64 = 0.6;

/// A developed stretch of coast that adds a Gaussian bump to human activity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hotspot {
    pub name: &'static str,
    pub center_lon: f64,
    pub level: f64,
}

impl Hotspot {
    /// Contribution of this hotspot at `lon`.
    pub fn intensity(&self, lon: f64) -> f64 {
        let d = lon - self.center_lon;
        self.level * (-(d * d) / (2.0 * HOTSPOT_WIDTH * HOTSPOT_WIDTH)).exp()
    }
}

pub const HOTSPOTS: [Hotspot; 2] = [
    Hotspot {
        name: "west_harbour",
        center_lon: 3.8,
        level: 0.8,
    },
    Hotspot {
        name: "east_resort",
        center_lon: 5.6,
        level: 0.85,
    },
];

// ============================================================================
// Driver Set
// ============================================================================

/// All driver series, index-aligned with the coastline.
#[derive(Debug, Clone, PartialEq)]
pub struct Drivers {
    pub wave_energy: Vec<f64>,
    pub slope: Vec<f64>,
    pub sediment_supply: Vec<f64>,
    pub human_activity: Vec<f64>,
    pub veg_stability: Vec<f64>,
    pub curvature: Vec<f64>,
}

/// Derive every driver for `coast`.
///
/// Random draws happen in a fixed order: wave, slope, sediment, human,
/// vegetation. Curvature is deterministic given the latitudes.
pub fn synthesize_drivers<R: Rng + ?Sized>(
    coast: &Coastline,
    rng: &mut R,
) -> Result<Drivers, SynthesisError> {
    let lon = &coast.longitude;

    let drivers = Drivers {
        wave_energy: wave_energy(lon, rng)?,
        slope: slope(lon, rng)?,
        sediment_supply: sediment_supply(lon, rng)?,
        human_activity: human_activity(lon, rng)?,
        veg_stability: veg_stability(lon.len(), rng)?,
        curvature: curvature(&coast.latitude)?,
    };

    debug!(points = lon.len(), "Drivers synthesized");
    Ok(drivers)
}

/// Sinusoidal wave exposure plus noise, clipped to [0, 1].
pub fn wave_energy<R: Rng + ?Sized>(lon: &[f64], rng: &mut R) -> Result<Vec<f64>, SynthesisError> {
    let noise = gaussian_noise(rng, WAVE_NOISE_SD, lon.len())?;
    let mut out: Vec<f64> = lon
        .iter()
        .zip(&noise)
        .map(|(&x, &eps)| {
            WAVE_BASE + WAVE_AMPLITUDE * ((x - WAVE_PHASE_LON) * PI / WAVE_HALF_PERIOD).sin() + eps
        })
        .collect();
    clamp_all(&mut out, 0.0, 1.0);
    Ok(out)
}

/// Cosinusoidal beach slope plus noise, clipped to [`SLOPE_MIN`, 1].
pub fn slope<R: Rng + ?Sized>(lon: &[f64], rng: &mut R) -> Result<Vec<f64>, SynthesisError> {
    let noise = gaussian_noise(rng, SLOPE_NOISE_SD, lon.len())?;
    let mut out: Vec<f64> = lon
        .iter()
        .zip(&noise)
        .map(|(&x, &eps)| {
            SLOPE_BASE
                + SLOPE_AMPLITUDE * ((x - SLOPE_PHASE_LON) * PI / SLOPE_HALF_PERIOD).cos()
                + eps
        })
        .collect();
    clamp_all(&mut out, SLOPE_MIN, 1.0);
    Ok(out)
}

/// Distance (degrees of longitude) to the closest river mouth.
pub fn distance_to_nearest_river(lon: f64) -> f64 {
    RIVER_MOUTHS
        .iter()
        .map(|&mouth| (lon - mouth).abs())
        .fold(f64::INFINITY, f64::min)
}

/// Sediment delivered by the nearest river, decaying exponentially with
/// distance, plus uniform jitter. Normalized over the coastline.
pub fn sediment_supply<R: Rng + ?Sized>(
    lon: &[f64],
    rng: &mut R,
) -> Result<Vec<f64>, SynthesisError> {
    let jitter = unit_uniform(rng, lon.len());
    let raw: Vec<f64> = lon
        .iter()
        .zip(&jitter)
        .map(|(&x, &u)| (-distance_to_nearest_river(x) / SEDIMENT_DECAY).exp() + SEDIMENT_NOISE * u)
        .collect();
    Ok(min_max_normalize("sediment_supply", &raw)?)
}

/// Summed hotspot contribution at `lon`.
pub fn hotspot_intensity(lon: f64) -> f64 {
    HOTSPOTS.iter().fold(0.0, |acc, h| acc + h.intensity(lon))
}

/// Uniform background activity plus the hotspot bumps. Normalized over the
/// coastline.
pub fn human_activity<R: Rng + ?Sized>(
    lon: &[f64],
    rng: &mut R,
) -> Result<Vec<f64>, SynthesisError> {
    let base = unit_uniform(rng, lon.len());
    let raw: Vec<f64> = lon
        .iter()
        .zip(&base)
        .map(|(&x, &u)| HUMAN_BASE_MIN + HUMAN_BASE_SPAN * u + hotspot_intensity(x))
        .collect();
    Ok(min_max_normalize("human_activity", &raw)?)
}

/// Uncorrelated vegetation cover. Normalized over the coastline.
pub fn veg_stability<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Vec<f64>, SynthesisError> {
    let raw: Vec<f64> = unit_uniform(rng, n)
        .into_iter()
        .map(|u| VEG_MIN + VEG_SPAN * u)
        .collect();
    Ok(min_max_normalize("veg_stability", &raw)?)
}

/// Second finite difference of latitude. Normalized over the coastline.
pub fn curvature(lat: &[f64]) -> Result<Vec<f64>, SynthesisError> {
    let second = gradient(&gradient(lat));
    Ok(min_max_normalize("curvature", &second)?)
}
