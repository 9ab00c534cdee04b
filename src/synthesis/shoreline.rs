//! Shoreline projection across the 2000 / 2010 / 2020 / 2024 snapshots.
//!
//! Each snapshot is the previous one plus a pressure-driven increment, so the
//! four positions are computed strictly in order.

use rand::Rng;
use tracing::debug;

use super::{gaussian_noise, unit_uniform, SynthesisError};

/// Metres of shoreline change per decade per unit of standardized pressure.
/// Negative: positive pressure means retreat.
const DECADAL_PRESSURE_GAIN: f64 = -40.0;
/// Noise on the base decadal change (m, 1 sigma)
const DECADAL_NOISE_SD: f64 = 6.0;
/// 2010-2020 increment is the decadal change scaled by U[MIN, MIN + SPAN)
const SECOND_DECADE_SCALE_MIN: f64 = 0.8;
const SECOND_DECADE_SCALE_SPAN: f64 = 0.4;
/// 2020-2024 covers 4 of 10 years
const FINAL_STEP_FRACTION: f64 = 0.4;
/// Noise on the 2020-2024 increment (m, 1 sigma)
const FINAL_STEP_NOISE_SD: f64 = 3.0;

/// Cumulative shoreline displacement (m) relative to 2000.
#[derive(Debug, Clone, PartialEq)]
pub struct ShorelineProjection {
    pub decadal_change: Vec<f64>,
    pub y2000: Vec<f64>,
    pub y2010: Vec<f64>,
    pub y2020: Vec<f64>,
    pub y2024: Vec<f64>,
}

/// Project shoreline positions from standardized pressure.
///
/// Draw order: decadal noise, second-decade scale, final-step noise.
pub fn project_shoreline<R: Rng + ?Sized>(
    pressure: &[f64],
    rng: &mut R,
) -> Result<ShorelineProjection, SynthesisError> {
    let n = pressure.len();

    let decadal_noise = gaussian_noise(rng, DECADAL_NOISE_SD, n)?;
    let decadal_change: Vec<f64> = pressure
        .iter()
        .zip(&decadal_noise)
        .map(|(&p, &eps)| DECADAL_PRESSURE_GAIN * p + eps)
        .collect();

    let y2000 = vec![0.0; n];

    let y2010: Vec<f64> = y2000
        .iter()
        .zip(&decadal_change)
        .map(|(&prev, &dc)| prev + dc)
        .collect();

    let scale = unit_uniform(rng, n);
    let y2020: Vec<f64> = y2010
        .iter()
        .zip(decadal_change.iter().zip(&scale))
        .map(|(&prev, (&dc, &u))| {
            prev + dc * (SECOND_DECADE_SCALE_MIN + SECOND_DECADE_SCALE_SPAN * u)
        })
        .collect();

    let final_noise = gaussian_noise(rng, FINAL_STEP_NOISE_SD, n)?;
    let y2024: Vec<f64> = y2020
        .iter()
        .zip(decadal_change.iter().zip(&final_noise))
        .map(|(&prev, (&dc, &eps))| prev + dc * FINAL_STEP_FRACTION + eps)
        .collect();

    debug!(points = n, "Shoreline positions projected");

    Ok(ShorelineProjection {
        decadal_change,
        y2000,
        y2010,
        y2020,
        y2024,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_projection_structure() {
        let mut rng = StdRng::seed_from_u64(42);
        let pressure: Vec<f64> = (0..50).map(|i| f64::from(i - 25) / 10.0).collect();
        let proj = project_shoreline(&pressure, &mut rng).unwrap();

        assert_eq!(proj.y2024.len(), 50);
        assert!(proj.y2000.iter().all(|&v| v == 0.0));
        for i in 0..50 {
            assert_eq!(proj.y2010[i], proj.decadal_change[i]);
            let step = proj.y2020[i] - proj.y2010[i];
            let dc = proj.decadal_change[i];
            // step = dc * s with s in [0.8, 1.2)
            let (lo, hi) = if dc >= 0.0 { (0.8 * dc, 1.2 * dc) } else { (1.2 * dc, 0.8 * dc) };
            assert!(step >= lo - 1e-9 && step <= hi + 1e-9);
        }
    }

    #[test]
    fn test_high_pressure_retreats() {
        let mut rng = StdRng::seed_from_u64(5);
        // 4 sigma pressure dominates the 6 m noise
        let proj = project_shoreline(&[4.0; 20], &mut rng).unwrap();
        assert!(proj.y2024.iter().all(|&v| v < 0.0));
        assert!(proj.y2024.iter().zip(&proj.y2010).all(|(a, b)| a < b));
    }
}
