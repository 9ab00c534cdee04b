//! Erosion pressure: weighted sum of the drivers, standardized over the
//! coastline.

use tracing::debug;

use super::{Drivers, SynthesisError};
use crate::processing::z_score;

/// Linear weights applied to each driver. Positive weights push toward
/// erosion, negative weights protect the shore.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressureWeights {
    pub wave_energy: f64,
    pub human_activity: f64,
    pub slope: f64,
    pub sediment_supply: f64,
    pub veg_stability: f64,
    pub curvature: f64,
}

pub const PRESSURE_WEIGHTS: PressureWeights = PressureWeights {
    wave_energy: 0.9,
    human_activity: 0.8,
    slope: -0.7,
    sediment_supply: -1.0,
    veg_stability: -0.6,
    curvature: 0.3,
};

impl PressureWeights {
    /// Raw (unstandardized) pressure at index `i`.
    fn combine(&self, d: &Drivers, i: usize) -> f64 {
        self.wave_energy * d.wave_energy[i]
            + self.human_activity * d.human_activity[i]
            + self.slope * d.slope[i]
            + self.sediment_supply * d.sediment_supply[i]
            + self.veg_stability * d.veg_stability[i]
            + self.curvature * d.curvature[i]
    }
}

/// Weighted driver sum per point, before standardization.
pub fn raw_pressure(drivers: &Drivers, weights: &PressureWeights) -> Vec<f64> {
    (0..drivers.wave_energy.len())
        .map(|i| weights.combine(drivers, i))
        .collect()
}

/// Standardized erosion pressure (zero mean, unit population variance).
pub fn erosion_pressure(drivers: &Drivers) -> Result<Vec<f64>, SynthesisError> {
    let raw = raw_pressure(drivers, &PRESSURE_WEIGHTS);
    let pressure = z_score("pressure", &raw)?;
    debug!(points = pressure.len(), "Erosion pressure standardized");
    Ok(pressure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::NormalizationError;

    fn drivers_from(wave: Vec<f64>) -> Drivers {
        let n = wave.len();
        Drivers {
            wave_energy: wave,
            slope: vec![0.5; n],
            sediment_supply: vec![0.2; n],
            human_activity: vec![0.1; n],
            veg_stability: vec![0.3; n],
            curvature: vec![0.4; n],
        }
    }

    #[test]
    fn test_raw_pressure_weights() {
        let d = drivers_from(vec![1.0]);
        let p = raw_pressure(&d, &PRESSURE_WEIGHTS);
        let expected = 0.9 * 1.0 + 0.8 * 0.1 - 0.7 * 0.5 - 1.0 * 0.2 - 0.6 * 0.3 + 0.3 * 0.4;
        assert!((p[0] - expected).abs() < 1e-12);
    }

    #[test]
    fn test_pressure_is_standardized() {
        let d = drivers_from(vec![0.1, 0.4, 0.2, 0.9, 0.7]);
        let p = erosion_pressure(&d).unwrap();
        let n = p.len() as f64;
        let mean = p.iter().sum::<f64>() / n;
        let var = p.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
        assert!(mean.abs() < 1e-12);
        assert!((var - 1.0).abs() < 1e-12);
        // ordering follows wave energy, the only varying driver
        assert!(p[3] > p[4] && p[4] > p[1] && p[1] > p[2] && p[2] > p[0]);
    }

    #[test]
    fn test_flat_drivers_fail_fast() {
        let d = drivers_from(vec![0.5; 6]);
        let err = erosion_pressure(&d).unwrap_err();
        assert!(matches!(
            err,
            SynthesisError::Normalization(NormalizationError::ZeroVariance { .. })
        ));
    }
}
