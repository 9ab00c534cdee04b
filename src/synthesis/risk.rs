//! Erosion rate and binary risk label.

use super::ShorelineProjection;

pub const BASELINE_YEAR: i32 = 2000;
pub const FINAL_YEAR: i32 = 2024;

/// Erosion rates below this (m/yr) are flagged as at risk.
pub const RISK_THRESHOLD_M_PER_YR: f64 = -1.2;

#[derive(Debug, Clone, PartialEq)]
pub struct RiskAssessment {
    pub erosion_rate: Vec<f64>,
    pub erosion_risk: Vec<u8>,
}

/// Linear shoreline change rate between the baseline and final snapshot.
pub fn erosion_rate(start_m: f64, end_m: f64) -> f64 {
    (end_m - start_m) / f64::from(FINAL_YEAR - BASELINE_YEAR)
}

pub fn risk_flag(rate: f64) -> u8 {
    u8::from(rate < RISK_THRESHOLD_M_PER_YR)
}

pub fn classify(projection: &ShorelineProjection) -> RiskAssessment {
    let erosion_rate: Vec<f64> = projection
        .y2000
        .iter()
        .zip(&projection.y2024)
        .map(|(&start, &end)| erosion_rate(start, end))
        .collect();
    let erosion_risk = erosion_rate.iter().map(|&r| risk_flag(r)).collect();

    RiskAssessment {
        erosion_rate,
        erosion_risk,
    }
}
