//! Whole-series numeric helpers.
//!
//! Every function here takes a fully materialized series and makes two passes
//! over it: one to gather extrema or moments, one to map the values. None of
//! them are streaming; the dataset is small and the normalizations are only
//! meaningful over the complete set.

use statrs::statistics::Statistics;
use tracing::warn;

use super::NormalizationError;

/// Regularizer added to every min-max denominator.
pub const MIN_MAX_EPSILON: f64 = 1e-9;

/// Standard deviations below this are treated as zero variance.
pub const MIN_STD_DEV: f64 = 1e-12;

// ============================================================================
// Grids and derivatives
// ============================================================================

/// `n` evenly spaced samples over `[start, end]`, both ends included.
///
/// The last sample is pinned to `end` so accumulated rounding in the step
/// never moves the upper bound.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut out: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            out[n - 1] = end;
            out
        }
    }
}

/// Discrete first derivative with unit spacing.
///
/// Interior samples use central differences `(f[i+1] - f[i-1]) / 2`, the two
/// edges use one-sided differences. Series shorter than two samples have no
/// defined slope and come back as zeros.
pub fn gradient(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    if n < 2 {
        return vec![0.0; n];
    }

    let mut out = Vec::with_capacity(n);
    out.push(values[1] - values[0]);
    for i in 1..n - 1 {
        out.push((values[i + 1] - values[i - 1]) / 2.0);
    }
    out.push(values[n - 1] - values[n - 2]);
    out
}

/// Clamp every value into `[lo, hi]`.
pub fn clamp_all(values: &mut [f64], lo: f64, hi: f64) {
    for v in values.iter_mut() {
        *v = v.clamp(lo, hi);
    }
}

// ============================================================================
// Normalizations
// ============================================================================

fn check_finite(series: &'static str, values: &[f64]) -> Result<(), NormalizationError> {
    if values.is_empty() {
        return Err(NormalizationError::EmptySeries { series });
    }
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(NormalizationError::NonFinite {
            series,
            index,
            value: values[index],
        }),
        None => Ok(()),
    }
}

/// Rescale a series into `[0, 1]` using its own extrema.
///
/// The denominator is `max - min + MIN_MAX_EPSILON` for every series, so a
/// constant series maps to all zeros instead of dividing by zero.
pub fn min_max_normalize(
    series: &'static str,
    values: &[f64],
) -> Result<Vec<f64>, NormalizationError> {
    check_finite(series, values)?;

    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let range = max - min;
    if range < MIN_MAX_EPSILON {
        warn!(series, range, "Degenerate range in min-max normalization, series maps to zero");
    }

    let denom = range + MIN_MAX_EPSILON;
    Ok(values.iter().map(|&v| (v - min) / denom).collect())
}

/// Standardize a series to zero mean and unit population variance.
///
/// Fails with [`NormalizationError::ZeroVariance`] when the series is flat,
/// since there is no meaningful scale to divide by.
pub fn z_score(series: &'static str, values: &[f64]) -> Result<Vec<f64>, NormalizationError> {
    check_finite(series, values)?;

    let mean = values.mean();
    let std_dev = values.population_std_dev();
    if std_dev < MIN_STD_DEV {
        return Err(NormalizationError::ZeroVariance { series, std_dev });
    }

    Ok(values.iter().map(|&v| (v - mean) / std_dev).collect())
}
